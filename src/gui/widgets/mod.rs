use iced::{
    Color, Element, Length, Theme, border,
    widget::{button, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{Ledger, Severity},
    gui::state::Toast,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Projects,
    Payments,
}

impl Tab {
    const ALL: [Tab; 2] = [Tab::Projects, Tab::Payments];

    fn label(self) -> &'static str {
        match self {
            Tab::Projects => "Projects",
            Tab::Payments => "Payments",
        }
    }

    fn style(self, current: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(if self == current { 3 } else { 1 }));
            // darken the active tab
            if self == current {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

/// Bordered box around a project or payment.
pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .style(|theme: &Theme| bordered_box(theme).border(border::width(2)))
        .padding(10)
        .width(Length::Fill)
        .into()
}

fn earnings_overview<'a, Message: 'a>(ledger: &Ledger) -> Element<'a, Message> {
    column![
        text("Earnings Overview").size(20),
        text(format!("Total Earnings: ${}", ledger.total_earnings())),
        text(format!("Projects: ${}", ledger.project_earnings())),
        text(format!("Collected: ${}", ledger.collected())),
        text(format!("Outstanding: ${}", ledger.outstanding())),
    ]
    .spacing(5)
    .into()
}

/// Sidebar with tabs and the earnings overview, next to the main content.
pub fn layout<'a, Message>(
    current: Tab,
    on_tab: impl Fn(Tab) -> Message,
    ledger: &Ledger,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let tabs = Tab::ALL.iter().fold(column![], |col, &tab| {
        col.push(
            button(container(text(tab.label())).style(tab.style(current)).padding(10))
                .style(button::text)
                .on_press(on_tab(tab)),
        )
    });

    container(row![
        container(column![tabs, earnings_overview(ledger)].spacing(20))
            .padding(10)
            .width(Length::FillPortion(1)),
        container(main_content.into()).width(Length::FillPortion(4)),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Stack of notifications, newest last, each with a close button.
pub fn toasts<'a, Message>(
    items: impl Iterator<Item = &'a Toast>,
    on_dismiss: impl Fn(u64) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    items
        .fold(column![].spacing(5).padding(5), |col, toast| {
            let color = match toast.notification.severity {
                Severity::Success => Color::from_rgb8(0x19, 0x87, 0x54),
                Severity::Error => Color::from_rgb8(0xdc, 0x35, 0x45),
            };
            col.push(
                container(
                    row![
                        text(toast.notification.message.as_str())
                            .color(color)
                            .width(Length::Fill),
                        button("x").style(button::text).on_press(on_dismiss(toast.id)),
                    ]
                    .spacing(10),
                )
                .style(|theme: &Theme| bordered_box(theme).border(border::width(1)))
                .padding(8)
                .width(Length::Fill),
            )
        })
        .into()
}
