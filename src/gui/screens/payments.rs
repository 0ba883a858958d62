use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, scrollable, text},
};

use crate::{
    core::{Action, Ledger},
    gui::{
        AppState,
        screens::{Navigate, Screen, ScreenMessage},
        widgets::{Tab, card, layout},
    },
    models::{Payment, PaymentId},
};

#[derive(Debug, Clone)]
pub struct PaymentsScreen;

#[derive(Debug, Clone)]
pub enum PaymentsMessage {
    MarkPaid(PaymentId),
    Delete(PaymentId),
}

type Msg = ScreenMessage<PaymentsScreen>;

fn payment_row<'a>(ledger: &'a Ledger, payment: &'a Payment) -> Element<'a, Msg> {
    let project = match (payment.project_id, ledger.linked_project(payment)) {
        (_, Some(project)) => project.name.clone(),
        (Some(_), None) => "Project deleted".to_string(),
        (None, None) => "Unlinked".to_string(),
    };

    let mut actions = row![].spacing(10);
    if !payment.is_paid() {
        actions = actions.push(
            button("Mark as paid").on_press(ScreenMessage::ScreenMessage(
                PaymentsMessage::MarkPaid(payment.id),
            )),
        );
    }
    actions = actions.push(
        button("Delete")
            .style(button::danger)
            .on_press(ScreenMessage::ScreenMessage(PaymentsMessage::Delete(
                payment.id,
            ))),
    );

    card(
        row![
            column![
                text(format!("Payment #{}: ${}", payment.id, payment.amount)),
                text(project),
                text(format!("Status: {}", payment.status)),
            ]
            .spacing(5)
            .width(Length::Fill),
            actions,
        ]
        .spacing(10),
    )
}

impl Screen for PaymentsScreen {
    type Message = PaymentsMessage;
    type ParentMessage = Navigate;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Msg> {
        let ledger = &state.ledger;
        let list = if ledger.payments().is_empty() {
            column![text("No payments yet.")]
        } else {
            ledger
                .payments()
                .iter()
                .fold(column![].spacing(10), |col, payment| {
                    col.push(payment_row(ledger, payment))
                })
        };
        let content = column![text("Payments").size(28), scrollable(list).height(Length::Fill)]
            .spacing(20)
            .padding(20);

        layout(
            Tab::Payments,
            |tab| ScreenMessage::ParentMessage(Navigate::To(tab)),
            ledger,
            container(content),
        )
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<Msg> {
        let action = match message {
            PaymentsMessage::MarkPaid(id) => Action::MarkPaymentPaid(id),
            PaymentsMessage::Delete(id) => Action::DeletePayment(id),
        };
        state.ledger.apply(action, &mut state.toasts);
        Task::none()
    }
}
