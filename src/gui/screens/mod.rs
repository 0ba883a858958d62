pub mod payments;
pub mod projects;

use iced::{Element, Task};

use crate::gui::{AppState, Message, widgets::Tab};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// Sent up by a screen when the user picks another tab.
#[derive(Debug, Clone)]
pub enum Navigate {
    To(Tab),
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Projects(projects::ProjectsScreen),
    Payments(payments::PaymentsScreen),
}

impl ScreenData {
    pub fn for_tab(tab: Tab) -> Self {
        match tab {
            Tab::Projects => ScreenData::Projects(projects::ProjectsScreen::default()),
            Tab::Payments => ScreenData::Payments(payments::PaymentsScreen),
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Projects(screen) => screen.view(state).map(Message::Projects),
            ScreenData::Payments(screen) => screen.view(state).map(Message::Payments),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (_, Message::Projects(ScreenMessage::ParentMessage(Navigate::To(tab))))
            | (_, Message::Payments(ScreenMessage::ParentMessage(Navigate::To(tab)))) => {
                Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                    ScreenData::for_tab(tab),
                )))
            }
            (ScreenData::Projects(page), Message::Projects(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state)
                    .map(Message::Projects)
                    .map(ScreenMessage::ScreenMessage)
            }
            (ScreenData::Payments(page), Message::Payments(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state)
                    .map(Message::Payments)
                    .map(ScreenMessage::ScreenMessage)
            }
            (_, Message::DismissToast(id)) => {
                state.toasts.dismiss(id);
                Task::none()
            }
            _ => Task::none(),
        }
    }
}
