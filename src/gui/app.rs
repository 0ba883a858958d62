use iced::{Element, Task, widget::column};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage},
    widgets::{Tab, toasts},
};
use crate::core::Ledger;

pub struct ProjtrackApp {
    state: AppState,
    screen: ScreenData,
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

impl ProjtrackApp {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            state: AppState::new(ledger),
            screen: ScreenData::for_tab(Tab::Projects),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![
            toasts(self.state.toasts.iter(), Message::DismissToast),
            self.screen.view(&self.state).map(unwrap_screen_message),
        ]
        .into()
    }
}

/// Open the window and block until it is closed.
pub fn run(ledger: Ledger) -> iced::Result {
    iced::application(
        move || ProjtrackApp::new(ledger.clone()),
        ProjtrackApp::update,
        ProjtrackApp::view,
    )
    .title("Projtrack - Projects & Earnings")
    .run()
}
