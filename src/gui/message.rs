use crate::gui::screens::{
    ScreenData, ScreenMessage, payments::PaymentsScreen, projects::ProjectsScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Projects(ScreenMessage<ProjectsScreen>),
    Payments(ScreenMessage<PaymentsScreen>),
    ChangeScreen(ScreenData),
    DismissToast(u64),
}
