use iced::{
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, scrollable, text, text_input},
};

use crate::{
    core::Action,
    form::ProjectDraft,
    gui::{
        AppState,
        screens::{Navigate, Screen, ScreenMessage},
        widgets::{Tab, card, layout},
    },
    models::{Project, ProjectId, ProjectStatus, format_due_date},
};

#[derive(Debug, Clone, Default)]
pub struct ProjectsScreen {
    draft: ProjectDraft,
    form_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    NameChanged(String),
    DueDateChanged(String),
    StatusSelected(ProjectStatus),
    EarningsChanged(String),
    Submit,
    ToggleStatus(ProjectId),
    Delete(ProjectId),
}

type Msg = ScreenMessage<ProjectsScreen>;

fn local(message: ProjectsMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

impl ProjectsScreen {
    fn form(&self) -> Element<'_, Msg> {
        let fields = row![
            text_input("Project name", &self.draft.name)
                .on_input(|s| local(ProjectsMessage::NameChanged(s)))
                .on_submit(local(ProjectsMessage::Submit)),
            text_input("Due date (YYYY-MM-DD)", &self.draft.due_date)
                .on_input(|s| local(ProjectsMessage::DueDateChanged(s)))
                .on_submit(local(ProjectsMessage::Submit)),
            pick_list(&ProjectStatus::ALL[..], Some(self.draft.status), |s| {
                local(ProjectsMessage::StatusSelected(s))
            }),
            text_input("Earnings", &self.draft.earnings)
                .on_input(|s| local(ProjectsMessage::EarningsChanged(s)))
                .on_submit(local(ProjectsMessage::Submit)),
            button("Add Project").on_press(local(ProjectsMessage::Submit)),
        ]
        .spacing(10);

        let mut content = column![text("Add Projects").size(28), fields].spacing(10);
        if let Some(error) = &self.form_error {
            content = content.push(text(error.as_str()).color(iced::Color::from_rgb8(0xdc, 0x35, 0x45)));
        }
        content.into()
    }
}

fn project_card(project: &Project) -> Element<'_, Msg> {
    let toggle_label = match project.status {
        ProjectStatus::Active => "Active",
        ProjectStatus::Completed => "Completed",
    };
    card(
        column![
            text(project.name.as_str()).size(20),
            text(format!("Due Date: {}", format_due_date(project.due_date))),
            text(format!("Status: {}", project.status)),
            text(format!("Earnings: ${}", project.earnings)),
            row![
                button(toggle_label).on_press(local(ProjectsMessage::ToggleStatus(project.id))),
                button("Delete")
                    .style(button::danger)
                    .on_press(local(ProjectsMessage::Delete(project.id))),
            ]
            .spacing(10),
        ]
        .spacing(5),
    )
}

impl Screen for ProjectsScreen {
    type Message = ProjectsMessage;
    type ParentMessage = Navigate;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Msg> {
        let cards = state
            .ledger
            .projects()
            .iter()
            .fold(column![].spacing(10), |col, project| {
                col.push(project_card(project))
            });
        let content = column![self.form(), scrollable(cards).height(Length::Fill)]
            .spacing(20)
            .padding(20);

        layout(
            Tab::Projects,
            |tab| ScreenMessage::ParentMessage(Navigate::To(tab)),
            &state.ledger,
            container(content),
        )
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<Msg> {
        let action = match message {
            ProjectsMessage::NameChanged(name) => {
                self.draft.name = name;
                return Task::none();
            }
            ProjectsMessage::DueDateChanged(due_date) => {
                self.draft.due_date = due_date;
                return Task::none();
            }
            ProjectsMessage::StatusSelected(status) => {
                self.draft.status = status;
                return Task::none();
            }
            ProjectsMessage::EarningsChanged(earnings) => {
                self.draft.earnings = earnings;
                return Task::none();
            }
            ProjectsMessage::Submit => match self.draft.submit() {
                Ok(new_project) => {
                    self.draft.clear();
                    self.form_error = None;
                    Action::AddProject(new_project)
                }
                Err(e) => {
                    self.form_error = Some(e.to_string());
                    return Task::none();
                }
            },
            ProjectsMessage::ToggleStatus(id) => Action::ToggleProjectStatus(id),
            ProjectsMessage::Delete(id) => Action::DeleteProject(id),
        };
        state.ledger.apply(action, &mut state.toasts);
        Task::none()
    }
}
