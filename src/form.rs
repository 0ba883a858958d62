use time::Date;

use crate::models::{DUE_DATE_FORMAT, NewProject, ProjectStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("project name is required")]
    MissingName,
    #[error("due date is required")]
    MissingDueDate,
    #[error("due date {0:?} is not a YYYY-MM-DD date")]
    InvalidDueDate(String),
    #[error("earnings are required")]
    MissingEarnings,
    #[error("earnings {0:?} are not a whole non-negative amount")]
    InvalidEarnings(String),
}

/// Raw, as-typed contents of the "add project" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub due_date: String,
    pub status: ProjectStatus,
    pub earnings: String,
}

impl ProjectDraft {
    pub fn submit(&self) -> Result<NewProject, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let due_date = self.due_date.trim();
        if due_date.is_empty() {
            return Err(FormError::MissingDueDate);
        }
        let due_date = Date::parse(due_date, DUE_DATE_FORMAT)
            .map_err(|_| FormError::InvalidDueDate(due_date.to_string()))?;

        let earnings = self.earnings.trim().trim_start_matches('$');
        if earnings.is_empty() {
            return Err(FormError::MissingEarnings);
        }
        let earnings = earnings
            .parse::<u64>()
            .map_err(|_| FormError::InvalidEarnings(earnings.to_string()))?;

        Ok(NewProject {
            name: name.to_string(),
            due_date,
            status: self.status,
            earnings,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn draft(name: &str, due_date: &str, earnings: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            due_date: due_date.to_string(),
            status: ProjectStatus::Completed,
            earnings: earnings.to_string(),
        }
    }

    #[test]
    fn submit_builds_new_project() {
        let project = draft("  Site redesign ", "2025-01-01", "$1500").submit().unwrap();
        assert_eq!(project.name, "Site redesign");
        assert_eq!(project.due_date, date!(2025 - 01 - 01));
        assert_eq!(project.status, ProjectStatus::Completed);
        assert_eq!(project.earnings, 1500);
    }

    #[test]
    fn submit_requires_every_field() {
        assert_eq!(draft(" ", "2025-01-01", "1").submit(), Err(FormError::MissingName));
        assert_eq!(draft("X", "", "1").submit(), Err(FormError::MissingDueDate));
        assert_eq!(draft("X", "2025-01-01", "").submit(), Err(FormError::MissingEarnings));
    }

    #[test]
    fn submit_rejects_unparsable_values() {
        assert_eq!(
            draft("X", "01/01/2025", "1").submit(),
            Err(FormError::InvalidDueDate("01/01/2025".to_string()))
        );
        assert_eq!(
            draft("X", "2025-01-01", "-5").submit(),
            Err(FormError::InvalidEarnings("-5".to_string()))
        );
    }

    #[test]
    fn clear_resets_status_to_active() {
        let mut d = draft("X", "2025-01-01", "1");
        d.clear();
        assert_eq!(d, ProjectDraft::default());
        assert_eq!(d.status, ProjectStatus::Active);
    }
}
