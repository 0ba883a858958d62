use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::macros::date;

use crate::{
    core::ledger::{Ledger, LedgerError},
    models::{Payment, PaymentId, PaymentStatus, Project, ProjectId, ProjectStatus},
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Initial ledger contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Seed {
    /// Two sample projects: one with its payment collected, one still owed.
    pub fn demo() -> Self {
        Self {
            projects: vec![
                Project {
                    id: ProjectId(1),
                    name: "Project A".to_string(),
                    due_date: date!(2024 - 10 - 15),
                    status: ProjectStatus::Active,
                    earnings: 20666,
                    payment_id: Some(PaymentId(1)),
                },
                Project {
                    id: ProjectId(2),
                    name: "Project B".to_string(),
                    due_date: date!(2024 - 11 - 20),
                    status: ProjectStatus::Completed,
                    earnings: 15011,
                    payment_id: Some(PaymentId(2)),
                },
            ],
            payments: vec![
                Payment {
                    id: PaymentId(1),
                    amount: 20666,
                    status: PaymentStatus::Paid,
                    project_id: Some(ProjectId(1)),
                },
                Payment {
                    id: PaymentId(2),
                    amount: 15011,
                    status: PaymentStatus::Unpaid,
                    project_id: Some(ProjectId(2)),
                },
            ],
        }
    }

    pub fn from_json(path: &Path, json: &str) -> Result<Self, SeedError> {
        serde_json::from_str(json).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_json(path, &json)?;
        tracing::debug!(
            ?path,
            projects = seed.projects.len(),
            payments = seed.payments.len(),
            "loaded seed"
        );
        Ok(seed)
    }

    pub fn into_ledger(self) -> Result<Ledger, SeedError> {
        Ok(Ledger::from_parts(self.projects, self.payments)?)
    }
}
