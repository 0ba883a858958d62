use std::collections::{HashMap, HashSet};

use crate::{
    core::{
        ids::IdGenerator,
        notify::{Notification, Notifier},
    },
    models::{NewProject, Payment, PaymentId, PaymentStatus, Project, ProjectId},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("project id {0} is used more than once")]
    DuplicateProjectId(ProjectId),
    #[error("payment id {0} is used more than once")]
    DuplicatePaymentId(PaymentId),
    #[error("project id {0} is too large to continue numbering after")]
    ProjectIdOutOfRange(ProjectId),
    #[error("payment id {0} is too large to continue numbering after")]
    PaymentIdOutOfRange(PaymentId),
    #[error("project {project} and payment {payment} disagree about their link")]
    MismatchedLink {
        project: ProjectId,
        payment: PaymentId,
    },
}

/// One user-level mutation of the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddProject(NewProject),
    DeleteProject(ProjectId),
    ToggleProjectStatus(ProjectId),
    MarkPaymentPaid(PaymentId),
    DeletePayment(PaymentId),
}

/// Projects, their payments, and the earnings derived from both.
///
/// The earnings total is never stored: it is recomputed from the two
/// collections, so it cannot drift from them.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    projects: Vec<Project>,
    payments: Vec<Payment>,
    ids: IdGenerator,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing records.
    ///
    /// Rejects duplicate ids, ids above [`IdGenerator::MAX_ID`], and a
    /// project and payment that both exist but point at different partners.
    /// A link to a record that is absent is kept as a detached link.
    pub fn from_parts(projects: Vec<Project>, payments: Vec<Payment>) -> Result<Self, LedgerError> {
        let mut seen_projects = HashSet::new();
        for project in &projects {
            if project.id.0 > IdGenerator::MAX_ID {
                return Err(LedgerError::ProjectIdOutOfRange(project.id));
            }
            if !seen_projects.insert(project.id) {
                return Err(LedgerError::DuplicateProjectId(project.id));
            }
        }
        let mut seen_payments = HashSet::new();
        for payment in &payments {
            if payment.id.0 > IdGenerator::MAX_ID {
                return Err(LedgerError::PaymentIdOutOfRange(payment.id));
            }
            if !seen_payments.insert(payment.id) {
                return Err(LedgerError::DuplicatePaymentId(payment.id));
            }
        }

        let payment_links: HashMap<PaymentId, Option<ProjectId>> =
            payments.iter().map(|p| (p.id, p.project_id)).collect();
        let project_links: HashMap<ProjectId, Option<PaymentId>> =
            projects.iter().map(|p| (p.id, p.payment_id)).collect();
        for project in &projects {
            if let Some(payment_id) = project.payment_id {
                if let Some(&back) = payment_links.get(&payment_id) {
                    if back.is_some_and(|id| id != project.id) {
                        return Err(LedgerError::MismatchedLink {
                            project: project.id,
                            payment: payment_id,
                        });
                    }
                }
            }
        }
        for payment in &payments {
            if let Some(project_id) = payment.project_id {
                if let Some(&back) = project_links.get(&project_id) {
                    if back.is_some_and(|id| id != payment.id) {
                        return Err(LedgerError::MismatchedLink {
                            project: project_id,
                            payment: payment.id,
                        });
                    }
                }
            }
        }

        let ids = IdGenerator::after(
            projects.iter().map(|p| p.id).max(),
            payments.iter().map(|p| p.id).max(),
        );
        Ok(Self {
            projects,
            payments,
            ids,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn payment(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    /// The project a payment was created for, if it still exists.
    pub fn linked_project(&self, payment: &Payment) -> Option<&Project> {
        payment.project_id.and_then(|id| self.project(id))
    }

    // Sums are widened to u128 so no combination of u64 amounts can overflow.
    pub fn project_earnings(&self) -> u128 {
        self.projects.iter().map(|p| u128::from(p.earnings)).sum()
    }

    /// Sum of paid payments.
    pub fn collected(&self) -> u128 {
        self.payments
            .iter()
            .filter(|p| p.is_paid())
            .map(|p| u128::from(p.amount))
            .sum()
    }

    /// Sum of unpaid payments.
    pub fn outstanding(&self) -> u128 {
        self.payments
            .iter()
            .filter(|p| !p.is_paid())
            .map(|p| u128::from(p.amount))
            .sum()
    }

    /// Project earnings plus paid payments.
    pub fn total_earnings(&self) -> u128 {
        self.project_earnings() + self.collected()
    }

    pub fn add_project(&mut self, input: NewProject) -> Notification {
        let project_id = self.ids.next_project();
        let payment_id = self.ids.next_payment();
        let NewProject {
            name,
            due_date,
            status,
            earnings,
        } = input;

        let notification = Notification::success(format!(
            "Project \"{name}\" added with earnings of ${earnings}!"
        ));
        tracing::info!(%project_id, %payment_id, earnings, "added project");

        self.projects.push(Project {
            id: project_id,
            name,
            due_date,
            status,
            earnings,
            payment_id: Some(payment_id),
        });
        self.payments.push(Payment {
            id: payment_id,
            amount: earnings,
            status: PaymentStatus::Unpaid,
            project_id: Some(project_id),
        });
        notification
    }

    /// Remove a project. Its payment stays in place and becomes detached.
    pub fn delete_project(&mut self, id: ProjectId) -> Option<Notification> {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            tracing::debug!(project_id = %id, "delete: no such project");
            return None;
        };
        let project = self.projects.remove(index);
        tracing::info!(project_id = %id, earnings = project.earnings, "deleted project");
        Some(Notification::error(format!(
            "Project \"{}\" deleted!",
            project.name
        )))
    }

    pub fn toggle_project_status(&mut self, id: ProjectId) -> Option<Notification> {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(project_id = %id, "toggle: no such project");
            return None;
        };
        project.status = project.status.toggled();
        tracing::info!(project_id = %id, status = %project.status, "toggled project status");
        Some(Notification::success(format!(
            "Project status changed to \"{}\"!",
            project.status
        )))
    }

    /// Mark a payment as paid. Does nothing if it is missing or already paid.
    pub fn mark_payment_paid(&mut self, id: PaymentId) -> Option<Notification> {
        let Some(payment) = self.payments.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(payment_id = %id, "mark paid: no such payment");
            return None;
        };
        if payment.is_paid() {
            tracing::debug!(payment_id = %id, "mark paid: already paid");
            return None;
        }
        payment.status = PaymentStatus::Paid;
        tracing::info!(payment_id = %id, amount = payment.amount, "payment marked as paid");
        Some(Notification::success(format!(
            "Payment of ${} marked as paid!",
            payment.amount
        )))
    }

    pub fn delete_payment(&mut self, id: PaymentId) -> Option<Notification> {
        let Some(index) = self.payments.iter().position(|p| p.id == id) else {
            tracing::debug!(payment_id = %id, "delete: no such payment");
            return None;
        };
        let payment = self.payments.remove(index);
        tracing::info!(
            payment_id = %id,
            amount = payment.amount,
            status = %payment.status,
            "deleted payment"
        );
        Some(Notification::error(format!(
            "Payment of ${} deleted!",
            payment.amount
        )))
    }

    /// Run one action, forwarding its notification. Returns whether anything changed.
    pub fn apply(&mut self, action: Action, notifier: &mut impl Notifier) -> bool {
        let notification = match action {
            Action::AddProject(input) => Some(self.add_project(input)),
            Action::DeleteProject(id) => self.delete_project(id),
            Action::ToggleProjectStatus(id) => self.toggle_project_status(id),
            Action::MarkPaymentPaid(id) => self.mark_payment_paid(id),
            Action::DeletePayment(id) => self.delete_payment(id),
        };
        match notification {
            Some(notification) => {
                notifier.notify(notification);
                true
            }
            None => false,
        }
    }
}
