//! Line-oriented front-end for running the ledger without a window.
//!
//! Each input line is one command. Output goes to the given writer so the
//! whole session can be driven from a script or a test.

use std::io::{self, BufRead, Write};

use crate::{
    core::{Action, Ledger, Notification},
    form::{FormError, ProjectDraft},
    models::{PaymentId, ProjectId, format_due_date},
};

const HELP: &str = "\
commands:
  add <name> <YYYY-MM-DD> <earnings> [active|completed]
  toggle <project-id>
  delete-project <project-id>
  pay <payment-id>
  delete-payment <payment-id>
  list
  total
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("unknown command {0:?}, try \"help\"")]
    UnknownCommand(String),
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
    #[error("{0:?} is not a valid id")]
    InvalidId(String),
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error(transparent)]
    Status(#[from] crate::models::ParseStatusError),
    #[error(transparent)]
    Form(#[from] FormError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Apply(Action),
    List,
    Total,
    Help,
    Quit,
}

/// Split on whitespace; double quotes group words into one argument.
fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if quoted {
        return Err(ShellError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_id(arg: Option<String>, name: &'static str) -> Result<u64, ShellError> {
    let arg = arg.ok_or(ShellError::MissingArgument(name))?;
    arg.trim_start_matches('#')
        .parse()
        .map_err(|_| ShellError::InvalidId(arg))
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut args = tokenize(line)?.into_iter();
    let Some(command) = args.next() else {
        return Ok(None);
    };

    let parsed = match command.as_str() {
        "add" => {
            let mut draft = ProjectDraft {
                name: args.next().ok_or(ShellError::MissingArgument("name"))?,
                due_date: args.next().ok_or(ShellError::MissingArgument("due-date"))?,
                earnings: args.next().ok_or(ShellError::MissingArgument("earnings"))?,
                ..ProjectDraft::default()
            };
            if let Some(status) = args.next() {
                draft.status = status.parse()?;
            }
            ShellCommand::Apply(Action::AddProject(draft.submit()?))
        }
        "toggle" => ShellCommand::Apply(Action::ToggleProjectStatus(ProjectId(parse_id(
            args.next(),
            "project-id",
        )?))),
        "delete-project" => ShellCommand::Apply(Action::DeleteProject(ProjectId(parse_id(
            args.next(),
            "project-id",
        )?))),
        "pay" => ShellCommand::Apply(Action::MarkPaymentPaid(PaymentId(parse_id(
            args.next(),
            "payment-id",
        )?))),
        "delete-payment" => ShellCommand::Apply(Action::DeletePayment(PaymentId(parse_id(
            args.next(),
            "payment-id",
        )?))),
        "list" => ShellCommand::List,
        "total" => ShellCommand::Total,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = args.next() {
        return Err(ShellError::UnexpectedArgument(extra));
    }
    Ok(Some(parsed))
}

/// Write projects, payments and the earnings overview.
pub fn render(ledger: &Ledger, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Projects:")?;
    if ledger.projects().is_empty() {
        writeln!(out, "  (none)")?;
    }
    for project in ledger.projects() {
        writeln!(
            out,
            "  #{} {}  due {}  {}  ${}",
            project.id,
            project.name,
            format_due_date(project.due_date),
            project.status,
            project.earnings
        )?;
    }

    writeln!(out, "Payments:")?;
    if ledger.payments().is_empty() {
        writeln!(out, "  (none)")?;
    }
    for payment in ledger.payments() {
        let project = match (payment.project_id, ledger.linked_project(payment)) {
            (_, Some(project)) => format!("  ({})", project.name),
            (Some(_), None) => "  (project deleted)".to_string(),
            (None, None) => String::new(),
        };
        writeln!(
            out,
            "  #{} ${} {}{}",
            payment.id, payment.amount, payment.status, project
        )?;
    }
    render_total(ledger, out)
}

fn render_total(ledger: &Ledger, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Total Earnings: ${}", ledger.total_earnings())
}

pub struct Shell {
    ledger: Ledger,
}

impl Shell {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Read commands until end of input or `quit`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        render(&self.ledger, out)?;
        for line in input.lines() {
            let line = line?;
            match parse_line(&line) {
                Ok(Some(command)) => {
                    if !self.execute(command, out)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(%line, error = %e, "rejected command");
                    writeln!(out, "! {e}")?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Returns `false` once the session should end.
    fn execute(&mut self, command: ShellCommand, out: &mut impl Write) -> io::Result<bool> {
        match command {
            ShellCommand::Apply(action) => {
                let mut notifications: Vec<Notification> = Vec::new();
                if self.ledger.apply(action, &mut notifications) {
                    for notification in &notifications {
                        writeln!(out, "{notification}")?;
                    }
                    render_total(&self.ledger, out)?;
                }
            }
            ShellCommand::List => render(&self.ledger, out)?,
            ShellCommand::Total => {
                writeln!(out, "Project earnings: ${}", self.ledger.project_earnings())?;
                writeln!(out, "Collected payments: ${}", self.ledger.collected())?;
                writeln!(out, "Outstanding payments: ${}", self.ledger.outstanding())?;
                render_total(&self.ledger, out)?;
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }
}
