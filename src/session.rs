use crate::error::CommandError;
use crate::render::{render_cap_table, render_roster, render_summary};
use analytics::CalculationEngine;
use configuration::{DisplaySettings, OutputFormat};
use core_types::{FieldUpdate, InvestmentType, InvestorField, InvestorId};
use roster::Roster;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  add                          Add an investor with empty fields
  set <id> <field> <value>     Edit name, amount, type (pre|post) or equity
  remove <id>                  Remove an investor
  list                         Show the roster
  calculate                    Show pre/post-money totals
  cap-table                    Show ownership and share counts
  help                         Show this message
  quit                         Leave the session";

/// A parsed session command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Set(InvestorId, FieldUpdate),
    Remove(InvestorId),
    List,
    Calculate,
    CapTable,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "add" => Command::Add,
            "set" => parse_set(rest)?,
            "remove" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("remove <id>"));
                }
                Command::Remove(parse_id(rest)?)
            }
            "list" | "ls" => Command::List,
            "calculate" | "calc" => Command::Calculate,
            "cap-table" | "captable" => Command::CapTable,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_id(text: &str) -> Result<InvestorId, CommandError> {
    text.parse::<u64>()
        .map(InvestorId)
        .map_err(|_| CommandError::InvalidId(text.to_string()))
}

/// `set <id> <field> <value>`; the value is the rest of the line and may be empty.
fn parse_set(args: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "set <id> <name|amount|type|equity> <value>";

    let mut parts = args.splitn(3, char::is_whitespace);
    let id = match parts.next() {
        Some(id) if !id.is_empty() => parse_id(id)?,
        _ => return Err(CommandError::Usage(USAGE)),
    };
    let field = match parts.next() {
        Some(field) if !field.is_empty() => field.parse::<InvestorField>()?,
        _ => return Err(CommandError::Usage(USAGE)),
    };
    let value = parts.next().unwrap_or_default().trim().to_string();

    let update = match field {
        InvestorField::Name => FieldUpdate::Name(value),
        InvestorField::Amount => FieldUpdate::Amount(value),
        InvestorField::Type => FieldUpdate::Type(value.parse::<InvestmentType>()?),
        InvestorField::Equity => FieldUpdate::Equity(value),
    };
    Ok(Command::Set(id, update))
}

/// An interactive editing session over a single roster.
///
/// Commands run one at a time, each to completion, and every calculation reads
/// the roster as it is at that moment.
pub struct Session<'a> {
    roster: Roster,
    engine: CalculationEngine,
    display: &'a DisplaySettings,
    format: OutputFormat,
}

impl<'a> Session<'a> {
    pub fn new(display: &'a DisplaySettings, format: OutputFormat) -> Self {
        Self {
            roster: Roster::new(),
            engine: CalculationEngine::new(),
            display,
            format,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> anyhow::Result<()> {
        writeln!(output, "SAFE Fundraising Calculator. Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => {
                    let message = self.execute(command)?;
                    writeln!(output, "{message}")?;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(input = %line, error = %e, "Rejected session command.");
                    writeln!(output, "{e}")?;
                }
            }
        }
        tracing::info!(investors = self.roster.len(), "Session ended.");
        Ok(())
    }

    /// Applies one command and returns the text to show the user.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<String> {
        let message = match command {
            Command::Add => {
                let id = self.roster.add();
                format!("Added investor {id}.")
            }
            Command::Set(id, update) => {
                if self.roster.update(id, update) {
                    format!("Updated investor {id}.")
                } else {
                    format!("No investor with id {id}.")
                }
            }
            Command::Remove(id) => {
                if self.roster.remove(id) {
                    format!("Removed investor {id}.")
                } else {
                    format!("No investor with id {id}.")
                }
            }
            Command::List => render_roster(self.roster.entries(), self.format)?,
            Command::Calculate => {
                let summary = self.engine.summarize(self.roster.entries());
                render_summary(&summary, self.display, self.format)?
            }
            Command::CapTable => {
                let cap_table = self.engine.cap_table(self.roster.entries());
                render_cap_table(&cap_table, self.display, self.format)?
            }
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        };
        Ok(message)
    }
}
