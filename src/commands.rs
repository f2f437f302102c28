use crate::render::{render_cap_table, render_summary};
use analytics::CalculationEngine;
use configuration::{DisplaySettings, OutputFormat};
use core_types::{CoreError, FieldUpdate, InvestmentType};
use roster::Roster;

/// One `--investor` value: `name,amount[,type[,equity]]`.
///
/// Name, amount and equity are kept as raw text, just like form input. Only
/// the investment type is checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorSpec {
    pub name: String,
    pub amount: String,
    pub investment_type: Option<InvestmentType>,
    pub equity: Option<String>,
}

impl InvestorSpec {
    /// Adds this investor to `roster` the same way the form does: an `add`
    /// followed by one edit per field.
    pub fn add_to(&self, roster: &mut Roster) {
        let id = roster.add();
        roster.update(id, FieldUpdate::Name(self.name.clone()));
        roster.update(id, FieldUpdate::Amount(self.amount.clone()));
        if let Some(investment_type) = self.investment_type {
            roster.update(id, FieldUpdate::Type(investment_type));
        }
        if let Some(equity) = &self.equity {
            roster.update(id, FieldUpdate::Equity(equity.clone()));
        }
    }
}

/// Parses an `--investor` argument. Used as a clap value parser.
pub fn parse_investor_spec(spec: &str) -> Result<InvestorSpec, CoreError> {
    let mut parts = spec.splitn(4, ',').map(str::trim);
    let name = parts.next().unwrap_or_default().to_string();
    let amount = parts.next().unwrap_or_default().to_string();
    let investment_type = match parts.next() {
        Some("") | None => None,
        Some(text) => Some(text.parse::<InvestmentType>()?),
    };
    let equity = parts.next().map(str::to_string);

    Ok(InvestorSpec {
        name,
        amount,
        investment_type,
        equity,
    })
}

/// Builds a roster from the command line in argument order.
pub fn build_roster(investors: &[InvestorSpec]) -> Roster {
    let mut roster = Roster::new();
    for investor in investors {
        investor.add_to(&mut roster);
    }
    roster
}

/// Handles the `summary` subcommand.
pub fn handle_summary(
    investors: &[InvestorSpec],
    display: &DisplaySettings,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let roster = build_roster(investors);
    tracing::info!(investors = roster.len(), "Calculating investment summary.");
    let summary = CalculationEngine::new().summarize(roster.entries());
    render_summary(&summary, display, format)
}

/// Handles the `cap-table` subcommand.
pub fn handle_cap_table(
    investors: &[InvestorSpec],
    display: &DisplaySettings,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let roster = build_roster(investors);
    tracing::info!(investors = roster.len(), "Calculating cap table.");
    let cap_table = CalculationEngine::new().cap_table(roster.entries());
    render_cap_table(&cap_table, display, format)
}
