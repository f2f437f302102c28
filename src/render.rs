use analytics::format::{format_amount, format_percent, format_shares};
use analytics::{CapTable, InvestmentSummary};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use configuration::{DisplaySettings, OutputFormat};
use core_types::InvestorEntry;

/// Renders the pre/post-money summary.
pub fn render_summary(
    summary: &InvestmentSummary,
    display: &DisplaySettings,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }

    let symbol = &display.currency_symbol;
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Summary", "Amount"]);
    for (label, value) in [
        ("Total Investment", summary.total),
        ("Pre-money Investment", summary.pre_money),
        ("Post-money Investment", summary.post_money),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format_amount(value, symbol)).set_alignment(CellAlignment::Right),
        ]);
    }
    Ok(table.to_string())
}

/// Renders the cap table, followed by a warning line when investors claim more
/// than 100% and the settings ask for it.
pub fn render_cap_table(
    cap_table: &CapTable,
    display: &DisplaySettings,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(cap_table)?);
    }

    let symbol = &display.currency_symbol;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Name", "Amount", "Equity", "Shares"]);
    for row in cap_table.rows() {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(format_amount(row.amount, symbol)).set_alignment(CellAlignment::Right),
            Cell::new(format_percent(row.equity)).set_alignment(CellAlignment::Right),
            Cell::new(format_shares(row.shares)).set_alignment(CellAlignment::Right),
        ]);
    }

    let mut out = table.to_string();
    if display.warn_on_oversubscription && cap_table.is_oversubscribed() {
        out.push_str(&format!(
            "\nWarning: investors claim {} of the company; the company row is negative.",
            format_percent(cap_table.total_equity())
        ));
    }
    Ok(out)
}

/// Renders the roster exactly as entered, without parsing numeric fields.
pub fn render_roster(entries: &[InvestorEntry], format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(entries)?);
    }
    if entries.is_empty() {
        return Ok("No investors. Use 'add' to create one.".to_string());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "Name", "Amount", "Type", "Equity"]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.id),
            Cell::new(&entry.name),
            Cell::new(&entry.amount),
            Cell::new(entry.investment_type),
            Cell::new(&entry.equity),
        ]);
    }
    Ok(table.to_string())
}
