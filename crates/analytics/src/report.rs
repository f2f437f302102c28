use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Aggregate investment totals, split by investment type.
///
/// `total == pre_money + post_money` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    pub total: Decimal,
    pub pre_money: Decimal,
    pub post_money: Decimal,
}

/// One stakeholder line of a cap table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapTableRow {
    pub name: String,
    pub amount: Decimal,
    /// Ownership percentage, 0-100. Only the company row can go negative.
    pub equity: Decimal,
    /// Unrounded share count.
    pub shares: Decimal,
}

/// A capitalization table: one row per investor in roster order, followed by
/// exactly one trailing company row holding the unallocated remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapTable {
    rows: Vec<CapTableRow>,
}

impl CapTable {
    pub(crate) fn new(rows: Vec<CapTableRow>) -> Self {
        Self { rows }
    }

    /// All rows, company row last.
    pub fn rows(&self) -> &[CapTableRow] {
        &self.rows
    }

    /// The investor rows without the trailing company row.
    pub fn investors(&self) -> &[CapTableRow] {
        match self.rows.split_last() {
            Some((_, investors)) => investors,
            None => &[],
        }
    }

    pub fn company(&self) -> Option<&CapTableRow> {
        self.rows.last()
    }

    /// The summed equity claimed by investors, excluding the company row.
    pub fn total_equity(&self) -> Decimal {
        self.investors()
            .iter()
            .fold(Decimal::ZERO, |acc, row| acc.saturating_add(row.equity))
    }

    /// True when investors claim more than 100%, leaving the company row negative.
    pub fn is_oversubscribed(&self) -> bool {
        self.total_equity() > dec!(100)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
