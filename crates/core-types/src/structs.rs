use crate::enums::InvestmentType;
use crate::parse::parse_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A roster-assigned identifier. Never reused within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestorId(pub u64);

impl fmt::Display for InvestorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the investor roster.
///
/// `amount` and `equity` hold the text exactly as the user entered it. They are
/// only interpreted as numbers when a calculation runs, see `parse_decimal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorEntry {
    pub id: InvestorId,
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub equity: String,
}

impl InvestorEntry {
    /// Creates an entry with empty text fields and a pre-money type.
    pub fn new(id: InvestorId) -> Self {
        Self {
            id,
            name: String::new(),
            amount: String::new(),
            investment_type: InvestmentType::default(),
            equity: String::new(),
        }
    }

    pub fn parsed_amount(&self) -> Decimal {
        parse_decimal(&self.amount)
    }

    pub fn parsed_equity(&self) -> Decimal {
        parse_decimal(&self.equity)
    }

    /// Replaces a single field with the given value.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Amount(amount) => self.amount = amount,
            FieldUpdate::Type(investment_type) => self.investment_type = investment_type,
            FieldUpdate::Equity(equity) => self.equity = equity,
        }
    }
}

/// A single-field edit of an `InvestorEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUpdate {
    Name(String),
    Amount(String),
    Type(InvestmentType),
    Equity(String),
}
