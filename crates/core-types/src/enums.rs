use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When an investor's capital is counted relative to the round's valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentType {
    #[default]
    PreMoney,
    PostMoney,
}

impl InvestmentType {
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentType::PreMoney => "Pre-money",
            InvestmentType::PostMoney => "Post-money",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InvestmentType {
    type Err = CoreError;

    /// Accepts `pre`, `pre-money`, `pre_money`, `premoney` (and the `post` forms),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "pre" | "premoney" => Ok(InvestmentType::PreMoney),
            "post" | "postmoney" => Ok(InvestmentType::PostMoney),
            _ => Err(CoreError::InvalidInput(
                "investment type".to_string(),
                s.to_string(),
            )),
        }
    }
}

/// The editable fields of an `InvestorEntry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestorField {
    Name,
    Amount,
    Type,
    Equity,
}

impl FromStr for InvestorField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(InvestorField::Name),
            "amount" => Ok(InvestorField::Amount),
            "type" => Ok(InvestorField::Type),
            "equity" => Ok(InvestorField::Equity),
            _ => Err(CoreError::InvalidInput("field".to_string(), s.to_string())),
        }
    }
}
