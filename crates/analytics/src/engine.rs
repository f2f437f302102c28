use crate::report::{CapTable, CapTableRow, InvestmentSummary};
use core_types::{InvestmentType, InvestorEntry};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The fixed number of shares the company is divided into.
pub const TOTAL_SHARES: Decimal = dec!(1000000);

/// Name of the synthetic trailing cap table row.
pub const COMPANY_ROW_NAME: &str = "Company";

const ONE_HUNDRED: Decimal = dec!(100);

/// A stateless calculator for deriving fundraising figures from a roster snapshot.
///
/// Both calculations are pure: the same entries always produce the same result,
/// and malformed numeric text contributes zero rather than failing.
#[derive(Debug, Default)]
pub struct CalculationEngine {}

impl CalculationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals the investment amounts and splits them into pre- and post-money.
    ///
    /// `post_money` is derived as `total - pre_money`, so the three figures
    /// always reconcile exactly.
    pub fn summarize(&self, entries: &[InvestorEntry]) -> InvestmentSummary {
        let mut total = Decimal::ZERO;
        let mut pre_money = Decimal::ZERO;

        for entry in entries {
            let amount = entry.parsed_amount();
            total = total.saturating_add(amount);
            if entry.investment_type == InvestmentType::PreMoney {
                pre_money = pre_money.saturating_add(amount);
            }
        }

        let summary = InvestmentSummary {
            total,
            pre_money,
            post_money: total - pre_money,
        };

        tracing::debug!(
            investors = entries.len(),
            total = %summary.total,
            pre_money = %summary.pre_money,
            post_money = %summary.post_money,
            "Investment summary calculated."
        );

        summary
    }

    /// Builds the cap table: one row per investor plus a trailing company row.
    ///
    /// The company row receives `100 - total investor equity`. When investors
    /// claim more than 100% that remainder is negative; it is reported as-is.
    pub fn cap_table(&self, entries: &[InvestorEntry]) -> CapTable {
        let mut rows = Vec::with_capacity(entries.len() + 1);
        let mut total_equity = Decimal::ZERO;

        for entry in entries {
            let equity = entry.parsed_equity();
            total_equity = total_equity.saturating_add(equity);
            rows.push(CapTableRow {
                name: entry.name.clone(),
                amount: entry.parsed_amount(),
                equity,
                shares: shares_for(equity),
            });
        }

        let company_equity = ONE_HUNDRED.saturating_sub(total_equity);
        rows.push(CapTableRow {
            name: COMPANY_ROW_NAME.to_string(),
            amount: Decimal::ZERO,
            equity: company_equity,
            shares: shares_for(company_equity),
        });

        if total_equity > ONE_HUNDRED {
            tracing::warn!(
                total_equity = %total_equity,
                company_equity = %company_equity,
                "Investor equity exceeds 100%; company row is negative."
            );
        }

        tracing::debug!(
            investors = entries.len(),
            total_equity = %total_equity,
            "Cap table calculated."
        );

        CapTable::new(rows)
    }
}

/// Converts an ownership percentage into an unrounded share count.
fn shares_for(equity: Decimal) -> Decimal {
    (equity / ONE_HUNDRED).saturating_mul(TOTAL_SHARES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{FieldUpdate, InvestorId};

    fn entry(id: u64, name: &str, amount: &str, kind: InvestmentType, equity: &str) -> InvestorEntry {
        let mut entry = InvestorEntry::new(InvestorId(id));
        entry.apply(FieldUpdate::Name(name.to_string()));
        entry.apply(FieldUpdate::Amount(amount.to_string()));
        entry.apply(FieldUpdate::Type(kind));
        entry.apply(FieldUpdate::Equity(equity.to_string()));
        entry
    }

    #[test]
    fn summary_of_empty_roster_is_zero() {
        let summary = CalculationEngine::new().summarize(&[]);
        assert_eq!(summary, InvestmentSummary::default());
    }

    #[test]
    fn summary_splits_by_type() {
        let entries = vec![
            entry(1, "", "1000", InvestmentType::PreMoney, ""),
            entry(2, "", "500", InvestmentType::PostMoney, ""),
        ];
        let summary = CalculationEngine::new().summarize(&entries);

        assert_eq!(summary.total, dec!(1500));
        assert_eq!(summary.pre_money, dec!(1000));
        assert_eq!(summary.post_money, dec!(500));
    }

    #[test]
    fn summary_treats_bad_amounts_as_zero() {
        let entries = vec![
            entry(1, "", "", InvestmentType::PreMoney, ""),
            entry(2, "", "n/a", InvestmentType::PostMoney, ""),
            entry(3, "", "250.25", InvestmentType::PostMoney, ""),
        ];
        let summary = CalculationEngine::new().summarize(&entries);

        assert_eq!(summary.total, dec!(250.25));
        assert_eq!(summary.pre_money, Decimal::ZERO);
        assert_eq!(summary.post_money, dec!(250.25));
    }

    #[test]
    fn shares_follow_equity_percentage() {
        assert_eq!(shares_for(dec!(20)), dec!(200000));
        assert_eq!(shares_for(dec!(0.5)), dec!(5000));
        assert_eq!(shares_for(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(shares_for(dec!(-10)), dec!(-100000));
    }

    #[test]
    fn cap_table_of_empty_roster_is_all_company() {
        let table = CalculationEngine::new().cap_table(&[]);
        assert_eq!(table.len(), 1);

        let company = table.company().unwrap();
        assert_eq!(company.name, COMPANY_ROW_NAME);
        assert_eq!(company.equity, dec!(100));
        assert_eq!(company.shares, TOTAL_SHARES);
        assert!(!table.is_oversubscribed());
    }

    #[test]
    fn cap_table_company_row_carries_no_amount() {
        let entries = vec![entry(1, "A", "1000", InvestmentType::PreMoney, "20")];
        let table = CalculationEngine::new().cap_table(&entries);

        assert_eq!(table.rows()[0].amount, dec!(1000));
        assert_eq!(table.company().unwrap().amount, Decimal::ZERO);
    }
}
