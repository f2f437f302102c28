use analytics::{COMPANY_ROW_NAME, CalculationEngine, TOTAL_SHARES};
use core_types::{FieldUpdate, InvestmentType, InvestorId};
use roster::Roster;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Adds an investor and fills in its fields the way the form does, one edit at a time.
fn add_investor(roster: &mut Roster, name: &str, amount: &str, kind: InvestmentType, equity: &str) -> InvestorId {
    let id = roster.add();
    roster.update(id, FieldUpdate::Name(name.to_string()));
    roster.update(id, FieldUpdate::Amount(amount.to_string()));
    roster.update(id, FieldUpdate::Type(kind));
    roster.update(id, FieldUpdate::Equity(equity.to_string()));
    id
}

fn mixed_roster() -> Roster {
    let mut roster = Roster::new();
    add_investor(&mut roster, "Angel", "25000", InvestmentType::PreMoney, "2.5");
    add_investor(&mut roster, "Seed Fund", "1e6", InvestmentType::PostMoney, "15");
    add_investor(&mut roster, "Friend", "", InvestmentType::PreMoney, "");
    add_investor(&mut roster, "Accelerator", "125000.75", InvestmentType::PostMoney, "7");
    add_investor(&mut roster, "Typo", "12k", InvestmentType::PreMoney, "three");
    roster
}

#[test]
fn summary_example_from_two_investors() {
    let mut roster = Roster::new();
    add_investor(&mut roster, "", "1000", InvestmentType::PreMoney, "");
    add_investor(&mut roster, "", "500", InvestmentType::PostMoney, "");

    let summary = CalculationEngine::new().summarize(roster.entries());

    assert_eq!(summary.total, dec!(1500));
    assert_eq!(summary.pre_money, dec!(1000));
    assert_eq!(summary.post_money, dec!(500));
}

#[test]
fn summary_total_reconciles_exactly() {
    let summary = CalculationEngine::new().summarize(mixed_roster().entries());

    assert_eq!(summary.total, summary.pre_money + summary.post_money);
    assert_eq!(summary.pre_money, dec!(25000));
    assert_eq!(summary.post_money, dec!(1125000.75));
}

#[test]
fn summary_post_money_matches_direct_sum() {
    let roster = mixed_roster();
    let summary = CalculationEngine::new().summarize(roster.entries());

    let direct: Decimal = roster
        .entries()
        .iter()
        .filter(|entry| entry.investment_type == InvestmentType::PostMoney)
        .map(|entry| entry.parsed_amount())
        .sum();
    assert_eq!(summary.post_money, direct);
}

#[test]
fn summary_total_is_independent_of_order() {
    let roster = mixed_roster();
    let engine = CalculationEngine::new();
    let forward = engine.summarize(roster.entries());

    let mut reversed = roster.entries().to_vec();
    reversed.reverse();
    let backward = engine.summarize(&reversed);

    assert_eq!(forward, backward);
}

#[test]
fn cap_table_example_from_two_investors() {
    let mut roster = Roster::new();
    add_investor(&mut roster, "A", "", InvestmentType::PreMoney, "20");
    add_investor(&mut roster, "B", "", InvestmentType::PreMoney, "10");

    let table = CalculationEngine::new().cap_table(roster.entries());
    let rows = table.rows();

    assert_eq!(rows.len(), 3);
    assert_eq!((rows[0].name.as_str(), rows[0].equity, rows[0].shares), ("A", dec!(20), dec!(200000)));
    assert_eq!((rows[1].name.as_str(), rows[1].equity, rows[1].shares), ("B", dec!(10), dec!(100000)));
    assert_eq!(
        (rows[2].name.as_str(), rows[2].equity, rows[2].shares),
        (COMPANY_ROW_NAME, dec!(70), dec!(700000))
    );
}

#[test]
fn cap_table_has_one_row_per_investor_plus_company() {
    let roster = mixed_roster();
    let table = CalculationEngine::new().cap_table(roster.entries());

    assert_eq!(table.len(), roster.len() + 1);
    assert_eq!(table.investors().len(), roster.len());
    assert_eq!(table.company().unwrap().name, COMPANY_ROW_NAME);

    let names: Vec<&str> = table.investors().iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Angel", "Seed Fund", "Friend", "Accelerator", "Typo"]);
}

#[test]
fn cap_table_equity_sums_to_one_hundred() {
    let table = CalculationEngine::new().cap_table(mixed_roster().entries());

    let equity: Decimal = table.rows().iter().map(|row| row.equity).sum();
    let shares: Decimal = table.rows().iter().map(|row| row.shares).sum();

    assert_eq!(equity, dec!(100));
    assert_eq!(shares, TOTAL_SHARES);
    assert_eq!(table.total_equity(), dec!(24.5));
    assert!(!table.is_oversubscribed());
}

#[test]
fn cap_table_treats_bad_equity_as_zero() {
    let table = CalculationEngine::new().cap_table(mixed_roster().entries());
    let typo = &table.rows()[4];

    assert_eq!(typo.amount, Decimal::ZERO);
    assert_eq!(typo.equity, Decimal::ZERO);
    assert_eq!(typo.shares, Decimal::ZERO);
}

#[test]
fn oversubscribed_cap_table_leaves_company_negative() {
    let mut roster = Roster::new();
    add_investor(&mut roster, "A", "", InvestmentType::PreMoney, "80");
    add_investor(&mut roster, "B", "", InvestmentType::PreMoney, "40");

    let table = CalculationEngine::new().cap_table(roster.entries());
    let company = table.company().unwrap();

    assert!(table.is_oversubscribed());
    assert_eq!(company.equity, dec!(-20));
    assert_eq!(company.shares, dec!(-200000));

    let equity: Decimal = table.rows().iter().map(|row| row.equity).sum();
    assert_eq!(equity, dec!(100));
}

#[test]
fn exactly_one_hundred_percent_is_not_oversubscribed() {
    let mut roster = Roster::new();
    add_investor(&mut roster, "A", "", InvestmentType::PreMoney, "60");
    add_investor(&mut roster, "B", "", InvestmentType::PostMoney, "40");

    let table = CalculationEngine::new().cap_table(roster.entries());

    assert!(!table.is_oversubscribed());
    assert_eq!(table.company().unwrap().equity, Decimal::ZERO);
    assert_eq!(table.company().unwrap().shares, Decimal::ZERO);
}

#[test]
fn recalculating_without_edits_is_identical() {
    let roster = mixed_roster();
    let engine = CalculationEngine::new();

    assert_eq!(engine.summarize(roster.entries()), engine.summarize(roster.entries()));
    assert_eq!(engine.cap_table(roster.entries()), engine.cap_table(roster.entries()));
}

#[test]
fn results_follow_roster_edits() {
    let mut roster = Roster::new();
    let a = add_investor(&mut roster, "A", "1000", InvestmentType::PreMoney, "10");
    let b = add_investor(&mut roster, "B", "2000", InvestmentType::PreMoney, "10");
    let engine = CalculationEngine::new();

    roster.update(b, FieldUpdate::Type(InvestmentType::PostMoney));
    let summary = engine.summarize(roster.entries());
    assert_eq!(summary.pre_money, dec!(1000));
    assert_eq!(summary.post_money, dec!(2000));

    roster.remove(a);
    let summary = engine.summarize(roster.entries());
    assert_eq!(summary.total, dec!(2000));
    assert_eq!(summary.pre_money, Decimal::ZERO);

    let table = engine.cap_table(roster.entries());
    assert_eq!(table.len(), 2);
    assert_eq!(table.company().unwrap().equity, dec!(90));
}

#[test]
fn results_serialize_with_camel_case_keys() {
    let mut roster = Roster::new();
    add_investor(&mut roster, "A", "1000", InvestmentType::PreMoney, "20");
    let engine = CalculationEngine::new();

    let summary = serde_json::to_value(engine.summarize(roster.entries())).unwrap();
    assert_eq!(summary["total"], "1000");
    assert_eq!(summary["preMoney"], "1000");
    assert_eq!(summary["postMoney"], "0");

    let table = serde_json::to_value(engine.cap_table(roster.entries())).unwrap();
    assert_eq!(table["rows"][1]["name"], COMPANY_ROW_NAME);
}
