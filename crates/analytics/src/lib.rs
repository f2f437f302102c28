//! # Fundraising Calculation Engine
//!
//! This crate derives the fundraising figures shown to the user from a snapshot of
//! the investor roster.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of the
//!   roster's editing operations or of how results are displayed. It depends only
//!   on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `CalculationEngine` takes roster entries as input
//!   and produces a fresh result each time. Calling it twice on the same entries
//!   yields identical output.
//! - **Fail Soft:** Numeric text that does not parse counts as zero. No calculation
//!   returns an error.
//!
//! ## Public API
//!
//! - `CalculationEngine`: `summarize` for pre/post-money totals, `cap_table` for
//!   ownership and share counts.
//! - `InvestmentSummary`, `CapTable`, `CapTableRow`: the result types.
//! - `format`: grouping, percentage and whole-share formatting for display.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod format;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{COMPANY_ROW_NAME, CalculationEngine, TOTAL_SHARES};
pub use report::{CapTable, CapTableRow, InvestmentSummary};
