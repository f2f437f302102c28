pub mod enums;
pub mod error;
pub mod parse;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{InvestmentType, InvestorField};
pub use error::CoreError;
pub use parse::parse_decimal;
pub use structs::{FieldUpdate, InvestorEntry, InvestorId};
