//! Amount text parsing module
//!
//! This module turns currency display text ("₹1,20,000.50", "1.5L", "2 Crore")
//! back into numbers. The main entry point is the `parse_amount` function.

mod amount;
mod tokens;

pub use amount::parse_amount;
pub use tokens::parse_unit_token;
