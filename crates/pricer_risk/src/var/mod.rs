//! Historical-simulation Value-at-Risk.
//!
//! ## Method
//!
//! 1. Per asset, ratio each rate to the one `h` observations older.
//! 2. Scale the log-ratio by √h and map back to a return, times exposure.
//! 3. Sum the asset P&L series per date (outer join).
//! 4. Sort ascending; VaR = 0.4·x₁ + 0.6·x₂ (zero-based positions).

mod config;
mod engine;

pub use config::{VarConfig, DEFAULT_HORIZON};
pub use engine::{VarEngine, MIN_OBSERVATIONS};
