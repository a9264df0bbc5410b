//! Player ledger: records, document storage, and serialized access.

pub mod logic;
pub mod store;
pub mod types;

pub use logic::*;
pub use store::*;
pub use types::*;
