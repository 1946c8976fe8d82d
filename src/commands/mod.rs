//! CLI command implementations.

pub mod lookup;
pub mod search;

pub use lookup::LookupCommand;
pub use search::SearchCommand;
