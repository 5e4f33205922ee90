//! Numeric filter model, query-string codec, and the in-memory
//! filter/search engine over fetched player lists.
//!
//! Everything here is pure: callers re-invoke the engine whenever the
//! player list, search term, or filter set changes.

pub mod condition;
pub mod engine;
pub mod query;
pub mod set;

pub use condition::{evaluate, Comparator, NumericCondition};
pub use engine::{filter_players, matches};
pub use query::{from_query_string, to_query_string};
pub use set::RankingsFilters;
