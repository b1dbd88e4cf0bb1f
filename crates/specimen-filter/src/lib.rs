//! Filtering of specimen collections.
//!
//! [`filter_specimens`] applies the AND of every active [`FilterCriteria`]
//! field to a collection and returns the matching records in input order.
//! The engine holds no state; callers pass the collection and criteria on
//! every call.

pub mod criteria;
pub mod engine;
pub mod ordering;

pub use criteria::FilterCriteria;
pub use engine::{FilterOutcome, filter_specimens};
pub use ordering::sort_by_family;
