//! Longest-token selection shared by the service and any library callers.

pub mod selector;
pub mod types;

pub use selector::{longest, select, token_len, Selection, SelectorError};
