//! CLI command implementations.

pub mod catalog;
pub mod common;
pub mod resolve;
pub mod select;
