//! A personal contact list kept in memory and mirrored to one JSON document.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod store;
