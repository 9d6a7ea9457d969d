//! Core types and trait definitions for the Rookies roster.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store backend and the web layer both depend on it.

pub mod error;
pub mod filter;
pub mod person;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use filter::Filter;
pub use person::{Gender, NewPerson, Person};
pub use service::PersonService;
pub use store::PersonStore;

#[cfg(test)]
mod testing;
