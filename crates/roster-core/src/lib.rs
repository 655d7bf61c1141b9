//! Core types and trait definitions for the Roster employee directory.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::RecordStore`]; transport layers drive
//! the six operations on [`directory::Directory`].

pub mod department;
pub mod directory;
pub mod employee;
pub mod error;
pub mod record;
pub mod resolve;
pub mod sample;
pub mod store;
pub mod validate;

pub use directory::Directory;
pub use error::{Error, Result};
pub use record::{Record, RecordId};
