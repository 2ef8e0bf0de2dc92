//! Dioptre - manual record insertion for an optical shop's SQLite store.
//!
//! This crate backs a small operator tool that writes optometric
//! prescription ("receita") and user-account records straight into the
//! database owned by the shop-management application. It is deliberately
//! plain: one synchronous connection per flow, one parameterized insert
//! per record, commit or rollback, and the SQLite-assigned row id back to
//! the caller.
//!
//! # Modules
//!
//! - [`domain`] - Prescription and user record types
//! - [`db`] - Connection handling, schema mapping, and the inserters
//! - [`auth`] - Argon2id password hashing for stored credentials
//! - [`coerce`] - Best-effort numeric coercion for prompt answers
//! - [`fixtures`] - The built-in example records behind `--exemplo`
//! - [`cli`] - Interactive menu, batch mode, and output formatting
//! - [`error`] - Error types for the crate
//! - [`logging`] - Tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dioptre::db::{self, insert};
//! use dioptre::domain::Prescription;
//!
//! fn main() -> dioptre::error::Result<()> {
//!     let mut conn = db::open(Path::new("app.db"))?;
//!
//!     let record = Prescription::new("João Silva", "Dr. Maria Santos", "2025-01-15");
//!     let id = insert::insert_prescription(&mut conn, &record)?;
//!     println!("inserted receita {id}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod cli;
pub mod coerce;
pub mod db;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod logging;
