//! gastos - personal expense tracking
//!
//! This library records individual expenses (amount, category, date and a
//! free-text description), summarizes them over a date range, keeps named
//! month snapshots of the list, and exports it as CSV, JSON or a summary
//! workbook.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money)
//! - `storage`: Key-value persistence for the live list and snapshots
//! - `reports`: Range filtering and totals
//! - `export`: CSV, JSON and spreadsheet exports
//! - `services`: The ledger facade used by the interaction layer
//! - `cli` / `display`: Command handlers and terminal formatting
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use gastos::config::GastosPaths;
//! use gastos::services::Ledger;
//! use gastos::storage::FileStore;
//!
//! let paths = GastosPaths::new()?;
//! let ledger = Ledger::open(Rc::new(FileStore::from_paths(&paths)))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{GastosError, GastosResult};
