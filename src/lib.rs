//! uNivUSaver - command-line personal finance tracker
//!
//! This library provides the core functionality for uNivUSaver. It keeps an
//! in-memory list of income and expense transactions and a list of
//! categories, and exposes them through a line-oriented command loop.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: User settings
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money)
//! - `storage`: In-memory positional lists
//! - `services`: Business logic layer (filtering, search, totals)
//! - `display`: Formatting of listings and summaries
//! - `parser`: Keyword and `key/ value` argument parsing
//! - `commands`: The commands and their registry
//! - `session`: State shared by commands during a run
//! - `app`: The read-eval-print loop
//!
//! # Example
//!
//! ```rust,ignore
//! use univusaver::{app::App, config::Settings};
//!
//! let settings = Settings::load(None)?;
//! App::new(settings).run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

pub mod app;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{SaverError, SaverResult};
