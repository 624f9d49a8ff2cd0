// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[doc(hidden)]
pub use tracing;

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod model;

pub mod analytics;
pub mod detail;
pub mod filter;
pub mod sort;
pub mod store;
pub mod validate;

pub mod csv;
pub mod file;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{DashError, Result};
pub use model::Profile;
