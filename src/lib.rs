//! Habit Flow: a habit-tracking dashboard for the terminal.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod logging;
pub mod modules;
pub mod ui;

pub use error::{Error, Result};
