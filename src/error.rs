//! Error types shared across the crate

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("day {day} is outside {year}-{month:02}")]
    DayOutOfRange { year: i32, month: u32, day: u32 },

    #[error("cannot load sample data from {path}: {message}")]
    Data { path: PathBuf, message: String },
}
