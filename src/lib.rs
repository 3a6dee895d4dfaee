pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logger;
pub mod parser;
pub mod roster;
pub mod schedule;

pub use config::{IntervalMessages, SchedulerConfig};
pub use error::{Error, Result};
