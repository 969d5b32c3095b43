//! Scrapes the school calendar, athletics schedule and team list from a
//! Finalsite school website and serves them as JSON.

pub mod cli;
pub mod config;
mod error;
mod event;
pub mod fetch;
mod merge;
mod pipeline;
pub mod scraper;
pub mod sequence;
pub mod server;

pub use config::Sources;
pub use error::{Error, Result};
pub use event::{AthleticsCalendar, Event, EventTime, Game, Practice, Status, Teams};
pub use fetch::{Fetch, HttpFetcher};
pub use merge::merge_calendars;
pub use pipeline::Pipeline;
