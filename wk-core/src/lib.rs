pub mod clock;
pub mod config;
pub mod days;
pub mod entry;
pub mod error;
pub mod ids;
pub mod order;
pub mod planner;
pub mod render;
pub mod resolve;
pub mod store;
pub mod tags;
pub mod time_range;
pub mod week;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{Result, WkError};
pub use planner::{DayView, Planner, WeekView};
pub use store::{EntryStore, MemoryStore, SqliteStore};
pub use week::{WeekKey, WeekSelector};
