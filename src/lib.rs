//! Fetch a short "on this day" factoid for a calendar date.
//! Historical events come from Wikipedia's on-this-day feed, with numeric
//! date trivia from the Numbers API as a fallback when that lookup breaks.

pub mod client;
pub mod error;
pub mod models;

pub use client::Client;
pub use error::FactoidError;
pub use models::{Event, MonthDay, parse_events};
