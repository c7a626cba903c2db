//! Daily topic rotation for image searches
//!
//! The feed shows a different astrophotography subject each day, cycling
//! through a fixed list. The mapping from date to topic is pure, so every
//! device showing the feed on the same calendar day searches for the same
//! subject.

use chrono::{Datelike, Local, NaiveDate};

/// Fixed rotation of search topics, one per day
pub const TOPICS: [&str; 6] = [
    "nebula",
    "galaxy",
    "supernova",
    "star cluster",
    "aurora",
    "milky way",
];

/// Returns the topic for the given calendar date
///
/// Uses the 1-indexed day of the year modulo the topic count, so the
/// rotation period equals the length of [`TOPICS`]. Deterministic: the same
/// date always maps to the same topic.
pub fn topic_for(date: NaiveDate) -> &'static str {
    let day_of_year = date.ordinal() as usize;
    TOPICS[day_of_year % TOPICS.len()]
}

/// Returns the topic for today's local date
pub fn today_topic() -> &'static str {
    topic_for(Local::now().date_naive())
}
