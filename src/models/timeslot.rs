//! Weekly time-slot model and time-text parser.
//!
//! A `TimeSlot` is a contiguous range of class periods on one weekday.
//! The weekly grid has 7 representable days × 12 periods; capacity
//! computations only ever use the weekday portion (days 1–5).

use serde::{Deserialize, Serialize};

/// Weekday name table: token → day number (1 = Monday .. 7 = Sunday).
const WEEKDAY_TOKENS: [(&str, u8); 7] = [
    ("周一", 1),
    ("周二", 2),
    ("周三", 3),
    ("周四", 4),
    ("周五", 5),
    ("周六", 6),
    ("周日", 7),
];

/// Period-count unit marker stripped from time-text fragments.
const PERIOD_MARKER: &str = "节";

/// Valid period numbers within a day.
const MIN_PERIOD: u8 = 1;
const MAX_PERIOD: u8 = 12;

/// A contiguous block of class periods on one weekday.
///
/// `day` is 1–7 (Monday–Sunday); `start_slot`/`end_slot` are 1–12 period
/// numbers with `start_slot <= end_slot` (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Weekday (1 = Monday .. 7 = Sunday).
    pub day: u8,
    /// First period covered (1-based, inclusive).
    pub start_slot: u8,
    /// Last period covered (1-based, inclusive).
    pub end_slot: u8,
}

impl TimeSlot {
    /// Creates a time slot covering periods `start_slot..=end_slot` on `day`.
    pub fn new(day: u8, start_slot: u8, end_slot: u8) -> Self {
        Self {
            day,
            start_slot,
            end_slot,
        }
    }

    /// Creates a time slot covering a single period.
    pub fn single(day: u8, slot: u8) -> Self {
        Self::new(day, slot, slot)
    }

    /// Whether two slots share at least one period.
    ///
    /// Symmetric: `a.overlaps(&b) == b.overlaps(&a)`.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        if self.day != other.day {
            return false;
        }
        !(self.end_slot < other.start_slot || self.start_slot > other.end_slot)
    }

    /// Iterates the individual `(day, period)` cells this slot covers.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (self.start_slot..=self.end_slot).map(|s| (self.day, s))
    }

    /// Parses a weekly time text like `"周一1-2节,周三3-4节"` into slots.
    ///
    /// Each comma-separated fragment names a weekday token followed by a
    /// single period number or a `start-end` range, optionally suffixed with
    /// the period marker. Fragments that cannot be parsed (no weekday token,
    /// non-numeric periods, reversed range, periods outside 1–12) are
    /// skipped; the function never panics and an entirely unparseable input
    /// yields an empty vec. Output order follows fragment order.
    pub fn parse_time_text(time_text: &str) -> Vec<TimeSlot> {
        let mut slots = Vec::new();

        for fragment in time_text.split(',') {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            if let Some(slot) = Self::parse_fragment(fragment) {
                slots.push(slot);
            }
        }

        slots
    }

    /// Parses one fragment; `None` if it is malformed.
    fn parse_fragment(fragment: &str) -> Option<TimeSlot> {
        let (day, rest) = WEEKDAY_TOKENS.iter().find_map(|&(token, day)| {
            fragment
                .find(token)
                .map(|idx| (day, &fragment[idx + token.len()..]))
        })?;

        let periods = rest.replace(PERIOD_MARKER, "");
        let periods = periods.trim();

        if let Some((start, end)) = periods.split_once('-') {
            let start: u8 = start.trim().parse().ok()?;
            let end: u8 = end.trim().parse().ok()?;
            if start > end || !(MIN_PERIOD..=MAX_PERIOD).contains(&start)
                || !(MIN_PERIOD..=MAX_PERIOD).contains(&end)
            {
                return None;
            }
            Some(TimeSlot::new(day, start, end))
        } else {
            let slot: u8 = periods.parse().ok()?;
            if !(MIN_PERIOD..=MAX_PERIOD).contains(&slot) {
                return None;
            }
            Some(TimeSlot::single(day, slot))
        }
    }
}
