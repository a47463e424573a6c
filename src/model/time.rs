//! Weekly time model: days of the teaching week and half-open time slots.
//!
//! Times are stored as minutes since midnight so the overlap predicates used
//! inside the search loop are plain integer comparisons.

use std::fmt::{self, Display};
use std::str::FromStr;

use qtty::{Hour, Minute, Quantity};

use super::error::ModelError;
use crate::units::convert;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Teaching day. Declaration order is week order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl DayOfWeek {
    /// Number of teaching days in a week.
    pub const COUNT: usize = 5;

    /// All days in week order.
    pub const ALL: [DayOfWeek; Self::COUNT] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
    ];

    /// Zero-based position in the week.
    pub const fn ordinal(self) -> usize {
        match self {
            DayOfWeek::Mon => 0,
            DayOfWeek::Tue => 1,
            DayOfWeek::Wed => 2,
            DayOfWeek::Thu => 3,
            DayOfWeek::Fri => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "MON",
            DayOfWeek::Tue => "TUE",
            DayOfWeek::Wed => "WED",
            DayOfWeek::Thu => "THU",
            DayOfWeek::Fri => "FRI",
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownDay(s.to_string()))
    }
}

/// Parses `HH:MM` into minutes since midnight.
pub fn parse_clock(hhmm: &str) -> Result<u32, ModelError> {
    let malformed = || ModelError::MalformedTime(hhmm.to_string());
    let (h, m) = hhmm.trim().split_once(':').ok_or_else(malformed)?;
    let hours: u32 = h.parse().map_err(|_| malformed())?;
    let minutes: u32 = m.parse().map_err(|_| malformed())?;
    if hours >= 24 || minutes >= 60 {
        return Err(malformed());
    }
    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A concrete interval `[start, end)` on one day of the week.
///
/// With the `serde` feature it travels as
/// `{"day": "MON", "start": "09:00", "end": "10:00"}` and is validated
/// through [`TimeSlot::parse`] on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ClockSlot", into = "ClockSlot"))]
pub struct TimeSlot {
    day: DayOfWeek,
    start: u32,
    end: u32,
}

impl TimeSlot {
    /// Creates a slot from minutes since midnight.
    ///
    /// Callers are expected to pass `start < end`; this is only checked in
    /// debug builds. Use [`TimeSlot::parse`] for untrusted input.
    pub const fn new(day: DayOfWeek, start: u32, end: u32) -> Self {
        debug_assert!(start < end, "TimeSlot start must be < end");
        Self { day, start, end }
    }

    /// Creates a slot from `HH:MM` clock strings, validating `start < end`.
    pub fn parse(day: DayOfWeek, start: &str, end: &str) -> Result<Self, ModelError> {
        let s = parse_clock(start)?;
        let e = parse_clock(end)?;
        if s >= e {
            return Err(ModelError::EmptySlot {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self::new(day, s, e))
    }

    pub const fn day(&self) -> DayOfWeek {
        self.day
    }

    /// Start, in minutes since midnight.
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// End (exclusive), in minutes since midnight.
    pub const fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> Quantity<Minute> {
        Quantity::new(f64::from(self.end - self.start))
    }

    /// Length of the slot in hours.
    pub fn hours(&self) -> Quantity<Hour> {
        convert(self.duration())
    }

    /// True iff both slots are on the same day and their intervals intersect.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }

    /// Week order: earlier day first, then earlier start minute.
    pub fn starts_before(&self, other: &TimeSlot) -> bool {
        (self.day.ordinal(), self.start) < (other.day.ordinal(), other.start)
    }

    /// True iff one slot ends exactly where the other starts on the same day.
    pub fn is_adjacent_to(&self, other: &TimeSlot) -> bool {
        self.day == other.day && (self.start == other.end || other.start == self.end)
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            format_clock(self.start),
            format_clock(self.end)
        )
    }
}

/// Wire form of [`TimeSlot`] with `HH:MM` clock strings.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct ClockSlot {
    day: DayOfWeek,
    start: String,
    end: String,
}

#[cfg(feature = "serde")]
impl TryFrom<ClockSlot> for TimeSlot {
    type Error = ModelError;

    fn try_from(raw: ClockSlot) -> Result<Self, Self::Error> {
        TimeSlot::parse(raw.day, &raw.start, &raw.end)
    }
}

#[cfg(feature = "serde")]
impl From<TimeSlot> for ClockSlot {
    fn from(slot: TimeSlot) -> Self {
        Self {
            day: slot.day,
            start: format_clock(slot.start),
            end: format_clock(slot.end),
        }
    }
}

/// `#[serde(with = "...")]` adapter storing minutes since midnight as `HH:MM`.
#[cfg(feature = "serde")]
pub(crate) mod clock_format {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock(*minutes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let hhmm = String::deserialize(deserializer)?;
        super::parse_clock(&hhmm).map_err(D::Error::custom)
    }
}
