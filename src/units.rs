//! Minute/hour bridging for timetable arithmetic.
//!
//! A [`TimeSlot`](crate::model::TimeSlot) is stored in minutes since midnight,
//! but the daily theory cap, room bookings and session durations are all
//! counted in hours. [`convert`] is the single crossing point:
//! `TimeSlot::hours` and `Schedule::room_hours` go through it, so a caller
//! cannot add a minute count to an hour count by accident.
//!
//! ```
//! use beeplan::model::{DayOfWeek, TimeSlot};
//! use beeplan::convert;
//! use qtty::{Hour, Quantity};
//!
//! // 15:10-16:10 is the first teaching hour after the Friday exam block.
//! let slot = TimeSlot::parse(DayOfWeek::Fri, "15:10", "16:10").unwrap();
//! let hours: Quantity<Hour> = convert(slot.duration());
//! assert!((hours.value() - 1.0).abs() < 1e-12);
//! ```

use qtty::{Quantity, Unit};

/// Holds when `Self` and `To` measure the same dimension (here: time).
///
/// Blanket-implemented, so `Minute: SameDim<Hour>` is available without
/// further impls while a minute-to-metre conversion fails to type-check.
pub trait SameDim<To: Unit>: Unit<Dim = To::Dim> {}

impl<From, To> SameDim<To> for From
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
}

/// Re-expresses a duration or load in another time unit.
#[inline]
pub const fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: SameDim<To>,
    To: Unit,
{
    q.to_const::<To>()
}
