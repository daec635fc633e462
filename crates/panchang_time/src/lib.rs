//! Time base for the panchang engine: Julian Day ↔ Gregorian calendar
//! conversion, day-of-week, and ΔT (TT − UT).
//!
//! Every function here is total: there is no invalid JD or calendar date
//! for the purposes of this crate, since the engine is expected to produce
//! numbers even outside its stability window (1900-2050).

pub mod delta_t;
pub mod julian;

pub use delta_t::{delta_t_days, delta_t_seconds};
pub use julian::{J2000_JD, day_of_week, gregorian_to_jd, jd_to_gregorian};
