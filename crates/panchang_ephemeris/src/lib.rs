//! Tropical solar and lunar longitude pipelines.
//!
//! Solar: VSOP87D-derived Earth-Moon-Barycenter series, IAU-1976 precession,
//! IAU-1980 nutation, stellar aberration. Lunar: DE404 Moshier theory.
//! Neither pipeline applies the ayanamsha — that is `panchang_ayanamsha`'s
//! job, kept separate so callers needing tropical-only quantities (equation
//! of time, obliquity-bound checks) don't pull in the precessed reference
//! frame.

pub mod lunar;
pub mod solar;

pub use lunar::lunar_longitude;
pub use solar::{apparent_solar_longitude_deg, solar_declination_deg, solar_ra_deg};
