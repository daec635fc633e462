//! The panchang facade: day/month aggregation over the tithi and masa
//! engines, plus the four regional solar calendars, behind one crate.
//!
//! This is the only crate the CLI depends on for computation; it re-exports
//! everything a caller needs rather than making callers reach into
//! `panchang_calendar`/`panchang_solar`/`panchang_riseset` directly.

pub mod error;

pub use error::PanchangError;
pub use panchang_calendar::{
    ALL_MASAS, ALL_TITHIS, Masa, MasaInfo, Paksha, Tithi, TithiInfo, hindu_year_vikram,
};
pub use panchang_riseset::Location;
pub use panchang_solar::{Region, SolarDate, solar_era_name, solar_month_name};
pub use panchang_time::day_of_week;

/// Saka year for a civil date, as [`panchang_calendar::hindu_year_saka`] but
/// with bisection non-convergence surfaced as [`PanchangError`].
pub fn hindu_year_saka(year: i32, jd_at_moment: f64) -> Result<i32, PanchangError> {
    Ok(panchang_calendar::hindu_year_saka(year, jd_at_moment)?)
}

/// Regional solar date for a civil date, as [`panchang_solar::gregorian_to_solar`]
/// but with bisection non-convergence surfaced as [`PanchangError`].
pub fn gregorian_to_solar(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
    region: Region,
) -> Result<SolarDate, PanchangError> {
    Ok(panchang_solar::gregorian_to_solar(year, month, day, location, region)?)
}

/// Civil date for a regional solar date, as [`panchang_solar::solar_to_gregorian`]
/// but with bisection non-convergence and round-trip mismatch surfaced as
/// [`PanchangError`].
pub fn solar_to_gregorian(
    solar: SolarDate,
    location: &Location,
    region: Region,
) -> Result<(i32, u32, u32), PanchangError> {
    Ok(panchang_solar::solar_to_gregorian(solar, location, region)?)
}

/// A single Gregorian civil day's panchang: sunrise, tithi, and masa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangDay {
    pub gregorian: (i32, u32, u32),
    pub weekday: u32,
    pub sunrise_jd: f64,
    pub tithi: TithiInfo,
    pub masa: MasaInfo,
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian `(year, month)`, `month` 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn validate_date(year: i32, month: u32, day: u32) -> Result<(), PanchangError> {
    if !(1..=12).contains(&month) {
        return Err(PanchangError::ArgumentError(format!(
            "month {month} out of range 1..=12"
        )));
    }
    let last = days_in_month(year, month);
    if day < 1 || day > last {
        return Err(PanchangError::ArgumentError(format!(
            "day {day} out of range 1..={last} for {year}-{month:02}"
        )));
    }
    Ok(())
}

/// The tithi, masa, and sunrise for one Gregorian civil day at `location`.
///
/// Returns `AstronomicalFailure` if the sun never rises at `location` on
/// this date (polar day/night) — the panchang is conventionally reckoned
/// from sunrise, so the facade surfaces the failure rather than silently
/// substituting civil midnight.
pub fn day_panchang(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
) -> Result<PanchangDay, PanchangError> {
    validate_date(year, month, day)?;

    let jd_civil = panchang_time::gregorian_to_jd(year, month, day);
    let sunrise_jd = location.sunrise_jd(jd_civil);
    if sunrise_jd <= 0.0 {
        return Err(PanchangError::AstronomicalFailure(format!(
            "sunrise not computable at lat={} lon={} on {year}-{month:02}-{day:02} (polar day/night)",
            location.latitude_deg, location.longitude_deg
        )));
    }

    let weekday = day_of_week(jd_civil);
    let tithi = panchang_calendar::tithi_at_sunrise(year, month, day, location)?;
    let masa = panchang_calendar::masa_for_date(year, month, day, location)?;

    Ok(PanchangDay {
        gregorian: (year, month, day),
        weekday,
        sunrise_jd,
        tithi,
        masa,
    })
}

/// Every day's panchang for a Gregorian `(year, month)` at `location`.
///
/// Stops at the first day that fails: if sunrise fails for one day of the
/// month at a fixed location it fails for all of them, so this never
/// returns a partial month silently.
pub fn month_panchang(
    year: i32,
    month: u32,
    location: &Location,
) -> Result<Vec<PanchangDay>, PanchangError> {
    if !(1..=12).contains(&month) {
        return Err(PanchangError::ArgumentError(format!(
            "month {month} out of range 1..=12"
        )));
    }
    let last = days_in_month(year, month);
    (1..=last)
        .map(|day| day_panchang(year, month, day, location))
        .collect()
}
