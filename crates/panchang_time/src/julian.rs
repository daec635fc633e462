//! Julian Day ↔ proleptic Gregorian calendar conversions, and day-of-week.
//!
//! Algorithms from Meeus, "Astronomical Algorithms" (2nd ed.), chapter 7.
//! `gregorian_to_jd` uses the noon-of-day convention: the returned value is
//! the JD of 0h UT on the given civil date, i.e. an integer plus 0.5.

/// J2000.0 epoch as Julian Day (2000-Jan-01 12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a proleptic Gregorian calendar date to Julian Day.
///
/// Returns the JD of 0h UT on `(year, month, day)`.
pub fn gregorian_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let jd_int = (365.25 * (y as f64 + 4716.0)).floor();
    let jd_month = (30.6001 * (m as f64 + 1.0)).floor();

    jd_int + jd_month + day as f64 + b - 1524.5
}

/// Convert a Julian Day to a proleptic Gregorian calendar date.
///
/// The input is truncated to the nearest integer day before conversion.
pub fn jd_to_gregorian(jd: f64) -> (i32, u32, u32) {
    let jd_plus = jd.round() + 0.5;
    let z = jd_plus.floor() as i64;

    let a = if z < 2_299_161 {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha / 4
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = (b - d) - (30.6001 * e as f64).floor() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    (year as i32, month as u32, day as u32)
}

/// Day of week for a given JD. 0 = Monday, 6 = Sunday.
///
/// JD 2433282.0 (1950-01-01 12:00 UT) was a Sunday; this counts whole days
/// modulo 7 from the midnight that began the following Monday.
pub fn day_of_week(jd: f64) -> u32 {
    let n = ((jd - 2_433_282.0 - 1.5).floor() as i64).rem_euclid(7);
    n as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn j2000_midday() {
        let jd = gregorian_to_jd(2000, 1, 1);
        assert!((jd - 2_451_544.5).abs() < EPS, "got {jd}");
    }

    #[test]
    fn known_epoch_1972_jan_1() {
        let jd = gregorian_to_jd(1972, 1, 1);
        assert!((jd - 2_441_317.5).abs() < EPS, "got {jd}");
    }

    #[test]
    fn roundtrip_many_dates() {
        for y in (1..10000).step_by(37) {
            for m in 1..=12u32 {
                let d = 10u32;
                let jd = gregorian_to_jd(y, m, d);
                let (y2, m2, d2) = jd_to_gregorian(jd);
                assert_eq!((y, m, d), (y2, m2, d2), "roundtrip failed for {y}-{m}-{d}");
            }
        }
    }

    #[test]
    fn day_of_week_2025_01_01_is_wednesday() {
        let jd = gregorian_to_jd(2025, 1, 1) + 0.5; // noon UT
        assert_eq!(day_of_week(jd), 2);
    }

    #[test]
    fn day_of_week_cycles_over_seven_days() {
        let jd0 = gregorian_to_jd(2024, 6, 1);
        for k in 0..14 {
            let dow = day_of_week(jd0 + k as f64);
            let expected = (day_of_week(jd0) + k as u32) % 7;
            assert_eq!(dow, expected);
        }
    }
}
