//! ΔT = TT − UT, in seconds.
//!
//! Civil years 1900-2050 use a tabulated yearly series (linear interpolation
//! between entries for fractional years); outside that range on either end,
//! a long-term polynomial fallback from Meeus/Espenak & Meeus (2006) applies
//! symmetrically.

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2050;

/// ΔT in seconds, one entry per civil year from 1900 to 2050 inclusive (151
/// entries). Values below 2020 are the historical series; 2020 onward are
/// the long-term extrapolation used by almanac publishers.
#[rustfmt::skip]
const TABLE: [f64; 151] = [
    -2.79, -1.46, -0.13, 1.20, 2.53, 3.86, 5.18, 6.50,
    7.82, 9.14, 10.46, 11.81, 13.16, 14.50, 15.85, 17.20,
    17.99, 18.78, 19.58, 20.37, 21.16, 21.65, 22.14, 22.64,
    23.13, 23.62, 23.70, 23.78, 23.86, 23.94, 24.02, 24.00,
    23.98, 23.97, 23.95, 23.93, 24.01, 24.09, 24.17, 24.25,
    24.33, 24.43, 24.53, 24.63, 24.73, 24.83, 25.69, 26.56,
    27.42, 28.29, 29.15, 29.53, 29.92, 30.30, 30.69, 31.07,
    31.49, 31.90, 32.32, 32.73, 33.15, 33.67, 34.18, 34.70,
    35.21, 35.73, 36.62, 37.51, 38.40, 39.29, 40.18, 41.24,
    42.30, 43.36, 44.42, 45.48, 46.49, 47.50, 48.52, 49.53,
    50.54, 51.30, 52.06, 52.82, 53.58, 54.34, 54.84, 55.35,
    55.85, 56.36, 56.86, 57.64, 58.43, 59.21, 60.00, 60.78,
    61.39, 62.00, 62.61, 63.22, 63.83, 64.00, 64.17, 64.35,
    64.52, 64.69, 64.97, 65.24, 65.52, 65.79, 66.07, 66.48,
    66.88, 67.29, 67.69, 68.10, 68.35, 68.60, 68.86, 69.11,
    69.36, 69.35, 69.34, 69.32, 69.31, 69.30, 69.42, 69.54,
    69.66, 69.78, 69.90, 70.04, 70.18, 70.32, 70.46, 70.60,
    70.76, 70.92, 71.08, 71.24, 71.40, 71.58, 71.76, 71.94,
    72.12, 72.30, 72.48, 72.66, 72.84, 73.02, 73.20,
];

fn table_at_year(year: i32) -> f64 {
    let idx = (year - FIRST_YEAR).clamp(0, (LAST_YEAR - FIRST_YEAR) as i32) as usize;
    TABLE[idx]
}

/// Meeus/Espenak & Meeus (2006) long-term polynomial, in seconds.
fn polynomial_fallback(year: i32) -> f64 {
    let u = (year as f64 - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in days at the given Julian Day (UT), via the civil year it falls in.
pub fn delta_t_days(jd_ut: f64) -> f64 {
    delta_t_seconds(jd_ut) / 86_400.0
}

/// ΔT in seconds at the given Julian Day (UT).
///
/// Interpolates linearly between the two tabulated years bracketing the
/// fractional civil year inside 1900-2050; uses the polynomial fallback
/// symmetrically outside that range on both ends.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    let (year, month, _day) = crate::julian::jd_to_gregorian(jd_ut);
    let frac_year = year as f64 + (month as f64 - 0.5) / 12.0;

    if year < FIRST_YEAR {
        return polynomial_fallback(year);
    }
    if year >= LAST_YEAR {
        return polynomial_fallback(year);
    }

    let y0 = frac_year.floor() as i32;
    let t = frac_year - y0 as f64;
    let v0 = table_at_year(y0);
    let v1 = table_at_year(y0 + 1);
    v0 + t * (v1 - v0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::gregorian_to_jd;

    #[test]
    fn continuous_at_1900_boundary() {
        let jd_inside = gregorian_to_jd(1900, 1, 1);
        let jd_outside = gregorian_to_jd(1899, 12, 31);
        let inside = delta_t_seconds(jd_inside);
        let outside = delta_t_seconds(jd_outside);
        assert!((inside - outside).abs() < 2.0, "{inside} vs {outside}");
    }

    #[test]
    fn post_2050_uses_polynomial_fallback() {
        let jd = gregorian_to_jd(2051, 6, 1);
        let dt = delta_t_seconds(jd);
        assert_eq!(dt, polynomial_fallback(2051));
    }

    #[test]
    fn pre_1900_uses_polynomial_fallback() {
        let jd = gregorian_to_jd(1899, 12, 31);
        let dt = delta_t_seconds(jd);
        assert_eq!(dt, polynomial_fallback(1899));
    }

    #[test]
    fn year_2000_matches_known_value() {
        let jd = gregorian_to_jd(2000, 1, 1);
        let dt = delta_t_seconds(jd);
        assert!((dt - 63.83).abs() < 1.0, "got {dt}");
    }

    #[test]
    fn is_total_on_extreme_years() {
        let jd = gregorian_to_jd(1, 1, 1);
        assert!(delta_t_seconds(jd).is_finite());
        let jd = gregorian_to_jd(9999, 12, 31);
        assert!(delta_t_seconds(jd).is_finite());
    }
}
