//! Obliquity of the ecliptic: the J2000.0 constant and Laskar's (1986)
//! polynomial for the mean obliquity of date.

use std::f64::consts::PI;

/// Mean obliquity of the ecliptic at J2000.0 (IAU 1976), in radians.
///
/// 23 deg 26' 21.448" = 84381.448" = 23.4392911111... deg
pub const OBLIQUITY_J2000_RAD: f64 = 23.439_291_111_1 * PI / 180.0;

/// Mean obliquity of the ecliptic at J2000.0, in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111_1;

/// Cosine of J2000 obliquity (precomputed for rotation matrices).
pub const COS_OBL: f64 = 0.917_482_062_069_258_9;

/// Sine of J2000 obliquity (precomputed for rotation matrices).
pub const SIN_OBL: f64 = 0.397_777_155_931_735_8;

/// Mean obliquity of the ecliptic of date, Laskar (1986), in arcseconds.
///
/// `t` is Julian centuries of TT since J2000.0. Valid over several
/// millennia around J2000; beyond a few thousand years the series
/// diverges and this should not be trusted.
pub fn mean_obliquity_of_date_arcsec(t: f64) -> f64 {
    let u = t / 100.0;
    let u2 = u * u;
    let u3 = u2 * u;
    let u4 = u3 * u;
    let u5 = u4 * u;
    let u6 = u5 * u;
    let u7 = u6 * u;
    let u8 = u7 * u;
    let u9 = u8 * u;
    let u10 = u9 * u;

    84_381.448 - 4680.93 * u - 1.55 * u2 + 1999.25 * u3 - 51.38 * u4 - 249.67 * u5
        - 39.05 * u6
        + 7.12 * u7
        + 27.87 * u8
        + 5.79 * u9
        + 2.45 * u10
}

/// Mean obliquity of the ecliptic of date, Laskar (1986), in radians.
pub fn mean_obliquity_of_date_rad(t: f64) -> f64 {
    mean_obliquity_of_date_arcsec(t) * PI / (180.0 * 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precomputed_trig_matches() {
        let cos_check = OBLIQUITY_J2000_RAD.cos();
        let sin_check = OBLIQUITY_J2000_RAD.sin();
        assert!((COS_OBL - cos_check).abs() < 1e-15);
        assert!((SIN_OBL - sin_check).abs() < 1e-15);
    }

    #[test]
    fn matches_j2000_constant_at_t0() {
        let obl = mean_obliquity_of_date_arcsec(0.0);
        assert!((obl - 84_381.448).abs() < 1e-9, "got {obl}");
    }

    #[test]
    fn decreases_slowly_per_century() {
        let obl0 = mean_obliquity_of_date_arcsec(0.0);
        let obl1 = mean_obliquity_of_date_arcsec(1.0);
        assert!(obl1 < obl0);
        assert!((obl0 - obl1 - 4680.93).abs() < 5.0);
    }
}
