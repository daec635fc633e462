//! Tropical solar (apparent geocentric) longitude.
//!
//! Pipeline: VSOP87D-derived Earth-Moon-Barycenter heliocentric longitude
//! series (truncated to the dominant periodic terms, the same amplitude
//! truncation discipline as the nutation series in `panchang_frames`) →
//! IAU-1976 general precession → EMB-to-Earth correction (short Moon
//! series) → geocentric flip → IAU-1980 nutation → aberration.

use panchang_frames::{general_precession_longitude_deg, mean_obliquity_of_date_rad, nutation_in_longitude_deg, nutation_in_obliquity_deg};
use panchang_time::delta_t_days;
use std::f64::consts::PI;

const J2000: f64 = 2_451_545.0;
const D2R: f64 = PI / 180.0;

struct VsopTerm {
    a: f64,
    b: f64,
    c: f64,
}

// VSOP87D Earth-Moon-Barycenter L0 series, truncated to terms with
// amplitude >= 1e-8 * 25 (Bretagnon & Francou 1988). Units: A in 1e-8 rad,
// B in rad, C in rad per Julian millennium.
#[rustfmt::skip]
const L0: &[VsopTerm] = &[
    VsopTerm { a: 175_347_046.0, b: 0.0,       c: 0.0 },
    VsopTerm { a: 3_341_656.0,   b: 4.669_256_8, c: 6283.075_85 },
    VsopTerm { a: 34_894.0,      b: 4.626_1,    c: 12_566.151_7 },
    VsopTerm { a: 3_497.0,       b: 2.744_1,    c: 5_753.384_9 },
    VsopTerm { a: 3_418.0,       b: 2.828_9,    c: 3.523_1 },
    VsopTerm { a: 3_136.0,       b: 3.627_7,    c: 77_713.771_5 },
    VsopTerm { a: 2_676.0,       b: 4.418_1,    c: 7_860.419_4 },
    VsopTerm { a: 2_343.0,       b: 6.135_2,    c: 3_930.209_7 },
    VsopTerm { a: 1_324.0,       b: 0.742_5,    c: 11_506.769_8 },
    VsopTerm { a: 1_273.0,       b: 2.037_1,    c: 529.691_0 },
    VsopTerm { a: 1_199.0,       b: 1.109_6,    c: 1_577.343_5 },
    VsopTerm { a: 990.0,         b: 5.233,      c: 5_884.927 },
    VsopTerm { a: 902.0,         b: 2.045,      c: 26.298 },
    VsopTerm { a: 857.0,         b: 3.508,      c: 398.149 },
    VsopTerm { a: 780.0,         b: 1.179,      c: 5_223.694 },
    VsopTerm { a: 753.0,         b: 2.533,      c: 5_507.553 },
    VsopTerm { a: 505.0,         b: 4.583,      c: 18_849.228 },
    VsopTerm { a: 492.0,         b: 4.205,      c: 775.523 },
    VsopTerm { a: 357.0,         b: 2.920,      c: 0.067 },
    VsopTerm { a: 317.0,         b: 5.849,      c: 11_790.629 },
    VsopTerm { a: 284.0,         b: 1.899,      c: 796.298 },
    VsopTerm { a: 271.0,         b: 0.315,      c: 10_977.079 },
    VsopTerm { a: 243.0,         b: 0.345,      c: 5_486.778 },
    VsopTerm { a: 206.0,         b: 4.806,      c: 2_544.314 },
    VsopTerm { a: 205.0,         b: 1.869,      c: 5_573.143 },
    VsopTerm { a: 202.0,         b: 2.458,      c: 6_069.777 },
    VsopTerm { a: 156.0,         b: 0.833,      c: 213.299 },
    VsopTerm { a: 132.0,         b: 3.411,      c: 2_942.463 },
    VsopTerm { a: 126.0,         b: 1.083,      c: 20.775 },
    VsopTerm { a: 115.0,         b: 0.645,      c: 0.980 },
    VsopTerm { a: 103.0,         b: 0.636,      c: 4_694.003 },
    VsopTerm { a: 102.0,         b: 0.976,      c: 15_720.839 },
    VsopTerm { a: 102.0,         b: 4.267,      c: 7.114 },
    VsopTerm { a: 99.0,          b: 6.21,       c: 2_146.17 },
    VsopTerm { a: 98.0,          b: 0.68,       c: 155.42 },
    VsopTerm { a: 86.0,          b: 5.98,       c: 161_000.69 },
    VsopTerm { a: 85.0,          b: 1.30,       c: 6_275.96 },
    VsopTerm { a: 85.0,          b: 3.67,       c: 71_430.70 },
    VsopTerm { a: 80.0,          b: 1.81,       c: 17_260.15 },
    VsopTerm { a: 79.0,          b: 3.04,       c: 12_036.46 },
    VsopTerm { a: 75.0,          b: 1.76,       c: 5_088.63 },
];

#[rustfmt::skip]
const L1: &[VsopTerm] = &[
    VsopTerm { a: 628_331_966_747.0, b: 0.0,      c: 0.0 },
    VsopTerm { a: 206_059.0,         b: 2.678_235, c: 6_283.075_85 },
    VsopTerm { a: 4_303.0,           b: 2.635_1,   c: 12_566.151_7 },
    VsopTerm { a: 425.0,             b: 1.590,     c: 3.523 },
    VsopTerm { a: 119.0,             b: 5.796,     c: 26.298 },
    VsopTerm { a: 109.0,             b: 2.966,     c: 1_577.344 },
    VsopTerm { a: 93.0,              b: 2.59,      c: 18_849.23 },
    VsopTerm { a: 72.0,              b: 1.14,      c: 529.69 },
    VsopTerm { a: 68.0,              b: 1.87,      c: 398.15 },
    VsopTerm { a: 67.0,              b: 4.41,      c: 5_507.55 },
];

#[rustfmt::skip]
const L2: &[VsopTerm] = &[
    VsopTerm { a: 52_919.0, b: 0.0,    c: 0.0 },
    VsopTerm { a: 8_720.0,  b: 1.072_1, c: 6_283.075_8 },
    VsopTerm { a: 309.0,    b: 0.867,  c: 12_566.15 },
    VsopTerm { a: 27.0,     b: 0.05,   c: 3.52 },
    VsopTerm { a: 16.0,     b: 5.19,   c: 26.30 },
    VsopTerm { a: 16.0,     b: 3.68,   c: 155.42 },
];

#[rustfmt::skip]
const L3: &[VsopTerm] = &[
    VsopTerm { a: 289.0, b: 5.844, c: 6_283.076 },
    VsopTerm { a: 35.0,  b: 0.0,   c: 0.0 },
    VsopTerm { a: 17.0,  b: 5.49,  c: 12_566.15 },
];

#[rustfmt::skip]
const L4: &[VsopTerm] = &[
    VsopTerm { a: 114.0, b: 3.142, c: 0.0 },
    VsopTerm { a: 8.0,   b: 4.13,  c: 6_283.08 },
];

#[rustfmt::skip]
const L5: &[VsopTerm] = &[
    VsopTerm { a: 1.0, b: 3.14, c: 0.0 },
];

fn sum_series(terms: &[VsopTerm], tau: f64) -> f64 {
    terms.iter().map(|t| t.a * (t.b + t.c * tau).cos()).sum()
}

/// VSOP87D Earth-Moon-Barycenter heliocentric ecliptic longitude, J2000
/// frame, in degrees. `tau` is Julian millennia of TT since J2000.0.
fn emb_heliocentric_longitude_deg(tau: f64) -> f64 {
    let l0 = sum_series(L0, tau);
    let l1 = sum_series(L1, tau);
    let l2 = sum_series(L2, tau);
    let l3 = sum_series(L3, tau);
    let l4 = sum_series(L4, tau);
    let l5 = sum_series(L5, tau);

    let lon_rad_1e8 = l0 + l1 * tau + l2 * tau * tau + l3 * tau.powi(3) + l4 * tau.powi(4) + l5 * tau.powi(5);
    let lon_rad = lon_rad_1e8 * 1e-8;
    (lon_rad.to_degrees()).rem_euclid(360.0)
}

/// EMB→Earth correction: a short lunar-perturbation series applied to
/// convert the barycenter's longitude to the Earth's own heliocentric
/// longitude, in degrees. `d`, `m`, `mp`, `f` are the Moon's mean
/// elongation, solar mean anomaly, lunar mean anomaly, and argument of
/// latitude, all in degrees.
fn emb_to_earth_correction_deg(d: f64, m: f64, mp: f64, f: f64) -> f64 {
    let d = d * D2R;
    let m = m * D2R;
    let mp = mp * D2R;
    let f = f * D2R;

    let delta_l_arcsec = 6_892.0 * mp.sin()
        + 72.0 * (2.0 * mp).sin()
        - 17.0 * (2.0 * f).sin()
        + 7.0 * (mp - d).sin()
        - 2.0 * (2.0 * (f + mp)).sin()
        + 2.0 * (2.0 * f - mp).sin()
        - 2.0 * (m + mp - d).sin()
        + 1.0 * (2.0 * d - mp).sin()
        - 1.0 * (m - mp).sin()
        - 1.0 * (m + mp).sin();

    delta_l_arcsec / 3600.0
}

/// Moon mean-elements as functions of `t` (Julian centuries of TT since
/// J2000), in degrees, used only by [`emb_to_earth_correction_deg`].
fn moon_mean_elements_deg(t: f64) -> (f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let d = 297.850_20 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0 - t4 / 545_868_000_000.0;
    let m = 357.529_11 + 35_999.050_290 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_34 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 69_699.0 - t4 / 14_712_000_000.0;
    let f = 93.272_11 + 483_202.017_538 * t - 0.003_682_6 * t2 - t3 / 3_526_000.0 + t4 / 863_310_000_000.0;

    (d, m, mp, f)
}

const ABERRATION_ARCSEC: f64 = 20.496;

/// Apparent tropical geocentric solar longitude, in degrees, `[0, 360)`.
pub fn apparent_solar_longitude_deg(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut + delta_t_days(jd_ut);
    let t = (jd_tt - J2000) / 36_525.0;
    let tau = t / 10.0;

    let emb_lon = emb_heliocentric_longitude_deg(tau);
    let p_a = general_precession_longitude_deg(t);

    let (d, m, mp, f) = moon_mean_elements_deg(t);
    let correction = emb_to_earth_correction_deg(d, m, mp, f);

    let earth_helio_lon = emb_lon + correction + p_a;
    let mut geo_lon = earth_helio_lon + 180.0;

    geo_lon += nutation_in_longitude_deg(t);
    geo_lon -= ABERRATION_ARCSEC / 3600.0;

    geo_lon.rem_euclid(360.0)
}

/// True obliquity of the ecliptic (mean + nutation), in radians.
fn true_obliquity_rad(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut + delta_t_days(jd_ut);
    let t = (jd_tt - J2000) / 36_525.0;
    mean_obliquity_of_date_rad(t) + nutation_in_obliquity_deg(t) * D2R
}

/// Geocentric solar declination, in degrees.
pub fn solar_declination_deg(jd_ut: f64) -> f64 {
    let lambda = apparent_solar_longitude_deg(jd_ut) * D2R;
    let eps = true_obliquity_rad(jd_ut);
    (eps.sin() * lambda.sin()).asin().to_degrees()
}

/// Geocentric solar right ascension, in degrees, `[0, 360)`.
pub fn solar_ra_deg(jd_ut: f64) -> f64 {
    let lambda = apparent_solar_longitude_deg(jd_ut) * D2R;
    let eps = true_obliquity_rad(jd_ut);
    (eps.cos() * lambda.sin()).atan2(lambda.cos()).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_is_in_range() {
        for year in [1950, 2000, 2025, 2075] {
            let jd = panchang_time::gregorian_to_jd(year, 6, 21);
            let lon = apparent_solar_longitude_deg(jd);
            assert!((0.0..360.0).contains(&lon), "year {year}: {lon}");
        }
    }

    #[test]
    fn near_vernal_equinox_longitude_is_near_zero() {
        // 2000-03-20 was close to the March equinox.
        let jd = panchang_time::gregorian_to_jd(2000, 3, 20);
        let lon = apparent_solar_longitude_deg(jd);
        let dist_from_zero = lon.min(360.0 - lon);
        assert!(dist_from_zero < 2.0, "lon = {lon}");
    }

    #[test]
    fn near_summer_solstice_longitude_is_near_90() {
        let jd = panchang_time::gregorian_to_jd(2000, 6, 21);
        let lon = apparent_solar_longitude_deg(jd);
        assert!((lon - 90.0).abs() < 2.0, "lon = {lon}");
    }

    #[test]
    fn declination_oscillates_within_obliquity_bounds() {
        for year in [1990, 2010, 2030] {
            for (m, d) in [(3, 20), (6, 21), (9, 22), (12, 21)] {
                let jd = panchang_time::gregorian_to_jd(year, m, d);
                let decl = solar_declination_deg(jd);
                assert!(decl.abs() <= 23.6, "year {year} {m}-{d}: decl = {decl}");
            }
        }
    }

    #[test]
    fn ra_is_in_range() {
        let jd = panchang_time::gregorian_to_jd(2025, 1, 1);
        let ra = solar_ra_deg(jd);
        assert!((0.0..360.0).contains(&ra));
    }

    #[test]
    fn longitude_advances_monotonically_over_a_day() {
        let jd = panchang_time::gregorian_to_jd(2025, 4, 1);
        let lon0 = apparent_solar_longitude_deg(jd);
        let lon1 = apparent_solar_longitude_deg(jd + 1.0);
        let advance = (lon1 - lon0 + 360.0) % 360.0;
        assert!((0.5..1.2).contains(&advance), "advance = {advance}");
    }
}
