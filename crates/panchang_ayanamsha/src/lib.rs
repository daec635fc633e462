//! Lahiri ayanamsha: the angular offset between the tropical zero point
//! (the vernal equinox) and the sidereal zero point used by the panchang
//! engine.
//!
//! Computed by precessing the reference-epoch equinox direction forward to
//! J2000 and back to the Lahiri reference epoch, reading off its ecliptic
//! longitude there, and adding the nutation in longitude at the target
//! date.

use panchang_frames::{mean_obliquity_of_date_rad, nutation_in_longitude_deg, precess_equatorial};
use panchang_time::delta_t_days;

const J2000: f64 = 2_451_545.0;
const LAHIRI_T0: f64 = 2_435_553.5;
const LAHIRI_AYAN_T0: f64 = 23.245_524_743;

fn equatorial_to_ecliptic(v: [f64; 3], eps: f64) -> [f64; 3] {
    let (s, c) = eps.sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}

/// Lahiri ayanamsha at the given UT Julian Day, in degrees, `[0, 360)`.
pub fn ayanamsa(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut + delta_t_days(jd_ut);
    let t = (jd_tt - J2000) / 36_525.0;
    let t0 = (LAHIRI_T0 - J2000) / 36_525.0;

    let x = [1.0f64, 0.0, 0.0];
    let at_j2000 = precess_equatorial(x, t, true);
    let at_t0 = precess_equatorial(at_j2000, t0, false);

    let eps_t0 = mean_obliquity_of_date_rad(t0);
    let ecl = equatorial_to_ecliptic(at_t0, eps_t0);
    let lon_deg = ecl[1].atan2(ecl[0]).to_degrees();

    let mut ayan = LAHIRI_AYAN_T0 - lon_deg + nutation_in_longitude_deg(t);

    ayan %= 360.0;
    if ayan < 0.0 {
        ayan += 360.0;
    }
    ayan
}
