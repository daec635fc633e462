//! Sunrise and sunset, Meeus Ch. 15 iterative method: Sinclair refraction at
//! the horizon, GAST-based sidereal time at 0h UT, hour-angle iteration
//! with altitude correction, a circumpolar sentinel, and midnight-wraparound
//! guards.

use panchang_ephemeris::{solar_declination_deg, solar_ra_deg};
use panchang_frames::{mean_obliquity_of_date_rad, nutation_in_longitude_deg};
use panchang_time::{delta_t_days, gregorian_to_jd, jd_to_gregorian};
use std::f64::consts::PI;

const DEG2RAD: f64 = PI / 180.0;
const RAD2DEG: f64 = 180.0 / PI;
const J2000: f64 = 2_451_545.0;

fn normalize_deg(d: f64) -> f64 {
    let d = d % 360.0;
    if d < 0.0 { d + 360.0 } else { d }
}

/// Sinclair refraction at the horizon, in degrees, given pressure (mb) and
/// temperature (Celsius).
fn sinclair_refraction_horizon(atpress: f64, attemp: f64) -> f64 {
    let r = 34.46;
    ((atpress - 80.0) / 930.0 / (1.0 + 0.000_08 * (r + 39.0) * (attemp - 10.0)) * r) / 60.0
}

/// Mean sidereal time at Greenwich at 0h UT, in degrees.
fn sidereal_time_0h(jd_0h: f64) -> f64 {
    let t = (jd_0h - J2000) / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let theta = 100.460_618_37 + 36_000.770_053_608 * t + 0.000_387_933 * t2 - t3 / 38_710_000.0;
    normalize_deg(theta)
}

fn rise_set_for_date(jd_0h: f64, lon: f64, lat: f64, h0: f64, is_rise: bool) -> f64 {
    let phi = lat * DEG2RAD;

    let mut theta0 = sidereal_time_0h(jd_0h);
    let jd_noon = jd_0h + 0.5;
    let jd_tt_noon = jd_noon + delta_t_days(jd_noon);
    let t_noon = (jd_tt_noon - J2000) / 36_525.0;
    let dpsi = nutation_in_longitude_deg(t_noon);
    let eps = mean_obliquity_of_date_rad(t_noon);
    theta0 += dpsi * eps.cos();

    let ra = solar_ra_deg(jd_noon);
    let decl = solar_declination_deg(jd_noon);

    let cos_h0 = ((h0 * DEG2RAD).sin() - phi.sin() * (decl * DEG2RAD).sin())
        / (phi.cos() * (decl * DEG2RAD).cos());

    if !(-1.0..=1.0).contains(&cos_h0) {
        return 0.0;
    }

    let h0_deg = cos_h0.acos() * RAD2DEG;

    let mut m0 = (ra - lon - theta0) / 360.0;
    m0 -= m0.floor();

    let mut m = if is_rise {
        m0 - h0_deg / 360.0
    } else {
        m0 + h0_deg / 360.0
    };
    m -= m.floor();

    for _ in 0..10 {
        let jd_trial = jd_0h + m;
        let ra_i = solar_ra_deg(jd_trial);
        let decl_i = solar_declination_deg(jd_trial);

        let theta = theta0 + 360.985_647 * m;
        let mut h = normalize_deg(theta + lon - ra_i);
        if h > 180.0 {
            h -= 360.0;
        }

        let sin_h = phi.sin() * (decl_i * DEG2RAD).sin()
            + phi.cos() * (decl_i * DEG2RAD).cos() * (h * DEG2RAD).cos();
        let alt = sin_h.asin() * RAD2DEG;

        let denom = 360.0 * (decl_i * DEG2RAD).cos() * phi.cos() * (h * DEG2RAD).sin();
        if denom.abs() < 1e-12 {
            break;
        }
        let dm = (alt - h0) / denom;
        m += dm;

        if dm.abs() < 1e-7 {
            break;
        }
    }

    if is_rise && m > 0.75 {
        m -= 1.0;
    }
    if !is_rise && m < 0.25 {
        m += 1.0;
    }

    jd_0h + m
}

fn rise_set(jd_ut: f64, lon: f64, lat: f64, alt: f64, is_rise: bool) -> f64 {
    let mut atpress = 1013.25f64;
    if alt > 0.0 {
        atpress = 1013.25 * (1.0 - 0.0065 * alt / 288.0).powf(5.255);
    }
    let mut h0 = -sinclair_refraction_horizon(atpress, 0.0);
    if alt > 0.0 {
        h0 -= 0.0353 * alt.sqrt();
    }

    let (yr, mo, dy) = jd_to_gregorian(jd_ut);
    let jd_0h = gregorian_to_jd(yr, mo, dy);

    let result = rise_set_for_date(jd_0h, lon, lat, h0, is_rise);
    if result > 0.0 && result >= jd_ut - 0.0001 {
        return result;
    }

    rise_set_for_date(jd_0h + 1.0, lon, lat, h0, is_rise)
}

/// Julian Day (UT) of sunrise on the day containing `jd_ut`, at the given
/// longitude/latitude (degrees, east/north positive) and altitude (metres).
/// Returns `0.0` if the sun is circumpolar at this location on this date.
pub fn sunrise(jd_ut: f64, lon: f64, lat: f64, alt: f64) -> f64 {
    rise_set(jd_ut, lon, lat, alt, true)
}

/// Julian Day (UT) of sunset on the day containing `jd_ut`. See [`sunrise`].
pub fn sunset(jd_ut: f64, lon: f64, lat: f64, alt: f64) -> f64 {
    rise_set(jd_ut, lon, lat, alt, false)
}

/// An observer's position and local-time offset.
///
/// Local-time conversions use `utc_offset_hours` as a pure constant; there
/// is no DST handling anywhere in this engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    pub utc_offset_hours: f64,
}

impl Location {
    /// New Delhi, the engine's compiled-in default.
    pub const NEW_DELHI: Location = Location {
        latitude_deg: 28.6139,
        longitude_deg: 77.2090,
        altitude_m: 0.0,
        utc_offset_hours: 5.5,
    };

    /// Sunrise JD (UT) on the day containing `jd_ut` at this location.
    pub fn sunrise_jd(&self, jd_ut: f64) -> f64 {
        sunrise(jd_ut, self.longitude_deg, self.latitude_deg, self.altitude_m)
    }

    /// Sunset JD (UT) on the day containing `jd_ut` at this location.
    pub fn sunset_jd(&self, jd_ut: f64) -> f64 {
        sunset(jd_ut, self.longitude_deg, self.latitude_deg, self.altitude_m)
    }

    /// Apparent local noon (midpoint of sunrise/sunset) JD (UT) for the day
    /// containing `jd_ut`. Used by the Malayalam solar-calendar critical
    /// time rule.
    pub fn apparent_noon_jd(&self, jd_ut: f64) -> f64 {
        let rise = self.sunrise_jd(jd_ut);
        let set = self.sunset_jd(jd_ut);
        0.5 * (rise + set)
    }
}
