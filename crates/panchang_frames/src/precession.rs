//! IAU-1976 general precession (Lieske et al. 1977), used by the solar
//! longitude pipeline and by the Lahiri ayanamsha's reference-epoch
//! rotation.
//!
//! Only the IAU-1976/Lieske-1977 model is retained: the panchang engine has
//! no use for the IAU-2006 or Vondrák-2011 long-term alternatives, since
//! ayanamsha is only ever evaluated within a few centuries of J2000.

use std::f64::consts::PI;

const AS2R: f64 = PI / 648_000.0;

/// General precession in ecliptic longitude, IAU 1976 (Lieske 1977), in
/// arcseconds.
///
/// `t` is Julian centuries of TDB since J2000.0.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    5029.0966 * t + 1.11113 * t2 - 0.000006 * t3
}

/// General precession in ecliptic longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// The three IAU-1976 equatorial precession angles zeta, z, theta, in
/// radians, each a polynomial in `t` (Julian centuries from J2000 TT).
///
/// Lieske et al. 1977, A&A 58, 1-16. Used to rotate an equatorial vector
/// between the mean equator/equinox of date and J2000.
pub fn precession_angles_rad(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;

    let zeta_arcsec = 2306.2181 * t + 0.30188 * t2 + 0.017998 * t3;
    let z_arcsec = 2306.2181 * t + 1.09468 * t2 + 0.018203 * t3;
    let theta_arcsec = 2004.3109 * t - 0.42665 * t2 - 0.041833 * t3;

    (zeta_arcsec * AS2R, z_arcsec * AS2R, theta_arcsec * AS2R)
}

/// Precess an equatorial Cartesian unit vector by the IAU-1976 zeta/z/theta
/// rotation sequence.
///
/// `t` is the Julian centuries (from J2000 TT) of the epoch of date
/// involved in the rotation. `to_j2000 = true` rotates from the epoch of
/// date to J2000; `false` rotates from J2000 to the epoch of date.
pub fn precess_equatorial(v: [f64; 3], t: f64, to_j2000: bool) -> [f64; 3] {
    let (zeta, z, theta) = precession_angles_rad(t);

    if to_j2000 {
        rotate_z(rotate_y(rotate_z(v, zeta), -theta), z)
    } else {
        rotate_z(rotate_y(rotate_z(v, -z), theta), -zeta)
    }
}

fn rotate_z(v: [f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = angle.sin_cos();
    [c * v[0] - s * v[1], s * v[0] + c * v[1], v[2]]
}

fn rotate_y(v: [f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = angle.sin_cos();
    [c * v[0] + s * v[2], v[1], -s * v[0] + c * v[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
        let (zeta, z, theta) = precession_angles_rad(0.0);
        assert_eq!(zeta, 0.0);
        assert_eq!(z, 0.0);
        assert_eq!(theta, 0.0);
    }

    #[test]
    fn one_century_matches_literature_rate() {
        let p = general_precession_longitude_arcsec(1.0);
        assert!((p - 5030.207_66).abs() < 1e-2, "p_A(1.0) = {p}");
    }

    #[test]
    fn deg_conversion_consistent() {
        let t = 0.5;
        let arcsec = general_precession_longitude_arcsec(t);
        let deg = general_precession_longitude_deg(t);
        assert!((deg - arcsec / 3600.0).abs() < 1e-15);
    }

    #[test]
    fn roundtrip_through_j2000() {
        let t = -0.4337;
        let v = [1.0, 0.0, 0.0];
        let to_j2000 = precess_equatorial(v, t, true);
        let back = precess_equatorial(to_j2000, t, false);
        for i in 0..3 {
            assert!((v[i] - back[i]).abs() < 1e-12, "axis {i}: {} vs {}", v[i], back[i]);
        }
    }

    #[test]
    fn unit_vector_stays_unit() {
        let t = 0.5;
        let v = [1.0, 0.0, 0.0];
        let rotated = precess_equatorial(v, t, true);
        let norm = (rotated[0] * rotated[0] + rotated[1] * rotated[1] + rotated[2] * rotated[2]).sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }
}
