//! Reference-frame helpers shared by the ephemeris and ayanamsha crates:
//! IAU-1976 precession, IAU-1980 nutation, mean obliquity, ecliptic ↔
//! equatorial rotation, and Cartesian ↔ spherical conversion.

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

pub use nutation::{fundamental_arguments, nutation_in_longitude_deg, nutation_in_obliquity_deg};
pub use obliquity::{
    COS_OBL, OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, SIN_OBL, mean_obliquity_of_date_arcsec,
    mean_obliquity_of_date_rad,
};
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg, precess_equatorial,
    precession_angles_rad,
};
pub use rotation::{ecliptic_to_icrf, icrf_to_ecliptic};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
