//! Tithi (lunar day) computation.
//!
//! The synodic month is divided into 30 tithis, each spanning 12 degrees of
//! Moon-Sun elongation. Shukla Paksha (bright half) runs from 0-180 degrees
//! (tithis 0-14), Krishna Paksha (dark half) from 180-360 degrees (tithis 15-29).
//!
//! [`tithi_at_sunrise`] is the civil-day-facing entry point: it evaluates
//! the elongation at the location's sunrise, finds the tithi's start/end by
//! bisection, and flags adhika (repeated) and kshaya (omitted) tithis by
//! comparing against the previous and following day's sunrise tithi
//! respectively.

use panchang_ephemeris::{apparent_solar_longitude_deg, lunar_longitude};
use panchang_math::{bisect_angle, find_zero_crossing, normalize_to_360};
use panchang_riseset::Location;
use panchang_search::SearchError;
use panchang_time::gregorian_to_jd;
use std::convert::Infallible;

/// The two pakshas (fortnights) of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Bright half (waxing moon), elongation 0-180 deg.
    Shukla,
    /// Dark half (waning moon), elongation 180-360 deg.
    Krishna,
}

impl Paksha {
    /// Name of the paksha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order, for FFI indexing (0 = ShuklaPratipada, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Degrees per tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

impl Tithi {
    /// Full name of the tithi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShuklaPratipada => "Shukla Pratipada",
            Self::ShuklaDwitiya => "Shukla Dwitiya",
            Self::ShuklaTritiya => "Shukla Tritiya",
            Self::ShuklaChaturthi => "Shukla Chaturthi",
            Self::ShuklaPanchami => "Shukla Panchami",
            Self::ShuklaShashthi => "Shukla Shashthi",
            Self::ShuklaSaptami => "Shukla Saptami",
            Self::ShuklaAshtami => "Shukla Ashtami",
            Self::ShuklaNavami => "Shukla Navami",
            Self::ShuklaDashami => "Shukla Dashami",
            Self::ShuklaEkadashi => "Shukla Ekadashi",
            Self::ShuklaDwadashi => "Shukla Dwadashi",
            Self::ShuklaTrayodashi => "Shukla Trayodashi",
            Self::ShuklaChaturdashi => "Shukla Chaturdashi",
            Self::Purnima => "Purnima",
            Self::KrishnaPratipada => "Krishna Pratipada",
            Self::KrishnaDwitiya => "Krishna Dwitiya",
            Self::KrishnaTritiya => "Krishna Tritiya",
            Self::KrishnaChaturthi => "Krishna Chaturthi",
            Self::KrishnaPanchami => "Krishna Panchami",
            Self::KrishnaShashthi => "Krishna Shashthi",
            Self::KrishnaSaptami => "Krishna Saptami",
            Self::KrishnaAshtami => "Krishna Ashtami",
            Self::KrishnaNavami => "Krishna Navami",
            Self::KrishnaDashami => "Krishna Dashami",
            Self::KrishnaEkadashi => "Krishna Ekadashi",
            Self::KrishnaDwadashi => "Krishna Dwadashi",
            Self::KrishnaTrayodashi => "Krishna Trayodashi",
            Self::KrishnaChaturdashi => "Krishna Chaturdashi",
            Self::Amavasya => "Amavasya",
        }
    }

    /// 0-based index (0 = ShuklaPratipada, 29 = Amavasya).
    pub const fn index(self) -> u8 {
        match self {
            Self::ShuklaPratipada => 0,
            Self::ShuklaDwitiya => 1,
            Self::ShuklaTritiya => 2,
            Self::ShuklaChaturthi => 3,
            Self::ShuklaPanchami => 4,
            Self::ShuklaShashthi => 5,
            Self::ShuklaSaptami => 6,
            Self::ShuklaAshtami => 7,
            Self::ShuklaNavami => 8,
            Self::ShuklaDashami => 9,
            Self::ShuklaEkadashi => 10,
            Self::ShuklaDwadashi => 11,
            Self::ShuklaTrayodashi => 12,
            Self::ShuklaChaturdashi => 13,
            Self::Purnima => 14,
            Self::KrishnaPratipada => 15,
            Self::KrishnaDwitiya => 16,
            Self::KrishnaTritiya => 17,
            Self::KrishnaChaturthi => 18,
            Self::KrishnaPanchami => 19,
            Self::KrishnaShashthi => 20,
            Self::KrishnaSaptami => 21,
            Self::KrishnaAshtami => 22,
            Self::KrishnaNavami => 23,
            Self::KrishnaDashami => 24,
            Self::KrishnaEkadashi => 25,
            Self::KrishnaDwadashi => 26,
            Self::KrishnaTrayodashi => 27,
            Self::KrishnaChaturdashi => 28,
            Self::Amavasya => 29,
        }
    }

    /// Paksha of this tithi.
    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based tithi number within the paksha (1-15).
    pub const fn tithi_in_paksha(self) -> u8 {
        (self.index() % 15) + 1
    }
}

/// Result of tithi-from-elongation computation (pure geometry, no times).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    /// The tithi.
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees into the current tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Normalize angle to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 {
        r + 360.0
    } else {
        r
    }
}

/// Determine tithi from Moon-Sun elongation (tropical coordinates).
///
/// Elongation = (Moon_lon - Sun_lon) mod 360, in degrees [0, 360).
/// Each tithi spans 12 degrees. Ayanamsha cancels in the difference.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let idx = (elong / TITHI_SEGMENT_DEG).floor() as u8;
    let idx = idx.min(29);
    let tithi = ALL_TITHIS[idx as usize];
    let degrees_in_tithi = elong - (idx as f64) * TITHI_SEGMENT_DEG;

    TithiPosition {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.tithi_in_paksha(),
        degrees_in_tithi,
    }
}

/// Moon-Sun elongation (tropical; the ayanamsha cancels in the
/// difference), in degrees, `[0, 360)`.
fn lunar_phase(jd_ut: f64) -> f64 {
    normalize_360(lunar_longitude(jd_ut) - apparent_solar_longitude_deg(jd_ut))
}

/// 1-based tithi number (1..30) at the given moment, clamped at 30.
fn tithi_num_at(jd_ut: f64) -> u8 {
    let phase = lunar_phase(jd_ut);
    ((phase / TITHI_SEGMENT_DEG).floor() as u8 + 1).min(30)
}

/// Bisect for the JD within `[jd_lo, jd_hi]` where the elongation crosses
/// the boundary belonging to 1-based tithi number `target_tithi`.
fn find_tithi_boundary(jd_lo: f64, jd_hi: f64, target_tithi: u8) -> Result<f64, SearchError> {
    let target_phase = (target_tithi as f64 - 1.0) * TITHI_SEGMENT_DEG;
    let f = |t: f64| -> Result<f64, Infallible> { Ok(lunar_phase(t)) };
    let g = bisect_angle(&f, target_phase);

    let step = (jd_hi - jd_lo) / 40.0;
    find_zero_crossing(&g, jd_lo, step, 40, 50, 1e-10)
        .expect("infallible")
        .ok_or_else(|| SearchError::non_convergent("tithi boundary search"))
}

/// Tithi state at a civil day's sunrise: the 1-based tithi number, the
/// interval `[jd_start, jd_end)` it spans, and whether it is a kshaya
/// (omitted) or adhika (repeated) tithi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// 1-based tithi number, 1..30.
    pub tithi_num: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha, 1..15.
    pub paksha_tithi: u8,
    /// JD (UT) the tithi begins.
    pub jd_start: f64,
    /// JD (UT) the tithi ends.
    pub jd_end: f64,
    /// Whether this tithi is omitted at the *next* civil day's sunrise
    /// (it starts and ends between two consecutive sunrises).
    pub is_kshaya: bool,
    /// Whether this tithi also held at *yesterday's* sunrise (two
    /// consecutive civil days share the same sunrise-tithi).
    pub is_adhika_candidate: bool,
}

/// The tithi current at the given civil date's sunrise, at `location`.
///
/// Falls back to mean local solar noon if the location has no sunrise on
/// that date (polar day/night at that latitude).
pub fn tithi_at_sunrise(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
) -> Result<TithiInfo, SearchError> {
    let jd = gregorian_to_jd(year, month, day);
    let mut jd_rise = location.sunrise_jd(jd);
    if jd_rise <= 0.0 {
        jd_rise = jd + 0.5 - location.utc_offset_hours / 24.0;
    }

    let t = tithi_num_at(jd_rise);
    let paksha = if t <= 15 { Paksha::Shukla } else { Paksha::Krishna };
    let paksha_tithi = if t <= 15 { t } else { t - 15 };

    let jd_start = find_tithi_boundary(jd_rise - 2.0, jd_rise, t)?;
    let next_t = (t % 30) + 1;
    let jd_end = find_tithi_boundary(jd_rise, jd_rise + 2.0, next_t)?;

    let jd_rise_tomorrow = location.sunrise_jd(jd + 1.0);
    let is_kshaya = if jd_rise_tomorrow > 0.0 {
        let t_tomorrow = tithi_num_at(jd_rise_tomorrow);
        let diff = (t_tomorrow as i32 - t as i32).rem_euclid(30);
        diff > 1
    } else {
        false
    };

    let jd_rise_yesterday = location.sunrise_jd(jd - 1.0);
    let is_adhika_candidate = if jd_rise_yesterday > 0.0 {
        let t_yesterday = tithi_num_at(jd_rise_yesterday);
        t_yesterday == t
    } else {
        false
    };

    Ok(TithiInfo {
        tithi_num: t,
        paksha,
        paksha_tithi,
        jd_start,
        jd_end,
        is_kshaya,
        is_adhika_candidate,
    })
}
