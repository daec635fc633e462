//! Regional solar calendars: Tamil, Bengali, Odia, Malayalam.
//!
//! Each region partitions civil days into twelve months by assigning every
//! sankranti (the sun's entry into a rashi) to a particular civil day under
//! a region-specific "critical time" rule, then numbering the following
//! days 2, 3, … until the next sankranti. [`gregorian_to_solar`] is the
//! forward direction; [`solar_to_gregorian`] inverts it.

use panchang_calendar::tithi_at_sunrise;
use panchang_riseset::Location;
use panchang_search::{sankranti_jd, solar_longitude_sidereal, SearchError};
use panchang_time::{gregorian_to_jd, jd_to_gregorian};

/// The four supported regional solar calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Tamil,
    Bengali,
    Odia,
    Malayalam,
}

struct RegionConfig {
    /// 1-based rashi (1 = Mesha) that begins month 1 of the regional year.
    first_rashi: i32,
    gy_offset_on: i32,
    gy_offset_before: i32,
    months: &'static [&'static str; 13],
    era_name: &'static str,
}

const TAMIL_MONTHS: [&str; 13] = [
    "", "Chithirai", "Vaikaasi", "Aani", "Aadi", "Aavani", "Purattaasi", "Aippasi", "Karthikai",
    "Maargazhi", "Thai", "Maasi", "Panguni",
];
const BENGALI_MONTHS: [&str; 13] = [
    "", "Boishakh", "Joishtho", "Asharh", "Srabon", "Bhadro", "Ashshin", "Kartik", "Ogrohaeon",
    "Poush", "Magh", "Falgun", "Choitro",
];
const ODIA_MONTHS: [&str; 13] = [
    "", "Baisakha", "Jyeshtha", "Ashadha", "Shravana", "Bhadrapada", "Ashvina", "Kartika",
    "Margashirsha", "Pausha", "Magha", "Phalguna", "Chaitra",
];
const MALAYALAM_MONTHS: [&str; 13] = [
    "", "Chingam", "Kanni", "Thulam", "Vrishchikam", "Dhanu", "Makaram", "Kumbham", "Meenam",
    "Medam", "Edavam", "Mithunam", "Karkadakam",
];

fn config(region: Region) -> RegionConfig {
    match region {
        Region::Tamil => RegionConfig {
            first_rashi: 1,
            gy_offset_on: 78,
            gy_offset_before: 79,
            months: &TAMIL_MONTHS,
            era_name: "Saka",
        },
        Region::Bengali => RegionConfig {
            first_rashi: 1,
            gy_offset_on: 593,
            gy_offset_before: 594,
            months: &BENGALI_MONTHS,
            era_name: "Bangabda",
        },
        Region::Odia => RegionConfig {
            first_rashi: 1,
            gy_offset_on: 78,
            gy_offset_before: 79,
            months: &ODIA_MONTHS,
            era_name: "Saka",
        },
        Region::Malayalam => RegionConfig {
            first_rashi: 5,
            gy_offset_on: 824,
            gy_offset_before: 825,
            months: &MALAYALAM_MONTHS,
            era_name: "Kollam",
        },
    }
}

/// A regional solar calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDate {
    pub year: i32,
    /// 1-based regional month (1 = the region's first month).
    pub month: i32,
    /// 1-based day of the regional month; 29..32 depending on month length.
    pub day: i32,
    /// 1-based sidereal rashi (1 = Mesha) the month corresponds to.
    pub rashi: i32,
    /// JD (UT) of the sankranti that opened this month.
    pub jd_sankranti: f64,
}

/// The region-specific moment that decides which civil day a sankranti is
/// assigned to, per §4.I.
fn critical_time_jd(jd_midnight_ut: f64, location: &Location, region: Region) -> f64 {
    match region {
        Region::Tamil => location.sunset_jd(jd_midnight_ut) - 8.0 / (24.0 * 60.0),
        Region::Bengali => {
            jd_midnight_ut - location.utc_offset_hours / 24.0 + 24.0 / (24.0 * 60.0)
        }
        Region::Odia => jd_midnight_ut + 16.7 / 24.0,
        Region::Malayalam => {
            let sr = location.sunrise_jd(jd_midnight_ut);
            let ss = location.sunset_jd(jd_midnight_ut);
            sr + 0.6 * (ss - sr) - 9.5 / (24.0 * 60.0)
        }
    }
}

/// Assign a sankranti at `jd_sankranti` (entering 1-based `rashi`) to its
/// civil day under `region`'s critical-time rule.
fn sankranti_to_civil_day(
    jd_sankranti: f64,
    location: &Location,
    region: Region,
    rashi: i32,
) -> Result<(i32, u32, u32), SearchError> {
    let local_jd = jd_sankranti + location.utc_offset_hours / 24.0 + 0.5;
    let (sy, sm, sd) = jd_to_gregorian(local_jd.floor());

    let jd_day = gregorian_to_jd(sy, sm, sd);
    let crit = critical_time_jd(jd_day, location, region);

    if jd_sankranti <= crit {
        if region == Region::Bengali && rashi != 4 {
            let push_next = if rashi == 10 {
                true
            } else {
                let (py, pm, pd) = jd_to_gregorian(jd_day - 1.0);
                let ti = tithi_at_sunrise(py, pm, pd, location)?;
                ti.jd_end <= jd_sankranti
            };
            if push_next {
                return Ok(jd_to_gregorian(jd_day + 1.0));
            }
        }
        Ok((sy, sm, sd))
    } else {
        Ok(jd_to_gregorian(jd_day + 1.0))
    }
}

fn rashi_to_regional_month(rashi: i32, cfg: &RegionConfig) -> i32 {
    let mut m = rashi - cfg.first_rashi + 1;
    if m <= 0 {
        m += 12;
    }
    m
}

/// Clamp a sidereal longitude to its 1-based rashi (1 = Mesha .. 12 = Meena).
fn rashi_of(lon_sidereal: f64) -> i32 {
    let mut rashi = (lon_sidereal / 30.0).floor() as i32 + 1;
    rashi = rashi.clamp(1, 12);
    rashi
}

fn solar_year(
    jd_crit: f64,
    jd_greg_date: f64,
    location: &Location,
    cfg: &RegionConfig,
    region: Region,
) -> Result<i32, SearchError> {
    let (gy, _, _) = jd_to_gregorian(jd_crit);

    let target_long = (cfg.first_rashi - 1) as f64 * 30.0;
    let mut approx_greg_month = 3 + cfg.first_rashi;
    if approx_greg_month > 12 {
        approx_greg_month -= 12;
    }

    let jd_year_start_est = gregorian_to_jd(gy, approx_greg_month as u32, 14);
    let jd_year_start = sankranti_jd(jd_year_start_est, target_long)?;

    let (ysy, ysm, ysd) = sankranti_to_civil_day(jd_year_start, location, region, cfg.first_rashi)?;
    let jd_year_civil = gregorian_to_jd(ysy, ysm, ysd);

    Ok(if jd_greg_date >= jd_year_civil {
        gy - cfg.gy_offset_on
    } else {
        gy - cfg.gy_offset_before
    })
}

/// Regional solar date corresponding to a civil date.
pub fn gregorian_to_solar(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
    region: Region,
) -> Result<SolarDate, SearchError> {
    let cfg = config(region);
    let jd = gregorian_to_jd(year, month, day);
    let jd_crit = critical_time_jd(jd, location, region);

    let lon = solar_longitude_sidereal(jd_crit);
    let rashi0 = rashi_of(lon);

    let target = (rashi0 - 1) as f64 * 30.0;
    let mut degrees_past = lon - target;
    if degrees_past < 0.0 {
        degrees_past += 360.0;
    }
    let jd_est = jd_crit - degrees_past;
    let jd_sankranti0 = sankranti_jd(jd_est, target)?;

    let (sy, sm, s_day) = sankranti_to_civil_day(jd_sankranti0, location, region, rashi0)?;
    let jd_month_start = gregorian_to_jd(sy, sm, s_day);
    let mut sd_day = (jd - jd_month_start) as i32 + 1;

    let (rashi, jd_sankranti) = if sd_day <= 0 {
        let new_rashi = if rashi0 == 1 { 12 } else { rashi0 - 1 };
        let prev_target = (new_rashi - 1) as f64 * 30.0;
        let new_jd_sank = sankranti_jd(jd_sankranti0 - 28.0, prev_target)?;
        let (sy2, sm2, sd2) = sankranti_to_civil_day(new_jd_sank, location, region, new_rashi)?;
        let jd_ms = gregorian_to_jd(sy2, sm2, sd2);
        sd_day = (jd - jd_ms) as i32 + 1;
        (new_rashi, new_jd_sank)
    } else {
        (rashi0, jd_sankranti0)
    };

    let reg_month = rashi_to_regional_month(rashi, &cfg);
    let year_val = solar_year(jd_crit, jd, location, &cfg, region)?;

    Ok(SolarDate {
        year: year_val,
        month: reg_month,
        day: sd_day,
        rashi,
        jd_sankranti,
    })
}

/// Inverse of [`gregorian_to_solar`]: the civil date a regional solar date
/// falls on. Searches forward from an estimated anchor civil date and
/// verifies against the forward algorithm, correcting the civil-year guess
/// when the anchor lands a year off (possible near the region's year
/// boundary).
///
/// Returns `Err` if none of the year-nudge attempts round-trips back to
/// `solar` through [`gregorian_to_solar`] — this signals an invariant
/// violation in the forward/reverse mapping, not a retryable condition.
pub fn solar_to_gregorian(
    solar: SolarDate,
    location: &Location,
    region: Region,
) -> Result<(i32, u32, u32), SearchError> {
    let cfg = config(region);

    for year_nudge in [0, 1, -1, 2, -2] {
        let civil_year_guess = solar.year + cfg.gy_offset_on + year_nudge;

        let mut approx_greg_month = 3 + cfg.first_rashi;
        if approx_greg_month > 12 {
            approx_greg_month -= 12;
        }

        let rashi = {
            let r = (cfg.first_rashi - 1 + solar.month - 1) % 12 + 1;
            if r <= 0 { r + 12 } else { r }
        };
        let target_long = (rashi - 1) as f64 * 30.0;

        let jd_est = gregorian_to_jd(civil_year_guess, approx_greg_month as u32, 14)
            + (solar.month - 1) as f64 * 30.0;
        let jd_sank = sankranti_jd(jd_est, target_long)?;

        let (sy, sm, sd) = sankranti_to_civil_day(jd_sank, location, region, rashi)?;
        let jd_month_start = gregorian_to_jd(sy, sm, sd);
        let jd_final = jd_month_start + (solar.day - 1) as f64;
        let (y, m, d) = jd_to_gregorian(jd_final);

        let forward = gregorian_to_solar(y, m, d, location, region)?;
        if forward.year == solar.year && forward.month == solar.month && forward.day == solar.day {
            return Ok((y, m, d));
        }
    }

    Err(SearchError::non_convergent(
        "gregorian<->solar round trip",
    ))
}

/// Name of a region's 1-based month.
pub fn solar_month_name(month: i32, region: Region) -> &'static str {
    if !(1..=12).contains(&month) {
        return "???";
    }
    config(region).months[month as usize]
}

/// The region's era name (Saka, Bangabda, or Kollam).
pub fn solar_era_name(region: Region) -> &'static str {
    config(region).era_name
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_DELHI: Location = Location::NEW_DELHI;

    #[test]
    fn e2_tamil_mesha_sankranti_2025() {
        let sd = gregorian_to_solar(2025, 4, 14, &NEW_DELHI, Region::Tamil).unwrap();
        assert_eq!(sd.month, 1, "Chithirai 1");
        assert_eq!(sd.day, 1);
        assert_eq!(sd.year, 1947);
    }

    #[test]
    fn e2_tamil_day_before_is_panguni_30() {
        let sd = gregorian_to_solar(2025, 4, 13, &NEW_DELHI, Region::Tamil).unwrap();
        assert_eq!(sd.month, 12, "Panguni");
        assert_eq!(sd.day, 30);
        assert_eq!(sd.year, 1946);
    }

    #[test]
    fn e3_bengali_boishakh_1_2025() {
        let sd = gregorian_to_solar(2025, 4, 15, &NEW_DELHI, Region::Bengali).unwrap();
        assert_eq!(sd.month, 1, "Boishakh");
        assert_eq!(sd.day, 1);
        assert_eq!(sd.year, 1432);
    }

    #[test]
    fn e4_malayalam_chingam_1_2025() {
        let sd = gregorian_to_solar(2025, 8, 17, &NEW_DELHI, Region::Malayalam).unwrap();
        assert_eq!(sd.month, 1, "Chingam");
        assert_eq!(sd.day, 1);
        assert_eq!(sd.year, 1201);
    }

    #[test]
    fn e5_odia_shravana_1_2026() {
        let sd = gregorian_to_solar(2026, 7, 17, &NEW_DELHI, Region::Odia).unwrap();
        assert_eq!(sd.month, 5, "Shravana");
        assert_eq!(sd.day, 1);
        assert_eq!(sd.year, 1948);
    }

    #[test]
    fn e5_odia_day_before_is_ashadha_32() {
        let sd = gregorian_to_solar(2026, 7, 16, &NEW_DELHI, Region::Odia).unwrap();
        assert_eq!(sd.month, 4, "Ashadha");
        assert_eq!(sd.day, 32);
    }

    #[test]
    fn solar_round_trips_through_gregorian() {
        for region in [Region::Tamil, Region::Bengali, Region::Odia, Region::Malayalam] {
            let sd = gregorian_to_solar(2025, 6, 10, &NEW_DELHI, region).unwrap();
            let (y, m, d) = solar_to_gregorian(sd, &NEW_DELHI, region).unwrap();
            assert_eq!((y, m, d), (2025, 6, 10), "region {:?} failed to round-trip", region);
        }
    }

    #[test]
    fn month_names_nonempty_for_all_regions() {
        for region in [Region::Tamil, Region::Bengali, Region::Odia, Region::Malayalam] {
            for m in 1..=12 {
                assert!(!solar_month_name(m, region).is_empty());
            }
        }
    }

    #[test]
    fn era_names_match_spec() {
        assert_eq!(solar_era_name(Region::Tamil), "Saka");
        assert_eq!(solar_era_name(Region::Bengali), "Bangabda");
        assert_eq!(solar_era_name(Region::Odia), "Saka");
        assert_eq!(solar_era_name(Region::Malayalam), "Kollam");
    }

    #[test]
    fn month_out_of_range_is_placeholder() {
        assert_eq!(solar_month_name(0, Region::Tamil), "???");
        assert_eq!(solar_month_name(13, Region::Tamil), "???");
    }
}
