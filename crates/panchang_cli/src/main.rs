use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use panchang::{
    Location, PanchangDay, PanchangError, Region, TithiInfo, day_panchang, days_in_month,
    gregorian_to_solar, month_panchang, solar_era_name, solar_month_name,
};
use panchang_config::{CliOverrides, resolve};

/// Unix epoch as a Julian Day (UT).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// Compute a panchang (lunisolar) or, with `-s`, a regional solar calendar
/// date for a Gregorian civil day or month.
#[derive(Parser, Debug)]
#[command(name = "panchang", version, about)]
struct Args {
    /// Gregorian year, default = current year
    #[arg(short = 'y')]
    year: Option<i32>,

    /// Gregorian month 1..12, default = current month
    #[arg(short = 'm')]
    month: Option<u32>,

    /// Specific day; if omitted, output spans the month
    #[arg(short = 'd')]
    day: Option<u32>,

    /// Solar calendar: tamil|bengali|odia|malayalam. If omitted, output is lunisolar
    #[arg(short = 's')]
    solar: Option<String>,

    /// Observer location "LAT,LON", decimal degrees; default 28.6139,77.2090
    #[arg(short = 'l')]
    location: Option<String>,

    /// UTC offset in hours, default 5.5
    #[arg(short = 'u')]
    utc_offset: Option<f64>,
}

fn today_ymd() -> (i32, u32, u32) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let jd = UNIX_EPOCH_JD + secs as f64 / 86_400.0;
    panchang_time::jd_to_gregorian(jd)
}

fn parse_region(s: &str) -> Result<Region, PanchangError> {
    match s.to_ascii_lowercase().as_str() {
        "tamil" => Ok(Region::Tamil),
        "bengali" => Ok(Region::Bengali),
        "odia" => Ok(Region::Odia),
        "malayalam" => Ok(Region::Malayalam),
        other => Err(PanchangError::ArgumentError(format!(
            "unknown solar calendar '{other}' (expected tamil|bengali|odia|malayalam)"
        ))),
    }
}

fn parse_location(s: &str) -> Result<(f64, f64), PanchangError> {
    let (lat, lon) = s.split_once(',').ok_or_else(|| {
        PanchangError::ArgumentError(format!("malformed location '{s}', expected LAT,LON"))
    })?;
    let lat: f64 = lat.trim().parse().map_err(|_| {
        PanchangError::ArgumentError(format!("malformed latitude '{lat}' in location '{s}'"))
    })?;
    let lon: f64 = lon.trim().parse().map_err(|_| {
        PanchangError::ArgumentError(format!("malformed longitude '{lon}' in location '{s}'"))
    })?;
    Ok((lat, lon))
}

fn print_lunisolar_day(day: &PanchangDay) {
    let (y, m, d) = day.gregorian;
    let TithiInfo {
        paksha,
        paksha_tithi,
        ..
    } = day.tithi;
    let weekday = WEEKDAY_NAMES[day.weekday as usize % 7];
    let masa = day.masa;
    let mut line = format!(
        "{y:04}-{m:02}-{d:02} ({weekday}): tithi={} {} paksha, masa={}",
        paksha_tithi.name(),
        paksha.name(),
        masa.masa.name(),
    );
    if masa.is_adhika {
        line.push_str(" [adhika]");
    }
    if masa.is_kshaya {
        line.push_str(" [kshaya]");
    }
    line.push_str(&format!(
        ", saka={}, vikram={}",
        masa.year_saka, masa.year_vikram
    ));
    println!("{line}");
}

fn run() -> Result<(), PanchangError> {
    let args = Args::parse();

    let toml_path = Path::new("panchang.toml");
    let (today_y, today_m, _) = today_ymd();

    let overrides = match &args.location {
        Some(loc) => {
            let (lat, lon) = parse_location(loc)?;
            CliOverrides {
                latitude_deg: Some(lat),
                longitude_deg: Some(lon),
                altitude_m: None,
                utc_offset_hours: args.utc_offset,
            }
        }
        None => CliOverrides {
            latitude_deg: None,
            longitude_deg: None,
            altitude_m: None,
            utc_offset_hours: args.utc_offset,
        },
    };

    let config = resolve(toml_path, overrides)
        .map_err(|e| PanchangError::ArgumentError(e.to_string()))?;
    let location: Location = config.default_location;

    let year = args.year.unwrap_or(today_y);
    let month = args.month.unwrap_or(today_m);
    let region = args.solar.as_deref().map(parse_region).transpose()?;

    let days: Vec<u32> = match args.day {
        Some(d) => vec![d],
        None => {
            if !(1..=12).contains(&month) {
                return Err(PanchangError::ArgumentError(format!(
                    "month {month} out of range 1..=12"
                )));
            }
            (1..=days_in_month(year, month)).collect()
        }
    };

    match region {
        Some(region) => {
            for day in days {
                let solar = gregorian_to_solar(year, month, day, &location, region)?;
                println!(
                    "{year:04}-{month:02}-{day:02}: {} {} {} ({})",
                    solar.day,
                    solar_month_name(solar.month, region),
                    solar.year,
                    solar_era_name(region)
                );
            }
        }
        None if args.day.is_some() => {
            let panchang_day = day_panchang(year, month, days[0], &location)?;
            print_lunisolar_day(&panchang_day);
        }
        None => {
            for panchang_day in month_panchang(year, month, &location)? {
                print_lunisolar_day(&panchang_day);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
