//! The Amanta lunisolar calendar layer: tithi and masa engines built on
//! [`panchang_search`]'s sankranti/new-moon finders and
//! [`panchang_riseset`]'s sunrise/sunset.

pub mod masa;
pub mod tithi;

pub use masa::{
    ALL_MASAS, Masa, MasaInfo, hindu_year_saka, hindu_year_vikram, masa_for_date,
    masa_from_rashi_index,
};
pub use tithi::{ALL_TITHIS, Paksha, Tithi, TithiInfo, TithiPosition, tithi_at_sunrise};
