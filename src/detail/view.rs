//! Display model for the detail page.
//!
//! Every field is resolved to display text up front. A missing field turns
//! into its placeholder on its own and never affects its neighbours.

use crate::catalog::format::{raw_f64, RenderPhase};
use crate::country::CountryRecord;

pub const UNKNOWN: &str = "Unknown";
pub const NO_FLAG: &str = "No flag available";
pub const NO_COAT_OF_ARMS: &str = "No coat of arms available";
pub const NO_MAP: &str = "No map link available";

/// An image or link that may be absent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Available { url: String, alt: String },
    Missing(&'static str),
}

impl Media {
    fn from_url(url: Option<&str>, alt: String, placeholder: &'static str) -> Self {
        match url.filter(|u| !u.is_empty()) {
            Some(url) => Self::Available {
                url: url.to_string(),
                alt,
            },
            None => Self::Missing(placeholder),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Available { url, .. } => Some(url),
            Self::Missing(_) => None,
        }
    }
}

/// Tri-state flag shown as a coloured badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Yes,
    No,
    Unknown,
}

impl From<Option<bool>> for Flag {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

/// Postal code block, present only when the record has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCodeView {
    pub format: String,
    pub regex: String,
}

/// Everything the detail template prints.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub common_name: String,
    pub official_name: String,
    pub independent: Flag,
    pub status: String,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: String,
    pub area: String,
    pub landlocked: Flag,
    pub flag: Media,
    pub coat_of_arms: Media,
    pub currency: String,
    pub languages: String,
    pub timezones: String,
    pub continents: String,
    pub start_of_week: String,
    pub latlng: String,
    pub capital_location: Option<String>,
    pub car_signs: String,
    pub car_side: String,
    pub postal_code: Option<PostalCodeView>,
    pub google_maps: Media,
}

impl DetailView {
    pub fn new(record: &CountryRecord) -> Self {
        let common_name = or_unknown(Some(record.common_name()));
        let phase = RenderPhase::Stabilized;

        Self {
            official_name: or_unknown(Some(record.official_name())),
            independent: record.independent.into(),
            status: or_unknown(record.status.as_deref()),
            capital: join_or_unknown(&record.capital),
            region: or_unknown(record.region.as_deref()),
            subregion: or_unknown(record.subregion.as_deref()),
            population: record
                .population
                .map(|p| phase.display_u64(p))
                .unwrap_or_else(|| UNKNOWN.to_string()),
            area: record
                .area
                .map(|a| format!("{} km²", phase.display_f64(a)))
                .unwrap_or_else(|| UNKNOWN.to_string()),
            landlocked: record.landlocked.into(),
            flag: Media::from_url(
                record.flags.png.as_deref().or(record.flags.svg.as_deref()),
                format!("Flag of {common_name}"),
                NO_FLAG,
            ),
            coat_of_arms: Media::from_url(
                record.coat_of_arms.png.as_deref(),
                format!("Coat of Arms of {common_name}"),
                NO_COAT_OF_ARMS,
            ),
            currency: currency_label(record),
            languages: join_or_unknown(record.languages.values()),
            timezones: join_or_unknown(&record.timezones),
            continents: join_or_unknown(&record.continents),
            start_of_week: or_unknown(record.start_of_week.as_deref()),
            latlng: coordinates(&record.latlng).unwrap_or_else(|| UNKNOWN.to_string()),
            capital_location: record.capital_info.latlng.as_deref().and_then(coordinates),
            car_signs: record
                .car
                .as_ref()
                .map(|car| join_or_unknown(&car.signs))
                .unwrap_or_else(|| UNKNOWN.to_string()),
            car_side: or_unknown(record.car.as_ref().and_then(|car| car.side.as_deref())),
            postal_code: record.postal_code.as_ref().map(|postal| PostalCodeView {
                format: or_unknown(postal.format.as_deref()),
                regex: or_unknown(postal.regex.as_deref()),
            }),
            google_maps: Media::from_url(
                record.maps.google_maps.as_deref(),
                format!("{common_name} on Google Maps"),
                NO_MAP,
            ),
            common_name,
        }
    }
}

fn or_unknown(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn join_or_unknown<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    if parts.is_empty() {
        return UNKNOWN.to_string();
    }
    parts.join(", ")
}

fn coordinates(values: &[f64]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|v| raw_f64(*v)).collect::<Vec<_>>().join(", "))
}

/// `symbol name` of the first listed currency.
fn currency_label(record: &CountryRecord) -> String {
    let Some(currency) = record.currencies.values().next() else {
        return UNKNOWN.to_string();
    };
    let parts: Vec<&str> = [currency.symbol.as_deref(), currency.name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        UNKNOWN.to_string()
    } else {
        parts.join(" ")
    }
}
