//! Country record as returned by the upstream API.
//!
//! The schema is owned by the upstream service. Everything except the
//! names is treated as optional and decodes to an empty/absent value when
//! missing or `null`, so a sparse record never fails to decode.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::country::slug::slugify;

/// One country's metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountryRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: CountryName,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub capital: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub flags: Flags,
    #[serde(deserialize_with = "null_as_default")]
    pub coat_of_arms: CoatOfArms,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: IndexMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub currencies: IndexMap<String, Currency>,
    #[serde(deserialize_with = "null_as_default")]
    pub timezones: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub continents: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub latlng: Vec<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub capital_info: CapitalInfo,
    pub car: Option<Car>,
    pub postal_code: Option<PostalCode>,
    #[serde(deserialize_with = "null_as_default")]
    pub maps: Maps,
    pub independent: Option<bool>,
    pub landlocked: Option<bool>,
    pub status: Option<String>,
    pub start_of_week: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CountryName {
    #[serde(deserialize_with = "null_as_default")]
    pub common: String,
    #[serde(deserialize_with = "null_as_default")]
    pub official: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoatOfArms {
    pub png: Option<String>,
    pub svg: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Currency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CapitalInfo {
    pub latlng: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Car {
    #[serde(deserialize_with = "null_as_default")]
    pub signs: Vec<String>,
    pub side: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PostalCode {
    pub format: Option<String>,
    pub regex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Maps {
    pub google_maps: Option<String>,
    pub open_street_maps: Option<String>,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CountryRecord {
    /// Convenience constructor used by tests and fixtures.
    pub fn named(common: &str, official: &str, region: &str) -> Self {
        Self {
            name: CountryName {
                common: common.to_string(),
                official: official.to_string(),
            },
            region: (!region.is_empty()).then(|| region.to_string()),
            ..Self::default()
        }
    }

    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.is_empty())
    }

    /// Routing key derived from the official name.
    pub fn slug(&self) -> String {
        slugify(&self.name.official)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "name": {"common": "France", "official": "French Republic", "nativeName": {}},
            "population": 67391582,
            "area": 551695.0,
            "region": "Europe",
            "subregion": "Western Europe",
            "capital": ["Paris"],
            "flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg"},
            "coatOfArms": {"png": "https://mainfacts.com/fr.png"},
            "languages": {"fra": "French"},
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "timezones": ["UTC+01:00"],
            "continents": ["Europe"],
            "latlng": [46.0, 2.0],
            "capitalInfo": {"latlng": [48.87, 2.33]},
            "car": {"signs": ["F"], "side": "right"},
            "postalCode": {"format": "NNNNN", "regex": "^(\\d{5})$"},
            "maps": {"googleMaps": "https://goo.gl/maps/g7QxxSFsWyTPKuzd7"},
            "independent": true,
            "landlocked": false,
            "status": "officially-assigned",
            "startOfWeek": "monday"
        }"#;

        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.common_name(), "France");
        assert_eq!(record.slug(), "french-republic");
        assert_eq!(record.population, Some(67_391_582));
        assert_eq!(record.currencies["EUR"].symbol.as_deref(), Some("€"));
        assert_eq!(record.capital_info.latlng, Some(vec![48.87, 2.33]));
        assert_eq!(record.postal_code.unwrap().format.as_deref(), Some("NNNNN"));
        assert_eq!(record.start_of_week.as_deref(), Some("monday"));
    }

    #[test]
    fn test_decode_sparse_record() {
        let record: CountryRecord =
            serde_json::from_str(r#"{"name": {"common": "Nowhere"}}"#).unwrap();
        assert_eq!(record.common_name(), "Nowhere");
        assert_eq!(record.official_name(), "");
        assert!(record.population.is_none());
        assert!(record.car.is_none());
        assert!(record.postal_code.is_none());
        assert!(record.capital.is_empty());
        assert!(record.region().is_none());
    }

    #[test]
    fn test_decode_null_fields() {
        let json = r#"{
            "name": {"common": "Nowhere", "official": null},
            "population": null,
            "area": null,
            "region": null,
            "capital": null,
            "flags": null,
            "coatOfArms": null,
            "languages": null,
            "currencies": null,
            "timezones": null,
            "continents": null,
            "latlng": null,
            "capitalInfo": null,
            "car": {"signs": null, "side": null},
            "postalCode": null,
            "maps": null,
            "independent": null
        }"#;

        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.common_name(), "Nowhere");
        assert_eq!(record.official_name(), "");
        assert!(record.capital.is_empty());
        assert!(record.languages.is_empty());
        assert!(record.currencies.is_empty());
        assert!(record.latlng.is_empty());
        assert!(record.flags.png.is_none());
        assert!(record.coat_of_arms.png.is_none());
        assert!(record.capital_info.latlng.is_none());
        assert!(record.maps.google_maps.is_none());
        assert!(record.car.unwrap().signs.is_empty());
    }

    #[test]
    fn test_null_name_decodes_to_empty_names() {
        let record: CountryRecord = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(record.common_name(), "");
        assert_eq!(record.slug(), "");
    }

    #[test]
    fn test_currency_order_follows_upstream() {
        let record: CountryRecord = serde_json::from_str(
            r#"{"currencies": {"ZZZ": {"name": "Last"}, "AAA": {"name": "First"}}}"#,
        )
        .unwrap();
        let first = record.currencies.values().next().unwrap();
        assert_eq!(first.name.as_deref(), Some("Last"));
    }

    #[test]
    fn test_empty_region_is_absent() {
        let record = CountryRecord::named("Antarctica", "Antarctica", "");
        assert!(record.region().is_none());
    }
}
