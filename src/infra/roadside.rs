//! Roadside land price (路線価) reference table with longest-prefix address
//! matching.

use std::{collections::BTreeMap, sync::OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::assets::{self, AssetError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadsidePrice {
    pub key: String,
    /// Thousand yen per m².
    pub unit_price: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoadsideMatch {
    pub matched_key: String,
    pub unit_price: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("address is empty")]
    EmptyAddress,
    #[error("no roadside price data covers \"{0}\"")]
    NotFound(String),
    #[error("roadside price data unavailable: {0}")]
    Unavailable(String),
}

#[derive(Deserialize)]
struct RoadsideDataFile {
    fiscal_year: u16,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    areas: Vec<String>,
    prices: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoadsidePriceTable {
    pub fiscal_year: u16,
    pub note: Option<String>,
    /// Municipalities the table covers, for display.
    pub areas: Vec<String>,
    entries: Vec<RoadsidePrice>,
}

impl RoadsidePriceTable {
    pub fn new(fiscal_year: u16, entries: Vec<RoadsidePrice>) -> Self {
        Self {
            fiscal_year,
            note: None,
            areas: Vec::new(),
            entries,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let file: RoadsideDataFile = serde_json::from_str(raw)?;
        let entries = file
            .prices
            .into_iter()
            .map(|(key, unit_price)| RoadsidePrice { key, unit_price })
            .collect();
        Ok(Self {
            fiscal_year: file.fiscal_year,
            note: file.note,
            areas: file.areas,
            entries,
        })
    }

    /// Entries whose key starts with `area`, for the reference listing.
    pub fn entries_in<'a>(&'a self, area: &'a str) -> impl Iterator<Item = &'a RoadsidePrice> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.key.starts_with(area))
    }

    /// Picks the longest key that prefixes the trimmed address. Two distinct
    /// keys of the same length cannot both prefix one address, so there are no ties.
    pub fn lookup(&self, address: &str) -> Result<RoadsideMatch, LookupError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(LookupError::EmptyAddress);
        }

        let best = self
            .entries
            .iter()
            .filter(|entry| !entry.key.is_empty() && address.starts_with(entry.key.as_str()))
            .max_by_key(|entry| entry.key.len());

        match best {
            Some(entry) => {
                tracing::debug!(address, key = %entry.key, price = entry.unit_price, "roadside price matched");
                Ok(RoadsideMatch {
                    matched_key: entry.key.clone(),
                    unit_price: entry.unit_price,
                })
            }
            None => {
                tracing::debug!(address, "no roadside price prefix matched");
                Err(LookupError::NotFound(address.to_string()))
            }
        }
    }
}

/// The table embedded in `assets/roadside_prices.json`, parsed on first use.
pub fn builtin_table() -> Result<&'static RoadsidePriceTable, LookupError> {
    static TABLE: OnceLock<Result<RoadsidePriceTable, String>> = OnceLock::new();
    TABLE
        .get_or_init(|| load_builtin().map_err(|err| err.to_string()))
        .as_ref()
        .map_err(|message| LookupError::Unavailable(message.clone()))
}

fn load_builtin() -> Result<RoadsidePriceTable, AssetError> {
    let raw = assets::roadside_prices_json()?;
    let table = RoadsidePriceTable::from_json(&raw)?;
    tracing::info!(
        entries = table.entries.len(),
        fiscal_year = table.fiscal_year,
        "loaded roadside price table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoadsidePriceTable {
        RoadsidePriceTable::new(
            2023,
            vec![
                RoadsidePrice { key: "松戸市".into(), unit_price: 75.0 },
                RoadsidePrice { key: "松戸市小金原".into(), unit_price: 75.0 },
                RoadsidePrice { key: "松戸市小金原2".into(), unit_price: 77.0 },
                RoadsidePrice { key: "柏市柏".into(), unit_price: 135.0 },
                RoadsidePrice { key: "柏市".into(), unit_price: 90.0 },
            ],
        )
    }

    #[test]
    fn most_specific_prefix_wins() {
        let found = sample().lookup("松戸市小金原2").unwrap();
        assert_eq!(found.matched_key, "松戸市小金原2");
        assert_eq!(found.unit_price, 77.0);

        let found = sample().lookup("  松戸市小金原2丁目10-3 ").unwrap();
        assert_eq!(found.matched_key, "松戸市小金原2");

        let found = sample().lookup("松戸市常盤平").unwrap();
        assert_eq!(found.matched_key, "松戸市");
        assert_eq!(found.unit_price, 75.0);
    }

    #[test]
    fn unknown_and_empty_addresses_fail() {
        assert_eq!(
            sample().lookup("野田市"),
            Err(LookupError::NotFound("野田市".to_string()))
        );
        assert_eq!(sample().lookup("   "), Err(LookupError::EmptyAddress));
    }

    #[test]
    fn table_order_does_not_affect_match() {
        let table = RoadsidePriceTable::new(
            2023,
            vec![
                RoadsidePrice { key: "ab".into(), unit_price: 2.0 },
                RoadsidePrice { key: "a".into(), unit_price: 1.0 },
            ],
        );
        assert_eq!(table.lookup("abc").unwrap().unit_price, 2.0);
    }

    #[test]
    fn builtin_table_contains_documented_entries() {
        let table = builtin_table().unwrap();
        assert_eq!(table.fiscal_year, 2023);
        assert_eq!(table.areas, ["松戸市", "流山市", "柏市"]);

        let found = table.lookup("松戸市小金原2").unwrap();
        assert_eq!(found.matched_key, "松戸市小金原2");
        assert_eq!(found.unit_price, 77.0);

        assert_eq!(table.lookup("柏市柏の葉キャンパス1").unwrap().unit_price, 105.0);
        assert_eq!(table.lookup("流山市おおたかの森東3").unwrap().unit_price, 95.0);
        assert!(table.entries_in("流山市").count() > 10);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(RoadsidePriceTable::from_json("{\"prices\": []}").is_err());
    }
}
