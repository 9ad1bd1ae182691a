//! Parsing and extraction of the daily reference-rate document.
//!
//! The feed is a small XML envelope shaped
//! `Envelope > Cube > Cube[@time] > Cube[@currency][@rate]*`. Parsing and
//! extraction are separate stages: [`parse_feed`] only requires well-formed
//! XML, while [`extract`] walks the fixed element path and enforces the
//! attribute set, all or nothing.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, ExtractError, InputError};

/// Root of the feed document.
///
/// Every level is optional so that a well-formed document with the wrong
/// shape still parses and is rejected in [`extract`] with a message naming
/// the missing element.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Cube")]
    cube: Option<CubeGroup>,
}

#[derive(Debug, Deserialize)]
struct CubeGroup {
    #[serde(rename = "Cube")]
    daily: Option<DailyCube>,
}

#[derive(Debug, Deserialize)]
struct DailyCube {
    time: Option<String>,
    #[serde(rename = "Cube", default)]
    rates: Vec<RateCube>,
}

#[derive(Debug, Deserialize)]
struct RateCube {
    currency: Option<String>,
    rate: Option<String>,
}

/// Parses the raw feed text into a document tree.
pub fn parse_feed(xml: &str) -> Result<Envelope, Error> {
    serde_xml_rs::from_str(xml).map_err(Error::Parse)
}

fn descend<T>(level: Option<T>, element: &'static str) -> Result<T, ExtractError> {
    level.ok_or(ExtractError::MissingElement(element))
}

/// Walks the fixed element path and builds the rate table.
///
/// Currency codes are uppercased on insert. A missing attribute or a
/// non-numeric rate value anywhere aborts the whole extraction; no partial
/// table is ever returned.
pub fn extract(doc: Envelope) -> Result<RateTable, Error> {
    let group = descend(doc.cube, "rate grouping Cube")?;
    let daily = descend(group.daily, "daily Cube")?;
    if let Some(time) = &daily.time {
        debug!("Feed document is dated {time}");
    }

    let mut rates = HashMap::with_capacity(daily.rates.len());
    for entry in daily.rates {
        let code = entry
            .currency
            .ok_or(ExtractError::MissingCurrency)?
            .to_uppercase();
        let value = entry
            .rate
            .ok_or_else(|| ExtractError::MissingRate(code.clone()))?;
        let rate: f64 = value.parse().map_err(|_| ExtractError::UnparsableRate {
            code: code.clone(),
            value,
        })?;
        rates.insert(code, rate);
    }

    Ok(RateTable { rates })
}

/// Currency code to rate, every rate relative to the feed's anchor currency.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Converts `amount` between two currencies listed in the table.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, InputError> {
        let from_rate = self.rate_of(from)?;
        let to_rate = self.rate_of(to)?;
        Ok(amount / from_rate * to_rate)
    }

    fn rate_of(&self, code: &str) -> Result<f64, InputError> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| InputError::UnknownCurrency(code.to_string()))
    }

    /// All known currency codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
