//! Expiration date value object.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockroom_core::{DomainError, ValueObject};

/// Input/output pattern for expiration dates (`DD/MM/YYYY`).
///
/// Parsing accepts one-digit day and month (`5/3/2099`); formatting always pads.
pub const EXPIRATION_FORMAT: &str = "%d/%m/%Y";

/// Calendar date after which a product may no longer be sold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Expiration(NaiveDate);

impl ValueObject for Expiration {}

impl Expiration {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        NaiveDate::parse_from_str(raw.trim(), EXPIRATION_FORMAT)
            .map(Self)
            .map_err(|e| {
                DomainError::invalid_data(format!("expiration {raw:?} is not DD/MM/YYYY: {e}"))
            })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// A product expiring on `today` is still valid.
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        self.0 >= today
    }

    /// Validity against the local calendar date at call time.
    pub fn is_valid_now(&self) -> bool {
        self.is_valid_on(today())
    }

    /// Zero-padded `DD/MM/YYYY` rendering.
    pub fn to_canonical(&self) -> String {
        format!("{:02}/{:02}/{}", self.0.day(), self.0.month(), self.0.year())
    }
}

/// Local calendar date used for expiration checks.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl core::fmt::Display for Expiration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

impl core::str::FromStr for Expiration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Expiration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical())
    }
}

impl<'de> Deserialize<'de> for Expiration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
