// src/extract/types.rs

use std::fmt;

use crate::error::MedalError;

/// One column of the scraped medal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CountryCode,
    CountryName,
    Gold,
    Silver,
    Bronze,
    Total,
}

impl Field {
    /// Extraction order, which is also the display order after `Rank`.
    pub const ALL: [Field; 6] = [
        Field::CountryCode,
        Field::CountryName,
        Field::Gold,
        Field::Silver,
        Field::Bronze,
        Field::Total,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::CountryCode => "Country Code",
            Field::CountryName => "Country Name",
            Field::Gold => "Gold",
            Field::Silver => "Silver",
            Field::Bronze => "Bronze",
            Field::Total => "Total",
        }
    }

    pub fn is_count(self) -> bool {
        !matches!(self, Field::CountryCode | Field::CountryName)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single country's row as scraped from the page. Values are kept as text;
/// counts are only parsed when ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedalRow {
    pub country_code: String,
    pub country_name: String,
    pub gold: String,
    pub silver: String,
    pub bronze: String,
    pub total: String,
}

/// Parsed medal counts of a [`MedalRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl MedalRow {
    /// Build a row by looking up every field through `value_of`.
    pub fn try_from_fn<E>(mut value_of: impl FnMut(Field) -> Result<String, E>) -> Result<Self, E> {
        Ok(Self {
            country_code: value_of(Field::CountryCode)?,
            country_name: value_of(Field::CountryName)?,
            gold: value_of(Field::Gold)?,
            silver: value_of(Field::Silver)?,
            bronze: value_of(Field::Bronze)?,
            total: value_of(Field::Total)?,
        })
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CountryCode => &self.country_code,
            Field::CountryName => &self.country_name,
            Field::Gold => &self.gold,
            Field::Silver => &self.silver,
            Field::Bronze => &self.bronze,
            Field::Total => &self.total,
        }
    }

    /// Parse the four count columns. Surrounding whitespace is ignored.
    pub fn tally(&self) -> Result<Tally, MedalError> {
        Ok(Tally {
            gold: self.count(Field::Gold)?,
            silver: self.count(Field::Silver)?,
            bronze: self.count(Field::Bronze)?,
            total: self.count(Field::Total)?,
        })
    }

    fn count(&self, field: Field) -> Result<u32, MedalError> {
        let value = self.get(field);
        value
            .trim()
            .parse::<u32>()
            .map_err(|source| MedalError::BadCount {
                country: self.country_code.clone(),
                field,
                value: value.to_string(),
                source,
            })
    }
}
