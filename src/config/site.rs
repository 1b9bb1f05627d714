// src/config/site.rs

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use url::Url;

use crate::extract::Field;

static BUILTIN_YAML: &str = include_str!("../../assets/rio2016.yaml");

static BUILTIN: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::from_yaml_str(BUILTIN_YAML).expect("assets/rio2016.yaml should be a valid site config")
});

/// The contract with the scraped page: where it lives and how its medal
/// table is marked up.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub url: Url,
    pub user_agent: String,
    /// Matches one `<tr>` per country.
    pub row_selector: String,
    pub fields: FieldSelectors,
}

/// One selector per [`Field`], applied inside a matched row.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FieldSelectors {
    #[serde(rename = "Country Code")]
    pub country_code: String,
    #[serde(rename = "Country Name")]
    pub country_name: String,
    #[serde(rename = "Gold")]
    pub gold: String,
    #[serde(rename = "Silver")]
    pub silver: String,
    #[serde(rename = "Bronze")]
    pub bronze: String,
    #[serde(rename = "Total")]
    pub total: String,
}

impl FieldSelectors {
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
}

impl SiteConfig {
    /// The Rio 2016 contract compiled into the binary.
    pub fn builtin() -> &'static SiteConfig {
        &BUILTIN
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("parsing site config YAML")
    }
}
