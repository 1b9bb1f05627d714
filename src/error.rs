// src/error.rs

use std::num::ParseIntError;

use thiserror::Error;

use crate::extract::Field;

/// Failures specific to scraping and ranking the medal table.
/// Network and I/O failures travel as plain `anyhow` errors with context.
#[derive(Debug, Error)]
pub enum MedalError {
    /// A selector in the site contract does not compile.
    #[error(
        "invalid CSS selector `{selector}` for {what}: {reason} \
         (update the selector table in assets/rio2016.yaml)"
    )]
    InvalidSelector {
        what: String,
        selector: String,
        reason: String,
    },

    /// A medal-table row lacks one of the expected cells.
    #[error("row {row}: nothing matched `{selector}` for {field}; the page layout has changed")]
    MissingField {
        row: usize,
        field: Field,
        selector: String,
    },

    /// A count column holds something other than a non-negative integer.
    #[error("{country}: {field} value `{value}` is not a medal count")]
    BadCount {
        country: String,
        field: Field,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
