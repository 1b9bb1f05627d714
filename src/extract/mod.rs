// src/extract/mod.rs

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, warn};

use crate::config::SiteConfig;
use crate::error::MedalError;

pub mod types;

pub use types::{Field, MedalRow, Tally};

/// A compiled field selector together with its source text, kept for error messages.
#[derive(Debug, Clone)]
struct FieldSelector {
    css: String,
    selector: Selector,
}

/// The site contract's selectors, compiled once at startup.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    row: Selector,
    /// Indexed by `Field as usize`, in `Field::ALL` order.
    fields: Vec<FieldSelector>,
}

fn parse_selector(what: &str, css: &str) -> Result<Selector, MedalError> {
    Selector::parse(css).map_err(|e| MedalError::InvalidSelector {
        what: what.to_string(),
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

impl CompiledSelectors {
    pub fn compile(site: &SiteConfig) -> Result<Self, MedalError> {
        let row = parse_selector("table rows", &site.row_selector)?;
        let fields = Field::ALL
            .iter()
            .map(|&field| {
                let css = site.fields.get(field);
                Ok(FieldSelector {
                    css: css.to_string(),
                    selector: parse_selector(field.label(), css)?,
                })
            })
            .collect::<Result<Vec<_>, MedalError>>()?;
        Ok(Self { row, fields })
    }

    fn field(&self, field: Field) -> &FieldSelector {
        &self.fields[field as usize]
    }
}

/// Pull one [`MedalRow`] out of every medal-table row in `html`, in document order.
///
/// Each field is the inner markup of the first element its selector matches
/// inside the row, with newlines removed. A row missing any field is an error.
#[instrument(level = "debug", skip_all, fields(bytes = html.len()))]
pub fn extract_rows(html: &[u8], selectors: &CompiledSelectors) -> Result<Vec<MedalRow>, MedalError> {
    let text = String::from_utf8_lossy(html);
    let document = Html::parse_document(&text);

    let rows = document
        .select(&selectors.row)
        .enumerate()
        .map(|(idx, tr)| extract_row(idx + 1, tr, selectors))
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        warn!("no medal table rows found on the page");
    } else {
        debug!(rows = rows.len(), "extracted medal rows");
    }
    Ok(rows)
}

fn extract_row(
    row: usize,
    tr: ElementRef<'_>,
    selectors: &CompiledSelectors,
) -> Result<MedalRow, MedalError> {
    MedalRow::try_from_fn(|field| {
        let fs = selectors.field(field);
        let cell = tr
            .select(&fs.selector)
            .next()
            .ok_or_else(|| MedalError::MissingField {
                row,
                field,
                selector: fs.css.clone(),
            })?;
        debug!(row, key = %field, selector = %fs.css, "matched {}", cell.html());
        Ok(cell.inner_html().replace('\n', ""))
    })
}
