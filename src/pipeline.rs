// src/pipeline.rs

use std::io::Write;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{info, instrument};

use crate::config::{RunConfig, SiteConfig};
use crate::extract::{extract_rows, CompiledSelectors};
use crate::fetch::{build_client, fetch_page};
use crate::present::write_table;
use crate::rank::{rank_rows, SortKey};

/// Everything the run needs, checked before any network traffic.
pub struct Pipeline<'a> {
    site: &'a SiteConfig,
    selectors: CompiledSelectors,
    client: Client,
}

impl<'a> Pipeline<'a> {
    /// Startup capability check: compile every selector in the site
    /// contract and build the HTTP client.
    pub fn preflight(site: &'a SiteConfig) -> Result<Self> {
        let selectors = CompiledSelectors::compile(site).context("site contract check failed")?;
        let client = build_client(&site.user_agent)?;
        Ok(Self {
            site,
            selectors,
            client,
        })
    }

    /// Fetch the page and write the ranked table to `out`. Returns the
    /// number of body rows printed.
    #[instrument(level = "info", skip_all, fields(url = %self.site.url, sort_by = %cfg.sort_by))]
    pub fn run<W: Write + ?Sized>(&self, cfg: &RunConfig, out: &mut W) -> Result<usize> {
        let html = fetch_page(&self.client, &self.site.url)?;
        self.render_page(&html, cfg.sort_by, out)
    }

    /// Extract, rank and print an already fetched page. Nothing is written
    /// unless every row extracts and ranks cleanly.
    pub fn render_page<W: Write + ?Sized>(
        &self,
        html: &[u8],
        sort_by: SortKey,
        out: &mut W,
    ) -> Result<usize> {
        let rows = extract_rows(html, &self.selectors)?;
        let ranked = rank_rows(rows, sort_by)?;
        write_table(&ranked, out)?;
        info!(rows = ranked.len(), "printed medal table");
        Ok(ranked.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MedalError;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,medaltable=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn tr(code: &str, name: &str, g: &str, s: &str, b: &str, t: &str) -> String {
        format!(
            r#"<tr class="table-medal-countries__link-table">
  <td class="col-1">-</td>
  <td class="col-2"><span class="country">{}</span></td>
  <td class="col-3"><span class="country">{}</span></td>
  <td class="col-4">{}</td><td class="col-5">{}</td><td class="col-6">{}</td>
  <td class="col-7"><strong>{}</strong></td>
</tr>"#,
            code, name, g, s, b, t
        )
    }

    fn page(rows: &[String]) -> Vec<u8> {
        format!(
            "<html><body><table><tbody>{}</tbody></table></body></html>",
            rows.concat()
        )
        .into_bytes()
    }

    fn body_lines(out: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(out)
            .lines()
            .filter(|l| l.starts_with('|'))
            .skip(1)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn ranks_and_prints_page() -> Result<()> {
        init_test_logging();
        let pipeline = Pipeline::preflight(SiteConfig::builtin())?;
        let html = page(&[
            tr("AAA", "Alpha", "3", "2", "1", "6"),
            tr("BBB", "Beta", "3", "2", "1", "6"),
            tr("CCC", "Gamma", "2", "5", "0", "7"),
        ]);

        let mut out = Vec::new();
        let printed = pipeline.render_page(&html, SortKey::Total, &mut out)?;
        assert_eq!(printed, 3);

        let lines = body_lines(&out);
        assert!(lines[0].contains("CCC") && lines[0].trim_start_matches('|').trim().starts_with('1'));
        assert!(lines[1].contains("AAA") && lines[1].trim_start_matches('|').trim().starts_with('2'));
        assert!(lines[2].contains("BBB") && lines[2].trim_start_matches('|').trim().starts_with('2'));
        Ok(())
    }

    #[test]
    fn sort_key_changes_order() -> Result<()> {
        let pipeline = Pipeline::preflight(SiteConfig::builtin())?;
        let html = page(&[
            tr("AAA", "Alpha", "3", "2", "1", "6"),
            tr("CCC", "Gamma", "2", "5", "0", "7"),
        ]);
        let mut out = Vec::new();
        pipeline.render_page(&html, SortKey::Gold, &mut out)?;
        let lines = body_lines(&out);
        assert!(lines[0].contains("AAA"));
        assert!(lines[1].contains("CCC"));
        Ok(())
    }

    #[test]
    fn empty_page_prints_header_only() -> Result<()> {
        let pipeline = Pipeline::preflight(SiteConfig::builtin())?;
        let mut out = Vec::new();
        let printed = pipeline.render_page(&page(&[]), SortKey::Total, &mut out)?;
        assert_eq!(printed, 0);
        assert!(String::from_utf8_lossy(&out).contains("Country Code"));
        assert!(body_lines(&out).is_empty());
        Ok(())
    }

    #[test]
    fn bad_count_prints_nothing() {
        let pipeline = Pipeline::preflight(SiteConfig::builtin()).unwrap();
        let html = page(&[
            tr("AAA", "Alpha", "3", "2", "1", "6"),
            tr("BBB", "Beta", "3", "two", "1", "6"),
        ]);
        let mut out = Vec::new();
        let err = pipeline.render_page(&html, SortKey::Total, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MedalError>(),
            Some(MedalError::BadCount { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn broken_contract_fails_preflight() {
        let mut site = SiteConfig::builtin().clone();
        site.row_selector = "tr[".to_string();
        let err = Pipeline::preflight(&site).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<MedalError>(),
            Some(MedalError::InvalidSelector { .. })
        ));
        assert!(format!("{:#}", err).contains("assets/rio2016.yaml"));
    }
}
