// src/present.rs

use std::io::Write;

use anyhow::{Context, Result};
use prettytable::{format, Cell, Row, Table};

use crate::extract::Field;
use crate::rank::RankedRow;

pub const RANK_HEADER: &str = "Rank";

/// Header row: `Rank` followed by every field in extraction order.
pub fn headers() -> Vec<&'static str> {
    std::iter::once(RANK_HEADER)
        .chain(Field::ALL.iter().map(|f| f.label()))
        .collect()
}

/// Build the grid table for `rows`. Counts are right-aligned and shown
/// exactly as scraped.
pub fn render(rows: &[RankedRow]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_DEFAULT);
    table.set_titles(Row::new(headers().into_iter().map(Cell::new).collect()));

    for ranked in rows {
        let mut cells = Vec::with_capacity(Field::ALL.len() + 1);
        cells.push(Cell::new(&ranked.rank.to_string()).style_spec("r"));
        for field in Field::ALL {
            let cell = Cell::new(ranked.row.get(field));
            cells.push(if field.is_count() { cell.style_spec("r") } else { cell });
        }
        table.add_row(Row::new(cells));
    }
    table
}

pub fn write_table<W: Write + ?Sized>(rows: &[RankedRow], out: &mut W) -> Result<()> {
    render(rows).print(out).context("writing medal table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{MedalRow, Tally};

    fn ranked(rank: usize, code: &str, name: &str) -> RankedRow {
        RankedRow {
            rank,
            tally: Tally { gold: 10, silver: 2, bronze: 300, total: 312 },
            row: MedalRow {
                country_code: code.into(),
                country_name: name.into(),
                gold: "10".into(),
                silver: "2".into(),
                bronze: "300".into(),
                total: "312".into(),
            },
        }
    }

    fn to_string(rows: &[RankedRow]) -> String {
        let mut buf = Vec::new();
        write_table(rows, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_order() {
        assert_eq!(
            headers(),
            vec!["Rank", "Country Code", "Country Name", "Gold", "Silver", "Bronze", "Total"]
        );
    }

    #[test]
    fn empty_input_prints_header_only() {
        let out = to_string(&[]);
        let header = out.lines().nth(1).unwrap();
        for h in headers() {
            assert!(header.contains(h), "missing {} in {}", h, header);
        }
        assert!(out.lines().nth(2).unwrap().starts_with("+="));
        assert_eq!(out.lines().filter(|l| l.starts_with('|')).count(), 1);
    }

    #[test]
    fn every_field_reaches_the_output() {
        let rows = vec![ranked(1, "CIV", "Côte d'Ivoire"), ranked(1, "KOS", "Kosovo")];
        let out = to_string(&rows);
        let body: Vec<&str> = out.lines().filter(|l| l.starts_with('|')).skip(1).collect();
        assert_eq!(body.len(), 2);
        for (line, r) in body.iter().zip(&rows) {
            for field in Field::ALL {
                assert!(line.contains(r.row.get(field)), "{} not in {}", field, line);
            }
        }
    }

    #[test]
    fn grid_borders() {
        let out = to_string(&[ranked(1, "USA", "United States")]);
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("+-") && first.ends_with("-+"), "{}", first);
        assert!(out.lines().last().unwrap().starts_with("+-"));
    }
}
