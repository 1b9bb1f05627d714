// src/rank.rs

use std::cmp::Reverse;
use std::fmt;

use clap::ValueEnum;
use tracing::debug;

use crate::error::MedalError;
use crate::extract::{Field, MedalRow, Tally};

/// Column used as the primary sort key. Gold, Silver and Bronze always
/// follow as tie-breakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[value(name = "Gold")]
    Gold,
    #[value(name = "Silver")]
    Silver,
    #[value(name = "Bronze")]
    Bronze,
    #[default]
    #[value(name = "Total")]
    Total,
}

impl SortKey {
    pub fn field(self) -> Field {
        match self {
            SortKey::Gold => Field::Gold,
            SortKey::Silver => Field::Silver,
            SortKey::Bronze => Field::Bronze,
            SortKey::Total => Field::Total,
        }
    }

    fn pick(self, tally: &Tally) -> u32 {
        match self {
            SortKey::Gold => tally.gold,
            SortKey::Silver => tally.silver,
            SortKey::Bronze => tally.bronze,
            SortKey::Total => tally.total,
        }
    }

    /// The full descending sort tuple for a row.
    pub fn sort_tuple(self, tally: &Tally) -> (u32, u32, u32, u32) {
        (self.pick(tally), tally.gold, tally.silver, tally.bronze)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field().label())
    }
}

/// A [`MedalRow`] with its position in the final table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    pub rank: usize,
    pub tally: Tally,
    pub row: MedalRow,
}

/// Weighted value used only to decide whether two neighbours share a rank.
pub fn medal_value(tally: &Tally) -> u64 {
    u64::from(tally.gold) * 1_000_000 + u64::from(tally.silver) * 1_000 + u64::from(tally.bronze)
}

/// Sort `rows` by `sort_by` then Gold, Silver, Bronze (all descending) and
/// number them.
///
/// A row shares the previous row's rank when their medal values are equal;
/// otherwise its rank is its 1-based position. Ties are detected on medal
/// value even when `sort_by` is another column, so two rows with identical
/// Gold/Silver/Bronze but different totals still share a rank.
///
/// Every count is parsed before anything is sorted, so a malformed value
/// fails the whole call.
pub fn rank_rows(rows: Vec<MedalRow>, sort_by: SortKey) -> Result<Vec<RankedRow>, MedalError> {
    debug!(%sort_by, rows = rows.len(), "ranking");

    let mut tallied = rows
        .into_iter()
        .map(|row| row.tally().map(|tally| (tally, row)))
        .collect::<Result<Vec<_>, _>>()?;

    // stable: identical tuples keep page order
    tallied.sort_by_key(|(tally, _)| Reverse(sort_by.sort_tuple(tally)));

    Ok(assign_ranks(tallied))
}

fn assign_ranks(sorted: Vec<(Tally, MedalRow)>) -> Vec<RankedRow> {
    let mut out: Vec<RankedRow> = Vec::with_capacity(sorted.len());
    let mut previous: Option<(u64, usize)> = None;

    for (idx, (tally, row)) in sorted.into_iter().enumerate() {
        let position = idx + 1;
        let value = medal_value(&tally);
        let rank = match previous {
            Some((prev_value, prev_rank)) if prev_value == value => prev_rank,
            _ => position,
        };
        debug!(country = %row.country_code, value, rank, "ranked");
        previous = Some((value, rank));
        out.push(RankedRow { rank, tally, row });
    }
    out
}
