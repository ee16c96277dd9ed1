use crate::dataset::records::ChampionRecord;
use crate::error::AppError;
use std::cmp::Ordering;

/// Numeric field a ranking can be built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankField {
    WinRate,
    PickCount,
    PickRate,
}

impl RankField {
    pub fn value(&self, record: &ChampionRecord) -> f64 {
        match self {
            RankField::WinRate => record.win_rate,
            RankField::PickCount => record.pick_count as f64,
            RankField::PickRate => record.pick_rate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankField::WinRate => "Win Rate",
            RankField::PickCount => "Games",
            RankField::PickRate => "Pick Rate",
        }
    }

    /// Display string for this field on a record, with units attached.
    pub fn display(&self, record: &ChampionRecord) -> String {
        match self {
            RankField::WinRate => record.win_rate_display.clone(),
            RankField::PickCount => format!("{} games", record.pick_count),
            RankField::PickRate => record.pick_rate_display.clone(),
        }
    }
}

/// Stable filter: case-sensitive substring on the champion name (empty
/// matches everything) and a minimum analyzed-games threshold. Matching
/// records keep their source order.
pub fn filter<'a>(
    records: &'a [ChampionRecord],
    name_substring: &str,
    min_count: u32,
) -> Vec<&'a ChampionRecord> {
    records
        .iter()
        .filter(|r| r.champion.contains(name_substring) && r.pick_count >= min_count)
        .collect()
}

/// Largest pick count across all records; the upper bound for threshold
/// inputs. Zero when the dataset is empty.
pub fn max_pick_count(records: &[ChampionRecord]) -> u32 {
    records.iter().map(|r| r.pick_count).max().unwrap_or(0)
}

/// The `n` records with the largest value of `field`, descending.
/// The sort is stable, so tied records keep their source order; that
/// order is visible in displayed rankings and must not drift.
pub fn top_n<'a>(records: &'a [ChampionRecord], field: RankField, n: usize) -> Vec<&'a ChampionRecord> {
    let mut ranked: Vec<&ChampionRecord> = records.iter().collect();
    ranked.sort_by(|a, b| {
        field
            .value(b)
            .partial_cmp(&field.value(a))
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

/// Exact-name lookup. Champion names are unique by data-model invariant,
/// but a duplicated name is reported as `NotFound` rather than silently
/// picking one of the two.
pub fn get<'a>(records: &'a [ChampionRecord], champion_name: &str) -> Result<&'a ChampionRecord, AppError> {
    let mut matches = records.iter().filter(|r| r.champion == champion_name);
    match (matches.next(), matches.next()) {
        (Some(record), None) => Ok(record),
        _ => Err(AppError::NotFound(champion_name.to_string())),
    }
}

/// First row of the source ordering. The pipeline emits rows pre-sorted,
/// and the dashboard headline labels this row "top win rate" — which is a
/// different operation from a true maximum. See `most_played` for the
/// genuine-max counterpart.
pub fn first_row(records: &[ChampionRecord]) -> Option<&ChampionRecord> {
    records.first()
}

/// Record with the true maximum pick count; the first occurrence wins on
/// ties.
pub fn most_played(records: &[ChampionRecord]) -> Option<&ChampionRecord> {
    records
        .iter()
        .reduce(|best, r| if r.pick_count > best.pick_count { r } else { best })
}
