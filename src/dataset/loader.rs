use crate::analysis::derive::derive_record;
use crate::dataset::records::{ChampionRecord, RawChampionRow};
use crate::error::AppError;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read the stats CSV and attach all derived fields, preserving row order.
///
/// A missing or unreadable file is terminal for the session; callers must
/// surface the error instead of rendering a partial view.
pub fn load_records(path: &Path, total_matches: u32) -> Result<Vec<ChampionRecord>, AppError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|_| AppError::DataUnavailable(path.to_path_buf()))?;

    read_records(reader, total_matches)
}

/// Same as `load_records` but from any reader; used by tests with
/// in-memory fixtures.
pub fn load_records_from_reader<R: Read>(
    reader: R,
    total_matches: u32,
) -> Result<Vec<ChampionRecord>, AppError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    read_records(reader, total_matches)
}

fn read_records<R: Read>(
    mut reader: csv::Reader<R>,
    total_matches: u32,
) -> Result<Vec<ChampionRecord>, AppError> {
    let mut records = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for row in reader.deserialize::<RawChampionRow>() {
        let row = row.map_err(|e| AppError::MalformedRow(e.to_string()))?;
        if row.champion.is_empty() {
            return Err(AppError::MalformedRow(
                "row with empty champion name".to_string(),
            ));
        }
        let record = derive_record(row, total_matches)?;
        if !seen.insert(record.champion.clone()) {
            return Err(AppError::DuplicateChampion(record.champion));
        }
        records.push(record);
    }

    Ok(records)
}

/// Caller-owned memoization cell around `load_records`.
///
/// Loads at most once; the records are read-only for the rest of the
/// session and a re-read only happens after an explicit `invalidate`.
pub struct StatsCache {
    path: PathBuf,
    total_matches: u32,
    records: Option<Vec<ChampionRecord>>,
}

impl StatsCache {
    pub fn new(path: PathBuf, total_matches: u32) -> Self {
        StatsCache {
            path,
            total_matches,
            records: None,
        }
    }

    pub fn records(&mut self) -> Result<&[ChampionRecord], AppError> {
        if self.records.is_none() {
            self.records = Some(load_records(&self.path, self.total_matches)?);
        }
        Ok(self.records.as_deref().unwrap_or_default())
    }

    pub fn invalidate(&mut self) {
        self.records = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "champion,overall_win_rate,pick_count,\
wr1_combo,wr1_wr,wr2_combo,wr2_wr,wr3_combo,wr3_wr,\
games1_combo,games1_count,games2_combo,games2_count,games3_combo,games3_count";

    fn fixture_csv() -> String {
        format!(
            "{}\n\
Ashe,52.3%,6746,IE + BT,61.2%,IE + PD,58.9%,Kraken + Runaan's,55.4%,Kraken + Runaan's,812,IE + BT,644,IE + PD,310\n\
Ziggs,55.0%,100,Luden's + Deathcap,60.0%,Luden's + Horizon,57.1%,Liandry's + Deathcap,54.0%,Luden's + Deathcap,44,Luden's + Horizon,31,Liandry's + Deathcap,12\n",
            HEADER
        )
    }

    #[test]
    fn loads_rows_in_source_order_with_derived_fields() {
        let records = load_records_from_reader(Cursor::new(fixture_csv()), 134_925).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].champion, "Ashe");
        assert_eq!(records[1].champion, "Ziggs");

        // Numeric win rate round-trips from the display string.
        for r in &records {
            let reparsed: f64 = r.win_rate_display.trim_end_matches('%').parse().unwrap();
            assert!((r.win_rate - reparsed).abs() < f64::EPSILON);
        }

        assert_eq!(records[0].pick_rate_display, "50.0%");
        assert_eq!(records[0].win_rate_combos[2].combo, "Kraken + Runaan's");
        assert_eq!(records[1].popular_combos[1].games, 31);
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let err = load_records(Path::new("/nonexistent/aram_top3.csv"), 134_925).unwrap_err();
        assert!(matches!(err, AppError::DataUnavailable(_)));
    }

    #[test]
    fn malformed_win_rate_aborts_the_load() {
        let csv = format!(
            "{}\nAshe,not-a-rate,10,a,1%,b,1%,c,1%,a,1,b,1,c,1\n",
            HEADER
        );
        let err = load_records_from_reader(Cursor::new(csv), 134_925).unwrap_err();
        assert!(matches!(err, AppError::MalformedField { .. }));
    }

    #[test]
    fn duplicate_champion_aborts_the_load() {
        let csv = format!(
            "{}\n\
Ashe,52.3%,10,a,1%,b,1%,c,1%,a,1,b,1,c,1\n\
Ashe,48.0%,20,a,1%,b,1%,c,1%,a,1,b,1,c,1\n",
            HEADER
        );
        let err = load_records_from_reader(Cursor::new(csv), 134_925).unwrap_err();
        match err {
            AppError::DuplicateChampion(name) => assert_eq!(name, "Ashe"),
            other => panic!("expected DuplicateChampion, got {:?}", other),
        }
    }

    #[test]
    fn empty_champion_name_is_rejected() {
        let csv = format!("{}\n,52.3%,10,a,1%,b,1%,c,1%,a,1,b,1,c,1\n", HEADER);
        let err = load_records_from_reader(Cursor::new(csv), 134_925).unwrap_err();
        assert!(matches!(err, AppError::MalformedRow(_)));
    }

    #[test]
    fn short_row_is_malformed() {
        let csv = format!("{}\nAshe,52.3%,10\n", HEADER);
        let err = load_records_from_reader(Cursor::new(csv), 134_925).unwrap_err();
        assert!(matches!(err, AppError::MalformedRow(_)));
    }

    #[test]
    fn cache_loads_once_and_serves_reads() {
        let path = std::env::temp_dir().join(format!(
            "aram_synergy_cache_test_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, fixture_csv()).unwrap();

        let mut cache = StatsCache::new(path.clone(), 134_925);
        assert_eq!(cache.records().unwrap().len(), 2);

        // The cached copy survives removal of the backing file; only an
        // explicit invalidate forces a re-read.
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cache.records().unwrap().len(), 2);

        cache.invalidate();
        assert!(matches!(
            cache.records(),
            Err(AppError::DataUnavailable(_))
        ));
    }

    #[test]
    fn cache_propagates_load_failure_and_retries_after_invalidate() {
        let mut cache = StatsCache::new(PathBuf::from("/nonexistent/aram_top3.csv"), 134_925);
        assert!(matches!(
            cache.records(),
            Err(AppError::DataUnavailable(_))
        ));
        // A failed load leaves the cache empty; the next call retries.
        cache.invalidate();
        assert!(cache.records().is_err());
    }
}
