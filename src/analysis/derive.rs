use crate::dataset::records::{ChampionRecord, PopularCombo, RawChampionRow, WinRateCombo};
use crate::error::AppError;

/// Total matches covered by the current analysis corpus snapshot.
pub const TOTAL_MATCHES: u32 = 134_925;

/// The pipeline counts a pick once per player slot, not once per match,
/// so pick rate is scaled back up by the slots-per-match factor.
const PLAYERS_PER_MATCH: f64 = 10.0;

/// Parse a `"52.3%"`-style display string into its numeric value.
///
/// A string that does not parse to a finite percentage in 0-100 fails the
/// load outright; defaulting to zero would silently corrupt every ranking
/// built on it, and a NaN would break ordering comparisons downstream.
pub fn parse_percent(champion: &str, field: &'static str, value: &str) -> Result<f64, AppError> {
    let malformed = || AppError::MalformedField {
        champion: champion.to_string(),
        field,
        value: value.to_string(),
    };

    let parsed = value
        .trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .map_err(|_| malformed())?;

    if !parsed.is_finite() || !(0.0..=100.0).contains(&parsed) {
        return Err(malformed());
    }

    Ok(parsed)
}

/// Share of match-participant slots in which the champion was picked.
///
/// Keep the formula as written: the `* 100 * PLAYERS_PER_MATCH` shape encodes
/// the pipeline's per-slot counting convention and is not to be folded.
pub fn pick_rate(pick_count: u32, total_matches: u32) -> f64 {
    pick_count as f64 / total_matches as f64 * 100.0 * PLAYERS_PER_MATCH
}

/// Attach all derived fields to one raw row. Pure; recomputed in full on
/// every load so a changed corpus constant can never leave stale fields.
pub fn derive_record(row: RawChampionRow, total_matches: u32) -> Result<ChampionRecord, AppError> {
    let win_rate = parse_percent(&row.champion, "overall_win_rate", &row.overall_win_rate)?;
    let rate = pick_rate(row.pick_count, total_matches);

    Ok(ChampionRecord {
        win_rate,
        pick_rate: rate,
        pick_rate_display: format!("{:.1}%", rate),
        win_rate_combos: [
            WinRateCombo {
                combo: row.wr1_combo,
                win_rate_display: row.wr1_wr,
            },
            WinRateCombo {
                combo: row.wr2_combo,
                win_rate_display: row.wr2_wr,
            },
            WinRateCombo {
                combo: row.wr3_combo,
                win_rate_display: row.wr3_wr,
            },
        ],
        popular_combos: [
            PopularCombo {
                combo: row.games1_combo,
                games: row.games1_count,
            },
            PopularCombo {
                combo: row.games2_combo,
                games: row.games2_count,
            },
            PopularCombo {
                combo: row.games3_combo,
                games: row.games3_count,
            },
        ],
        champion: row.champion,
        win_rate_display: row.overall_win_rate,
        pick_count: row.pick_count,
    })
}
