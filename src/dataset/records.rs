use serde::Deserialize;

/// One raw CSV row as written by the external analysis pipeline.
///
/// Win rates arrive as display strings with a trailing `%`; the numeric
/// counterparts are computed once at load time, never re-parsed per access.
#[derive(Debug, Deserialize)]
pub struct RawChampionRow {
    pub champion: String,
    pub overall_win_rate: String,
    pub pick_count: u32,
    pub wr1_combo: String,
    pub wr1_wr: String,
    pub wr2_combo: String,
    pub wr2_wr: String,
    pub wr3_combo: String,
    pub wr3_wr: String,
    pub games1_combo: String,
    pub games1_count: u32,
    pub games2_combo: String,
    pub games2_count: u32,
    pub games3_combo: String,
    pub games3_count: u32,
}

/// An item combo ranked by its win rate when built on this champion.
#[derive(Debug, Clone)]
pub struct WinRateCombo {
    pub combo: String,
    pub win_rate_display: String,
}

/// An item combo ranked by how many analyzed games it appeared in.
#[derive(Debug, Clone)]
pub struct PopularCombo {
    pub combo: String,
    pub games: u32,
}

/// Per-champion aggregate statistics with all derived fields attached.
///
/// Records are immutable after load and keep the source file's row order;
/// that order carries meaning (the pipeline emits rows pre-sorted, and the
/// dashboard headline reads the first row).
#[derive(Debug, Clone)]
pub struct ChampionRecord {
    pub champion: String,
    pub win_rate_display: String,
    pub win_rate: f64,
    pub pick_count: u32,
    pub pick_rate: f64,
    pub pick_rate_display: String,
    /// Rank slots 1 (best) to 3, ordered as stored.
    pub win_rate_combos: [WinRateCombo; 3],
    /// Rank slots 1 (best) to 3, ordered as stored.
    pub popular_combos: [PopularCombo; 3],
}
