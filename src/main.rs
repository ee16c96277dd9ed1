mod analysis;
mod config;
mod dataset;
mod display;
mod error;

use analysis::query::{self, RankField};
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use dataset::loader::StatsCache;
use display::output::{
    display_champion_detail, display_error, display_info, display_missing_champion,
    display_stats_table, display_summary, display_top_ranking,
};
use error::AppError;
use std::path::PathBuf;

// Matches the original dashboard's default threshold slider position.
const DEFAULT_MIN_GAMES: u32 = 5;
const DEFAULT_TOP_N: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "ARAM Synergy")]
#[command(about = "Browse ARAM core-item synergy statistics", long_about = None)]
struct Args {
    /// Path to the stats CSV (overrides ARAM_DATA_PATH)
    #[arg(long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Headline metrics for the dataset
    Summary,

    /// Per-champion stats table with search and threshold filters
    Table {
        /// Champion name substring (case-sensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Minimum analyzed games
        #[arg(short, long, default_value_t = DEFAULT_MIN_GAMES)]
        min_games: u32,
    },

    /// Top champions ranked by a metric
    Top {
        /// Metric to rank by
        #[arg(short, long, value_enum, default_value = "win-rate")]
        by: RankBy,

        /// Number of champions to show
        #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
        n: usize,
    },

    /// Recommended item combos for one champion
    Detail {
        /// Exact champion name
        champion: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RankBy {
    WinRate,
    PickCount,
    PickRate,
}

impl From<RankBy> for RankField {
    fn from(by: RankBy) -> Self {
        match by {
            RankBy::WinRate => RankField::WinRate,
            RankBy::PickCount => RankField::PickCount,
            RankBy::PickRate => RankField::PickRate,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(path) = args.data {
        config.data_path = path;
    }

    let mut cache = StatsCache::new(config.data_path.clone(), config.total_matches);
    let records = cache.records()?;

    match args.command {
        Some(Command::Summary) => display_summary(records),
        Some(Command::Table { search, min_games }) => {
            // The query layer leaves threshold clamping to its caller.
            let min_games = min_games.min(query::max_pick_count(records));
            let rows = query::filter(records, &search, min_games);
            display_stats_table(&rows);
        }
        Some(Command::Top { by, n }) => {
            let field = RankField::from(by);
            display_top_ranking(&query::top_n(records, field, n), field);
        }
        Some(Command::Detail { champion }) => match query::get(records, &champion) {
            Ok(record) => display_champion_detail(record),
            // Recoverable: a missing champion gets a placeholder, not a crash.
            Err(AppError::NotFound(name)) => display_missing_champion(&name),
            Err(e) => return Err(e),
        },
        None => {
            // Full dashboard: summary, filtered table, both top-10 charts.
            display_summary(records);
            display_info(&format!(
                "Showing champions with at least {} analyzed games",
                DEFAULT_MIN_GAMES
            ));
            let min_games = DEFAULT_MIN_GAMES.min(query::max_pick_count(records));
            let rows = query::filter(records, "", min_games);
            display_stats_table(&rows);
            display_top_ranking(
                &query::top_n(records, RankField::WinRate, DEFAULT_TOP_N),
                RankField::WinRate,
            );
            display_top_ranking(
                &query::top_n(records, RankField::PickCount, DEFAULT_TOP_N),
                RankField::PickCount,
            );
        }
    }

    Ok(())
}
