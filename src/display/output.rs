use crate::analysis::query::{self, RankField};
use crate::dataset::records::ChampionRecord;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const BAR_WIDTH: usize = 24;

#[derive(Tabled)]
struct StatsRow {
    champion: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    games: String,
    #[tabled(rename = "pick rate")]
    pick_rate: String,
    #[tabled(rename = "best combo (WR)")]
    best_wr_combo: String,
    #[tabled(rename = "best combo (games)")]
    best_games_combo: String,
}

#[derive(Tabled)]
struct RankRow {
    rank: String,
    champion: String,
    value: String,
    #[tabled(rename = "")]
    bar: String,
}

pub fn display_summary(records: &[ChampionRecord]) {
    println!("\n{}", "📊 ARAM CORE-ITEM SYNERGY STATS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    println!(
        "{} {}",
        "Champions analyzed:".bold(),
        records.len().to_string().green()
    );

    // Headline row: the pipeline pre-sorts its output, so the first row is
    // what the dashboard labels "top win rate". Not a computed maximum.
    if let Some(first) = query::first_row(records) {
        println!(
            "{} {} ({})",
            "Top win rate:".bold(),
            first.champion.green(),
            first.win_rate_display
        );
    }

    if let Some(most) = query::most_played(records) {
        println!(
            "{} {} ({} games)",
            "Most data:".bold(),
            most.champion.green(),
            most.pick_count
        );
    }

    println!();
}

pub fn display_stats_table(rows: &[&ChampionRecord]) {
    println!("\n{}", "🏆 CHAMPION STATS & COMBOS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if rows.is_empty() {
        println!("{}", "No champions match the current filter".yellow());
        return;
    }

    let table_rows: Vec<StatsRow> = rows
        .iter()
        .map(|r| StatsRow {
            champion: r.champion.clone(),
            win_rate: r.win_rate_display.clone(),
            games: r.pick_count.to_string(),
            pick_rate: r.pick_rate_display.clone(),
            best_wr_combo: r.win_rate_combos[0].combo.clone(),
            best_games_combo: r.popular_combos[0].combo.clone(),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_top_ranking(ranked: &[&ChampionRecord], field: RankField) {
    println!(
        "\n{}",
        format!("📈 TOP {} BY {}", ranked.len(), field.label().to_uppercase())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if ranked.is_empty() {
        println!("{}", "No data to rank".yellow());
        return;
    }

    let max_value = field.value(ranked[0]).max(f64::MIN_POSITIVE);

    let rows: Vec<RankRow> = ranked
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let filled =
                ((field.value(r) / max_value) * BAR_WIDTH as f64).round().max(1.0) as usize;
            let bar = "█".repeat(filled);
            let bar = match field {
                RankField::WinRate => bar.red().to_string(),
                RankField::PickCount | RankField::PickRate => bar.blue().to_string(),
            };
            RankRow {
                rank: format!("#{}", idx + 1),
                champion: r.champion.clone(),
                value: field.display(r),
                bar,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champion_detail(record: &ChampionRecord) {
    println!(
        "\n{}",
        format!("🔍 {} — COMBO ANALYSIS", record.champion)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());
    println!(
        "Overall: {} win rate over {} games ({} pick rate)\n",
        record.win_rate_display.green(),
        record.pick_count,
        record.pick_rate_display
    );

    println!("{}", "✨ Best combos by win rate".bold().yellow());
    for (idx, slot) in record.win_rate_combos.iter().enumerate() {
        println!(
            "  #{}: {} ({})",
            idx + 1,
            slot.combo,
            slot.win_rate_display
        );
    }

    println!("\n{}", "🔥 Most played combos".bold().yellow());
    for (idx, slot) in record.popular_combos.iter().enumerate() {
        println!("  #{}: {} ({} games)", idx + 1, slot.combo, slot.games);
    }

    println!();
}

pub fn display_missing_champion(name: &str) {
    println!(
        "\n{} {}\n",
        "No data for champion:".yellow(),
        name.bold()
    );
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}
