use crate::analysis::AnalysisResult;
use crate::pipeline::MatchRecord;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const PREVIEW_ROWS: usize = 5;

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Match")]
    match_id: String,
    champion: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    lane: String,
    mode: String,
    result: String,
}

#[derive(Tabled)]
struct StatRow {
    statistic: String,
    value: String,
}

/// `average_kda` -> `Average Kda`
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_match_preview(records: &[MatchRecord]) {
    println!(
        "\n{}",
        format!("📊 COLLECTED MATCHES ({} total, first {} shown)", records.len(), PREVIEW_ROWS.min(records.len()))
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<MatchRow> = records
        .iter()
        .take(PREVIEW_ROWS)
        .map(|r| MatchRow {
            match_id: r.match_id.clone(),
            champion: r.champion_name.clone(),
            kda: format!("{}/{}/{}", r.kills, r.deaths, r.assists),
            lane: r.lane.clone(),
            mode: r.game_mode.clone(),
            result: if r.win {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_analysis(result: &AnalysisResult, player_name: &str) {
    println!(
        "\n{}",
        format!("🎮 Match Analysis for {}", player_name).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<StatRow> = result
        .entries()
        .into_iter()
        .map(|(name, value)| StatRow {
            statistic: title_case(name),
            value: value.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Interpretation".bold().yellow());
    println!("• KDA: (kills + assists) / deaths, a deathless game counts as one death");
    println!("• Last Match Played: creation date of the last match in the fetched list\n");
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn keys_become_title_case() {
        assert_eq!(title_case("average_kda"), "Average Kda");
        assert_eq!(title_case("most_played_champion_qtd_matchs"), "Most Played Champion Qtd Matchs");
    }
}
