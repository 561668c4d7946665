use std::fmt;

use chrono::DateTime;
use serde::Serialize;

use super::group_stats::{kda, GroupStats, GroupStatsTracker};
use crate::pipeline::MatchRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MostPlayed {
    pub name: String,
    pub total_kills: u64,
    pub total_deaths: u64,
    pub total_assists: u64,
    pub kda: f64,
    pub win_rate: f64,
    pub games_played: usize,
}

impl From<&GroupStats> for MostPlayed {
    fn from(group: &GroupStats) -> Self {
        MostPlayed {
            name: group.name.clone(),
            total_kills: group.total_kills,
            total_deaths: group.total_deaths,
            total_assists: group.total_assists,
            kda: group.kda(),
            win_rate: group.win_rate(),
            games_played: group.games_played,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub average_kda: f64,
    pub total_win: usize,
    pub total_loss: usize,
    pub win_rate: f64,

    pub total_kills: i64,
    pub average_kills: f64,
    pub total_deaths: i64,
    pub average_deaths: f64,
    pub total_assists: i64,
    pub average_assists: f64,
    pub total_damage_dealt: i64,
    pub average_damage_dealt: f64,
    pub total_minions_killed: i64,
    pub average_minions_killed: f64,
    pub total_gold_earned: i64,
    pub average_gold_earned: f64,
    pub total_vision_score: i64,
    pub average_vision_score: f64,

    pub total_penta_kills: i64,
    pub total_double_kills: i64,
    pub total_triple_kills: i64,
    pub total_quadra_kills: i64,

    pub most_played_champion: MostPlayed,
    pub most_played_lane: MostPlayed,
    pub most_played_game_mode: String,

    pub total_time_played: String,
    /// Creation date of the last record in collection order.
    pub last_match_played: String,
}

/// A single displayable statistic.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Text(text) => write!(f, "{}", text),
            StatValue::Number(value) => write!(f, "{:.2}", value),
        }
    }
}

impl AnalysisResult {
    /// Named statistics in display order.
    pub fn entries(&self) -> Vec<(&'static str, StatValue)> {
        use StatValue::{Number, Text};

        let champion = &self.most_played_champion;
        let lane = &self.most_played_lane;
        vec![
            ("average_kda", Number(self.average_kda)),
            ("total_win", Number(self.total_win as f64)),
            ("total_loss", Number(self.total_loss as f64)),
            ("win_rate", Number(self.win_rate)),
            ("total_kills", Number(self.total_kills as f64)),
            ("average_kills", Number(self.average_kills)),
            ("total_deaths", Number(self.total_deaths as f64)),
            ("average_deaths", Number(self.average_deaths)),
            ("total_assists", Number(self.total_assists as f64)),
            ("average_assists", Number(self.average_assists)),
            ("total_damage_dealt", Number(self.total_damage_dealt as f64)),
            ("average_damage_dealt", Number(self.average_damage_dealt)),
            ("total_minions_killed", Number(self.total_minions_killed as f64)),
            ("average_minions_killed", Number(self.average_minions_killed)),
            ("total_gold_earned", Number(self.total_gold_earned as f64)),
            ("average_gold_earned", Number(self.average_gold_earned)),
            ("total_vision_score", Number(self.total_vision_score as f64)),
            ("average_vision_score", Number(self.average_vision_score)),
            ("total_penta_kills", Number(self.total_penta_kills as f64)),
            ("total_double_kills", Number(self.total_double_kills as f64)),
            ("total_triple_kills", Number(self.total_triple_kills as f64)),
            ("total_quadra_kills", Number(self.total_quadra_kills as f64)),
            ("most_played_champion", Text(champion.name.clone())),
            ("most_played_champion_total_kills", Number(champion.total_kills as f64)),
            ("most_played_champion_total_deaths", Number(champion.total_deaths as f64)),
            ("most_played_champion_total_assists", Number(champion.total_assists as f64)),
            ("most_played_champion_kda", Number(champion.kda)),
            ("most_played_champion_win_rate", Number(champion.win_rate)),
            ("most_played_champion_qtd_matchs", Number(champion.games_played as f64)),
            ("most_played_lane", Text(lane.name.clone())),
            ("most_played_lane_total_kills", Number(lane.total_kills as f64)),
            ("most_played_lane_total_deaths", Number(lane.total_deaths as f64)),
            ("most_played_lane_total_assists", Number(lane.total_assists as f64)),
            ("most_played_lane_kda", Number(lane.kda)),
            ("most_played_lane_win_rate", Number(lane.win_rate)),
            ("most_played_game_mode", Text(self.most_played_game_mode.clone())),
            ("total_time_played", Text(self.total_time_played.clone())),
            ("last_match_played", Text(self.last_match_played.clone())),
        ]
    }
}

/// `H:MM:SS`, prefixed with `N day(s), ` past 24 hours.
pub fn format_duration(total_secs: i64) -> String {
    let total_secs = total_secs.max(0);
    let days = total_secs / 86_400;
    let rest = total_secs % 86_400;
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// `DD/MM/YYYY` (UTC) for an epoch timestamp in milliseconds.
pub fn format_match_date(epoch_millis: i64) -> String {
    DateTime::from_timestamp_millis(epoch_millis)
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

fn sum<F: Fn(&MatchRecord) -> i64>(records: &[MatchRecord], field: F) -> i64 {
    records.iter().map(field).sum()
}

/// Most frequent game mode; ties go to the mode seen first.
fn most_played_game_mode(records: &[MatchRecord]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(mode, _)| *mode == record.game_mode) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.game_mode.as_str(), 1)),
        }
    }

    counts
        .iter()
        .fold(None, |best: Option<&(&str, usize)>, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        })
        .map(|(mode, _)| mode.to_string())
        .unwrap_or_default()
}

/// Summary statistics over a collection; `None` when it is empty.
pub fn analyze(records: &[MatchRecord]) -> Option<AnalysisResult> {
    let last = records.last()?;
    let n = records.len() as f64;
    let mean = |total: i64| total as f64 / n;

    let average_kda = records
        .iter()
        .map(|r| kda(r.kills.into(), r.deaths.into(), r.assists.into()))
        .sum::<f64>()
        / n;

    let total_win = records.iter().filter(|r| r.win).count();
    let total_loss = records.len() - total_win;

    let total_kills = sum(records, |r| r.kills.into());
    let total_deaths = sum(records, |r| r.deaths.into());
    let total_assists = sum(records, |r| r.assists.into());
    let total_damage_dealt = sum(records, |r| r.total_damage_dealt_to_champions);
    let total_minions_killed = sum(records, |r| r.total_minions_killed);
    let total_gold_earned = sum(records, |r| r.gold_earned);
    let total_vision_score = sum(records, |r| r.vision_score);

    let champions = GroupStatsTracker::from_records(records, |r| r.champion_name.as_str());
    let lanes = GroupStatsTracker::from_records(records, |r| r.lane.as_str());

    Some(AnalysisResult {
        average_kda,
        total_win,
        total_loss,
        win_rate: total_win as f64 / n * 100.0,

        total_kills,
        average_kills: mean(total_kills),
        total_deaths,
        average_deaths: mean(total_deaths),
        total_assists,
        average_assists: mean(total_assists),
        total_damage_dealt,
        average_damage_dealt: mean(total_damage_dealt),
        total_minions_killed,
        average_minions_killed: mean(total_minions_killed),
        total_gold_earned,
        average_gold_earned: mean(total_gold_earned),
        total_vision_score,
        average_vision_score: mean(total_vision_score),

        total_penta_kills: sum(records, |r| r.penta_kills.into()),
        total_double_kills: sum(records, |r| r.double_kills.into()),
        total_triple_kills: sum(records, |r| r.triple_kills.into()),
        total_quadra_kills: sum(records, |r| r.quadra_kills.into()),

        most_played_champion: champions.most_played()?.into(),
        most_played_lane: lanes.most_played()?.into(),
        most_played_game_mode: most_played_game_mode(records),

        total_time_played: format_duration(sum(records, |r| r.game_duration)),
        last_match_played: format_match_date(last.game_creation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;
    use pretty_assertions::assert_eq;

    fn two_match_fixture() -> Vec<MatchRecord> {
        let mut a = record("Ahri", "MIDDLE", 5, 2, 10, true);
        a.game_mode = "CLASSIC".to_string();
        a.game_duration = 1800;
        a.game_creation = 1_700_000_000_000;
        a.total_damage_dealt_to_champions = 20_000;
        a.penta_kills = 1;
        let mut b = record("Jinx", "BOTTOM", 2, 4, 6, false);
        b.game_mode = "ARAM".to_string();
        b.game_duration = 1500;
        b.game_creation = 1_600_000_000_000;
        b.total_damage_dealt_to_champions = 10_000;
        vec![a, b]
    }

    #[test]
    fn two_match_fixture_matches_hand_computed_values() {
        let result = analyze(&two_match_fixture()).unwrap();

        assert_eq!(result.average_kda, 4.75);
        assert_eq!(result.win_rate, 50.0);
        assert_eq!(result.total_win, 1);
        assert_eq!(result.total_loss, 1);
        assert_eq!(result.total_kills, 7);
        assert_eq!(result.average_kills, 3.5);
        assert_eq!(result.total_deaths, 6);
        assert_eq!(result.total_assists, 16);
        assert_eq!(result.average_damage_dealt, 15_000.0);
        assert_eq!(result.total_penta_kills, 1);
        assert_eq!(result.total_time_played, "0:55:00");
        assert_eq!(result.most_played_game_mode, "CLASSIC");
        assert_eq!(
            result.most_played_champion,
            MostPlayed {
                name: "Ahri".to_string(),
                total_kills: 5,
                total_deaths: 2,
                total_assists: 10,
                kda: 7.5,
                win_rate: 100.0,
                games_played: 1,
            }
        );
        assert_eq!(result.most_played_lane.name, "MIDDLE");
    }

    #[test]
    fn last_match_played_uses_last_record_in_order() {
        let result = analyze(&two_match_fixture()).unwrap();

        // 1_600_000_000_000 ms is 2020-09-13 UTC
        assert_eq!(result.last_match_played, "13/09/2020");
    }

    #[test]
    fn deathless_match_uses_denominator_of_one() {
        let records = vec![
            record("Lux", "MIDDLE", 4, 0, 6, true),
            record("Lux", "MIDDLE", 2, 2, 2, true),
        ];

        let result = analyze(&records).unwrap();

        assert_eq!(result.average_kda, (10.0 + 2.0) / 2.0);
        assert_eq!(result.most_played_champion.kda, 14.0 / 2.0);
    }

    #[test]
    fn wins_and_losses_cover_every_record() {
        let records = vec![
            record("Lux", "MIDDLE", 1, 1, 1, true),
            record("Lux", "MIDDLE", 1, 1, 1, false),
            record("Ezreal", "BOTTOM", 1, 1, 1, false),
            record("Lux", "MIDDLE", 1, 1, 1, true),
        ];

        let result = analyze(&records).unwrap();

        assert_eq!(result.total_win + result.total_loss, records.len());
        assert_eq!(result.win_rate, 100.0 * 2.0 / 4.0);
        assert_eq!(result.most_played_champion.name, "Lux");
        assert_eq!(result.most_played_champion.games_played, 3);
    }

    #[test]
    fn game_mode_ties_go_to_first_seen() {
        let mut records = two_match_fixture();
        records.reverse();

        let result = analyze(&records).unwrap();

        assert_eq!(result.most_played_game_mode, "ARAM");
        assert_eq!(result.most_played_champion.name, "Jinx");
        assert_eq!(result.last_match_played, "14/11/2023");
    }

    #[test]
    fn empty_collection_has_no_analysis() {
        assert!(analyze(&[]).is_none());
    }

    #[test]
    fn durations_format_like_timedelta() {
        assert_eq!(format_duration(0), "0:00:00");
        assert_eq!(format_duration(3_661), "1:01:01");
        assert_eq!(format_duration(86_400 + 5), "1 day, 0:00:05");
        assert_eq!(format_duration(3 * 86_400 + 7_200), "3 days, 2:00:00");
    }

    #[test]
    fn entries_render_numbers_with_two_decimals() {
        let result = analyze(&two_match_fixture()).unwrap();
        let entries = result.entries();

        assert_eq!(entries[0].0, "average_kda");
        assert_eq!(entries[0].1.to_string(), "4.75");
        let champion = entries
            .iter()
            .find(|(name, _)| *name == "most_played_champion")
            .unwrap();
        assert_eq!(champion.1.to_string(), "Ahri");
    }
}
