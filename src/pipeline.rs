use crate::api::client::{RiotApiClient, MAX_PAGE_SIZE};
use crate::api::fetcher::{Sleeper, Transport};
use crate::api::models::{AccountDto, MatchInfo, ParticipantDto};
use crate::error::{AppError, FetchError};
use crate::progress::ProgressSink;
use serde::Serialize;
use tracing::{info, warn};

/// One match, flattened to the fields of the tracked player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_id: String,
    pub game_creation: i64,
    pub game_duration: i64,
    pub game_mode: String,
    pub champion_name: String,
    pub champion_id: i32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub lane: String,
    pub team_position: String,
    pub win: bool,
    pub penta_kills: u32,
    pub double_kills: u32,
    pub triple_kills: u32,
    pub quadra_kills: u32,
    pub total_damage_dealt_to_champions: i64,
    pub total_minions_killed: i64,
    pub gold_earned: i64,
    pub vision_score: i64,
    pub wards_placed: i64,
    pub wards_killed: i64,
    pub first_blood_kill: bool,
    pub total_damage_taken: i64,
}

impl MatchRecord {
    pub fn project(match_id: &str, info: &MatchInfo, player: &ParticipantDto) -> Self {
        MatchRecord {
            match_id: match_id.to_string(),
            game_creation: info.game_creation,
            game_duration: info.game_duration,
            game_mode: info.game_mode.clone(),
            champion_name: player.champion_name.clone(),
            champion_id: player.champion_id,
            kills: player.kills,
            deaths: player.deaths,
            assists: player.assists,
            lane: player.lane.clone(),
            team_position: player.team_position.clone(),
            win: player.win,
            penta_kills: player.penta_kills,
            double_kills: player.double_kills,
            triple_kills: player.triple_kills,
            quadra_kills: player.quadra_kills,
            total_damage_dealt_to_champions: player.total_damage_dealt_to_champions,
            total_minions_killed: player.total_minions_killed,
            gold_earned: player.gold_earned,
            vision_score: player.vision_score,
            wards_placed: player.wards_placed,
            wards_killed: player.wards_killed,
            first_blood_kill: player.first_blood_kill,
            total_damage_taken: player.total_damage_taken,
        }
    }
}

/// Which slice of the match history to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchIdSource {
    /// A single page of at most `count` ids starting at offset `start`.
    Page { count: usize, start: usize },
    /// Every id, paging by [`MAX_PAGE_SIZE`] until an empty page comes back.
    FullHistory,
}

pub fn resolve_account<T: Transport, S: Sleeper>(
    client: &RiotApiClient<T, S>,
    game_name: &str,
    tag_line: &str,
) -> Result<AccountDto, AppError> {
    match client.get_account(game_name, tag_line) {
        Ok(account) => Ok(account),
        Err(FetchError::NotFound) => Err(AppError::PlayerNotFound(format!(
            "{}#{}",
            game_name, tag_line
        ))),
        Err(e) => Err(e.into()),
    }
}

pub fn list_match_ids<T: Transport, S: Sleeper>(
    client: &RiotApiClient<T, S>,
    puuid: &str,
    source: MatchIdSource,
    sink: &mut dyn ProgressSink,
) -> Result<Vec<String>, AppError> {
    let ids = match source {
        MatchIdSource::Page { count, start } => {
            sink.set_status(&format!("Collecting {} match ids from index {}...", count, start));
            client.get_match_ids(puuid, count, start)?
        }
        MatchIdSource::FullHistory => {
            let mut all_ids = Vec::new();
            let mut start = 0;
            loop {
                sink.set_status(&format!("Collecting match ids from index {}...", start));
                let page = match client.get_match_ids(puuid, MAX_PAGE_SIZE, start) {
                    Ok(page) => page,
                    Err(e) if start == 0 => return Err(e.into()),
                    Err(e) => {
                        warn!(start, error = %e, "stopping match id pagination");
                        break;
                    }
                };
                if page.is_empty() {
                    break;
                }
                all_ids.extend(page);
                start += MAX_PAGE_SIZE;
            }
            all_ids
        }
    };

    if ids.is_empty() {
        return Err(AppError::NoMatchesFound);
    }

    info!(total = ids.len(), "match ids collected");
    Ok(ids)
}

/// Fetches every listed match and keeps one record per match the player appears in.
pub fn collect_matches<T: Transport, S: Sleeper>(
    client: &RiotApiClient<T, S>,
    puuid: &str,
    source: MatchIdSource,
    sink: &mut dyn ProgressSink,
) -> Result<Vec<MatchRecord>, AppError> {
    let match_ids = list_match_ids(client, puuid, source, sink)?;
    let total = match_ids.len();
    let mut records = Vec::with_capacity(total);

    sink.set_progress(0.0);
    for (idx, match_id) in match_ids.iter().enumerate() {
        sink.set_status(&format!("Fetching match {}/{}: {}", idx + 1, total, match_id));

        match client.get_match(match_id) {
            Ok(detail) => match detail.info.participant(puuid) {
                Some(Ok(player)) => records.push(MatchRecord::project(match_id, &detail.info, &player)),
                Some(Err(e)) => warn!(match_id = %match_id, error = %e, "player entry incomplete, skipping"),
                None => warn!(match_id = %match_id, "player not found among participants, skipping"),
            },
            Err(e) => warn!(match_id = %match_id, error = %e, "could not fetch match detail, skipping"),
        }

        sink.set_progress((idx + 1) as f64 / total as f64);
    }

    info!(collected = records.len(), listed = total, "match collection finished");
    Ok(records)
}

/// Resolves `game_name#tag_line` and collects their matches.
pub fn collect_player_matches<T: Transport, S: Sleeper>(
    client: &RiotApiClient<T, S>,
    game_name: &str,
    tag_line: &str,
    source: MatchIdSource,
    sink: &mut dyn ProgressSink,
) -> Result<Vec<MatchRecord>, AppError> {
    sink.set_status(&format!("Resolving {}#{}...", game_name, tag_line));
    let account = resolve_account(client, game_name, tag_line)?;
    collect_matches(client, &account.puuid, source, sink)
}
