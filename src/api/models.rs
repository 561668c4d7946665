use serde::Deserialize;
use serde_json::Value;

// Account V1 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

// Match V5 response
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_creation: i64,
    pub game_duration: i64,
    pub game_mode: String,
    // Decoded one at a time, see `MatchInfo::participant`.
    pub participants: Vec<Value>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_id: i32,
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub lane: String,  // TOP, JUNGLE, MIDDLE, BOTTOM, NONE
    pub team_position: String,  // TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY or ""
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

impl MatchInfo {
    /// First participant carrying the given puuid, decoded on its own so
    /// incomplete entries for other players do not matter.
    pub fn participant(&self, puuid: &str) -> Option<Result<ParticipantDto, serde_json::Error>> {
        self.participants
            .iter()
            .find(|p| p.get("puuid").and_then(Value::as_str) == Some(puuid))
            .map(ParticipantDto::deserialize)
    }
}
