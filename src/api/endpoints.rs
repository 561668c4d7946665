// API endpoint URL builders.
// Every endpoint is served from a region-templated host: https://{routing}.api.riotgames.com

const ACCOUNT_PATH: &str = "/riot/account/v1/accounts/by-riot-id";
const MATCHES_PATH: &str = "/lol/match/v5/matches";

/// Maps a platform id (`br1`, `euw1`, ...) to its regional routing cluster.
/// Routing clusters and unknown values pass through unchanged.
pub fn regional_routing(region: &str) -> &str {
    match region {
        "na1" | "br1" | "la1" | "la2" => "americas",
        "euw1" | "eun1" | "tr1" | "ru" | "me1" => "europe",
        "kr" | "jp1" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
        other => other,
    }
}

/// account-v1 is only served from americas, asia and europe; `sea` lookups go to asia.
pub fn account_routing(region: &str) -> &str {
    match regional_routing(region) {
        "sea" => "asia",
        other => other,
    }
}

fn base_url(region: &str) -> String {
    format!("https://{}.api.riotgames.com", regional_routing(region))
}

pub fn account_url(region: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "https://{}.api.riotgames.com{}/{}/{}",
        account_routing(region),
        ACCOUNT_PATH,
        game_name,
        tag_line
    )
}

pub fn match_ids_url(region: &str, puuid: &str) -> String {
    format!("{}{}/by-puuid/{}/ids", base_url(region), MATCHES_PATH, puuid)
}

pub fn match_url(region: &str, match_id: &str) -> String {
    format!("{}{}/{}", base_url(region), MATCHES_PATH, match_id)
}
