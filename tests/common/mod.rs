#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use lol_match_stats::api::client::RiotApiClient;
use lol_match_stats::api::fetcher::{HttpResponse, RateLimitedFetcher, Sleeper, Transport};
use lol_match_stats::config::Config;
use lol_match_stats::error::FetchError;
use serde_json::{json, Value};

pub const PUUID: &str = "target-puuid";
pub const HOST: &str = "https://americas.api.riotgames.com";

/// Serves scripted responses keyed by URL plus non-credential query parameters.
/// Unscripted requests answer 404.
#[derive(Default)]
pub struct RoutedTransport {
    routes: RefCell<HashMap<String, VecDeque<HttpResponse>>>,
    pub requests: RefCell<Vec<String>>,
}

impl RoutedTransport {
    pub fn route(self, key: &str, status: u16, body: Value) -> Self {
        self.routes
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .push_back(HttpResponse {
                status,
                retry_after: None,
                body: body.to_string(),
            });
        self
    }

    pub fn requested(&self, key: &str) -> bool {
        self.requests.borrow().iter().any(|r| r == key)
    }
}

impl Transport for RoutedTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, FetchError> {
        let params: Vec<String> = query
            .iter()
            .filter(|(k, _)| *k != "api_key")
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        let key = if params.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, params.join("&"))
        };
        self.requests.borrow_mut().push(key.clone());

        let scripted = self
            .routes
            .borrow_mut()
            .get_mut(&key)
            .and_then(|queue| queue.pop_front());
        Ok(scripted.unwrap_or(HttpResponse {
            status: 404,
            retry_after: None,
            body: "{}".to_string(),
        }))
    }
}

#[derive(Default)]
pub struct NoSleep {
    pub sleeps: RefCell<Vec<Duration>>,
}

impl Sleeper for NoSleep {
    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}

pub fn client(transport: RoutedTransport) -> RiotApiClient<RoutedTransport, NoSleep> {
    let config = Config::new("RGAPI-test", "americas");
    let fetcher = RateLimitedFetcher::with_parts(transport, NoSleep::default(), config.api_key.clone());
    RiotApiClient::with_fetcher(config, fetcher)
}

pub fn account_key(name: &str, tag: &str) -> String {
    format!("{}/riot/account/v1/accounts/by-riot-id/{}/{}", HOST, name, tag)
}

pub fn ids_key(start: usize, count: usize) -> String {
    format!(
        "{}/lol/match/v5/matches/by-puuid/{}/ids?start={}&count={}",
        HOST, PUUID, start, count
    )
}

pub fn match_key(match_id: &str) -> String {
    format!("{}/lol/match/v5/matches/{}", HOST, match_id)
}

pub fn participant(puuid: &str, champion: &str, lane: &str, kda: (u32, u32, u32), win: bool) -> Value {
    json!({
        "puuid": puuid,
        "championId": 103,
        "championName": champion,
        "kills": kda.0,
        "deaths": kda.1,
        "assists": kda.2,
        "lane": lane,
        "teamPosition": lane,
        "win": win,
        "pentaKills": 0,
        "doubleKills": 1,
        "tripleKills": 0,
        "quadraKills": 0,
        "totalDamageDealtToChampions": 15000,
        "totalMinionsKilled": 180,
        "goldEarned": 11000,
        "visionScore": 20,
        "wardsPlaced": 8,
        "wardsKilled": 2,
        "firstBloodKill": false,
        "totalDamageTaken": 17000,
        "role": "SOLO"
    })
}

pub fn match_detail(game_creation: i64, game_mode: &str, participants: Vec<Value>) -> Value {
    json!({
        "metadata": { "matchId": "ignored" },
        "info": {
            "gameCreation": game_creation,
            "gameDuration": 1800,
            "gameMode": game_mode,
            "participants": participants
        }
    })
}
