use crate::config::Config;
use crate::error::FetchError;
use tracing::trace;

use super::endpoints;
use super::fetcher::{RateLimitedFetcher, Sleeper, ThreadSleeper, Transport, UreqTransport};
use super::models::*;

/// Upstream cap on the `count` parameter of the match-ids endpoint.
pub const MAX_PAGE_SIZE: usize = 100;

pub struct RiotApiClient<T = UreqTransport, S = ThreadSleeper> {
    config: Config,
    fetcher: RateLimitedFetcher<T, S>,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        let fetcher = RateLimitedFetcher::new(config.api_key.clone());
        RiotApiClient { config, fetcher }
    }
}

impl<T: Transport, S: Sleeper> RiotApiClient<T, S> {
    pub fn with_fetcher(config: Config, fetcher: RateLimitedFetcher<T, S>) -> Self {
        RiotApiClient { config, fetcher }
    }

    pub fn fetcher(&self) -> &RateLimitedFetcher<T, S> {
        &self.fetcher
    }

    pub fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, FetchError> {
        trace!("get_account {}#{}", game_name, tag_line);
        let url = endpoints::account_url(&self.config.region, game_name, tag_line);
        self.fetcher.fetch(&url, &[])
    }

    /// One page of match ids, most recent first. `count` is capped at [`MAX_PAGE_SIZE`].
    pub fn get_match_ids(
        &self,
        puuid: &str,
        count: usize,
        start: usize,
    ) -> Result<Vec<String>, FetchError> {
        trace!("get_match_ids start={} count={}", start, count);
        let url = endpoints::match_ids_url(&self.config.region, puuid);
        let params = [
            ("start", start.to_string()),
            ("count", count.min(MAX_PAGE_SIZE).to_string()),
        ];
        self.fetcher.fetch(&url, &params)
    }

    pub fn get_match(&self, match_id: &str) -> Result<MatchDto, FetchError> {
        trace!("get_match {}", match_id);
        let url = endpoints::match_url(&self.config.region, match_id);
        self.fetcher.fetch(&url, &[])
    }
}
