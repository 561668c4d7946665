use crate::error::FetchError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

pub const MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 121;
const REQUESTS_PER_SECOND: u32 = 20;
const USER_AGENT: &str = concat!("lol_match_stats/", env!("CARGO_PKG_VERSION"));

/// Raw HTTP answer, whatever the status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub retry_after: Option<String>,
    pub body: String,
}

pub trait Transport {
    /// Performs a GET. Non-2xx statuses are returned as responses, not errors.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, FetchError>;
}

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        UreqTransport {
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
        }
    }

    fn read(resp: ureq::Response) -> Result<HttpResponse, FetchError> {
        let status = resp.status();
        let retry_after = resp.header("Retry-After").map(str::to_string);
        let body = resp
            .into_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            retry_after,
            body,
        })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, FetchError> {
        let mut request = self.agent.get(url);
        for (key, value) in query {
            request = request.query(key, value);
        }

        match request.call() {
            Ok(resp) => Self::read(resp),
            Err(ureq::Error::Status(_, resp)) => Self::read(resp),
            Err(ureq::Error::Transport(e)) => Err(FetchError::Transport(e.to_string())),
        }
    }
}

/// Seconds to wait after a 429, from the `Retry-After` header when it holds an integer.
pub fn retry_after_secs(header: Option<&str>) -> u64 {
    header
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// GETs JSON with the api key attached, backing off on 429 up to [`MAX_ATTEMPTS`] attempts.
pub struct RateLimitedFetcher<T = UreqTransport, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    api_key: String,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl RateLimitedFetcher {
    pub fn new(api_key: String) -> Self {
        Self::with_parts(UreqTransport::new(), ThreadSleeper, api_key)
    }
}

impl<T: Transport, S: Sleeper> RateLimitedFetcher<T, S> {
    pub fn with_parts(transport: T, sleeper: S, api_key: String) -> Self {
        let quota = Quota::per_second(NonZeroU32::new(REQUESTS_PER_SECOND).unwrap_or(NonZeroU32::MIN));
        RateLimitedFetcher {
            transport,
            sleeper,
            api_key,
            limiter: RateLimiter::direct(quota),
            clock: DefaultClock::default(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    // Client side pacing, independent of the retry budget.
    fn throttle(&self) {
        while let Err(not_until) = self.limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    pub fn fetch<D: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<D, FetchError> {
        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("api_key", self.api_key.as_str()));

        for attempt in 1..=MAX_ATTEMPTS {
            self.throttle();
            debug!(url, attempt, "GET");

            let response = self.transport.get(url, &query)?;
            match response.status {
                200 => {
                    return serde_json::from_str(&response.body)
                        .map_err(|e| FetchError::Decode(e.to_string()));
                }
                429 => {
                    if attempt == MAX_ATTEMPTS {
                        break;
                    }
                    let wait = retry_after_secs(response.retry_after.as_deref());
                    warn!(url, attempt, wait_secs = wait, "rate limited, retrying");
                    self.sleeper.sleep(Duration::from_secs(wait));
                }
                404 => {
                    warn!(url, body = %response.body, "not found");
                    return Err(FetchError::NotFound);
                }
                status => {
                    warn!(url, status, body = %response.body, "request failed");
                    return Err(FetchError::Http {
                        status,
                        body: response.body,
                    });
                }
            }
        }

        warn!(url, attempts = MAX_ATTEMPTS, "rate limit retries exhausted");
        Err(FetchError::RateLimitExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
