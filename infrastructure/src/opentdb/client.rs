//! HTTP client for the Open Trivia DB API

use super::envelope::parse_records;
use super::error::OpenTdbError;
use super::request::ApiRequest;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use trivia_application::{FetchError, QuestionSource};
use trivia_domain::RawQuestionRecord;

const USER_AGENT: &str = concat!("trivia-quiz/", env!("CARGO_PKG_VERSION"));

/// [`QuestionSource`] backed by a single HTTP GET per fetch
pub struct OpenTdbClient {
    http: reqwest::Client,
    request: ApiRequest,
    timeout: Duration,
}

impl OpenTdbClient {
    /// Create a client whose requests give up after `timeout`
    pub fn new(request: ApiRequest, timeout: Duration) -> Result<Self, OpenTdbError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            request,
            timeout,
        })
    }

    fn describe_send_error(&self, e: &reqwest::Error) -> String {
        if e.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs_f32())
        } else if e.is_connect() {
            format!("could not connect: {}", e)
        } else {
            e.to_string()
        }
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn fetch(&self, count: u32) -> Result<Vec<RawQuestionRecord>, FetchError> {
        let start = Instant::now();
        let url = self.request.url_for(count);
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(self.describe_send_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(self.describe_send_error(&e)))?;

        let records = parse_records(&body)?;
        info!(
            "Received {} records ({} bytes) in {}ms",
            records.len(),
            body.len(),
            start.elapsed().as_millis()
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.request.endpoint()
    }
}
