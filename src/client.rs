//! NumbersAPI client.
//!
//! One call, one GET: the request is built, sent once, and the response is
//! either normalized or passed through raw after the sidecar check. There is
//! no retry and no shared mutable state, so a `NumbersClient` can be cloned or
//! shared between tasks freely.

use log::debug;
use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::error_handling::{InitializationError, NumbersApiError};
use crate::initialization::init_client;
use crate::request::{Category, DateSelector, FactRequest, Modifiers};
use crate::response::{check_sidecar, normalize, FactResult, RawResponse};

/// Async client for NumbersAPI.
#[derive(Debug, Clone)]
pub struct NumbersClient {
    http: reqwest::Client,
    base_url: String,
}

impl NumbersClient {
    /// Builds a client from a validated `Config`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the config is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let http = init_client(config)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for a request, without the query string.
    pub fn url_for(&self, request: &FactRequest) -> String {
        format!("{}/{}", self.base_url, request.path())
    }

    /// Fetches a fact and normalizes it.
    ///
    /// # Errors
    ///
    /// - `NumbersApiError::Transport` if the HTTP exchange fails
    /// - `NumbersApiError::ServiceUnavailable` if the response lacks the sidecar header
    /// - `NumbersApiError::MalformedResponse` if the payload cannot be normalized
    ///
    /// # Example
    ///
    /// ```no_run
    /// use numbersapi::{Category, Config, FactRequest, NumbersClient, Subject};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = NumbersClient::new(&Config::default())?;
    /// let fact = client
    ///     .get_number_fact(&FactRequest::new(Subject::Number(42), Category::Trivia))
    ///     .await?;
    /// println!("{}", fact.text);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_number_fact(&self, request: &FactRequest) -> Result<FactResult, NumbersApiError> {
        let raw = self.send(request).await?;
        normalize(&raw)
    }

    /// Fetches a fact and returns the body verbatim.
    ///
    /// The sidecar header is still checked, so a response from the wrong
    /// service or a `NaN` answer fails the same way as in parsed mode.
    ///
    /// # Errors
    ///
    /// Same as [`NumbersClient::get_number_fact`], except the body itself is
    /// never inspected.
    pub async fn get_number_fact_raw(&self, request: &FactRequest) -> Result<String, NumbersApiError> {
        let raw = self.send(request).await?;
        check_sidecar(&raw)?;
        Ok(raw.body)
    }

    /// Fetches a fact about a day of the year.
    ///
    /// Accepts anything convertible to a `DateSelector`: a `chrono` date or
    /// datetime, a `MonthDay`, or a parsed `month/day` / `random` string.
    ///
    /// # Errors
    ///
    /// Same as [`NumbersClient::get_number_fact`].
    pub async fn get_date_fact(
        &self,
        date: impl Into<DateSelector>,
        modifiers: Modifiers,
    ) -> Result<FactResult, NumbersApiError> {
        let request = FactRequest::new(date.into(), Category::Date).with_modifiers(modifiers);
        self.get_number_fact(&request).await
    }

    async fn send(&self, request: &FactRequest) -> Result<RawResponse, NumbersApiError> {
        let url = self.url_for(request);
        let query = request.query();
        debug!("GET {url} with query {query:?}");

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .query(&query)
            .send()
            .await?;

        let raw = RawResponse::from_reqwest(response).await?;
        debug!(
            "Response status {} sidecar {:?} ({} body bytes)",
            raw.status,
            raw.sidecar(),
            raw.body.len()
        );
        Ok(raw)
    }
}
