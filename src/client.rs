use crate::error::FactoidError;
use crate::models::{Event, MonthDay, parse_events};
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;

const EVENTS_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/feed/onthisday";
const TRIVIA_BASE_URL: &str = "http://numbersapi.com";
const USER_AGENT: &str = concat!("daily-factoid/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    events_base_url: String,
    trivia_base_url: String,
}

impl Client {
    /// Create a new client with the default base URLs.
    pub fn new() -> Result<Self, FactoidError> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;

        info!("Initialized factoid client with default base URLs");
        Ok(Self {
            http,
            events_base_url: EVENTS_BASE_URL.to_string(),
            trivia_base_url: TRIVIA_BASE_URL.to_string(),
        })
    }

    /// Override the events feed base URL (useful for tests or proxies).
    pub fn with_events_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.events_base_url = base_url.into();
        info!("Updated events base URL to {}", self.events_base_url);
        self
    }

    /// Override the trivia base URL (useful for tests or proxies).
    pub fn with_trivia_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.trivia_base_url = base_url.into();
        info!("Updated trivia base URL to {}", self.trivia_base_url);
        self
    }

    /// Fetch the historical events recorded for the given month and day.
    pub async fn on_this_day_events(&self, date: MonthDay) -> Result<Vec<Event>, FactoidError> {
        Self::check_range(date)?;
        let url = format!("{}/events/{}/{}", self.events_base_url, date.month, date.day);
        debug!("Fetching historical events for {}", date);
        let body = self.get_text(url).await?;
        parse_events(&body)
    }

    /// Fetch the plain-text date trivia sentence for the given month and day.
    pub async fn date_trivia(&self, date: MonthDay) -> Result<String, FactoidError> {
        Self::check_range(date)?;
        let url = format!("{}/{}/{}/date", self.trivia_base_url, date.month, date.day);
        debug!("Fetching date trivia for {}", date);
        self.get_text(url).await
    }

    /// Produce the factoid line for the given date. Historical events are
    /// preferred; date trivia is queried only when that lookup breaks.
    pub async fn factoid(&self, date: MonthDay) -> Result<String, FactoidError> {
        self.factoid_with_rng(date, &mut rand::rng()).await
    }

    /// Same as [`Client::factoid`], with the random source used to pick
    /// among events supplied by the caller.
    ///
    /// An empty events list is a valid answer and does not trigger the
    /// fallback. Transport, status, and decoding failures of the events
    /// lookup do; a failure of the trivia lookup itself is reported as the
    /// returned line rather than an error. Any other error kind propagates.
    pub async fn factoid_with_rng<R: Rng>(
        &self,
        date: MonthDay,
        rng: &mut R,
    ) -> Result<String, FactoidError> {
        match self.on_this_day_events(date).await {
            Ok(events) => Ok(event_factoid(date, &events, rng)),
            Err(err) if err.triggers_fallback() => {
                debug!("Events lookup failed ({}), falling back to date trivia", err);
                match self.date_trivia(date).await {
                    Ok(fact) => Ok(format!("On this day ({}): {}", date, fact)),
                    Err(err) => Ok(format!("Error retrieving factoid from Numbers API: {}", err)),
                }
            }
            Err(err) => Err(err),
        }
    }

    fn check_range(date: MonthDay) -> Result<(), FactoidError> {
        if date.in_range() {
            return Ok(());
        }
        Err(FactoidError::InvalidDate {
            month: date.month,
            day: date.day,
        })
    }

    async fn get_text(&self, url: String) -> Result<String, FactoidError> {
        debug!("GET request to {}", url);
        let response = self.http.get(url).send().await?;
        debug!("Received status {}", response.status());
        Self::handle_status(response.status())?;
        response.text().await.map_err(FactoidError::from)
    }

    fn handle_status(status: StatusCode) -> Result<(), FactoidError> {
        if status.is_success() {
            return Ok(());
        }
        Err(FactoidError::Status(status))
    }
}

fn event_factoid<R: Rng>(date: MonthDay, events: &[Event], rng: &mut R) -> String {
    match events.choose(rng) {
        Some(event) => format!("On this day ({}) in {}: {}", date, event.year, event.text),
        None => format!("No historical events found for {}.", date),
    }
}
