use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::{Config, ACCEPT_JSON};
use crate::error::{AppError, Result};
use crate::types::{Event, EventId, EventListResponse, MarketsResponse, RawEvent};

/// Start/end of one calendar day in the `YYYYMMDDHHmm` form the events
/// endpoint takes as path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    pub start: String,
    pub end: String,
}

impl DayWindow {
    pub fn for_date(date: NaiveDate) -> Self {
        let day = date.format("%Y%m%d");
        Self {
            start: format!("{day}0000"),
            end: format!("{day}2359"),
        }
    }
}

/// Where the run loop gets its events and markets from.
pub trait OddsSource {
    async fn fetch_events(&self, window: &DayWindow) -> Result<Vec<RawEvent>>;
    async fn fetch_markets(&self, event_id: &EventId) -> Result<MarketsResponse>;
}

/// HTTP client for the Oddsen game-info API.
pub struct OddsClient {
    client: reqwest::Client,
    cfg: Config,
}

impl OddsClient {
    pub fn new(cfg: Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, cfg })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(AppError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl OddsSource for OddsClient {
    async fn fetch_events(&self, window: &DayWindow) -> Result<Vec<RawEvent>> {
        let url = self.cfg.events_url(&window.start, &window.end);
        let resp: EventListResponse = self.get_json(&url).await?;
        info!(count = resp.event_list.len(), "Fetched {} events for {}-{}", resp.event_list.len(), window.start, window.end);
        Ok(resp.event_list)
    }

    async fn fetch_markets(&self, event_id: &EventId) -> Result<MarketsResponse> {
        let url = self.cfg.markets_url(&event_id.to_string());
        let resp: MarketsResponse = self.get_json(&url).await?;
        debug!(event_id = %event_id, markets = resp.markets.len(), "Fetched markets");
        Ok(resp)
    }
}

/// Keep events whose tournament name contains `tournament_filter` and map
/// them to [`Event`]. Feed order is preserved.
pub fn filter_events(raw: Vec<RawEvent>, tournament_filter: &str) -> Vec<Event> {
    raw.into_iter()
        .filter(|e| e.tournament_name().contains(tournament_filter))
        .filter_map(|e| {
            let Some(id) = e.event_id else {
                debug!("Dropping event without eventId in {:?}", e.tournament_name());
                return None;
            };
            Some(Event {
                id,
                home: e.home_participant.unwrap_or_default(),
                away: e.away_participant.unwrap_or_default(),
            })
        })
        .collect()
}
