use std::str::FromStr;

use crate::error::{AppError, Result};

pub const ODDS_API_BASE: &str = "https://api.norsk-tipping.no/OddsenGameInfo/v1/api";

/// Sport code in the events path. `FBL` is football.
pub const SPORT: &str = "FBL";

pub const ACCEPT_JSON: &str = "application/json;charset=utf-8";

/// Events are kept when their tournament name contains this substring.
pub const TOURNAMENT_FILTER: &str = "Europa - EM";

/// Three-way market. Outcome codes are `H` (home), `A` (away) and `D` (draw).
pub const HEAD_TO_HEAD_MARKET: &str = "HUB";

pub const CORRECT_SCORE_MARKET: &str = "Korrekt resultat";

/// Correct-score selections whose name contains this are draws.
pub const DRAW_MARKER: &str = "Uavgjort";

/// Rows ranked by expected points before the draw row is appended.
pub const TOP_N: usize = 4;

pub const HTTP_TIMEOUT_SECS: u64 = 30;

pub const REPORT_TITLE: &str = "EM-profeten anbefaling for";
pub const REPORT_FOOTER: &str = "Beregninger gjort med odds fra Norsk Tipping";

/// Outcome codes inside the head-to-head market.
pub mod outcome_codes {
    pub const HOME: &str = "H";
    pub const AWAY: &str = "A";
    pub const DRAW: &str = "D";
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub sport: String,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub tournament_filter: String,
    pub head_to_head_market: String,
    pub correct_score_market: String,
    pub draw_marker: String,
    /// Number of expected-points rows per event (TOP_N)
    pub top_n: usize,
    pub report_title: String,
    pub report_footer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: ODDS_API_BASE.to_string(),
            sport: SPORT.to_string(),
            log_level: "warn".to_string(),
            http_timeout_secs: HTTP_TIMEOUT_SECS,
            tournament_filter: TOURNAMENT_FILTER.to_string(),
            head_to_head_market: HEAD_TO_HEAD_MARKET.to_string(),
            correct_score_market: CORRECT_SCORE_MARKET.to_string(),
            draw_marker: DRAW_MARKER.to_string(),
            top_n: TOP_N,
            report_title: REPORT_TITLE.to_string(),
            report_footer: REPORT_FOOTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            api_base: env_or("ODDS_API_BASE", defaults.api_base)
                .trim_end_matches('/')
                .to_string(),
            sport: env_or("ODDS_SPORT", defaults.sport),
            log_level: env_or("LOG_LEVEL", defaults.log_level),
            http_timeout_secs: parse_positive(
                "HTTP_TIMEOUT_SECS",
                std::env::var("HTTP_TIMEOUT_SECS").ok(),
                defaults.http_timeout_secs,
            )?,
            tournament_filter: env_or("TOURNAMENT_FILTER", defaults.tournament_filter),
            head_to_head_market: env_or("HEAD_TO_HEAD_MARKET", defaults.head_to_head_market),
            correct_score_market: env_or("CORRECT_SCORE_MARKET", defaults.correct_score_market),
            draw_marker: env_or("DRAW_MARKER", defaults.draw_marker),
            top_n: parse_positive("TOP_N", std::env::var("TOP_N").ok(), defaults.top_n)?,
            report_title: env_or("REPORT_TITLE", defaults.report_title),
            report_footer: env_or("REPORT_FOOTER", defaults.report_footer),
        })
    }

    pub fn events_url(&self, start: &str, end: &str) -> String {
        format!("{}/events/{}/{}/{}", self.api_base, self.sport, start, end)
    }

    pub fn markets_url(&self, event_id: &str) -> String {
        format!("{}/markets/{}", self.api_base, event_id)
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

/// Parse an optional override that must be a strictly positive integer.
fn parse_positive<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = raw else { return Ok(default) };
    match raw.trim().parse::<T>() {
        Ok(v) if v > T::default() => Ok(v),
        _ => Err(AppError::Config(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}
