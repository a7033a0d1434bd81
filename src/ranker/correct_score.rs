use tracing::debug;

use super::expected_points::{expected_points, implied_probability};
use crate::config::{outcome_codes, Config};
use crate::error::{AppError, Result};
use crate::types::{Market, MarketsResponse, OddsValue, Selection};

/// Home/away/draw odds from the three-way market. Only shown in the report
/// header, so the raw odds text is kept as sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadToHead {
    pub home: Option<OddsValue>,
    pub away: Option<OddsValue>,
    pub draw: Option<OddsValue>,
}

impl HeadToHead {
    pub fn from_markets(markets: &[Market], market_name: &str) -> Self {
        let mut h2h = Self::default();
        let Some(market) = find_market(markets, market_name) else {
            return h2h;
        };
        for sel in &market.selections {
            let slot = match sel.selection_value.as_deref() {
                Some(outcome_codes::HOME) => &mut h2h.home,
                Some(outcome_codes::AWAY) => &mut h2h.away,
                Some(outcome_codes::DRAW) => &mut h2h.draw,
                _ => continue,
            };
            *slot = sel.selection_odds.clone();
        }
        h2h
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSelection {
    pub name: String,
    pub odds: f64,
    pub probability: f64,
    pub expected_points: f64,
    pub is_draw: bool,
}

impl ScoredSelection {
    /// Implied chance in percent (100 / odds).
    pub fn percentage(&self) -> f64 {
        100.0 / self.odds
    }
}

/// Ranked correct-score outcomes for one event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRanking {
    pub head_to_head: HeadToHead,
    /// Highest expected points first; equal scores keep ascending-odds order.
    pub top: Vec<ScoredSelection>,
    /// Lowest-odds draw. Printed after `top` even if it already appears there.
    pub most_likely_draw: Option<ScoredSelection>,
}

/// Rank one event's markets payload.
///
/// Returns `Ok(None)` when there is no correct-score market or it has no
/// selections. Any selection with unusable odds fails the whole event.
pub fn rank_event(payload: &MarketsResponse, cfg: &Config) -> Result<Option<EventRanking>> {
    let Some(correct_score) = find_market(&payload.markets, &cfg.correct_score_market) else {
        debug!("No {:?} market", cfg.correct_score_market);
        return Ok(None);
    };
    if correct_score.selections.is_empty() {
        debug!("{:?} market has no selections", cfg.correct_score_market);
        return Ok(None);
    }

    let scored = score_by_odds(&correct_score.selections, &cfg.draw_marker)?;
    let most_likely_draw = scored.iter().find(|s| s.is_draw).cloned();

    let mut top = scored;
    top.sort_by(|a, b| b.expected_points.total_cmp(&a.expected_points));
    top.truncate(cfg.top_n);
    for s in &top {
        debug!(
            selection = %s.name,
            probability = s.probability,
            expected_points = s.expected_points,
            "Ranked"
        );
    }

    Ok(Some(EventRanking {
        head_to_head: HeadToHead::from_markets(&payload.markets, &cfg.head_to_head_market),
        top,
        most_likely_draw,
    }))
}

/// Score every selection and sort ascending by odds (stable).
fn score_by_odds(selections: &[Selection], draw_marker: &str) -> Result<Vec<ScoredSelection>> {
    let mut scored = selections
        .iter()
        .map(|sel| score_selection(sel, draw_marker))
        .collect::<Result<Vec<_>>>()?;
    scored.sort_by(|a, b| a.odds.total_cmp(&b.odds));
    Ok(scored)
}

fn score_selection(sel: &Selection, draw_marker: &str) -> Result<ScoredSelection> {
    let odds = sel
        .selection_odds
        .as_ref()
        .and_then(OddsValue::decimal)
        .ok_or_else(|| AppError::InvalidOdds {
            selection: sel.selection_name.clone(),
            raw: sel
                .selection_odds
                .as_ref()
                .map(|o| o.to_string())
                .unwrap_or_default(),
        })?;
    let is_draw = sel.selection_name.contains(draw_marker);
    let probability = implied_probability(odds);
    Ok(ScoredSelection {
        name: sel.selection_name.clone(),
        odds,
        probability,
        expected_points: expected_points(probability, is_draw),
        is_draw,
    })
}

fn find_market<'a>(markets: &'a [Market], name: &str) -> Option<&'a Market> {
    markets.iter().find(|m| m.market_name == name)
}
