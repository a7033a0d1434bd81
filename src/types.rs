use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Events feed
// ---------------------------------------------------------------------------

/// Event identifier as sent by the API. Numeric on the current feed, but the
/// value is only ever echoed back into a URL so any JSON number or string is
/// accepted and printed as sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{n}"),
            EventId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_list: Vec<RawEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub event_id: Option<EventId>,
    pub home_participant: Option<String>,
    pub away_participant: Option<String>,
    pub tournament: Option<Tournament>,
}

impl RawEvent {
    /// Tournament name, or "" when the feed leaves it out.
    pub fn tournament_name(&self) -> &str {
        self.tournament
            .as_ref()
            .and_then(|t| t.name.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tournament {
    pub name: Option<String>,
}

/// A match kept for today's report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub home: String,
    pub away: String,
}

// ---------------------------------------------------------------------------
// Markets feed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    #[serde(default, deserialize_with = "null_as_default")]
    pub market_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selections: Vec<Selection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Outcome code (`H`, `A`, `D` on the head-to-head market).
    pub selection_value: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selection_name: String,
    pub selection_odds: Option<OddsValue>,
}

/// Decimal odds. The feed sends them as strings ("6.50"); a bare number is
/// tolerated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OddsValue {
    Text(String),
    Number(f64),
}

impl OddsValue {
    /// Finite, strictly positive decimal odds, or None.
    pub fn decimal(&self) -> Option<f64> {
        let odds = match self {
            OddsValue::Text(s) => s.trim().parse::<f64>().ok()?,
            OddsValue::Number(n) => *n,
        };
        (odds.is_finite() && odds > 0.0).then_some(odds)
    }
}

impl std::fmt::Display for OddsValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OddsValue::Text(s) => write!(f, "{s}"),
            OddsValue::Number(n) => write!(f, "{n}"),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_event_list() {
        let raw = r#"{"eventList":[{"eventId":4711,"homeParticipant":"Tyskland","awayParticipant":"Skottland","tournament":{"name":"Europa - EM"}},{"eventId":"abc","homeParticipant":"A","awayParticipant":"B"}]}"#;
        let resp: EventListResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.event_list.len(), 2);
        assert_eq!(resp.event_list[0].event_id, Some(EventId::Number(4711_i64.into())));
        assert_eq!(resp.event_list[0].tournament_name(), "Europa - EM");
        assert_eq!(resp.event_list[1].event_id, Some(EventId::Text("abc".into())));
        assert_eq!(resp.event_list[1].tournament_name(), "");
    }

    #[test]
    fn odd_numeric_ids_do_not_sink_the_list() {
        let raw = r#"{"eventList":[{"eventId":1.0,"homeParticipant":"A","awayParticipant":"B"},{"eventId":18446744073709551615,"homeParticipant":"C","awayParticipant":"D"},{"eventId":5,"homeParticipant":"E","awayParticipant":"F"}]}"#;
        let resp: EventListResponse = serde_json::from_str(raw).unwrap();
        let ids: Vec<String> = resp
            .event_list
            .iter()
            .map(|e| e.event_id.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1.0", "18446744073709551615", "5"]);
    }

    #[test]
    fn missing_event_list_is_empty() {
        let resp: EventListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.event_list.is_empty());
        let resp: EventListResponse = serde_json::from_str(r#"{"eventList":null}"#).unwrap();
        assert!(resp.event_list.is_empty());
    }

    #[test]
    fn parses_markets_payload() {
        let raw = r#"{"markets":[{"marketName":"HUB","selections":[{"selectionValue":"H","selectionName":"Tyskland","selectionOdds":"1.45"}]},{"marketName":"Korrekt resultat","selections":null}]}"#;
        let resp: MarketsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.markets.len(), 2);
        let hub = &resp.markets[0];
        assert_eq!(hub.market_name, "HUB");
        assert_eq!(hub.selections[0].selection_value.as_deref(), Some("H"));
        assert_eq!(hub.selections[0].selection_odds, Some(OddsValue::Text("1.45".into())));
        assert!(resp.markets[1].selections.is_empty());
    }

    #[test]
    fn odds_decimal_accepts_text_and_numbers() {
        assert_eq!(OddsValue::Text(" 6.50 ".into()).decimal(), Some(6.5));
        assert_eq!(OddsValue::Number(4.0).decimal(), Some(4.0));
    }

    #[test]
    fn odds_decimal_rejects_invalid_values() {
        assert_eq!(OddsValue::Text("n/a".into()).decimal(), None);
        assert_eq!(OddsValue::Text("0".into()).decimal(), None);
        assert_eq!(OddsValue::Text("-2.0".into()).decimal(), None);
        assert_eq!(OddsValue::Text("inf".into()).decimal(), None);
        assert_eq!(OddsValue::Number(0.0).decimal(), None);
    }

    #[test]
    fn event_id_displays_raw_value() {
        assert_eq!(EventId::Number(12_i64.into()).to_string(), "12");
        assert_eq!(EventId::Text("x-1".into()).to_string(), "x-1");
    }
}
