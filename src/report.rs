use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::ranker::{EventRanking, ScoredSelection};
use crate::types::{Event, OddsValue};

pub fn write_title<W: Write>(out: &mut W, title: &str, date: NaiveDate) -> Result<()> {
    writeln!(out, "{title} {}.{}:", date.day(), date.month())?;
    writeln!(out)?;
    Ok(())
}

pub fn write_footer<W: Write>(out: &mut W, footer: &str) -> Result<()> {
    writeln!(out, "{footer}")?;
    Ok(())
}

/// One event block: match line, column header, the top rows, the draw row
/// and a trailing blank line.
pub fn write_event<W: Write>(out: &mut W, event: &Event, ranking: &EventRanking) -> Result<()> {
    let h2h = &ranking.head_to_head;
    writeln!(
        out,
        "{} vs {} | H: {}, B: {}, U: {}",
        event.home,
        event.away,
        odds_or_dash(&h2h.home),
        odds_or_dash(&h2h.away),
        odds_or_dash(&h2h.draw),
    )?;
    writeln!(out, "{:<30} {:<11} {:<6}", "Resultat", "XP", "%")?;
    for row in ranking.top.iter().chain(ranking.most_likely_draw.as_ref()) {
        write_row(out, row)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_row<W: Write>(out: &mut W, row: &ScoredSelection) -> Result<()> {
    writeln!(
        out,
        "{:<30} {:<10.2} {:>5.1} %",
        row.name,
        row.expected_points,
        row.percentage(),
    )?;
    Ok(())
}

fn odds_or_dash(odds: &Option<OddsValue>) -> String {
    odds.as_ref().map_or_else(|| "-".to_string(), |o| o.to_string())
}
