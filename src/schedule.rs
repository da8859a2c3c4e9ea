// src/schedule.rs
//
// Programme records as the 1SpotMedia timeline endpoint returns them, plus
// the derived fields the XMLTV output needs. The provider is loose about
// types (numbers arrive as strings, strings as numbers), so the optional
// fields stay `serde_json::Value` and go through explicit coercion helpers
// instead of trusting the declared shape.

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::EpgError;

pub const FALLBACK_TITLE: &str = "Unknown Program";
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Provider filler text that counts as "no description".
const PLACEHOLDER_DESCRIPTION: &str = "Dummy description.";

/// One slot of the EPG timeline. `start_time`/`end_time` are epoch
/// milliseconds; a record lacking either never reaches the output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeRecord {
    pub start_time: Option<Value>,
    pub end_time: Option<Value>,
    pub title: Option<Value>,
    pub program: Option<ProgramDetails>,
}

/// The nested `program` object carrying the editorial metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDetails {
    pub title: Option<Value>,
    pub long_description: Option<Value>,
    pub description: Option<Value>,
    pub short_description: Option<Value>,
    pub display_genre: Option<Value>,
    pub tv_season_number: Option<Value>,
    pub tv_season_episode_number: Option<Value>,
    pub series_episode_number: Option<Value>,
    pub year: Option<Value>,
    pub pub_date: Option<Value>,
    pub runtime: Option<Value>,
}

impl ProgrammeRecord {
    pub fn start_utc(&self) -> Option<DateTime<Utc>> {
        timestamp_utc(self.start_time.as_ref()?)
    }

    pub fn end_utc(&self) -> Option<DateTime<Utc>> {
        timestamp_utc(self.end_time.as_ref()?)
    }

    /// Record-level title, else programme title, else the fixed placeholder.
    pub fn display_title(&self) -> String {
        self.title
            .as_ref()
            .and_then(coerce_text)
            .or_else(|| {
                self.program
                    .as_ref()
                    .and_then(|p| p.title.as_ref())
                    .and_then(coerce_text)
            })
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }

    /// longDescription → description → shortDescription, trimmed. The
    /// provider's "Dummy description." filler counts as absent; the result
    /// is never empty.
    pub fn display_description(&self) -> String {
        let text = self.program.as_ref().and_then(|p| {
            p.long_description
                .as_ref()
                .and_then(coerce_text)
                .or_else(|| p.description.as_ref().and_then(coerce_text))
                .or_else(|| p.short_description.as_ref().and_then(coerce_text))
        });

        match text {
            Some(t) if !t.eq_ignore_ascii_case(PLACEHOLDER_DESCRIPTION) => t,
            _ => FALLBACK_DESCRIPTION.to_string(),
        }
    }

    pub fn category(&self) -> Option<String> {
        self.program
            .as_ref()?
            .display_genre
            .as_ref()
            .and_then(coerce_text)
    }

    /// Episode numbering in xmltv_ns form (zero-based, dot-separated,
    /// trailing part-field left empty). Provider values are 1-based when
    /// >= 1; anything lower clamps to 0. Both components absent -> `None`.
    pub fn episode_num(&self) -> Option<String> {
        let prog = self.program.as_ref()?;

        let season = prog.tv_season_number.as_ref().and_then(coerce_int);
        let episode = prog
            .tv_season_episode_number
            .as_ref()
            .and_then(coerce_int)
            .or_else(|| prog.series_episode_number.as_ref().and_then(coerce_int));

        let zero_based = |v: i64| if v >= 1 { v - 1 } else { 0 };

        match (season, episode) {
            (Some(s), Some(e)) => Some(format!("{}.{}.", zero_based(s), zero_based(e))),
            (Some(s), None) => Some(format!("{}..", zero_based(s))),
            (None, Some(e)) => Some(format!(".{}.", zero_based(e))),
            (None, None) => None,
        }
    }

    /// Air year: programme `year` if it lands in [1800, 2100], else the UTC
    /// year of `pubDate` (epoch milliseconds).
    pub fn air_year(&self) -> Option<i32> {
        let prog = self.program.as_ref()?;

        if let Some(y) = prog.year.as_ref().and_then(coerce_int) {
            if (1800..=2100).contains(&y) {
                return Some(y as i32);
            }
        }

        prog.pub_date
            .as_ref()
            .and_then(coerce_int)
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.year())
    }

    /// Runtime in seconds; only positive values survive.
    pub fn runtime_seconds(&self) -> Option<i64> {
        let secs = self
            .program
            .as_ref()?
            .runtime
            .as_ref()
            .and_then(coerce_int)?;
        (secs > 0).then_some(secs)
    }
}

/// "Updated until" marker: the furthest programme end time in the schedule.
/// Used for the operator summary only, never embedded in the output.
pub fn updated_until(records: &[ProgrammeRecord]) -> Result<DateTime<Utc>, EpgError> {
    records
        .iter()
        .filter_map(|r| r.end_time.as_ref().and_then(coerce_int))
        .max()
        .and_then(DateTime::from_timestamp_millis)
        .ok_or(EpgError::MissingEndTimes)
}

fn timestamp_utc(value: &Value) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(coerce_int(value)?)
}

/// Integer coercion across the provider's type habits: integers, finite
/// floats (truncated) and trimmed numeric strings.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let t = s.trim();
            t.parse::<i64>()
                .ok()
                .or_else(|| t.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}

/// Text coercion: trimmed strings (empty -> absent); bare numbers render as
/// their decimal form.
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
