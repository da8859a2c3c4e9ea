// src/fetch.rs
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::EpgError;
use crate::schedule::ProgrammeRecord;

/// Thin client around the timeline endpoint: one GET per run, no retries.
pub struct EpgClient {
    http: reqwest::Client,
    url: String,
    channel_id: String,
}

impl EpgClient {
    pub fn new(cfg: &AppConfig) -> Result<Self, EpgError> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()?;
        Ok(Self {
            http,
            url: cfg.epg_url.clone(),
            channel_id: cfg.channel_id.clone(),
        })
    }

    /// Fetch the channel's timeline and parse it into programme records.
    /// Non-success status and connection failures map to the transport
    /// family; everything after the body arrives is a format question.
    pub async fn fetch_schedule(&self) -> Result<Vec<ProgrammeRecord>, EpgError> {
        debug!(url = %self.url, channel = %self.channel_id, "requesting EPG timeline");
        let response = self
            .http
            .get(&self.url)
            .query(&[("id", self.channel_id.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        parse_schedule_body(&body)
    }
}

/// Parse a timeline response body. Accepted shapes: a JSON array of
/// programme objects, or an object wrapping such an array under `data`
/// (the endpoint has served both). An empty schedule is an error; a single
/// malformed record is not — it collapses to an empty record and gets
/// skipped downstream for lacking timestamps.
pub fn parse_schedule_body(body: &str) -> Result<Vec<ProgrammeRecord>, EpgError> {
    let value: Value = serde_json::from_str(body)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => return Err(EpgError::UnexpectedShape),
        },
        _ => return Err(EpgError::UnexpectedShape),
    };

    if items.is_empty() {
        return Err(EpgError::EmptySchedule);
    }

    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}
