// src/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_EPG_URL: &str =
    "https://www.1spotmedia.com/index.php/api/epg/get_epg_timeline_by_id";
const DEFAULT_CHANNEL_ID: &str = "66e312890478fd00235244cb";

const DEFAULT_TVG_ID: &str = "TVJ.jm@SD";
const DEFAULT_CHANNEL_NAME: &str = "Television Jamaica";
const DEFAULT_CHANNEL_ICON: &str =
    "https://www.televisionjamaica.com/Portals/0/tvj_logo.png";

// Container output path (mount this directory).
const DEFAULT_OUTPUT_FILE: &str = "/app/output/tvj.xml";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// All knobs of a conversion run in one place.
///
/// Every field falls back to the hard-coded production value; overrides come
/// from the environment only (no CLI surface). Passing the struct into the
/// pipeline keeps tests free to point at a mock endpoint and a temp file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub epg_url: String,
    pub channel_id: String,
    pub tvg_id: String,
    pub channel_name: String,
    pub channel_icon: String,
    pub output_file: PathBuf,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            epg_url: DEFAULT_EPG_URL.to_string(),
            channel_id: DEFAULT_CHANNEL_ID.to_string(),
            tvg_id: DEFAULT_TVG_ID.to_string(),
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            channel_icon: DEFAULT_CHANNEL_ICON.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Build the config from the environment:
    /// EPG_URL, EPG_CHANNEL_ID, EPG_TVG_ID, EPG_CHANNEL_NAME,
    /// EPG_CHANNEL_ICON, EPG_OUTPUT_FILE. Unset or blank vars keep the
    /// defaults; this never fails.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            epg_url: env_or("EPG_URL", d.epg_url),
            channel_id: env_or("EPG_CHANNEL_ID", d.channel_id),
            tvg_id: env_or("EPG_TVG_ID", d.tvg_id),
            channel_name: env_or("EPG_CHANNEL_NAME", d.channel_name),
            channel_icon: env_or("EPG_CHANNEL_ICON", d.channel_icon),
            output_file: PathBuf::from(env_or(
                "EPG_OUTPUT_FILE",
                d.output_file.display().to_string(),
            )),
            request_timeout: d.request_timeout,
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}
