// src/runlog.rs
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Display clock for the operator log lines. Resolves `TZ` to a named zone;
/// an unknown name warns and falls back to UTC. Only log output goes
/// through this; the XMLTV file stays UTC no matter what.
#[derive(Debug, Clone)]
pub struct RunClock {
    tz: Tz,
    tz_name: String,
}

impl RunClock {
    pub fn from_env() -> Self {
        let name = std::env::var("TZ").unwrap_or_else(|_| "UTC".to_string());
        Self::from_name(&name)
    }

    pub fn from_name(name: &str) -> Self {
        match name.parse::<Tz>() {
            Ok(tz) => Self {
                tz,
                tz_name: name.to_string(),
            },
            Err(_) => {
                tracing::warn!(tz = %name, "invalid TZ, falling back to UTC");
                Self {
                    tz: Tz::UTC,
                    tz_name: "UTC".to_string(),
                }
            }
        }
    }

    pub fn tz_name(&self) -> &str {
        &self.tz_name
    }

    pub fn format(&self, dt: DateTime<Utc>) -> String {
        dt.with_timezone(&self.tz)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string()
    }
}
