use chrono::{DateTime, Utc};

/// Tuesday 07:00 UTC before the first kickoff of the current season.
/// Weeks advance every 7 days from this anchor.
pub const DEFAULT_SEASON_START: &str = "2025-09-02T07:00:00Z";

pub const FIRST_WEEK: u32 = 1;
pub const LAST_WEEK: u32 = 18;

#[derive(Debug, Clone, Copy)]
pub struct SeasonConfig {
    pub season_start: DateTime<Utc>,
}

impl SeasonConfig {
    /// Reads SEASON_START (RFC 3339) from the environment, falling back to
    /// the compiled default when unset or unparsable.
    pub fn load() -> Self {
        let season_start = std::env::var("SEASON_START")
            .ok()
            .and_then(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map_err(|e| {
                        tracing::warn!("Invalid SEASON_START '{s}': {e}, using default");
                    })
                    .ok()
            })
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| {
                DateTime::parse_from_rfc3339(DEFAULT_SEASON_START)
                    .expect("default season start must parse")
                    .with_timezone(&Utc)
            });

        Self { season_start }
    }
}
