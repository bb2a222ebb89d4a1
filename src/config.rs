use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::error::AppError;

/// How many of the freshest history entries get their detail record
/// pre-warmed right after a successful history load.
pub const AUTOLOAD_DETAIL_COUNT: usize = 30;

/// Recent-form extraction only considers games younger than this.
pub const RECENT_FORM_WINDOW_DAYS: i64 = 21;

/// Below this many games the recent-form result carries a low-confidence
/// warning.
pub const LOW_CONFIDENCE_GAME_COUNT: usize = 5;

/// Quiet period after the last scroll event before availability of
/// off-screen items is recomputed.
pub const SCROLL_SETTLE_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Width reserved for the scroll arrow controls overlapping the viewport
/// edges.
pub const SCROLL_ARROW_MARGIN_PX: f64 = 121.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub rate_limit_per_minute: NonZeroU32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 100;

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let rate_limit_per_minute = env::var("RIOT_RATE_LIMIT_PER_MINUTE")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                NonZeroU32::new(DEFAULT_RATE_LIMIT_PER_MINUTE).unwrap_or(NonZeroU32::MIN)
            });

        Ok(Self {
            riot_api_key,
            rate_limit_per_minute,
        })
    }
}
