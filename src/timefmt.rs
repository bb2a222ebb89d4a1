//! Bucketed human rendering of game timestamps.

use chrono::{DateTime, Datelike, Local, Timelike, Utc};

use crate::i18n::{Translate, keys};

const HOUR_MS: i64 = 1000 * 60 * 60;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Render `timestamp` relative to `now`: full hours for the last day,
/// "yesterday" while `now`'s local yesterday lasts, a zero-padded
/// `DD.MM.YYYY` date otherwise. `now` is injected so callers can pin the
/// reference clock in tests.
pub fn format_relative(
    timestamp: DateTime<Utc>,
    now: DateTime<Local>,
    translator: &dyn Translate,
) -> String {
    let age_ms = (now.with_timezone(&Utc) - timestamp)
        .num_milliseconds()
        .max(0);
    // Hours elapsed today plus all of yesterday, at hour granularity.
    let yesterday_begin_ms = (i64::from(now.hour()) + 24) * HOUR_MS;

    if age_ms < DAY_MS {
        let full_hours_ago = age_ms / HOUR_MS;
        format!("{} {}", full_hours_ago, translator.translate(keys::N_HOURS_AGO))
    } else if age_ms < yesterday_begin_ms {
        translator.translate(keys::YESTERDAY)
    } else {
        let local = timestamp.with_timezone(&now.timezone());
        format!("{:02}.{:02}.{}", local.day(), local.month(), local.year())
    }
}
