//! Point timestamp normalization
//!
//! The service writes point times in three layouts: with an explicit
//! numeric UTC offset, with a trailing `Z`, or with no zone marker at all
//! (to be read in the process's local zone). Dispatch is on the literal's
//! length and trailing character after colon separators are stripped,
//! which is an upstream formatting assumption rather than a timestamp
//! contract: a literal whose selected layout does not parse is flagged
//! and dropped, never re-interpreted under another layout.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use tracing::warn;

use crate::constants::OFFSET_TIMESTAMP_LEN;

const OFFSET_FORMAT: &str = "%Y-%m-%dT%H%M%S%.f%z";
const UTC_FORMAT: &str = "%Y-%m-%dT%H%M%S%.fZ";
const LOCAL_FORMAT: &str = "%Y-%m-%dT%H%M%S%.f";

/// Parse a point timestamp into an absolute UTC instant
///
/// Returns `None` (after logging) for a literal that does not satisfy the
/// layout its shape selected.
pub(crate) fn parse_point_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let stripped = raw.trim().replace(':', "");

    let parsed = if stripped.len() > OFFSET_TIMESTAMP_LEN {
        DateTime::parse_from_str(&stripped, OFFSET_FORMAT)
            .ok()
            .map(|instant| instant.with_timezone(&Utc))
    } else if stripped.ends_with('Z') {
        NaiveDateTime::parse_from_str(&stripped, UTC_FORMAT)
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    } else {
        NaiveDateTime::parse_from_str(&stripped, LOCAL_FORMAT)
            .ok()
            .and_then(|naive| match Local.from_local_datetime(&naive) {
                LocalResult::Single(instant) => Some(instant.with_timezone(&Utc)),
                LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
                LocalResult::None => None,
            })
    };

    if parsed.is_none() {
        warn!("Timestamp '{}' matches no known layout; dropping its point", raw);
    }
    parsed
}
