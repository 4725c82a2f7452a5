//! JST time helpers.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// JST is UTC+9
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

const JST: FixedOffset = match FixedOffset::east_opt(JST_OFFSET_SECONDS) {
    Some(offset) => offset,
    None => panic!("JST offset out of range"),
};

/// Current time in JST
pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&JST)
}

/// Format a UTC instant as an RFC 3339 string in JST (millisecond precision).
pub fn to_jst_rfc3339(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&JST)
        .to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Current time in JST as an RFC 3339 string
pub fn now_jst_rfc3339() -> String {
    to_jst_rfc3339(Utc::now())
}
