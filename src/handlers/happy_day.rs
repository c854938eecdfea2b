//! Happy-day classifier.
//!
//! A day is happy unless it falls on a Wednesday (UTC).
//!
//! Dates that cannot be represented as an exact integer millisecond
//! timestamp are expected input, not failures: they produce a normal
//! response with only `err` set.

use time::macros::format_description;
use time::{OffsetDateTime, Weekday};

use crate::dispatch::HandlerError;
use crate::proto::{HappyDayRequest, HappyDayResponse};

/// Largest millisecond magnitude the classifier accepts (2^53 - 1).
pub const MAX_EXACT_MILLIS: i64 = (1 << 53) - 1;

const UNHAPPY_REASON: &str = "Tough luck on Wednesday... 😕";

/// Handler bound to `/happy-day/verify`.
pub async fn verify(request: HappyDayRequest) -> Result<HappyDayResponse, HandlerError> {
    classify(&request)
}

/// Classify the request's date.
pub fn classify(request: &HappyDayRequest) -> Result<HappyDayResponse, HandlerError> {
    let (seconds, nanos) = request
        .date
        .as_ref()
        .map_or((0, 0), |date| (date.seconds, date.nanos));

    let Some(datetime) = timestamp_millis(seconds, nanos).and_then(utc_datetime) else {
        tracing::debug!(seconds, nanos, "Date not representable");
        return Ok(HappyDayResponse {
            err: format!(
                "Date {seconds}s {nanos}ns cannot be represented as an exact millisecond timestamp"
            ),
            ..Default::default()
        });
    };

    let weekday = datetime.weekday();
    let is_happy_day = weekday != Weekday::Wednesday;

    let reason = match (request.include_reason, is_happy_day) {
        (false, _) => String::new(),
        (true, true) => format!("{weekday} is a Happy Day! ⭐"),
        (true, false) => UNHAPPY_REASON.to_string(),
    };

    Ok(HappyDayResponse {
        is_happy_day,
        reason,
        formatted_date: format_utc(datetime)?,
        err: String::new(),
    })
}

/// `seconds * 1000 + floor(nanos / 1e6)`, or `None` if the result leaves
/// the exact-integer range.
fn timestamp_millis(seconds: i64, nanos: i32) -> Option<i64> {
    let millis = seconds
        .checked_mul(1000)?
        .checked_add(i64::from(nanos.div_euclid(1_000_000)))?;

    (-MAX_EXACT_MILLIS..=MAX_EXACT_MILLIS)
        .contains(&millis)
        .then_some(millis)
}

fn utc_datetime(millis: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}

/// IMF-fixdate, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
///
/// The year is at least four digits, unsigned unless negative
/// (`Sat, 01 Jan 10000 ...`, `... Jan -0001 ...`). `time` would print a
/// `+` before years past 9999, so the year is rendered separately.
fn format_utc(datetime: OffsetDateTime) -> Result<String, HandlerError> {
    let day =
        datetime.format(format_description!("[weekday repr:short], [day] [month repr:short]"))?;
    let clock = datetime.format(format_description!("[hour]:[minute]:[second]"))?;

    let year = datetime.year();
    let sign = if year < 0 { "-" } else { "" };

    Ok(format!("{day} {sign}{:04} {clock} GMT", year.unsigned_abs()))
}
