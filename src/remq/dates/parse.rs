//! Grammar for user supplied dates.
//!
//! Tried in order, first hit wins:
//!
//! 1. RFC 3339 instants, taken as-is
//! 2. Calendar layouts (`2025-02-13`, `02/13/2025 3:04PM`, `Feb 13, 2025`,
//!    `13 Feb 2025`, ...) read as wall-clock time in the context. A layout
//!    without a time of day means midnight.
//! 3. Natural phrases, case-insensitive, relative to `now`:
//!    - `today`, `tomorrow`, `yesterday` (09:00)
//!    - `in N minutes|hours|days|weeks|months` (and `min`, `hr` forms)
//!    - `next monday`, `next fri at 2pm`
//!    - `today at 5pm`, `tomorrow at 3:30pm`
//!    - a bare time (`5pm`, `17:00`): today, or tomorrow once it has passed
//!    - `next week`, `next month` (09:00), `eod`, `eow` (17:00, Friday)

use super::TimeContext;
use crate::error::{RemError, Result};
use chrono::{
    DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, Utc, Weekday,
};
use once_cell::sync::Lazy;
use regex::Regex;

const MORNING: (u32, u32) = (9, 0);
const END_OF_DAY: (u32, u32) = (17, 0);

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M%p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M%p",
    "%b %d, %Y %I:%M%p",
    "%b %d, %Y %H:%M",
    "%B %d, %Y %I:%M%p",
    "%B %d, %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y", "%d %b %Y"];

static RELATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^in\s+(\d+)\s+(minute|minutes|min|mins|hour|hours|hr|hrs|day|days|week|weeks|month|months)$",
    )
    .expect("relative date pattern")
});

static TWELVE_HOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})(?::(\d{2}))?\s*(am|pm)$").expect("12-hour pattern"));

static TWENTY_FOUR_HOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("24-hour pattern"));

/// Parses a due-window bound, see the module docs for the accepted forms.
pub fn parse_bound(input: &str, ctx: &TimeContext, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    let invalid = || RemError::InvalidDate(input.to_string());
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(naive) = calendar_layout(trimmed) {
        return ctx.resolve(naive).ok_or_else(invalid);
    }

    natural(&trimmed.to_lowercase(), ctx, now).ok_or_else(invalid)
}

fn calendar_layout(input: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(input, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(input, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn at(ctx: &TimeContext, day: NaiveDate, (hour, minute): (u32, u32)) -> Option<DateTime<Utc>> {
    ctx.resolve(day.and_hms_opt(hour, minute, 0)?)
}

fn natural(input: &str, ctx: &TimeContext, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let today = ctx.today(now);

    match input {
        "today" => return at(ctx, today, MORNING),
        "tomorrow" => return at(ctx, today.succ_opt()?, MORNING),
        "yesterday" => return at(ctx, today.pred_opt()?, MORNING),
        _ => {}
    }

    if let Some(found) = relative(input, ctx, now)
        .or_else(|| next_weekday(input, ctx, today))
        .or_else(|| day_at_time(input, ctx, today))
        .or_else(|| time_only(input, ctx, now))
    {
        return Some(found);
    }

    match input {
        "next week" => at(ctx, today.checked_add_days(Days::new(7))?, MORNING),
        "next month" => at(ctx, today.checked_add_months(Months::new(1))?, MORNING),
        "end of day" | "eod" => at(ctx, today, END_OF_DAY),
        "end of week" | "eow" => {
            let weekday = i64::from(today.weekday().num_days_from_sunday());
            let mut until_friday = (5 - weekday + 7) % 7;
            if until_friday == 0 {
                until_friday = 7;
            }
            let friday = today.checked_add_days(Days::new(until_friday.unsigned_abs()))?;
            at(ctx, friday, END_OF_DAY)
        }
        _ => None,
    }
}

/// `in N <unit>`. Minutes and hours shift the instant, larger units shift
/// the wall-clock date.
fn relative(input: &str, ctx: &TimeContext, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = RELATIVE.captures(input)?;
    let amount: u32 = caps[1].parse().ok()?;
    let unit = &caps[2];

    if unit.starts_with("min") {
        return now.checked_add_signed(Duration::try_minutes(i64::from(amount))?);
    }
    if unit.starts_with("hour") || unit.starts_with("hr") {
        return now.checked_add_signed(Duration::try_hours(i64::from(amount))?);
    }

    let local = ctx.naive_local(now);
    let shifted = if unit.starts_with("day") {
        local.checked_add_days(Days::new(u64::from(amount)))?
    } else if unit.starts_with("week") {
        local.checked_add_days(Days::new(u64::from(amount) * 7))?
    } else {
        local.checked_add_months(Months::new(amount))?
    };
    ctx.resolve(shifted)
}

/// `next <weekday> [at <time>]`. Today's weekday means a week from today.
fn next_weekday(input: &str, ctx: &TimeContext, today: NaiveDate) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() < 2 || parts[0] != "next" {
        return None;
    }
    let target: Weekday = parts[1].parse().ok()?;

    let current = i64::from(today.weekday().num_days_from_sunday());
    let mut ahead = i64::from(target.num_days_from_sunday()) - current;
    if ahead <= 0 {
        ahead += 7;
    }
    let day = today.checked_add_days(Days::new(ahead.unsigned_abs()))?;

    // An unreadable time keeps the morning default.
    let time = if parts.len() >= 4 && parts[2] == "at" {
        parse_clock(&parts[3..].join(" ")).unwrap_or(MORNING)
    } else {
        MORNING
    };
    at(ctx, day, time)
}

/// `today|tomorrow|yesterday at <time>`.
fn day_at_time(input: &str, ctx: &TimeContext, today: NaiveDate) -> Option<DateTime<Utc>> {
    let (day, time) = input.split_once(" at ")?;
    let day = match day.trim() {
        "today" => today,
        "tomorrow" => today.succ_opt()?,
        "yesterday" => today.pred_opt()?,
        _ => return None,
    };
    at(ctx, day, parse_clock(time)?)
}

fn time_only(input: &str, ctx: &TimeContext, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let time = parse_clock(input)?;
    let today = ctx.today(now);
    let candidate = at(ctx, today, time)?;
    if candidate < now {
        return at(ctx, today.succ_opt()?, time);
    }
    Some(candidate)
}

/// `5pm`, `5 pm`, `3:30pm` or `17:00`, as (hour, minute).
fn parse_clock(input: &str) -> Option<(u32, u32)> {
    let input = input.trim();

    if let Some(caps) = TWELVE_HOUR.captures(input) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }
        let hour = match (&caps[3], hour) {
            ("am", 12) => 0,
            ("am", h) => h,
            (_, 12) => 12,
            (_, h) => h + 12,
        };
        return Some((hour, minute));
    }

    let caps = TWENTY_FOUR_HOUR.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}
