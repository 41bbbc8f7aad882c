//! ISO-8601 durations (`P1DT2H30M`, `PT0.5S`, `-P2W`)

use crate::error::SerializationError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const KIND: &str = "duration";

/// An ISO-8601 duration as it appears on the wire.
///
/// Calendar components (years, months) are kept as written because they have
/// no fixed length; `to_std_duration` refuses them.
///
/// Fields are only set through the `with_*` builders, which keep the
/// fractional part below one second so `Display` output always parses back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDuration {
    negative: bool,
    years: u32,
    months: u32,
    weeks: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
    /// Fractional seconds, in nanoseconds (< 1_000_000_000).
    nanos: u32,
}

const NANOS_PER_SEC: u32 = 1_000_000_000;

impl IsoDuration {
    pub const fn zero() -> Self {
        Self {
            negative: false,
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            nanos: 0,
        }
    }

    pub const fn from_days(days: u32) -> Self {
        Self::zero().with_days(days)
    }

    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self::zero()
            .with_hours(hours)
            .with_minutes(minutes)
            .with_seconds(seconds)
    }

    pub const fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    pub const fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    pub const fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    pub const fn with_weeks(mut self, weeks: u32) -> Self {
        self.weeks = weeks;
        self
    }

    pub const fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub const fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    pub const fn with_minutes(mut self, minutes: u32) -> Self {
        self.minutes = minutes;
        self
    }

    pub const fn with_seconds(mut self, seconds: u32) -> Self {
        self.seconds = seconds;
        self
    }

    /// Set the fractional part. Whole seconds in `nanos` carry into the
    /// seconds component, saturating at `u32::MAX`.
    pub const fn with_nanos(mut self, nanos: u32) -> Self {
        self.seconds = self.seconds.saturating_add(nanos / NANOS_PER_SEC);
        self.nanos = nanos % NANOS_PER_SEC;
        self
    }

    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    pub const fn years(&self) -> u32 {
        self.years
    }

    pub const fn months(&self) -> u32 {
        self.months
    }

    pub const fn weeks(&self) -> u32 {
        self.weeks
    }

    pub const fn days(&self) -> u32 {
        self.days
    }

    pub const fn hours(&self) -> u32 {
        self.hours
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Always below one second.
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    fn has_date_part(&self) -> bool {
        self.years != 0 || self.months != 0 || self.weeks != 0 || self.days != 0
    }

    fn has_time_part(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.nanos != 0
    }

    pub fn is_zero(&self) -> bool {
        !self.has_date_part() && !self.has_time_part()
    }

    /// Convert to a fixed-length duration. Returns `None` for negative
    /// durations and for durations with year or month components.
    pub fn to_std_duration(&self) -> Option<Duration> {
        if self.negative || self.years != 0 || self.months != 0 {
            return None;
        }
        let secs = u64::from(self.weeks) * 7 * 86_400
            + u64::from(self.days) * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds);
        Some(Duration::new(secs, self.nanos))
    }
}

/// Days beyond `u32::MAX` saturate.
impl From<Duration> for IsoDuration {
    fn from(value: Duration) -> Self {
        let total = value.as_secs();
        let days = u32::try_from(total / 86_400).unwrap_or(u32::MAX);
        Self::zero()
            .with_days(days)
            .with_hours(((total % 86_400) / 3_600) as u32)
            .with_minutes(((total % 3_600) / 60) as u32)
            .with_seconds((total % 60) as u32)
            .with_nanos(value.subsec_nanos())
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        if self.is_zero() {
            return write!(f, "T0S");
        }
        for (value, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{}{}", value, designator)?;
            }
        }
        if self.has_time_part() {
            write!(f, "T")?;
            if self.hours != 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes != 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0 || self.nanos != 0 {
                if self.nanos == 0 {
                    write!(f, "{}S", self.seconds)?;
                } else {
                    let frac = format!("{:09}", self.nanos);
                    write!(f, "{}.{}S", self.seconds, frac.trim_end_matches('0'))?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for IsoDuration {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SerializationError::invalid_format(KIND, s, reason);

        let mut rest = s.trim();
        let mut out = IsoDuration::zero();

        if let Some(stripped) = rest.strip_prefix('-') {
            out.negative = true;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('+') {
            rest = stripped;
        }

        rest = rest
            .strip_prefix('P')
            .ok_or_else(|| invalid("missing leading 'P'"))?;
        if rest.is_empty() {
            return Err(invalid("no components"));
        }

        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => {
                if time.is_empty() {
                    return Err(invalid("'T' without time components"));
                }
                (date, Some(time))
            }
            None => (rest, None),
        };

        let mut last_rank = 0;
        for (number, designator) in components(date_part).map_err(|reason| invalid(reason))? {
            let (rank, slot) = match designator {
                'Y' => (1, &mut out.years),
                'M' => (2, &mut out.months),
                'W' => (3, &mut out.weeks),
                'D' => (4, &mut out.days),
                _ => return Err(invalid("unexpected designator in date part")),
            };
            if rank <= last_rank {
                return Err(invalid("components out of order"));
            }
            last_rank = rank;
            *slot = whole(number).ok_or_else(|| invalid("fraction only allowed on seconds"))?;
        }

        if let Some(time_part) = time_part {
            let mut last_rank = 0;
            for (number, designator) in components(time_part).map_err(|reason| invalid(reason))? {
                let rank = match designator {
                    'H' => 1,
                    'M' => 2,
                    'S' => 3,
                    _ => return Err(invalid("unexpected designator in time part")),
                };
                if rank <= last_rank {
                    return Err(invalid("components out of order"));
                }
                last_rank = rank;
                match designator {
                    'H' => {
                        out.hours =
                            whole(number).ok_or_else(|| invalid("fraction only allowed on seconds"))?
                    }
                    'M' => {
                        out.minutes =
                            whole(number).ok_or_else(|| invalid("fraction only allowed on seconds"))?
                    }
                    _ => {
                        let (secs, nanos) =
                            seconds(number).ok_or_else(|| invalid("bad seconds value"))?;
                        out.seconds = secs;
                        out.nanos = nanos;
                    }
                }
            }
        }

        Ok(out)
    }
}

/// Split `12D3H` style text into (number, designator) pairs.
fn components(part: &str) -> Result<Vec<(&str, char)>, &'static str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (idx, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            continue;
        }
        let number = &part[start..idx];
        if number.is_empty() {
            return Err("designator without a number");
        }
        out.push((number, c));
        start = idx + c.len_utf8();
    }
    if start != part.len() {
        return Err("number without a designator");
    }
    Ok(out)
}

fn whole(number: &str) -> Option<u32> {
    number.parse().ok()
}

fn seconds(number: &str) -> Option<(u32, u32)> {
    let normalized = number.replace(',', ".");
    match normalized.split_once('.') {
        None => Some((normalized.parse().ok()?, 0)),
        Some((secs, frac)) => {
            if frac.is_empty() || frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let secs = if secs.is_empty() { 0 } else { secs.parse().ok()? };
            let nanos = format!("{:0<9}", frac).parse().ok()?;
            Some((secs, nanos))
        }
    }
}
