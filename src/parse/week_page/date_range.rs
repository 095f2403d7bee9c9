use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::parse::Error;

/// Offset from the first to the last day of a published week.
pub const WEEK_SPAN: Duration = Duration::hours(144);
pub const DAYS_PER_WEEK: usize = 7;

/// A short `dd.mm.` anchor further than this from today is taken to belong to the adjacent year.
const YEAR_ROLLOVER_DAYS: i64 = 180;

/// Returns `Ok(None)` when the text does not have the form's shape.
type AnchorForm = fn(&str, NaiveDate) -> Result<Option<NaiveDate>, Error>;

/// Tried in order, the first match wins.
const ANCHOR_FORMS: [(&str, AnchorForm); 2] =
    [("dd.mm.yyyy", parse_full_date), ("dd.mm.", parse_short_date)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl WeekRange {
    /// Resolves the week from the range text printed on the menu page, e.g. `01.-07.01.2024`.
    ///
    /// `reference` supplies the year when the page leaves it out.
    pub fn from_anchor(text: &str, reference: NaiveDate) -> Result<Self, Error> {
        Self::ending_on(parse_end_date(text, reference)?)
    }

    pub fn ending_on(end: NaiveDate) -> Result<Self, Error> {
        // shift UTC midnights so the result never depends on the local zone
        let start = end
            .and_time(NaiveTime::MIN)
            .and_utc()
            .checked_sub_signed(WEEK_SPAN)
            .ok_or_else(|| Error::DateParse(format!("Week ending on {end} starts out of range")))?
            .date_naive();
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..DAYS_PER_WEEK).map_while(move |i| start.checked_add_days(chrono::Days::new(i as u64)))
    }
}

pub fn parse_end_date(text: &str, reference: NaiveDate) -> Result<NaiveDate, Error> {
    let text = text.trim();
    for (name, form) in ANCHOR_FORMS {
        if let Some(date) = form(text, reference)? {
            log::trace!("Anchor {text:?} read as {name}: {date}");
            return Ok(date);
        }
    }
    Err(Error::DateParse(format!(
        "{text:?} does not end in a dd.mm.yyyy or dd.mm. date"
    )))
}

/// `...-dd.mm.yyyy`, read right to left.
fn parse_full_date(text: &str, _reference: NaiveDate) -> Result<Option<NaiveDate>, Error> {
    let Some((rest, year)) = text.rsplit_once('.') else {
        return Ok(None);
    };
    if year.is_empty() {
        return Ok(None);
    }
    let year = parse_digits(year)
        .ok_or_else(|| Error::DateParse(format!("Could not parse year {year:?}")))?;

    let (rest, month) = rest
        .rsplit_once('.')
        .ok_or_else(|| Error::DateParse(format!("No month before year in {text:?}")))?;
    let month = parse_digits(month)
        .ok_or_else(|| Error::DateParse(format!("Could not parse month {month:?}")))?;

    let day = parse_day(rest)?;

    let year = i32::try_from(year)
        .map_err(|_| Error::DateParse(format!("Year {year} is out of range")))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(|| Error::DateParse(format!("{day}.{month}.{year} is not a calendar date")))
}

/// The day directly precedes the month separator; a single digit is usually preceded by a dash.
fn parse_day(rest: &str) -> Result<u32, Error> {
    let last = |n: usize| rest.len().checked_sub(n).and_then(|i| rest.get(i..));
    if let Some(day) = last(2).and_then(parse_digits) {
        return Ok(day);
    }
    let day = last(1)
        .and_then(parse_digits)
        .ok_or_else(|| Error::DateParse(format!("Could not parse day from {rest:?}")))?;
    log::debug!("Day in {rest:?} has a single digit");
    Ok(day)
}

/// `... - dd.mm.` without a year, which comes from `reference`.
fn parse_short_date(text: &str, reference: NaiveDate) -> Result<Option<NaiveDate>, Error> {
    let segment = text.rsplit('-').next().unwrap_or(text).trim();
    if !segment.ends_with('.') || segment.matches('.').count() != 2 {
        return Ok(None);
    }
    let day_month = segment.replace('.', "/");
    let with_year = |year: i32| {
        NaiveDate::parse_from_str(&format!("{day_month}{year}"), "%d/%m/%Y")
            .map_err(|e| Error::DateParse(format!("Could not parse {segment:?}: {e}")))
    };

    let year = reference.year();
    let end = with_year(year)?;
    let end = if reference.signed_duration_since(end).num_days() > YEAR_ROLLOVER_DAYS {
        with_year(year + 1)?
    } else if end.signed_duration_since(reference).num_days() > YEAR_ROLLOVER_DAYS {
        with_year(year - 1)?
    } else {
        end
    };
    Ok(Some(end))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
