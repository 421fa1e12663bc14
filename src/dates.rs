use chrono::{Datelike, Duration, Local, NaiveDate};

/// Upper bound used when no end date is given.
pub const FAR_FUTURE: &str = "2100-01-01";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn from_bounds(start: NaiveDate, end: NaiveDate) -> Result<Self, String> {
        if start > end {
            return Err(format!(
                "Start date {} cannot be after end date {}.",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ));
        }
        Ok(Self { start, end })
    }

    /// Fills in missing bounds: the start falls back to the Monday of
    /// `today`'s week and the end to [`FAR_FUTURE`].
    pub fn from_options(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, String> {
        let start = start.unwrap_or_else(|| previous_monday(today));
        let end = match end {
            Some(end) => end,
            None => parse_date(FAR_FUTURE)?,
        };
        Self::from_bounds(start, end)
    }

    pub fn as_query(&self) -> (String, String) {
        (
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
        )
    }

    pub fn label(&self) -> String {
        let (start, end) = self.as_query();
        format!("{start} and {end}")
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{value}'. Use YYYY-MM-DD."))
}

/// Most recent Monday on or before `today`.
pub fn previous_monday(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
