use chrono::{Datelike, NaiveDate};

/// One page of the school calendar, relative to the requested start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarPage {
    /// The page the site shows without a date parameter.
    Current,
    /// The page for a later month. `day` is forwarded as-is and may not
    /// exist in that month; the site only uses it to pick the month.
    Month { year: i32, month: u32, day: u32 },
}

impl CalendarPage {
    pub fn url(&self, base: &str) -> String {
        match self {
            Self::Current => base.to_string(),
            Self::Month { year, month, day } => format!("{base}?cal_date={year}-{month}-{day}"),
        }
    }
}

/// Identifiers for `count` consecutive month pages starting at `start`.
pub fn sequence(start: NaiveDate, count: usize) -> Vec<CalendarPage> {
    let mut year = start.year();
    let mut month = start.month();
    let day = start.day();

    let mut pages = Vec::with_capacity(count);
    if count == 0 {
        return pages;
    }

    pages.push(CalendarPage::Current);
    for _ in 1..count {
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
        pages.push(CalendarPage::Month { year, month, day });
    }

    pages
}
