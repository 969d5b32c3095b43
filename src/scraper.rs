use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::{AthleticsCalendar, Error, Event, EventTime, Game, Practice, Result, Status, Teams};

macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

/// Events of one school calendar month page, in page order.
pub fn school_calendar<S: AsRef<str>>(html: S) -> Result<Vec<Event>> {
    let html = Html::parse_document(html.as_ref());
    let mut events = Vec::new();

    for daybox in html.select(selector!("div.fsCalendarDaybox")) {
        let header = daybox
            .select(selector!("div.fsCalendarDate"))
            .next()
            .ok_or_else(|| Error::scrape("calendar day without date header"))?;
        let date = header_date(header)?;

        for info in daybox.select(selector!("div.fsCalendarInfo")) {
            events.push(calendar_event(info, date)?);
        }
    }

    Ok(events)
}

fn header_date(header: ElementRef) -> Result<NaiveDate> {
    let year = attr(header, "data-year")?
        .parse::<i32>()
        .map_err(|_| Error::scrape("invalid data-year"))?;
    // Finalsite counts months from zero.
    let month = attr(header, "data-month")?
        .parse::<u32>()
        .map_err(|_| Error::scrape("invalid data-month"))?;
    let day = attr(header, "data-day")?
        .parse::<u32>()
        .map_err(|_| Error::scrape("invalid data-day"))?;

    NaiveDate::from_ymd_opt(year, month + 1, day)
        .ok_or_else(|| Error::scrape(format!("no such date {year}-{}-{day}", month + 1)))
}

fn calendar_event(info: ElementRef, date: NaiveDate) -> Result<Event> {
    let name = optional_text(info, selector!(".fsCalendarEventTitle"))
        .ok_or_else(|| Error::scrape("calendar event without title"))?;

    // The day comes from the daybox header; multi-day events repeat under
    // each day with the datetime of their first day.
    let start = match info.select(selector!("time.fsStartTime")).next() {
        Some(time) => {
            let at = parse_datetime(attr(time, "datetime")?)?;
            EventTime::At(date.and_time(at.time()))
        }
        None => EventTime::AllDay(date),
    };

    let end = info
        .select(selector!("time.fsEndTime"))
        .next()
        .map(|time| attr(time, "datetime").and_then(parse_datetime))
        .transpose()?
        .map(EventTime::At);

    let location = optional_text(info, selector!(".fsLocation"));

    Ok(Event {
        name,
        start,
        end,
        location,
    })
}

/// Games listed on the athletics games page, in page order.
pub fn athletics_games<S: AsRef<str>>(html: S) -> Result<Vec<Game>> {
    let html = Html::parse_document(html.as_ref());

    html.select(selector!("article.fsAthleticsEvent"))
        .map(|element| -> Result<Game> {
            let home = optional_text(element, selector!(".fsAthleticsAdvantage"))
                .and_then(|advantage| match advantage.to_ascii_lowercase().as_str() {
                    "home" => Some(true),
                    "away" => Some(false),
                    _ => None,
                });

            Ok(Game {
                team: team_name(element)?,
                start: athletics_start(element)?,
                opponent: optional_text(element, selector!(".fsAthleticsOpponentName")),
                location: optional_text(element, selector!(".fsAthleticsLocations")),
                home,
                result: optional_text(element, selector!(".fsAthleticsResult")),
                score: optional_text(element, selector!(".fsAthleticsScore")),
                status: athletics_status(element),
            })
        })
        .collect()
}

/// Practices listed on the athletics practices page, in page order.
pub fn athletics_practices<S: AsRef<str>>(html: S) -> Result<Vec<Practice>> {
    let html = Html::parse_document(html.as_ref());

    html.select(selector!("article.fsAthleticsEvent"))
        .map(|element| -> Result<Practice> {
            Ok(Practice {
                team: team_name(element)?,
                start: athletics_start(element)?,
                location: optional_text(element, selector!(".fsAthleticsLocations")),
                status: athletics_status(element),
            })
        })
        .collect()
}

pub(crate) fn athletics_calendar<S: AsRef<str>>(games: S, practices: S) -> Result<AthleticsCalendar> {
    Ok(AthleticsCalendar {
        games: athletics_games(games)?,
        practices: athletics_practices(practices)?,
    })
}

fn team_name(element: ElementRef) -> Result<String> {
    optional_text(element, selector!(".fsAthleticsTeamName"))
        .ok_or_else(|| Error::scrape("athletics event without team name"))
}

fn athletics_start(element: ElementRef) -> Result<EventTime> {
    let date_element = element
        .select(selector!("time.fsDate"))
        .next()
        .ok_or_else(|| Error::scrape("athletics event without date"))?;
    let date = parse_date(attr(date_element, "datetime")?)?;

    match element.select(selector!("time.fsStartTime")).next() {
        Some(time) => {
            let at = parse_datetime(attr(time, "datetime")?)?;
            Ok(EventTime::At(date.and_time(at.time())))
        }
        None => Ok(EventTime::AllDay(date)),
    }
}

fn athletics_status(element: ElementRef) -> Option<Status> {
    optional_text(element, selector!(".fsAthleticsStatus"))
        .and_then(|label| Status::from_label(&label))
}

/// Team names per season from the athletics teams page.
pub fn athletics_teams<S: AsRef<str>>(html: S) -> Result<Teams> {
    let html = Html::parse_document(html.as_ref());
    let mut seasons = Vec::new();

    for section in html.select(selector!("section")) {
        let season = optional_text(section, selector!("header h2"))
            .ok_or_else(|| Error::scrape("teams section without season heading"))?;

        let teams = section
            .select(selector!("span.fsAthleticsTeamName"))
            .map(text)
            .collect::<Vec<_>>();

        // A repeated heading replaces the earlier list in place.
        match seasons.iter_mut().find(|(name, _)| *name == season) {
            Some((_, existing)) => *existing = teams,
            None => seasons.push((season, teams)),
        }
    }

    Ok(Teams(seasons))
}

fn text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn optional_text(element: ElementRef, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(text)
        .filter(|text| !text.is_empty())
}

fn attr<'a>(element: ElementRef<'a>, name: &str) -> Result<&'a str> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .ok_or_else(|| Error::scrape(format!("<{}> without {name} attribute", element.value().name())))
}

fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.naive_local());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| Error::scrape(format!("invalid datetime {raw:?}")))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    if raw.contains('T') {
        return parse_datetime(raw).map(|datetime| datetime.date());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Error::scrape(format!("invalid date {raw:?}")))
}
