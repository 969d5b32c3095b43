use chrono::NaiveDate;
use futures::future;
use log::debug;

use crate::fetch::{Fetch, HttpFetcher};
use crate::sequence::sequence;
use crate::{merge_calendars, scraper, AthleticsCalendar, Error, Event, Result, Sources, Teams};

/// Fetches pages from the configured sources and turns them into records.
pub struct Pipeline<F = HttpFetcher> {
    fetcher: F,
    sources: Sources,
}

impl<F: Fetch> Pipeline<F> {
    pub fn new(fetcher: F, sources: Sources) -> Self {
        Self { fetcher, sources }
    }

    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    /// The school calendar for `months` consecutive months, starting with the
    /// month containing `start`, merged into one chronological list.
    pub async fn school_calendar(&self, start: NaiveDate, months: usize) -> Result<Vec<Event>> {
        let pages = sequence(start, months).into_iter().map(|page| {
            let url = page.url(&self.sources.school_calendar);
            async move {
                let html = self.fetcher.fetch(&url).await?;
                let events = scraper::school_calendar(html)?;
                debug!("Scraped {} events from {url}", events.len());
                Ok::<_, Error>(events)
            }
        });

        let pages = future::try_join_all(pages).await?;
        Ok(merge_calendars(pages))
    }

    pub async fn athletics_calendar(&self) -> Result<AthleticsCalendar> {
        let (games, practices) = future::try_join(
            self.fetcher.fetch(&self.sources.athletics_games),
            self.fetcher.fetch(&self.sources.athletics_practices),
        )
        .await?;

        scraper::athletics_calendar(games, practices)
    }

    pub async fn athletics_teams(&self) -> Result<Teams> {
        let html = self.fetcher.fetch(&self.sources.athletics_teams).await?;
        scraper::athletics_teams(html)
    }
}
