#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use maret_scraper::{Error, Fetch, Result, Sources};
use reqwest::StatusCode;

pub const SITE: &str = "https://school.test";

pub const DECEMBER: &str = include_str!("../fixtures/school_calendar/december.html");
pub const JANUARY: &str = include_str!("../fixtures/school_calendar/january.html");
pub const GAMES: &str = include_str!("../fixtures/athletics/games.html");
pub const PRACTICES: &str = include_str!("../fixtures/athletics/practices.html");
pub const TEAMS: &str = include_str!("../fixtures/athletics/teams.html");

/// Serves canned pages by URL and records what was asked for.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn page(mut self, url: impl Into<String>, html: &str) -> Self {
        self.pages.insert(url.into(), html.to_string());
        self
    }

    pub fn delayed(mut self, url: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(url.into(), delay);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        let mut requested = self.requested.lock().unwrap().clone();
        requested.sort();
        requested
    }
}

impl Fetch for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requested.lock().unwrap().push(url.to_string());

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            })
    }
}

impl Fetch for &StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        StubFetcher::fetch(self, url).await
    }
}

pub fn sources() -> Sources {
    Sources::new(SITE)
}

/// Stub serving the two school calendar fixtures for a start date of
/// 2016-12-23 and every athletics page.
pub fn school_site() -> StubFetcher {
    let sources = sources();
    StubFetcher::default()
        .page(sources.school_calendar.clone(), DECEMBER)
        .page(format!("{}?cal_date=2017-1-23", sources.school_calendar), JANUARY)
        .page(sources.athletics_games.clone(), GAMES)
        .page(sources.athletics_practices.clone(), PRACTICES)
        .page(sources.athletics_teams, TEAMS)
}
