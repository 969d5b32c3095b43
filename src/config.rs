pub const DEFAULT_SITE: &str = "https://www.maret.org";
pub const DEFAULT_MONTHS: usize = 2;

const SCHOOL_CALENDAR_PATH: &str = "/fs/elements/6221";
const ATHLETICS_GAMES_PATH: &str = "/fs/elements/5634";
const ATHLETICS_PRACTICES_PATH: &str = "/fs/elements/5637";
const ATHLETICS_TEAMS_PATH: &str = "/fs/elements/6188";

/// Page URLs the pipelines read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub school_calendar: String,
    pub athletics_games: String,
    pub athletics_practices: String,
    pub athletics_teams: String,
}

impl Sources {
    pub fn new(site: &str) -> Self {
        let site = site.trim_end_matches('/');
        Self {
            school_calendar: format!("{site}{SCHOOL_CALENDAR_PATH}"),
            athletics_games: format!("{site}{ATHLETICS_GAMES_PATH}"),
            athletics_practices: format!("{site}{ATHLETICS_PRACTICES_PATH}"),
            athletics_teams: format!("{site}{ATHLETICS_TEAMS_PATH}"),
        }
    }
}

impl Default for Sources {
    fn default() -> Self {
        Self::new(DEFAULT_SITE)
    }
}
