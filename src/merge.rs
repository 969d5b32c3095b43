use std::collections::HashSet;

use chrono::NaiveDate;

use crate::Event;

/// Stitches consecutive month pages into one chronological event list.
///
/// Pages must be ordered earliest month first, each sorted by start and
/// complete for every day it mentions. Under those conditions the first
/// event of a later page whose day is not yet merged marks where new content
/// begins: everything before it repeats days of the previous page and is
/// dropped, everything from it on is kept.
pub fn merge_calendars<I>(pages: I) -> Vec<Event>
where
    I: IntoIterator<Item = Vec<Event>>,
{
    let mut pages = pages.into_iter();
    let Some(mut merged) = pages.next() else {
        return Vec::new();
    };
    debug_assert!(is_sorted(&merged), "calendar page is not in chronological order");

    let mut days = merged.iter().map(Event::day).collect::<HashSet<NaiveDate>>();

    for page in pages {
        debug_assert!(is_sorted(&page), "calendar page is not in chronological order");

        let mut overlap = true;
        for event in page {
            if merged.is_empty() || !days.contains(&event.day()) {
                overlap = false;
            }

            if overlap {
                continue;
            }

            days.insert(event.day());
            merged.push(event);
        }
    }

    merged
}

fn is_sorted(page: &[Event]) -> bool {
    page.windows(2)
        .all(|pair| pair[0].start.naive() <= pair[1].start.naive())
}
