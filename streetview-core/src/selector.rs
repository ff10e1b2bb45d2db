//! Group-fair random selection.
//!
//! Candidates are bucketed by real name and the draw happens in two stages:
//! first a name, uniformly among the distinct names, then a location within
//! that name's bucket. A place pasted a hundred times under one name is
//! therefore exactly as likely to come up as a place pasted once.
use crate::history::History;
use crate::location::Location;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Nothing left to draw from: empty input or every candidate filtered out.
    #[error("no candidate locations are available")]
    Exhausted,
}

/// Locations sharing one real name, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup<'a> {
    pub name: &'a str,
    pub members: Vec<&'a Location>,
}

/// Partition `locations` by name. Groups appear in the order their name is
/// first seen, members keep input order.
#[must_use]
pub fn group_by_name(locations: &[Location]) -> Vec<LocationGroup<'_>> {
    let mut groups: Vec<LocationGroup<'_>> = Vec::new();
    for location in locations {
        if let Some(group) = groups.iter_mut().find(|g| g.name == location.name) {
            group.members.push(location);
        } else {
            groups.push(LocationGroup {
                name: &location.name,
                members: vec![location],
            });
        }
    }
    groups
}

/// `floor(r * len)` for `r` uniform in `[0, 1)`.
fn uniform_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    let r = rng.r#gen::<f64>();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let idx = (r * len as f64).floor() as usize;
    idx.min(len.saturating_sub(1))
}

/// Draw one location: a name group uniformly, then a member uniformly.
///
/// # Errors
///
/// Returns [`SelectionError::Exhausted`] when `locations` is empty.
pub fn select_location<'a, R: Rng + ?Sized>(
    locations: &'a [Location],
    rng: &mut R,
) -> Result<&'a Location, SelectionError> {
    let groups = group_by_name(locations);
    if groups.is_empty() {
        return Err(SelectionError::Exhausted);
    }
    let group = &groups[uniform_index(rng, groups.len())];
    let member = group.members[uniform_index(rng, group.members.len())];
    Ok(member)
}

/// Drop candidates already revealed when `avoid_duplicates` is set.
///
/// URLs are compared by exact string equality.
#[must_use]
pub fn filter_available(
    locations: Vec<Location>,
    history: &History,
    avoid_duplicates: bool,
) -> Vec<Location> {
    if !avoid_duplicates {
        return locations;
    }
    let revealed = history.urls();
    locations
        .into_iter()
        .filter(|loc| !revealed.contains(loc.url.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashMap;

    fn loc(url: &str, name: &str) -> Location {
        Location::new(format!("https://google.com/maps/embed?{url}"), name)
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let locations = vec![loc("1", "B"), loc("2", "A"), loc("3", "B")];
        let groups = group_by_name(&locations);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "B");
        assert_eq!(groups[0].members, vec![&locations[0], &locations[2]]);
        assert_eq!(groups[1].members, vec![&locations[1]]);
    }

    #[test]
    fn empty_candidates_are_exhausted() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(
            select_location(&[], &mut rng),
            Err(SelectionError::Exhausted)
        );
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let locations = vec![loc("only", "Solo")];
        for _ in 0..20 {
            assert_eq!(select_location(&locations, &mut rng), Ok(&locations[0]));
        }
    }

    #[test]
    fn names_are_drawn_evenly_despite_duplicates() {
        let mut locations: Vec<Location> =
            (0..100).map(|i| loc(&format!("dup{i}"), "Crowded")).collect();
        locations.push(loc("lonely", "Rare"));

        let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
        let mut counts: HashMap<String, u32> = HashMap::new();
        let trials = 10_000;
        for _ in 0..trials {
            let pick = select_location(&locations, &mut rng).unwrap();
            *counts.entry(pick.name.clone()).or_default() += 1;
        }
        let rare = counts.get("Rare").copied().unwrap_or(0);
        // Expected 5000; a per-row draw would give about 99.
        assert!((4_500..=5_500).contains(&rare), "rare picked {rare} times");
    }

    #[test]
    fn uniform_index_covers_full_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[uniform_index(&mut rng, 4)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn filter_passthrough_when_disabled() {
        let mut history = History::new();
        history.append(HistoryEntry::new(loc("1", "A").url, "A", "x"));
        let locations = vec![loc("1", "A"), loc("2", "B")];
        assert_eq!(filter_available(locations.clone(), &history, false), locations);
    }

    #[test]
    fn filter_removes_revealed_urls_exactly() {
        let mut history = History::new();
        history.append(HistoryEntry::new(loc("1", "A").url, "A", "x"));
        let locations = vec![loc("1", "A"), loc("1/", "A"), loc("2", "B")];
        let filtered = filter_available(locations, &history, true);
        let urls: Vec<&str> = filtered.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://google.com/maps/embed?1/",
                "https://google.com/maps/embed?2"
            ]
        );
    }
}
