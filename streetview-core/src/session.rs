//! Session state machine.
//!
//! One `Session` owns everything a page load knows: the current selection,
//! its reveal flags, the duplicate-avoidance mode, the history and the random
//! source. Callers drive it with three triggers (draw, reveal, revisit) and
//! read back the resulting fields; rendering lives elsewhere.
use crate::history::{History, HistoryEntry};
use crate::location::{Location, parse_locations};
use crate::pseudonym::pseudonym;
use crate::selector::{SelectionError, filter_available, select_location};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Where the session stands with respect to its current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Nothing selected yet.
    Empty,
    /// A location was drawn but its real name is still hidden.
    SelectedHidden,
    /// The real name is visible, after a reveal or a revisit.
    SelectedRevealed,
}

/// The location currently loaded in the viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentLocation {
    pub url: String,
    pub real_name: String,
    pub fantasy_name: String,
}

impl CurrentLocation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }

    fn to_history_entry(&self) -> HistoryEntry {
        HistoryEntry::new(&self.url, &self.real_name, &self.fantasy_name)
    }
}

impl From<&HistoryEntry> for CurrentLocation {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            url: entry.url.clone(),
            real_name: entry.real_name.clone(),
            fantasy_name: entry.fantasy_name.clone(),
        }
    }
}

/// Result of a reveal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// No current selection; nothing changed.
    Ignored,
    /// The real name is shown. `recorded` is true when this call appended the
    /// selection to the history.
    Revealed { recorded: bool },
}

#[derive(Debug, Clone)]
pub struct Session {
    current: CurrentLocation,
    revealed: bool,
    in_history: bool,
    avoid_duplicates: bool,
    history: History,
    rng: ChaCha20Rng,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
            && self.revealed == other.revealed
            && self.in_history == other.in_history
            && self.avoid_duplicates == other.avoid_duplicates
            && self.history == other.history
    }
}

impl Session {
    /// Fresh, empty session whose draws are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            current: CurrentLocation::default(),
            revealed: false,
            in_history: false,
            avoid_duplicates: false,
            history: History::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.current.is_empty() {
            SessionPhase::Empty
        } else if self.revealed {
            SessionPhase::SelectedRevealed
        } else {
            SessionPhase::SelectedHidden
        }
    }

    #[must_use]
    pub const fn current(&self) -> &CurrentLocation {
        &self.current
    }

    #[must_use]
    pub fn current_url(&self) -> &str {
        &self.current.url
    }

    #[must_use]
    pub fn current_real_name(&self) -> &str {
        &self.current.real_name
    }

    #[must_use]
    pub fn current_fantasy_name(&self) -> &str {
        &self.current.fantasy_name
    }

    #[must_use]
    pub const fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub const fn in_history(&self) -> bool {
        self.in_history
    }

    #[must_use]
    pub const fn avoid_duplicates(&self) -> bool {
        self.avoid_duplicates
    }

    /// Takes effect on the next draw.
    pub const fn set_avoid_duplicates(&mut self, avoid: bool) {
        self.avoid_duplicates = avoid;
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Candidates from `raw_text` that the next draw may pick.
    #[must_use]
    pub fn candidates(&self, raw_text: &str) -> Vec<Location> {
        filter_available(
            parse_locations(raw_text),
            &self.history,
            self.avoid_duplicates,
        )
    }

    /// Parse `raw_text` and draw a new hidden location from it.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Exhausted`] when no candidate survives parsing
    /// and duplicate filtering. The session is left untouched in that case.
    pub fn select_random(&mut self, raw_text: &str) -> Result<&CurrentLocation, SelectionError> {
        let candidates = parse_locations(raw_text);
        self.select_from(candidates)
    }

    /// Draw a new hidden location from already-parsed candidates.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Exhausted`] when every candidate is filtered
    /// out. The session is left untouched in that case.
    pub fn select_from(
        &mut self,
        candidates: Vec<Location>,
    ) -> Result<&CurrentLocation, SelectionError> {
        let available = filter_available(candidates, &self.history, self.avoid_duplicates);
        let picked = match select_location(&available, &mut self.rng) {
            Ok(location) => location,
            Err(err) => {
                log::info!("draw exhausted (avoid_duplicates={})", self.avoid_duplicates);
                return Err(err);
            }
        };

        self.current = CurrentLocation {
            url: picked.url.clone(),
            real_name: picked.name.clone(),
            fantasy_name: pseudonym(&picked.url),
        };
        self.revealed = false;
        self.in_history = false;
        log::debug!(
            "drew {} from {} candidates",
            self.current.fantasy_name,
            available.len()
        );
        Ok(&self.current)
    }

    /// Show the real name of the current selection, recording it in the
    /// history the first time.
    pub fn reveal(&mut self) -> RevealOutcome {
        if self.current.is_empty() {
            return RevealOutcome::Ignored;
        }
        let recorded = !self.in_history;
        if recorded {
            self.history.append(self.current.to_history_entry());
            self.in_history = true;
            log::debug!("recorded {} in history", self.current.fantasy_name);
        }
        self.revealed = true;
        RevealOutcome::Revealed { recorded }
    }

    /// Load a history entry back into the viewer, already revealed.
    pub fn revisit(&mut self, entry: &HistoryEntry) {
        self.current = CurrentLocation::from(entry);
        self.in_history = true;
        self.revealed = true;
        log::debug!("revisited {}", entry.fantasy_name);
    }

    /// Revisit the history entry at `index` (0 is the most recent).
    /// Out-of-range indices leave the session unchanged.
    pub fn revisit_index(&mut self, index: usize) -> Option<&CurrentLocation> {
        let entry = self.history.get(index)?.clone();
        self.revisit(&entry);
        Some(&self.current)
    }
}
