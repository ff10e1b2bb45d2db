//! Render-ready snapshot of a session.
//!
//! Front ends draw from a [`SessionView`] instead of poking at session flags
//! directly, which keeps every visibility rule in one tested place.
use crate::history::HistoryEntry;
use crate::session::{Session, SessionPhase};
use serde::Serialize;

/// What the viewer area shows in place of the panorama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Placeholder {
    /// A panorama is loaded; no placeholder.
    Hidden,
    /// Nothing drawn yet; invite the user to paste locations.
    Prompt,
    /// The last draw found no eligible candidates.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub index: usize,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub placeholder: Placeholder,
    pub frame_url: Option<String>,
    /// Blur/zoom the panorama while the name is hidden.
    pub zoomed: bool,
    pub caption: Option<String>,
    pub real_name: Option<String>,
    pub can_reveal: bool,
    pub history: Vec<HistoryRow>,
    pub history_visible: bool,
}

impl SessionView {
    /// Snapshot `session`. `exhausted` is the adapter's record of whether the
    /// most recent draw came back empty; it hides the panorama area until the
    /// next successful draw or revisit.
    #[must_use]
    pub fn from_session(session: &Session, exhausted: bool) -> Self {
        let history = session
            .history()
            .all()
            .iter()
            .enumerate()
            .map(|(index, entry)| HistoryRow::from_entry(index, entry))
            .collect::<Vec<_>>();
        let history_visible = !history.is_empty();

        if exhausted {
            return Self {
                placeholder: Placeholder::Exhausted,
                frame_url: None,
                zoomed: false,
                caption: None,
                real_name: None,
                can_reveal: false,
                history,
                history_visible,
            };
        }

        let current = session.current();
        match session.phase() {
            SessionPhase::Empty => Self {
                placeholder: Placeholder::Prompt,
                frame_url: None,
                zoomed: false,
                caption: None,
                real_name: None,
                can_reveal: false,
                history,
                history_visible,
            },
            phase => Self {
                placeholder: Placeholder::Hidden,
                frame_url: Some(current.url.clone()),
                zoomed: phase == SessionPhase::SelectedHidden,
                caption: Some(format!("{} - {}", current.fantasy_name, current.url)),
                real_name: (phase == SessionPhase::SelectedRevealed)
                    .then(|| current.real_name.clone()),
                can_reveal: true,
                history,
                history_visible,
            },
        }
    }
}

impl HistoryRow {
    fn from_entry(index: usize, entry: &HistoryEntry) -> Self {
        Self {
            index,
            label: entry.display_label(),
            url: entry.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_PLACE: &str = "https://google.com/maps/embed?a=1, Lima";

    #[test]
    fn empty_session_prompts() {
        let view = SessionView::from_session(&Session::new(1), false);
        assert_eq!(view.placeholder, Placeholder::Prompt);
        assert!(view.frame_url.is_none());
        assert!(!view.can_reveal);
        assert!(!view.history_visible);
    }

    #[test]
    fn hidden_selection_is_zoomed_without_name() {
        let mut session = Session::new(1);
        session.select_random(ONE_PLACE).unwrap();
        let view = SessionView::from_session(&session, false);
        assert_eq!(view.placeholder, Placeholder::Hidden);
        assert!(view.zoomed);
        assert!(view.real_name.is_none());
        let caption = view.caption.unwrap();
        assert!(caption.starts_with(session.current_fantasy_name()));
        assert!(caption.ends_with(" - https://google.com/maps/embed?a=1"));
    }

    #[test]
    fn revealed_selection_shows_name_and_history() {
        let mut session = Session::new(1);
        session.select_random(ONE_PLACE).unwrap();
        session.reveal();
        let view = SessionView::from_session(&session, false);
        assert!(!view.zoomed);
        assert_eq!(view.real_name.as_deref(), Some("Lima"));
        assert!(view.history_visible);
        assert_eq!(view.history[0].index, 0);
        assert!(view.history[0].label.ends_with("(Lima)"));
    }

    #[test]
    fn revealed_selection_keeps_reveal_available() {
        let mut session = Session::new(2);
        session.select_random(ONE_PLACE).unwrap();
        assert!(SessionView::from_session(&session, false).can_reveal);
        session.reveal();
        let view = SessionView::from_session(&session, false);
        assert!(view.can_reveal);
        session.revisit_index(0).unwrap();
        assert!(SessionView::from_session(&session, false).can_reveal);
    }

    #[test]
    fn exhausted_hides_viewer_but_keeps_history() {
        let mut session = Session::new(1);
        session.select_random(ONE_PLACE).unwrap();
        session.reveal();
        let view = SessionView::from_session(&session, true);
        assert_eq!(view.placeholder, Placeholder::Exhausted);
        assert!(view.frame_url.is_none());
        assert!(view.real_name.is_none());
        assert_eq!(view.history.len(), 1);
    }
}
