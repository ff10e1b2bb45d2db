mod draw;
mod prefs;
mod viewer;

use crate::app::state::AppState;
use yew::prelude::*;

pub use draw::{build_avoid_toggle, build_random, build_reveal, build_revisit, build_text_change};
pub use prefs::{build_lang_change, build_toggle_form};
pub use viewer::{build_fullscreen, build_fullscreen_change};

/// How long the viewer keeps its error outline after an exhausted draw.
pub const ERROR_HIGHLIGHT_MS: i32 = 2_000;

#[derive(Clone)]
pub struct AppHandlers {
    pub text_change: Callback<String>,
    pub random: Callback<()>,
    pub reveal: Callback<()>,
    pub revisit: Callback<usize>,
    pub avoid_toggle: Callback<bool>,
    pub toggle_form: Callback<()>,
    pub fullscreen: Callback<()>,
    pub fullscreen_change: Callback<bool>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            text_change: build_text_change(state),
            random: build_random(state),
            reveal: build_reveal(state),
            revisit: build_revisit(state),
            avoid_toggle: build_avoid_toggle(state),
            toggle_form: build_toggle_form(state),
            fullscreen: build_fullscreen(),
            fullscreen_change: build_fullscreen_change(state),
            lang_change: build_lang_change(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use streetview_core::{Placeholder, Session, SessionView};
    use yew::LocalServerRenderer;

    const LOCATIONS: &str = "https://www.google.com/maps/embed?pb=1, Lima\n\
                             https://www.google.com/maps/embed?pb=2, Cusco\n";

    #[hook]
    fn use_app_state(session: Session, raw_text: String, exhausted: bool) -> AppState {
        AppState {
            session: use_state(move || session),
            raw_text: use_state(move || raw_text),
            exhausted: use_state(move || exhausted),
            highlight_error: use_state(|| false),
            form_open: use_state(|| true),
            fullscreen: use_state(|| false),
            current_language: use_state(|| String::from("es")),
        }
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        session: Session,
        raw_text: AttrValue,
        exhausted: bool,
    }

    // Fires every trigger once against live hook state. The outcomes are
    // asserted in `draw.rs` against the helpers the callbacks delegate to.
    #[function_component(HandlersHarness)]
    fn handlers_harness(p: &HarnessProps) -> Html {
        crate::i18n::set_lang("es");
        let invoked = use_state(|| false);
        let app_state = use_app_state(p.session.clone(), p.raw_text.to_string(), p.exhausted);
        let handlers = AppHandlers::new(&app_state);

        if !*invoked {
            invoked.set(true);
            handlers.avoid_toggle.emit(true);
            handlers.random.emit(());
            handlers.reveal.emit(());
            handlers.revisit.emit(0);
            handlers.revisit.emit(99);
            handlers.toggle_form.emit(());
            handlers.fullscreen.emit(());
            handlers.fullscreen_change.emit(true);
            handlers.lang_change.emit(String::from("en"));
            handlers.text_change.emit(String::from(LOCATIONS));
        }
        Html::default()
    }

    fn render(session: Session, raw_text: &str, exhausted: bool) {
        let props = HarnessProps {
            session,
            raw_text: AttrValue::from(raw_text.to_string()),
            exhausted,
        };
        let _ = block_on(LocalServerRenderer::<HandlersHarness>::with_props(props).render());
    }

    #[test]
    fn handlers_cover_draw_paths() {
        render(Session::new(1), LOCATIONS, false);
    }

    #[test]
    fn handlers_cover_exhausted_paths() {
        render(Session::new(2), "", true);
    }

    #[test]
    fn handlers_cover_revealed_session() {
        let mut session = Session::new(3);
        session.select_random(LOCATIONS).unwrap();
        session.reveal();
        render(session, LOCATIONS, false);
        crate::i18n::set_lang("es");
    }

    #[test]
    fn exhausted_view_is_reported() {
        let view = SessionView::from_session(&Session::new(4), true);
        assert_eq!(view.placeholder, Placeholder::Exhausted);
    }
}
