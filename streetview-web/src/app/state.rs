use streetview_core::{Session, SessionView};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<Session>,
    pub raw_text: UseStateHandle<String>,
    /// The last draw found nothing to pick from.
    pub exhausted: UseStateHandle<bool>,
    /// Red outline around the viewer after an exhausted draw; cleared by a timer.
    pub highlight_error: UseStateHandle<bool>,
    pub form_open: UseStateHandle<bool>,
    pub fullscreen: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(|| Session::new(crate::dom::entropy_seed())),
        raw_text: use_state(String::new),
        exhausted: use_state(|| false),
        highlight_error: use_state(|| false),
        form_open: use_state(|| true),
        fullscreen: use_state(|| false),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::from_session(&self.session, *self.exhausted)
    }
}
