use crate::app::handlers::ERROR_HIGHLIGHT_MS;
use crate::app::state::AppState;
use streetview_core::{RevealOutcome, SelectionError, Session};
use yew::prelude::*;

/// Draw from `raw_text` on a copy of `session`. On exhaustion the caller
/// keeps its current session.
pub fn next_draw(session: &Session, raw_text: &str) -> Result<Session, SelectionError> {
    let mut sess = session.clone();
    sess.select_random(raw_text)?;
    Ok(sess)
}

/// Reveal the current selection on a copy of `session`. `None` means nothing
/// changes: the viewer is blank after an exhausted draw, or nothing is drawn.
pub fn next_reveal(session: &Session, exhausted: bool) -> Option<Session> {
    if exhausted {
        return None;
    }
    let mut sess = session.clone();
    match sess.reveal() {
        RevealOutcome::Ignored => None,
        RevealOutcome::Revealed { recorded } => {
            if recorded {
                log::debug!("history now holds {} entries", sess.history().len());
            }
            Some(sess)
        }
    }
}

/// Load history row `index` into a copy of `session`.
pub fn next_revisit(session: &Session, index: usize) -> Option<Session> {
    let mut sess = session.clone();
    sess.revisit_index(index)?;
    Some(sess)
}

pub fn build_text_change(state: &AppState) -> Callback<String> {
    let raw_text = state.raw_text.clone();
    Callback::from(move |text: String| raw_text.set(text))
}

pub fn build_random(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let raw_text = state.raw_text.clone();
    let exhausted = state.exhausted.clone();
    let highlight = state.highlight_error.clone();
    Callback::from(move |()| {
        match next_draw(&session_handle, raw_text.as_str()) {
            Ok(sess) => {
                exhausted.set(false);
                session_handle.set(sess);
            }
            Err(err) => {
                log::info!("{err}");
                exhausted.set(true);
                highlight.set(true);
                schedule_highlight_clear(highlight.clone());
            }
        }
    })
}

fn schedule_highlight_clear(highlight: UseStateHandle<bool>) {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        if crate::dom::sleep_ms(ERROR_HIGHLIGHT_MS).await.is_ok() {
            highlight.set(false);
        }
    });
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (highlight, ERROR_HIGHLIGHT_MS);
    }
}

pub fn build_reveal(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let exhausted = *state.exhausted;
    Callback::from(move |()| {
        if let Some(sess) = next_reveal(&session_handle, exhausted) {
            crate::dom::launch_confetti();
            session_handle.set(sess);
        }
    })
}

pub fn build_revisit(state: &AppState) -> Callback<usize> {
    let session_handle = state.session.clone();
    let exhausted = state.exhausted.clone();
    Callback::from(move |index: usize| {
        if let Some(sess) = next_revisit(&session_handle, index) {
            exhausted.set(false);
            session_handle.set(sess);
        }
    })
}

pub fn build_avoid_toggle(state: &AppState) -> Callback<bool> {
    let session_handle = state.session.clone();
    Callback::from(move |avoid: bool| {
        let mut sess = (*session_handle).clone();
        sess.set_avoid_duplicates(avoid);
        session_handle.set(sess);
    })
}
