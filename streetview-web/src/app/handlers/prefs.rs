use crate::app::state::AppState;
use yew::prelude::*;

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(code);
    })
}

pub fn build_toggle_form(state: &AppState) -> Callback<()> {
    let form_open = state.form_open.clone();
    Callback::from(move |()| form_open.set(!*form_open))
}
