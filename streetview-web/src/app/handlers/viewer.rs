use crate::app::state::AppState;
use crate::dom::{VIEWER_CONTAINER_ID, console_error, js_error_message, request_fullscreen};
use yew::prelude::*;

pub fn build_fullscreen() -> Callback<()> {
    Callback::from(move |()| {
        if let Err(err) = request_fullscreen(VIEWER_CONTAINER_ID) {
            console_error(&js_error_message(&err));
        }
    })
}

pub fn build_fullscreen_change(state: &AppState) -> Callback<bool> {
    let fullscreen = state.fullscreen.clone();
    Callback::from(move |active: bool| fullscreen.set(active))
}
