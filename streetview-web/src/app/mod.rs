use yew::prelude::*;

pub mod handlers;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;
pub use state::AppState;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    let handlers = AppHandlers::new(&app_state);
    use_fullscreen_sync(handlers.fullscreen_change.clone());
    view::render_app(&app_state, &handlers)
}

/// Mirror the document's fullscreen state into the app so the fullscreen
/// button hides while the viewer fills the screen.
#[hook]
fn use_fullscreen_sync(on_change: Callback<bool>) {
    use_effect_with((), move |_| {
        let listener = crate::dom::on_fullscreen_change(move |active| on_change.emit(active));
        move || drop(listener)
    });
}
