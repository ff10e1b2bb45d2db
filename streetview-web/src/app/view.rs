use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::history_list::HistoryList;
use crate::components::location_form::LocationForm;
use crate::components::viewer::Viewer;
use yew::prelude::*;

pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let view = state.view();
    let history_rows = view.history.clone();

    html! {
        <>
            <Header
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main">
                <LocationForm
                    open={*state.form_open}
                    raw_text={AttrValue::from((*state.raw_text).clone())}
                    avoid_duplicates={state.session.avoid_duplicates()}
                    on_toggle_open={handlers.toggle_form.clone()}
                    on_text_change={handlers.text_change.clone()}
                    on_avoid_toggle={handlers.avoid_toggle.clone()}
                    on_random={handlers.random.clone()}
                />
                <Viewer
                    view={view}
                    highlight_error={*state.highlight_error}
                    fullscreen={*state.fullscreen}
                    on_reveal={handlers.reveal.clone()}
                    on_fullscreen={handlers.fullscreen.clone()}
                />
                <HistoryList rows={history_rows} on_revisit={handlers.revisit.clone()} />
                <Footer />
            </main>
        </>
    }
}
