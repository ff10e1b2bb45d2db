use crate::i18n::t;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub raw_text: AttrValue,
    pub avoid_duplicates: bool,
    pub on_toggle_open: Callback<()>,
    pub on_text_change: Callback<String>,
    pub on_avoid_toggle: Callback<bool>,
    pub on_random: Callback<()>,
}

/// Collapsible form collecting the pasted locations and the draw controls.
#[function_component(LocationForm)]
pub fn location_form(p: &Props) -> Html {
    let on_header_click = {
        let cb = p.on_toggle_open.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_input = {
        let cb = p.on_text_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(area.value());
        })
    };
    let on_avoid = {
        let cb = p.on_avoid_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.checked());
        })
    };
    let on_random = {
        let cb = p.on_random.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let content_class = classes!(
        "form-content",
        if p.open { "expanded" } else { "collapsed" }
    );
    let arrow_class = classes!("toggle-arrow", (!p.open).then_some("rotate-180"));

    html! {
        <section class="location-form">
            <button id="formHeader" class="form-header" type="button"
                aria-expanded={p.open.to_string()} aria-controls="formContent"
                title={t("form.toggle")} onclick={on_header_click}>
                <span>{ t("form.header") }</span>
                <span id="toggleArrow" class={arrow_class} aria-hidden="true">{ "▾" }</span>
            </button>
            <div id="formContent" class={content_class}>
                <label for="urls">{ t("form.label") }</label>
                <textarea id="urls" rows="8" value={p.raw_text.clone()}
                    placeholder={t("form.placeholder")} oninput={on_input} />
                <div class="form-controls">
                    <label class="toggle" for="avoid-duplicates-toggle">
                        <input id="avoid-duplicates-toggle" type="checkbox"
                            checked={p.avoid_duplicates} onchange={on_avoid} />
                        <span>{ t("form.avoid_duplicates") }</span>
                    </label>
                    <button id="randomButton" class="primary" type="button" onclick={on_random}>
                        { t("form.random") }
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(open: bool) -> Props {
        Props {
            open,
            raw_text: AttrValue::from("https://www.google.com/maps/embed?pb=1, Lima"),
            avoid_duplicates: true,
            on_toggle_open: Callback::noop(),
            on_text_change: Callback::noop(),
            on_avoid_toggle: Callback::noop(),
            on_random: Callback::noop(),
        }
    }

    #[test]
    fn open_form_is_expanded() {
        crate::i18n::set_lang("es");
        let html = block_on(LocalServerRenderer::<LocationForm>::with_props(props(true)).render());
        assert!(html.contains("expanded"));
        assert!(html.contains("Evitar repeticiones"));
        assert!(html.contains("randomButton"));
    }

    #[test]
    fn closed_form_rotates_arrow() {
        crate::i18n::set_lang("es");
        let html = block_on(LocalServerRenderer::<LocationForm>::with_props(props(false)).render());
        assert!(html.contains("collapsed"));
        assert!(html.contains("rotate-180"));
    }
}
