use crate::dom::VIEWER_CONTAINER_ID;
use crate::i18n::t;
use streetview_core::{Placeholder, SessionView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: SessionView,
    pub highlight_error: bool,
    pub fullscreen: bool,
    pub on_reveal: Callback<()>,
    pub on_fullscreen: Callback<()>,
}

/// Panorama area: placeholder text, the embedded frame, caption and reveal
/// controls.
#[function_component(Viewer)]
pub fn viewer(p: &Props) -> Html {
    let view = &p.view;
    let on_reveal = {
        let cb = p.on_reveal.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_fullscreen = {
        let cb = p.on_fullscreen.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let placeholder = match view.placeholder {
        Placeholder::Hidden => Html::default(),
        Placeholder::Prompt => html! {
            <p id="placeholder" class="placeholder">{ t("viewer.prompt") }</p>
        },
        Placeholder::Exhausted => html! {
            <p id="placeholder" class="placeholder exhausted" role="alert">{ t("viewer.exhausted") }</p>
        },
    };

    let frame = view.frame_url.as_ref().map_or_else(Html::default, |url| {
        let frame_class = classes!(
            "street-view-frame",
            if view.zoomed { "zoomed-view" } else { "unzoomed-view" }
        );
        html! {
            <iframe id="streetViewFrame" class={frame_class} src={url.clone()}
                title={t("viewer.frame_title")} allowfullscreen={true} loading="lazy"
                referrerpolicy="no-referrer-when-downgrade" />
        }
    });

    let fullscreen_button = if view.frame_url.is_some() && !p.fullscreen {
        html! {
            <button id="fullscreenButton" class="fullscreen-button" type="button"
                aria-label={t("viewer.fullscreen")} onclick={on_fullscreen}>
                { "⛶" }
            </button>
        }
    } else {
        Html::default()
    };

    let caption = view.caption.as_ref().map_or_else(Html::default, |caption| {
        html! { <p id="selectedUrl" class="caption">{ caption.clone() }</p> }
    });

    let reveal_button = if view.can_reveal {
        html! {
            <button id="showNameButton" class="primary" type="button" onclick={on_reveal}>
                { t("viewer.reveal") }
            </button>
        }
    } else {
        Html::default()
    };

    let name_banner = view.real_name.as_ref().map_or_else(Html::default, |name| {
        html! {
            <div id="nameDisplay" class="name-display" aria-live="polite">
                <span>{ t("viewer.real_name") }</span>
                { " " }
                <strong id="selectedRealName">{ name.clone() }</strong>
            </div>
        }
    });

    let container_class = classes!(
        "street-view-container",
        p.highlight_error.then_some("error-highlight")
    );

    html! {
        <section class="viewer">
            <div id={VIEWER_CONTAINER_ID} class={container_class}>
                { placeholder }
                { frame }
                { fullscreen_button }
            </div>
            <div id="urlDisplayContainer" class="url-display">
                { caption }
                { reveal_button }
                { name_banner }
            </div>
        </section>
    }
}
