//! Browser collaborators: fullscreen, confetti, timers and the console.
//!
//! Everything here is a no-op off wasm32 so components and handlers can be
//! exercised by native server-side render tests.
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Object, Promise, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

/// DOM id of the element that goes fullscreen.
pub const VIEWER_CONTAINER_ID: &str = "streetViewContainer";

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| err.message().into())
            })
            .unwrap_or_else(|| format!("{value:?}"))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // JsValue formatting calls into JS, which is unavailable here.
        let _ = value;
        String::from("browser API unavailable")
    }
}

/// Log an error message to the browser console (operator-facing only).
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Seed for the session's random source, taken from the wall clock.
#[must_use]
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().to_bits()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5EED_CAFE
    }
}

/// Ask the browser to show the element with `id` fullscreen.
///
/// # Errors
/// Returns an error when the element is missing, the Fullscreen API is not
/// available, or the browser rejects the request.
pub fn request_fullscreen(id: &str) -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .ok_or_else(|| JsValue::from_str("fullscreen target not found"))?;
        let supported = Reflect::get(&element, &JsValue::from_str("requestFullscreen"))
            .map(|f| f.is_function())
            .unwrap_or(false);
        if !supported {
            return Err(JsValue::from_str(&crate::i18n::t(
                "diagnostics.fullscreen_unsupported",
            )));
        }
        element.request_fullscreen()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        Err(JsValue::NULL)
    }
}

/// Whether any element is currently fullscreen.
#[must_use]
pub fn is_fullscreen() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.fullscreen_element())
            .is_some()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Fire the page's `confetti` effect if the script is loaded.
pub fn launch_confetti() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(win) = web_sys::window() else {
            return;
        };
        let Ok(confetti) = Reflect::get(&win, &JsValue::from_str("confetti"))
            .and_then(|value| value.dyn_into::<Function>().map_err(JsValue::from))
        else {
            return;
        };
        let origin = Object::new();
        let options = Object::new();
        let _ = Reflect::set(&origin, &"y".into(), &JsValue::from_f64(0.6));
        let _ = Reflect::set(&options, &"particleCount".into(), &JsValue::from_f64(100.0));
        let _ = Reflect::set(&options, &"spread".into(), &JsValue::from_f64(70.0));
        let _ = Reflect::set(&options, &"origin".into(), &origin);
        if let Err(err) = confetti.call1(&JsValue::NULL, &options) {
            console_error(&js_error_message(&err));
        }
    }
}

/// Call `on_change` whenever the document enters or leaves fullscreen. The
/// returned guard removes the listener when dropped.
#[must_use]
pub fn on_fullscreen_change(on_change: impl Fn(bool) + 'static) -> FullscreenListener {
    #[cfg(target_arch = "wasm32")]
    {
        let closure = Closure::<dyn Fn()>::new(move || on_change(is_fullscreen()));
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc.add_event_listener_with_callback(
                "fullscreenchange",
                closure.as_ref().unchecked_ref(),
            );
        }
        FullscreenListener { closure }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = on_change;
        FullscreenListener {}
    }
}

pub struct FullscreenListener {
    #[cfg(target_arch = "wasm32")]
    closure: Closure<dyn Fn()>,
}

impl Drop for FullscreenListener {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc.remove_event_listener_with_callback(
                "fullscreenchange",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        let mut resolve_slot: Option<Function> = None;
        let promise = Promise::new(&mut |resolve, _reject| {
            resolve_slot = Some(resolve);
        });

        let resolve =
            resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
        let closure = Closure::once(move || {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        });

        let win = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            duration_ms,
        )?;
        closure.forget();

        JsFuture::from(promise).await?;
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = duration_ms;
        Ok(())
    }
}
