//! Bridge to the MathJax typesetter.
//!
//! The script is injected once at startup and configured on load to recognize
//! `$...$` and `\(...\)` as inline math. After the overlay list changes, a
//! typeset pass is queued on the next tick so MathJax sees the final DOM.
//! Everything browser-facing is gated behind `csr`; the configuration payload
//! is plain data so it can be checked natively.

#[cfg(test)]
#[path = "typeset_test.rs"]
mod typeset_test;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};

/// Inline math delimiter pairs.
pub const INLINE_MATH: [[&str; 2]; 2] = [["$", "$"], ["\\(", "\\)"]];

/// Argument passed to `MathJax.Hub.Config`.
pub fn hub_config() -> serde_json::Value {
    serde_json::json!({ "tex2jax": { "inlineMath": INLINE_MATH } })
}

/// Inject the typesetter script; it configures itself when loaded.
///
/// # Errors
///
/// Returns `Err` if the document is unavailable or the element cannot be
/// created or attached.
#[cfg(feature = "csr")]
pub fn load(src: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document not available"))?;
    let script = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()?;
    script.set_src(src);
    script.set_async(true);

    let on_load = wasm_bindgen::closure::Closure::once_into_js(move || {
        if let Err(e) = configure() {
            log::warn!("typesetter config failed: {e:?}");
        }
    });
    script.set_onload(Some(on_load.unchecked_ref()));

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&script)?;
    Ok(())
}

/// `window.MathJax.Hub`, or `None` while the script is still loading.
#[cfg(feature = "csr")]
fn hub() -> Result<Option<js_sys::Object>, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let mathjax = js_sys::Reflect::get(&window, &JsValue::from_str("MathJax"))?;
    if mathjax.is_undefined() || mathjax.is_null() {
        return Ok(None);
    }
    let hub = js_sys::Reflect::get(&mathjax, &JsValue::from_str("Hub"))?;
    if hub.is_undefined() || hub.is_null() {
        return Ok(None);
    }
    Ok(Some(hub.unchecked_into()))
}

#[cfg(feature = "csr")]
fn hub_method(hub: &js_sys::Object, name: &str) -> Result<js_sys::Function, JsValue> {
    js_sys::Reflect::get(hub, &JsValue::from_str(name))?.dyn_into::<js_sys::Function>()
}

#[cfg(feature = "csr")]
fn configure() -> Result<(), JsValue> {
    let Some(hub) = hub()? else {
        return Err(JsValue::from_str("MathJax.Hub missing after load"));
    };
    let config = js_sys::JSON::parse(&hub_config().to_string())?;
    hub_method(&hub, "Config")?.call1(&hub, &config)?;
    Ok(())
}

/// Queue `["Typeset", MathJax.Hub]` right now.
///
/// # Errors
///
/// Returns `Err` if the hub is present but the call fails.
#[cfg(feature = "csr")]
pub fn queue_typeset() -> Result<(), JsValue> {
    let Some(hub) = hub()? else {
        log::debug!("typesetter not loaded yet; skipping typeset");
        return Ok(());
    };
    let command = js_sys::Array::of2(&JsValue::from_str("Typeset"), &hub);
    hub_method(&hub, "Queue")?.call1(&hub, &command)?;
    Ok(())
}

/// Queue a typeset pass after the current render pass completes.
#[cfg(feature = "csr")]
pub fn schedule_typeset() {
    gloo_timers::callback::Timeout::new(0, || {
        if let Err(e) = queue_typeset() {
            log::warn!("typeset failed: {e:?}");
        }
    })
    .forget();
}
