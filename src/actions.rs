use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::Reflect;
use ogi_web_core::{meta_tag_snippet, LabelSwap, PageConfig};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlElement;

use crate::dom;
use crate::ogi_form::current_ogi_url;

pub(crate) fn install_copy_url(button: &HtmlElement, config: Rc<PageConfig>) -> EventListener {
    let target = button.clone();
    EventListener::new(button, "click", move |_event| {
        copy_with_feedback(&target, &config, |url| url);
    })
}

pub(crate) fn install_copy_meta(button: &HtmlElement, config: Rc<PageConfig>) -> EventListener {
    let target = button.clone();
    EventListener::new(button, "click", move |_event| {
        copy_with_feedback(&target, &config, |url| meta_tag_snippet(&url));
    })
}

pub(crate) fn install_open_url(button: &HtmlElement, config: Rc<PageConfig>) -> EventListener {
    EventListener::new(button, "click", move |_event| {
        if let Err(err) = open_in_new_tab(&config) {
            gloo::console::warn!("open url failed", dom::js_err(err));
        }
    })
}

fn copy_with_feedback(button: &HtmlElement, config: &PageConfig, render: fn(String) -> String) {
    let url = match current_ogi_url(config) {
        Ok(url) => url,
        Err(err) => {
            gloo::console::error!("ogi url unavailable", dom::js_err(err));
            return;
        }
    };
    write_clipboard(render(url));
    show_confirmation(button, config);
}

/// Fire-and-forget. A rejected write only reaches the console.
fn write_clipboard(text: String) {
    let window = match dom::window() {
        Ok(window) => window,
        Err(err) => {
            gloo::console::warn!("clipboard unavailable", dom::js_err(err));
            return;
        }
    };
    let navigator = window.navigator();
    let has_clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false);
    if !has_clipboard {
        gloo::console::warn!("clipboard api unavailable on this page");
        return;
    }
    let promise = navigator.clipboard().write_text(&text);
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            gloo::console::warn!("clipboard write failed", dom::js_err(err));
        }
    });
}

/// The restore timer is never cancelled, so overlapping clicks restore in click order.
fn show_confirmation(button: &HtmlElement, config: &PageConfig) {
    let swap = LabelSwap::begin(
        button.text_content().unwrap_or_default(),
        config.copied_label.clone(),
    );
    if swap.captured_stale_label() {
        gloo::console::log!("copy clicked while confirmation showing");
    }
    button.set_text_content(Some(swap.confirmation()));
    let button = button.clone();
    let _ = Timeout::new(config.label_restore_ms, move || {
        button.set_text_content(Some(swap.original()));
    })
    .forget();
}

fn open_in_new_tab(config: &PageConfig) -> Result<(), JsValue> {
    let url = current_ogi_url(config)?;
    let opened = dom::window()?.open_with_url_and_target(&url, "_blank")?;
    if opened.is_none() {
        gloo::console::warn!("new tab blocked", url);
    }
    Ok(())
}
