use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use ogi_web_core::{next_selected_index, WheelStep};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlSelectElement, InputEvent, InputEventInit, WheelEvent};

/// One listener for the whole document. Only acts while a `<select>` has focus.
pub(crate) fn install(document: &Document) -> EventListener {
    let focus_source = document.clone();
    EventListener::new_with_options(
        document,
        "wheel",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let Some(select) = focused_select(&focus_source) else {
                return;
            };
            if let Err(err) = step_select(&select, WheelStep::from_delta_y(event.delta_y())) {
                gloo::console::warn!("wheel select failed", crate::dom::js_err(err));
            }
        },
    )
}

fn focused_select(document: &Document) -> Option<HtmlSelectElement> {
    document
        .active_element()
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
}

/// Moves the selection one option and re-emits `input` so htmx and friends see it.
/// Returns whether the selection changed.
pub(crate) fn step_select(select: &HtmlSelectElement, step: WheelStep) -> Result<bool, JsValue> {
    let Some(index) = next_selected_index(select.selected_index(), select.length(), step) else {
        return Ok(false);
    };
    select.set_selected_index(index as i32);
    let init = InputEventInit::new();
    init.set_bubbles(true);
    let event = InputEvent::new_with_event_init_dict("input", &init)?;
    select.dispatch_event(&event)?;
    Ok(true)
}
