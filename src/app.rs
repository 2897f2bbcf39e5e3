use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;

use crate::actions;
use crate::dom;
use crate::highlight;
use crate::page_config::load_page_config;
use crate::wheel_select;

thread_local! {
    static LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
}

fn keep(listener: EventListener) {
    LISTENERS.with(|slot| slot.borrow_mut().push(listener));
}

/// Wires the page in the order the markup expects. A missing required button stops wiring
/// there; anything attached before it stays live.
pub(crate) fn start() -> Result<(), JsValue> {
    let document = dom::document()?;
    let config = Rc::new(load_page_config(&document));

    let copy = dom::required_element(&document, &config.copy_button_id)?;
    keep(actions::install_copy_url(&copy, config.clone()));

    let open = dom::required_element(&document, &config.open_button_id)?;
    keep(actions::install_open_url(&open, config.clone()));

    if let Some(meta) = dom::optional_element(&document, &config.meta_button_id) {
        keep(actions::install_copy_meta(&meta, config.clone()));
    }

    keep(wheel_select::install(&document));

    if config.highlight {
        highlight::highlight_all();
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn installed_listeners() -> usize {
    LISTENERS.with(|slot| slot.borrow().len())
}

#[cfg(test)]
pub(crate) fn clear_listeners() {
    LISTENERS.with(|slot| slot.borrow_mut().clear());
}
