use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

const HIGHLIGHTER_GLOBAL: &str = "hljs";
const HIGHLIGHT_ALL: &str = "highlightAll";

fn highlighter() -> Option<(Object, Function)> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(HIGHLIGHTER_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let library = value.dyn_into::<Object>().ok()?;
    let func = Reflect::get(&library, &JsValue::from_str(HIGHLIGHT_ALL))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((library, func))
}

/// Runs `hljs.highlightAll()` once. Returns false when the page has no highlighter.
pub(crate) fn highlight_all() -> bool {
    let Some((library, func)) = highlighter() else {
        gloo::console::warn!("hljs not loaded, code blocks left plain");
        return false;
    };
    if let Err(err) = func.call0(&library) {
        gloo::console::warn!("hljs.highlightAll failed", crate::dom::js_err(err));
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn calls_page_highlighter_once() {
        let window = web_sys::window().unwrap();
        let stub = Function::new_no_args(
            "return { calls: 0, highlightAll() { this.calls += 1; } };",
        )
        .call0(&JsValue::NULL)
        .unwrap();
        Reflect::set(&window, &HIGHLIGHTER_GLOBAL.into(), &stub).unwrap();

        assert!(highlight_all());
        let calls = Reflect::get(&stub, &"calls".into()).unwrap();
        Reflect::delete_property(&window, &HIGHLIGHTER_GLOBAL.into()).unwrap();
        assert_eq!(calls.as_f64(), Some(1.0));
    }

    #[wasm_bindgen_test]
    fn missing_highlighter_is_tolerated() {
        let window = web_sys::window().unwrap();
        Reflect::delete_property(&window, &HIGHLIGHTER_GLOBAL.into()).unwrap();
        assert!(!highlight_all());
    }
}
