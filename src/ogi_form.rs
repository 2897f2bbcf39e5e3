use js_sys::Reflect;
use ogi_web_core::{build_ogi_url, FormField, PageConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlInputElement, HtmlSelectElement, Node};

use crate::dom;

/// Name/value pairs of every control in the target form, in document order.
pub(crate) fn collect_form_fields(
    document: &Document,
    config: &PageConfig,
) -> Result<Vec<FormField>, JsValue> {
    let form = dom::required_selector(document, &config.form_selector)?;
    let controls = form.query_selector_all(&config.control_selector)?;
    let mut fields = Vec::with_capacity(controls.length() as usize);
    for index in 0..controls.length() {
        let Some(node) = controls.item(index) else {
            continue;
        };
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            fields.push(FormField::new(input.name(), input.value()));
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            fields.push(FormField::new(select.name(), select.value()));
        } else if let Some(field) = generic_control_field(&node) {
            fields.push(field);
        } else {
            gloo::console::warn!("control without name/value skipped", node.node_name());
        }
    }
    Ok(fields)
}

/// Textareas, buttons, outputs and anything else a custom selector matches: read the
/// `name`/`value` properties directly.
fn generic_control_field(node: &Node) -> Option<FormField> {
    let name = Reflect::get(node, &JsValue::from_str("name")).ok()?.as_string()?;
    let value = Reflect::get(node, &JsValue::from_str("value")).ok()?.as_string()?;
    Some(FormField::new(name, value))
}

pub(crate) fn current_ogi_url(config: &PageConfig) -> Result<String, JsValue> {
    let document = dom::document()?;
    let fields = collect_form_fields(&document, config)?;
    Ok(build_ogi_url(&dom::origin()?, &config.image_path, &fields))
}

#[cfg(test)]
pub(crate) mod fixture {
    use web_sys::{Element, HtmlSelectElement};
    use wasm_bindgen::JsCast;

    /// A detached copy of the generator form, appended to `<body>`.
    pub(crate) struct FormFixture {
        pub(crate) root: Element,
    }

    impl FormFixture {
        pub(crate) fn new(inner_html: &str) -> Self {
            let document = crate::dom::document().unwrap();
            let root = document.create_element("div").unwrap();
            root.set_inner_html(inner_html);
            document.body().unwrap().append_child(&root).unwrap();
            Self { root }
        }

        pub(crate) fn select(&self, name: &str) -> HtmlSelectElement {
            self.root
                .query_selector(&format!("select[name='{name}']"))
                .unwrap()
                .unwrap()
                .dyn_into::<HtmlSelectElement>()
                .unwrap()
        }
    }

    impl Drop for FormFixture {
        fn drop(&mut self) {
            self.root.remove();
        }
    }
}
