mod actions;
mod app;
mod dom;
mod highlight;
mod ogi_form;
mod page_config;
mod wheel_select;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = app::start() {
        gloo::console::error!("ogi page wiring stopped", dom::js_err(err));
    }
}
