//! Browser helpers shared by the `wasm_bindgen_test` suites.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Promise;
use web_sys::{Element, Event, Window};
use yew::Callback;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn window() -> Window {
    web_sys::window().expect("tests run in a browser")
}

/// Appends a fresh `div` with the given inline style to `<body>`.
pub fn mount_point(style: &str) -> Element {
    let document = window().document().expect("document");
    let root = document.create_element("div").expect("create div");
    root.set_attribute("style", style).expect("set style");
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("append mount point");
    root
}

pub fn scroll_to(y: f64) {
    window().scroll_to_with_x_and_y(0.0, y);
}

/// Fires a synthetic `scroll` event on `window`, dispatched synchronously.
pub fn fire_scroll() {
    let event = Event::new("scroll").expect("scroll event");
    window().dispatch_event(&event).expect("dispatch scroll");
}

/// Drains queued promise jobs, which is where rendering and effects run.
/// Timers stay pending.
pub async fn flush() {
    for _ in 0..16 {
        JsFuture::from(Promise::resolve(&JsValue::NULL))
            .await
            .expect("resolved promise");
    }
}

pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

pub fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Callback<T>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, Callback::from(move |value| sink.borrow_mut().push(value)))
}
