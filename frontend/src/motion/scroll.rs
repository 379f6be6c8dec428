use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

/// Vertical scroll state of the page, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollSnapshot {
    pub offset: u32,
    pub document_height: u32,
    pub viewport_height: u32,
}

impl ScrollSnapshot {
    /// Builds a snapshot from raw browser readings. Overscroll can report
    /// negative offsets, those become 0. Fractional offsets round up so any
    /// movement past a whole pixel counts as past it.
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset: to_px(offset.ceil()),
            document_height: to_px(document_height),
            viewport_height: to_px(viewport_height),
        }
    }

    pub fn scrollable_height(&self) -> u32 {
        self.document_height.saturating_sub(self.viewport_height)
    }
}

fn to_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

pub fn read_window(window: &Window) -> Option<ScrollSnapshot> {
    let offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(ScrollSnapshot::new(offset, document_height as f64, viewport_height))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriberId(u64);

/// Single-writer observable holding the latest snapshot.
#[derive(Default)]
pub struct ScrollSignal {
    current: ScrollSnapshot,
    subscribers: Vec<(SubscriberId, Callback<ScrollSnapshot>)>,
    next_id: u64,
}

impl ScrollSignal {
    pub fn current(&self) -> ScrollSnapshot {
        self.current
    }

    /// Returns false when the snapshot is unchanged.
    fn store(&mut self, snapshot: ScrollSnapshot) -> bool {
        if self.current == snapshot {
            return false;
        }
        self.current = snapshot;
        true
    }

    fn register(&mut self, callback: Callback<ScrollSnapshot>) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        id
    }

    fn remove(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn listeners(&self) -> Vec<Callback<ScrollSnapshot>> {
        self.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Shared handle to the page's [`ScrollSignal`], handed out through context.
///
/// Callbacks always run after the inner borrow is released, so a subscriber
/// may subscribe or unsubscribe from inside its own notification.
#[derive(Clone, Default)]
pub struct ScrollHandle(Rc<RefCell<ScrollSignal>>);

impl PartialEq for ScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ScrollHandle {
    pub fn current(&self) -> ScrollSnapshot {
        self.0.borrow().current()
    }

    /// Registers `callback` and delivers the current snapshot to it right away.
    pub fn subscribe(&self, callback: Callback<ScrollSnapshot>) -> SubscriberId {
        let (id, current) = {
            let mut signal = self.0.borrow_mut();
            (signal.register(callback.clone()), signal.current())
        };
        callback.emit(current);
        id
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.0.borrow_mut().remove(id)
    }

    /// Stores the snapshot and notifies every subscriber. Re-publishing the
    /// current value is a no-op and returns false.
    pub fn publish(&self, snapshot: ScrollSnapshot) -> bool {
        let listeners = {
            let mut signal = self.0.borrow_mut();
            if !signal.store(snapshot) {
                return false;
            }
            signal.listeners()
        };
        for listener in listeners {
            listener.emit(snapshot);
        }
        true
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subscriber_count()
    }
}

const WINDOW_EVENTS: [&str; 2] = ["scroll", "resize"];

/// The signal's only writer: scroll and resize listeners on `window`.
/// Dropping it detaches both.
struct WindowListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl WindowListener {
    fn attach(window: Window, handle: ScrollHandle) -> Self {
        let callback = Closure::<dyn Fn()>::new({
            let window = window.clone();
            move || {
                if let Some(snapshot) = read_window(&window) {
                    handle.publish(snapshot);
                }
            }
        });

        for event in WINDOW_EVENTS {
            if let Err(err) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!("could not listen for {event}: {err:?}");
            }
        }

        // Initial read so the first render matches the real position.
        if let Err(err) = callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&wasm_bindgen::JsValue::NULL)
        {
            warn!("initial scroll read failed: {err:?}");
        }

        Self { window, callback }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in WINDOW_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
        debug!("scroll observer detached");
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollObserverProps {
    pub children: Children,
}

/// Owns the page-wide scroll signal and exposes it to descendants.
#[function_component(ScrollObserver)]
pub fn scroll_observer(props: &ScrollObserverProps) -> Html {
    let handle = (*use_state(ScrollHandle::default)).clone();

    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let listener = WindowListener::attach(window, handle);
                    debug!("scroll observer attached");
                    Box::new(move || drop(listener))
                } else {
                    warn!("no window available, scroll observer disabled");
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<ScrollHandle>>
    }
}

/// Latest scroll snapshot, starting from whatever the observer last read.
/// Outside a [`ScrollObserver`] this stays at the all-zero default.
#[hook]
pub fn use_scroll() -> ScrollSnapshot {
    let handle = use_context::<ScrollHandle>();
    let snapshot = {
        let handle = handle.clone();
        use_state_eq(move || handle.map(|h| h.current()).unwrap_or_default())
    };

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |handle: &Option<ScrollHandle>| {
                let subscription = handle.clone().map(|handle| {
                    let id = handle.subscribe(Callback::from(move |next| snapshot.set(next)));
                    (handle, id)
                });
                move || {
                    if let Some((handle, id)) = subscription {
                        handle.unsubscribe(id);
                    }
                }
            },
            handle,
        );
    }

    *snapshot
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_dom::{fire_scroll, flush, mount_point, recorder, scroll_to, sleep};
    use gloo_timers::callback::Timeout;
    use wasm_bindgen_test::*;

    #[derive(Properties, PartialEq)]
    struct ReaderProps {
        on_handle: Callback<Option<ScrollHandle>>,
        on_snapshot: Callback<ScrollSnapshot>,
    }

    /// Reports the context handle and every snapshot it renders with.
    #[function_component(Reader)]
    fn reader(props: &ReaderProps) -> Html {
        let handle = use_context::<ScrollHandle>();
        let snapshot = use_scroll();
        props.on_handle.emit(handle);
        props.on_snapshot.emit(snapshot);
        html! {}
    }

    #[derive(Properties, PartialEq)]
    struct PageProps {
        on_handle: Callback<Option<ScrollHandle>>,
        on_snapshot: Callback<ScrollSnapshot>,
        /// Receives snapshots from a second reader mounted after a delay.
        #[prop_or_default]
        on_late_snapshot: Option<Callback<ScrollSnapshot>>,
    }

    #[function_component(Page)]
    fn page(props: &PageProps) -> Html {
        let late = use_state(|| false);
        {
            let late = late.clone();
            use_effect_with_deps(
                move |_| {
                    let timeout = Timeout::new(20, move || late.set(true));
                    move || drop(timeout)
                },
                (),
            );
        }

        let late_reader = match (*late, props.on_late_snapshot.clone()) {
            (true, Some(on_late)) => html! {
                <Reader on_handle={Callback::noop()} on_snapshot={on_late} />
            },
            _ => html! {},
        };

        html! {
            <ScrollObserver>
                <Reader on_handle={props.on_handle.clone()} on_snapshot={props.on_snapshot.clone()} />
                { late_reader }
            </ScrollObserver>
        }
    }

    fn last_handle(seen: &Rc<RefCell<Vec<Option<ScrollHandle>>>>) -> ScrollHandle {
        seen.borrow()
            .iter()
            .rev()
            .find_map(|h| h.clone())
            .expect("reader saw the observer's handle")
    }

    #[wasm_bindgen_test]
    async fn pre_scrolled_page_is_read_on_mount() {
        let spacer = mount_point("height: 5000px;");
        scroll_to(300.0);
        let root = mount_point("");
        let (handles, on_handle) = recorder();
        let (snapshots, on_snapshot) = recorder();

        let app = yew::Renderer::<Page>::with_root_and_props(
            root.clone(),
            PageProps { on_handle, on_snapshot, on_late_snapshot: None },
        )
        .render();
        flush().await;

        // No scroll event has fired yet.
        let handle = last_handle(&handles);
        assert_eq!(handle.current().offset, 300);
        assert!(handle.current().document_height >= 5000);
        assert_eq!(snapshots.borrow().last().map(|s| s.offset), Some(300));

        app.destroy();
        root.remove();
        spacer.remove();
        scroll_to(0.0);
    }

    #[wasm_bindgen_test]
    async fn unmount_detaches_listeners_and_subscribers() {
        let spacer = mount_point("height: 5000px;");
        scroll_to(0.0);
        let root = mount_point("");
        let (handles, on_handle) = recorder();
        let (_snapshots, on_snapshot) = recorder();

        let app = yew::Renderer::<Page>::with_root_and_props(
            root.clone(),
            PageProps { on_handle, on_snapshot, on_late_snapshot: None },
        )
        .render();
        flush().await;

        let handle = last_handle(&handles);
        assert_eq!(handle.subscriber_count(), 1);
        scroll_to(200.0);
        fire_scroll();
        assert_eq!(handle.current().offset, 200);

        app.destroy();
        flush().await;
        assert_eq!(handle.subscriber_count(), 0);

        scroll_to(600.0);
        fire_scroll();
        assert_eq!(handle.current().offset, 200);

        root.remove();
        spacer.remove();
        scroll_to(0.0);
    }

    #[wasm_bindgen_test]
    async fn use_scroll_without_observer_stays_at_zero() {
        let spacer = mount_point("height: 5000px;");
        scroll_to(400.0);
        let root = mount_point("");
        let (handles, on_handle) = recorder();
        let (snapshots, on_snapshot) = recorder();

        let app = yew::Renderer::<Reader>::with_root_and_props(
            root.clone(),
            ReaderProps { on_handle, on_snapshot },
        )
        .render();
        flush().await;
        fire_scroll();
        flush().await;

        assert!(handles.borrow().iter().all(Option::is_none));
        assert!(!snapshots.borrow().is_empty());
        assert!(snapshots.borrow().iter().all(|s| *s == ScrollSnapshot::default()));

        app.destroy();
        root.remove();
        spacer.remove();
        scroll_to(0.0);
    }

    #[wasm_bindgen_test]
    async fn late_reader_starts_from_current_position() {
        let spacer = mount_point("height: 5000px;");
        scroll_to(250.0);
        let root = mount_point("");
        let (_handles, on_handle) = recorder();
        let (_snapshots, on_snapshot) = recorder();
        let (late, on_late) = recorder();

        let app = yew::Renderer::<Page>::with_root_and_props(
            root.clone(),
            PageProps { on_handle, on_snapshot, on_late_snapshot: Some(on_late) },
        )
        .render();
        sleep(60).await;

        assert_eq!(late.borrow().first().map(|s| s.offset), Some(250));

        app.destroy();
        root.remove();
        spacer.remove();
        scroll_to(0.0);
    }
}
