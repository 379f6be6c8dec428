use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;
use yew_hooks::prelude::use_mount;
use gloo_timers::callback::Timeout;

use crate::config::MotionConfig;

/// One-shot visibility machine. The only transition is Hidden -> Revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feeds one intersection reading. Returns true only for the reading
    /// that performs the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Whether a box spanning `top..bottom` (relative to the viewport top)
/// touches a viewport of the given height. Edge contact counts, as it does
/// for `IntersectionObserver`.
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    bottom >= top && bottom >= 0.0 && top <= viewport_height
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealMotion {
    /// Fade in while rising by this many pixels.
    Rise(u32),
    SlideFromLeft(u32),
    SlideFromRight(u32),
    /// Width grows from 0 to this percentage.
    Grow(u8),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trigger {
    /// Reveal on first intersection with the viewport.
    #[default]
    Viewport,
    /// Reveal right after mount, regardless of position.
    Mount,
}

/// Inline style for a reveal target. `delay_ms` only shifts the visible
/// transition, never the state change.
pub fn reveal_style(motion: RevealMotion, state: RevealState, duration_ms: u32, delay_ms: u32) -> String {
    let shown = state.is_revealed();
    let offset = match motion {
        RevealMotion::Grow(percent) => {
            let width = if shown { percent.min(100) } else { 0 };
            return format!(
                "width: {width}%; transition: width {duration_ms}ms cubic-bezier(0, 0, 0.58, 1) {delay_ms}ms;"
            );
        }
        RevealMotion::Rise(px) => format!("translateY({px}px)"),
        RevealMotion::SlideFromLeft(px) => format!("translateX(-{px}px)"),
        RevealMotion::SlideFromRight(px) => format!("translateX({px}px)"),
    };
    let (opacity, transform) = if shown { (1, "none".to_string()) } else { (0, offset) };
    format!(
        "opacity: {opacity}; transform: {transform}; transition: opacity {duration_ms}ms ease, transform {duration_ms}ms ease; transition-delay: {delay_ms}ms;"
    )
}

/// An `IntersectionObserver` bound to one element. Disconnects on drop.
struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatch {
    fn observe(element: &Element, mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            },
        );
        let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {err:?}");
                return None;
            }
        };
        observer.observe(element);
        #[cfg(test)]
        LIVE_WATCHES.with(|live| live.set(live.get() + 1));
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
        #[cfg(test)]
        LIVE_WATCHES.with(|live| live.set(live.get() - 1));
    }
}

#[cfg(test)]
thread_local! {
    static LIVE_WATCHES: std::cell::Cell<usize> = std::cell::Cell::new(0);
}

fn in_viewport_now(element: &Element) -> bool {
    let Some(viewport_height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    intersects_viewport(rect.top(), rect.bottom(), viewport_height)
}

/// Reveal state of the element behind `node`. Each call site owns its own
/// machine; once revealed the observer is released.
#[hook]
pub fn use_reveal(node: NodeRef, trigger: Trigger) -> RevealState {
    let machine = use_mut_ref(RevealState::default);
    let state = use_state_eq(RevealState::default);
    let watch: Rc<RefCell<Option<ViewportWatch>>> = use_mut_ref(|| None);

    let feed = {
        let machine = machine.clone();
        let state = state.clone();
        let watch = watch.clone();
        Rc::new(move |intersecting: bool| {
            let fired = machine.borrow_mut().observe(intersecting);
            if fired {
                state.set(RevealState::Revealed);
                // Release outside the observer callback.
                let watch = watch.clone();
                Timeout::new(0, move || {
                    watch.borrow_mut().take();
                })
                .forget();
            }
        })
    };

    {
        let feed = feed.clone();
        use_mount(move || {
            if trigger == Trigger::Mount {
                // Wait a tick so the hidden style paints before transitioning.
                Timeout::new(0, move || feed(true)).forget();
            }
        });
    }

    {
        let watch = watch.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                if trigger == Trigger::Viewport {
                    if let Some(element) = node.cast::<Element>() {
                        if in_viewport_now(&element) {
                            // Already on screen: reveal next tick so the
                            // hidden style paints first.
                            let feed = feed.clone();
                            Timeout::new(0, move || feed(true)).forget();
                        } else {
                            let feed = feed.clone();
                            *watch.borrow_mut() = ViewportWatch::observe(&element, move |hit| feed(hit));
                            debug!("reveal watch attached");
                        }
                    }
                }
                move || {
                    watch.borrow_mut().take();
                }
            },
            node,
        );
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub motion: RevealMotion,
    #[prop_or_default]
    pub trigger: Trigger,
    /// Position in a staggered list; multiplies the configured stagger.
    #[prop_or_default]
    pub delay_index: u32,
    #[prop_or(600)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a block that animates in once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), props.trigger);
    let config = use_context::<MotionConfig>().unwrap_or_default();

    let style = reveal_style(
        props.motion,
        state,
        props.duration_ms,
        props.delay_index * config.reveal_stagger_ms,
    );

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { props.children.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(RevealState::default(), RevealState::Hidden);
        assert!(!RevealState::default().is_revealed());
    }

    #[test]
    fn first_intersection_reveals_once() {
        let mut state = RevealState::Hidden;
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(!state.observe(true));
        assert!(state.is_revealed());
    }

    #[test]
    fn never_reverts_after_reveal() {
        let mut state = RevealState::Hidden;
        state.observe(true);
        for reading in [false, true, false, false, true] {
            state.observe(reading);
            assert_eq!(state, RevealState::Revealed);
        }
    }

    #[test]
    fn instances_are_independent() {
        let mut cards = [RevealState::Hidden; 3];
        cards[2].observe(true);
        assert_eq!(cards, [RevealState::Hidden, RevealState::Hidden, RevealState::Revealed]);
        cards[0].observe(true);
        assert!(!cards[1].is_revealed());
    }

    #[test]
    fn component_deep_in_page_reveals_when_scrolled_to() {
        // top edge at document offset 2000, 400 tall, viewport 800 tall
        let (doc_top, height, viewport) = (2000.0, 400.0, 800.0);
        let mut state = RevealState::Hidden;
        for scroll_y in (0..=3000).step_by(100) {
            let top = doc_top - scroll_y as f64;
            state.observe(intersects_viewport(top, top + height, viewport));
            if scroll_y < 1200 {
                assert!(!state.is_revealed(), "revealed early at {scroll_y}");
            }
            if scroll_y >= 1200 {
                assert!(state.is_revealed(), "still hidden at {scroll_y}");
            }
        }
    }

    #[test]
    fn viewport_edges_count_as_contact() {
        assert!(intersects_viewport(800.0, 900.0, 800.0));
        assert!(!intersects_viewport(800.5, 900.0, 800.0));
        assert!(intersects_viewport(-100.0, 0.0, 800.0));
        assert!(!intersects_viewport(-100.0, -0.5, 800.0));
        assert!(!intersects_viewport(300.0, 200.0, 800.0));
    }

    #[test]
    fn hidden_rise_is_offset_and_transparent() {
        let style = reveal_style(RevealMotion::Rise(16), RevealState::Hidden, 600, 0);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translateY(16px)"));
    }

    #[test]
    fn revealed_slide_is_in_place() {
        let style = reveal_style(RevealMotion::SlideFromLeft(20), RevealState::Revealed, 600, 100);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("transform: none;"));
        assert!(style.contains("transition-delay: 100ms;"));
        let hidden = reveal_style(RevealMotion::SlideFromRight(20), RevealState::Hidden, 600, 0);
        assert!(hidden.contains("translateX(20px)"));
    }

    #[test]
    fn grow_goes_from_zero_to_level() {
        let hidden = reveal_style(RevealMotion::Grow(92), RevealState::Hidden, 1200, 0);
        let shown = reveal_style(RevealMotion::Grow(92), RevealState::Revealed, 1200, 0);
        assert!(hidden.starts_with("width: 0%;"));
        assert!(shown.starts_with("width: 92%;"));
        assert!(shown.contains("1200ms"));
    }

    #[test]
    fn grow_caps_at_full_width() {
        let shown = reveal_style(RevealMotion::Grow(150), RevealState::Revealed, 1200, 0);
        assert!(shown.starts_with("width: 100%;"));
    }
}
