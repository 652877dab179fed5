//! Scroll spy, reveal-on-scroll and smooth section scrolling.

use js_sys::Array;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};
use yew::Callback;

use crate::core::sections::{SECTIONS, SPY_ROOT_MARGIN};

/// Class marking elements that fade in once.
const REVEAL_CLASS: &str = "reveal";
const REVEAL_ACTIVE_CLASS: &str = "active";

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live observer; disconnects on drop.
pub(crate) struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Report section intersection changes as `(id, intersecting)`.
pub(crate) fn observe_sections(on_change: Callback<(String, bool)>) -> Option<ObserverHandle> {
    let callback: EntriesCallback = Closure::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            on_change.emit((entry.target().id(), entry.is_intersecting()));
        }
    });
    let init = IntersectionObserverInit::new();
    init.set_root_margin(SPY_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    let document = gloo::utils::document();
    for section in SECTIONS {
        if let Some(element) = document.get_element_by_id(section.id) {
            observer.observe(&element);
        }
    }
    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}

/// Add the active class to `.reveal` elements the first time they show up.
pub(crate) fn reveal_on_scroll() -> Option<ObserverHandle> {
    let callback: EntriesCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEAL_ACTIVE_CLASS);
                    observer.unobserve(&target);
                }
            }
        });
    let init = IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(0.1));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    let nodes = gloo::utils::document()
        .query_selector_all(&format!(".{REVEAL_CLASS}"))
        .ok()?;
    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}

/// Smoothly scroll a section into view.
pub(crate) fn scroll_to(id: &str) {
    let Some(element) = gloo::utils::document().get_element_by_id(id) else {
        debug!(id, "scroll target missing");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
