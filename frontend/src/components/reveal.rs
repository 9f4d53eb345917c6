use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::reveal::{RevealSet, REVEAL_THRESHOLD};

/// Class that marks an element for the one-shot entrance animation.
pub const REVEAL_CLASS: &str = "reveal";
const REVEALED_CLASS: &str = "active";
const INDEX_ATTR: &str = "data-reveal-index";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches every `.reveal` element present when it starts. Each element gets
/// `active` the first time it is sufficiently visible and is then unobserved.
struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealWatcher {
    fn start() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let flags = Rc::new(RefCell::new(RevealSet::new()));
        let callback_flags = flags.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let mut flags = callback_flags.borrow_mut();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|value| value.parse::<usize>().ok())
                else {
                    continue;
                };

                if flags.observe(index, entry.is_intersecting(), entry.intersection_ratio()) {
                    if let Err(e) = target.class_list().add_1(REVEALED_CLASS) {
                        warn!("Could not reveal section {}: {:?}", index, e);
                    }
                    observer.unobserve(&target);
                    debug!("Revealed section {} ({}/{})", index, flags.revealed_count(), flags.len());
                    if flags.all_revealed() {
                        debug!("All sections revealed");
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        // Elements rendered later are never picked up; the page is static.
        let elements = document.query_selector_all(&format!(".{}", REVEAL_CLASS))?;
        for i in 0..elements.length() {
            let Some(element) = elements.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let index = flags.borrow_mut().register();
            element.set_attribute(INDEX_ATTR, &index.to_string())?;
            observer.observe(&element);
        }
        {
            let flags = flags.borrow();
            if flags.is_empty() {
                warn!("No .{} sections found, nothing to reveal", REVEAL_CLASS);
            } else {
                debug!("Reveal watcher observing {} sections", flags.len());
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn stop(self) {
        self.observer.disconnect();
    }
}

/// Starts the reveal watcher after the first render and disconnects it on unmount.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(|_| {
        let watcher = match RevealWatcher::start() {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                error!("Scroll reveal disabled: {:?}", e);
                None
            }
        };

        move || {
            if let Some(watcher) = watcher {
                watcher.stop();
            }
        }
    }, ());
}
