use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::state::scroll::ScrollOffset;

fn current_offset(window: &web_sys::Window) -> ScrollOffset {
    ScrollOffset(window.scroll_y().unwrap_or_default())
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    pub children: Children,
}

/// Owns the page's single scroll listener and publishes the offset to
/// every descendant through `use_scroll_offset`.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let offset = use_state(ScrollOffset::default);

    {
        let offset = offset.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().and_then(|window| {
                let window_clone = window.clone();
                let scroll_offset = offset.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    scroll_offset.set(current_offset(&window_clone));
                }) as Box<dyn FnMut()>);

                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Could not register scroll listener: {:?}", e);
                    return None;
                }

                // Initial check, the page may be restored mid-scroll
                offset.set(current_offset(window));
                debug!("Scroll listener registered");
                Some((window.clone(), scroll_callback))
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    html! {
        <ContextProvider<ScrollOffset> context={*offset}>
            { for props.children.iter() }
        </ContextProvider<ScrollOffset>>
    }
}

/// Latest window scroll offset, `0` outside a `ScrollProvider`.
#[hook]
pub fn use_scroll_offset() -> ScrollOffset {
    use_context::<ScrollOffset>().unwrap_or_default()
}
