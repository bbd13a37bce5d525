//! Applies the scroll restoration policy after each navigation.
//!
//! The policy itself (fragment, then saved position, then origin) lives in
//! `timeline::scroll`; this module records positions when a path is left and
//! moves the window when one is entered. A `popstate` listener marks the next
//! location change as a back/forward traversal, the only case where a saved
//! position is used. Requires a browser environment.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use timeline::scroll::{Navigation, ScrollMemory, ScrollPosition, ScrollTarget};

#[cfg(feature = "csr")]
fn current_position() -> ScrollPosition {
    web_sys::window().map_or(ScrollPosition::ORIGIN, |w| {
        ScrollPosition::new(w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0))
    })
}

#[cfg(feature = "csr")]
fn scroll_to(target: &ScrollTarget) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match target {
        ScrollTarget::Element(id) => {
            if let Some(el) = window.document().and_then(|doc| doc.get_element_by_id(id)) {
                el.scroll_into_view();
            }
        }
        ScrollTarget::Position(pos) => window.scroll_to_with_x_and_y(pos.x, pos.y),
    }
}

/// Watches the router location; renders nothing. Must sit inside `<Router>`.
#[component]
pub fn ScrollRestoration() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let location = leptos_router::hooks::use_location();
        let memory = StoredValue::new(ScrollMemory::new());
        let previous_path = StoredValue::new(None::<String>);
        let navigation = StoredValue::new(Navigation::Push);

        // Registered once; the component lives as long as the router.
        let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
            navigation.set_value(Navigation::Traverse);
        });

        Effect::new(move || {
            let path = location.pathname.get();
            let fragment = location.hash.get();
            if let Some(previous) = previous_path.get_value() {
                if previous != path {
                    let position = current_position();
                    memory.update_value(|m| m.record(&previous, position));
                }
            }
            previous_path.set_value(Some(path.clone()));
            let kind = navigation.get_value();
            navigation.set_value(Navigation::Push);
            scroll_to(&memory.with_value(|m| m.target_for(&path, &fragment, kind)));
        });
    }
}
