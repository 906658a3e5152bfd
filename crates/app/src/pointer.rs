//! Document-wide pointer-down subscription for outside-click detection.

use crate::teardown::Teardown;
use shared_types::DropdownState;
use std::rc::Rc;

/// The element a pointer-down landed on.
pub trait PointerTarget {
    /// Whether the target is the element with `element_id` or inside it.
    fn is_within(&self, element_id: &str) -> bool;
}

pub type PointerHandler = Rc<dyn Fn(&dyn PointerTarget)>;

/// Source of document-wide pointer-down events.
pub trait PointerSource {
    /// Register `handler`. The listener lives until the returned handle drops.
    fn on_pointer_down(&self, handler: PointerHandler) -> Teardown;
}

/// Next dropdown state after a pointer-down on `target`.
pub fn dropdown_after_pointer_down(
    state: DropdownState,
    target: &dyn PointerTarget,
    trigger_id: &str,
    panel_id: &str,
) -> DropdownState {
    state.on_pointer_down(target.is_within(trigger_id), target.is_within(panel_id))
}

/// Listens for `mousedown` on the page's `document`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentPointerSource;

#[cfg(target_arch = "wasm32")]
struct DomTarget {
    node: Option<web_sys::Node>,
}

#[cfg(target_arch = "wasm32")]
impl PointerTarget for DomTarget {
    fn is_within(&self, element_id: &str) -> bool {
        let Some(node) = &self.node else {
            return false;
        };
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .map(|el| el.contains(Some(node)))
            .unwrap_or(false)
    }
}

#[cfg(target_arch = "wasm32")]
impl PointerSource for DocumentPointerSource {
    fn on_pointer_down(&self, handler: PointerHandler) -> Teardown {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            tracing::warn!("no document, outside-click detection disabled");
            return Teardown::inert();
        };

        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let node = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            handler(&DomTarget { node });
        });

        if let Err(err) = document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "failed to register mousedown listener");
            return Teardown::inert();
        }

        Teardown::new(move || {
            if let Err(err) = document
                .remove_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "failed to remove mousedown listener");
            }
            drop(closure);
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PointerSource for DocumentPointerSource {
    fn on_pointer_down(&self, _handler: PointerHandler) -> Teardown {
        tracing::debug!("no DOM on this platform, outside-click detection disabled");
        Teardown::inert()
    }
}
