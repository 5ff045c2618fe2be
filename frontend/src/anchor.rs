//! Smooth scrolling for in-page links. A single click listener on the
//! document handles every `<a href="...#id">` on the page.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// The part of `href` after its first `#`, if there is one.
pub fn fragment_of(href: &str) -> Option<&str> {
    href.split('#').nth(1)
}

pub struct AnchorScroll {
    document: Document,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl AnchorScroll {
    pub fn install(document: Document) -> Option<Self> {
        let lookup = document.clone();
        let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(anchor) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest("a[href]").ok().flatten())
            else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(fragment) = fragment_of(&href) else {
                return;
            };

            event.prevent_default();
            scroll_to(&lookup, fragment);
        }) as Box<dyn FnMut(MouseEvent)>);

        if let Err(err) =
            document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            warn!("Could not install anchor scrolling: {:?}", err);
            return None;
        }

        Some(Self { document, listener })
    }
}

impl Drop for AnchorScroll {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
    }
}

fn scroll_to(document: &Document, id: &str) {
    if id.is_empty() {
        return;
    }
    let Some(target) = document.get_element_by_id(id) else {
        debug!("No section #{} to scroll to", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAV_LINKS;

    #[test]
    fn fragment_follows_the_first_hash() {
        assert_eq!(fragment_of("#courses"), Some("courses"));
        assert_eq!(fragment_of("https://frankmillers.lk/#about"), Some("about"));
        assert_eq!(fragment_of("#"), Some(""));
        assert_eq!(fragment_of("/privacy"), None);
        assert_eq!(fragment_of("#a#b"), Some("a"));
    }

    #[test]
    fn nav_links_point_at_sections() {
        for (id, _) in NAV_LINKS {
            let href = format!("#{}", id);
            assert_eq!(fragment_of(&href), Some(id));
        }
    }
}
