use leptos::{ev::MouseEvent, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

/// Extracts the element id from a bare in-page fragment reference.
///
/// Only hrefs of the form `#some-id` qualify - external URLs and
/// path-plus-fragment links keep their default navigation.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Smooth-scrolls the section carrying `id` into view. A fragment with no
/// matching element is ignored - the scroll position stays where it is.
pub fn scroll_to_fragment(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no element matches fragment #{id}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Shared click handler for every in-page anchor. Suppresses the browser's
/// instant jump and scrolls smoothly instead. Handlers are bound per anchor
/// in the view tree, so they are released along with the element.
pub fn handle_anchor_click(ev: MouseEvent) {
    let Some(target) = ev.current_target() else {
        return;
    };
    let Some(el) = target.dyn_ref::<Element>() else {
        return;
    };
    let Some(href) = el.get_attribute("href") else {
        return;
    };
    let Some(id) = fragment_target(&href) else {
        return;
    };
    ev.prevent_default();
    scroll_to_fragment(id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_target_accepts_bare_fragments() {
        assert_eq!(fragment_target("#home"), Some("home"));
        assert_eq!(fragment_target("#projects"), Some("projects"));
    }

    #[test]
    fn test_fragment_target_rejects_empty_fragment() {
        assert_eq!(fragment_target("#"), None);
    }

    #[test]
    fn test_fragment_target_rejects_non_fragment_hrefs() {
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/about"), None);
        assert_eq!(fragment_target("/about#about"), None);
        assert_eq!(fragment_target("https://example.com#about"), None);
        assert_eq!(fragment_target("mailto:your.email@example.com"), None);
    }

    #[test]
    fn test_fragment_target_keeps_inner_hashes() {
        // only the leading '#' is stripped; the rest is the lookup key
        assert_eq!(fragment_target("#a#b"), Some("a#b"));
    }
}
