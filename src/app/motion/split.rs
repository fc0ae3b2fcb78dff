//! Character splitting for text reveals.
//!
//! A text-bearing element is decomposed into one `<span class="char">` per
//! character so each can be animated in a staggered sequence. Splitting is
//! guarded by a `data-split` marker: re-invoking on an already-split element
//! returns the existing spans instead of mangling them.

use web_sys::Element;

const SPLIT_MARKER: &str = "data-split";

/// Per-character strings for `text`, with spaces mapped to NBSP so the
/// wrapper spans keep their width.
pub fn char_spans(text: &str) -> Vec<String> {
    text.chars()
        .map(|ch| {
            if ch == ' ' {
                '\u{a0}'.to_string()
            } else {
                ch.to_string()
            }
        })
        .collect()
}

/// Splits `el`'s text content into `.char` spans, once, and returns them.
pub fn split_element(el: &Element) -> Vec<Element> {
    if el.get_attribute(SPLIT_MARKER).as_deref() == Some("1") {
        return child_elements(el);
    }
    let Some(document) = el.owner_document() else {
        return Vec::new();
    };
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(None);
    let mut spans = Vec::new();
    for ch in char_spans(&text) {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        span.set_class_name("char");
        span.set_text_content(Some(&ch));
        if el.append_child(&span).is_ok() {
            spans.push(span);
        }
    }
    let _ = el.set_attribute(SPLIT_MARKER, "1");
    spans
}

/// Child elements of `el` in document order.
pub fn child_elements(el: &Element) -> Vec<Element> {
    let mut children = Vec::new();
    let mut cursor = el.first_element_child();
    while let Some(child) = cursor {
        cursor = child.next_element_sibling();
        children.push(child);
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_every_character() {
        assert_eq!(char_spans("Nishal"), vec!["N", "i", "s", "h", "a", "l"]);
    }

    #[test]
    fn spaces_become_nbsp() {
        let spans = char_spans("a b");
        assert_eq!(spans, vec!["a", "\u{a0}", "b"]);
    }

    #[test]
    fn empty_text_yields_no_spans() {
        assert!(char_spans("").is_empty());
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        assert_eq!(char_spans("I'm✗"), vec!["I", "'", "m", "✗"]);
    }
}
