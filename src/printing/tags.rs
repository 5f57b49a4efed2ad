//! The literal text of individual tags.

use crate::node::{Element, Scope};

/// The tag for an element with no children: `<name attrs/>`.
pub fn leaf_tag(element: &Element) -> String {
    let mut tag = String::new();
    tag.push('<');
    tag.push_str(&element.qualified_name());
    tag.push_str(&element.serialized_attributes());
    tag.push_str("/>");
    tag
}

/// The opening tag for an element: `<name attrs xmlns...>`. Only the namespace bindings that are
/// not already in effect in the `parent` scope get declared.
pub fn start_tag(element: &Element, parent: &Scope) -> String {
    let mut tag = String::new();
    tag.push('<');
    tag.push_str(&element.qualified_name());
    tag.push_str(&element.serialized_attributes());
    tag.push_str(&element.serialized_namespaces(parent));
    tag.push('>');
    tag
}

/// The closing tag for an element: `</name>`.
pub fn end_tag(element: &Element) -> String {
    format!("</{}>", element.qualified_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_tag() {
        let elem = Element::new("img")
            .with_attribute("src", "a.png")
            .with_attribute("alt", "\"quoted\"");
        assert_eq!(leaf_tag(&elem), "<img src=\"a.png\" alt=\"&quot;quoted&quot;\"/>");
    }

    #[test]
    fn test_start_tag_declares_new_bindings_only() {
        let outer = Scope::empty().bind(None, "urn:doc");
        let inner = outer.bind(Some("m"), "urn:math");
        let elem = Element::new("eq")
            .with_prefix("m")
            .with_attribute("id", "e1")
            .with_scope(inner);
        assert_eq!(
            start_tag(&elem, &outer),
            "<m:eq id=\"e1\" xmlns:m=\"urn:math\">"
        );
        assert_eq!(
            start_tag(&elem, &Scope::empty()),
            "<m:eq id=\"e1\" xmlns=\"urn:doc\" xmlns:m=\"urn:math\">"
        );
        assert_eq!(end_tag(&elem), "</m:eq>");
    }
}
