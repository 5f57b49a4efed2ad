mod common;

use common::{assert_pp, printer};
use markup_pretty_printer::{Element, Node, Scope};

#[test]
fn namespaces_declared_once() {
    let root_scope = Scope::empty().bind(None, "http://www.w3.org/2000/svg");
    let link_scope = root_scope.bind(Some("xlink"), "http://www.w3.org/1999/xlink");
    let doc = Node::Element(
        Element::new("svg")
            .with_scope(root_scope.clone())
            .with_child(
                Element::new("g").with_scope(root_scope.clone()).with_child(
                    Element::new("use")
                        .with_scope(link_scope.clone())
                        .with_attribute_ns(Some("xlink"), "href", "#a")
                        .with_child(Element::new("title").with_scope(link_scope).with_text("A")),
                ),
            ),
    );
    assert_pp(
        &printer(2, &[]),
        &doc,
        &[
            "<svg xmlns=\"http://www.w3.org/2000/svg\">",
            "  <g>",
            "    <use xlink:href=\"#a\" xmlns:xlink=\"http://www.w3.org/1999/xlink\">",
            "      <title>A</title>",
            "    </use>",
            "  </g>",
            "</svg>",
        ],
    );
}

#[test]
fn namespaces_redeclared_when_shadowed() {
    let outer = Scope::empty().bind(Some("p"), "urn:one");
    let inner = outer.bind(Some("p"), "urn:two");
    let doc = Node::Element(
        Element::new("a")
            .with_prefix("p")
            .with_scope(outer)
            .with_child(
                Element::new("b")
                    .with_prefix("p")
                    .with_scope(inner)
                    .with_text("x"),
            ),
    );
    assert_pp(
        &printer(2, &[]),
        &doc,
        &[
            "<p:a xmlns:p=\"urn:one\">",
            "  <p:b xmlns:p=\"urn:two\">x</p:b>",
            "</p:a>",
        ],
    );
}

#[test]
fn namespaces_group_uses_enclosing_scope() {
    let outer = Scope::empty().bind(Some("x"), "urn:x");
    let doc = Node::Element(
        Element::new("root").with_scope(outer.clone()).with_child(Node::group(vec![
            Node::Element(Element::new("item").with_scope(outer.clone()).with_text("1")),
            Node::Element(
                Element::new("item")
                    .with_scope(outer.bind(Some("y"), "urn:y"))
                    .with_text("2"),
            ),
        ])),
    );
    assert_pp(
        &printer(2, &[]),
        &doc,
        &[
            "<root xmlns:x=\"urn:x\">",
            "  <item>1</item>",
            "  <item xmlns:y=\"urn:y\">2</item>",
            "</root>",
        ],
    );
}

#[test]
fn namespaces_not_written_on_leaf_tags() {
    let doc = Node::Element(Element::new("x").with_scope(Scope::empty().bind(None, "urn:x")));
    assert_pp(&printer(2, &[]), &doc, &["<x/>"]);
}
