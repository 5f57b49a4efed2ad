use super::config::PrettyPrinter;
use super::sink::Sink;
use super::tags::{end_tag, leaf_tag, start_tag};
use crate::infra::span;
use crate::node::{Element, Node, Scope};

impl PrettyPrinter {
    /// Print a single node (and everything under it) into `sink`.
    ///
    /// - `outer_scope` is the namespace scope of the node's parent. Bindings already in effect
    ///   there are not redeclared.
    /// - `indent` is the number of spaces to put in front of the node's lines.
    /// - `preformatted` says whether the node is inside a preformatted region. If so, no
    ///   whitespace is added or removed anywhere in the node. Once a region is preformatted, so is
    ///   everything inside it.
    pub fn print<S: Sink>(
        &self,
        node: &Node,
        outer_scope: &Scope,
        indent: usize,
        preformatted: bool,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        span!("print");

        match node {
            Node::Text(text) => print_verbatim(&text.escaped(), indent, preformatted, sink),
            Node::Special(special) => print_verbatim(&special.raw(), indent, preformatted, sink),
            // Groups are transparent: their children sit at the group's own depth, in its
            // parent's scope, and only become preformatted if the parent's contents are.
            Node::Group(children) => {
                for child in children {
                    self.print(child, outer_scope, indent, preformatted, sink)?;
                }
                Ok(())
            }
            Node::Element(element) => {
                self.print_element(element, outer_scope, indent, preformatted, sink)
            }
        }
    }

    fn print_element<S: Sink>(
        &self,
        element: &Element,
        outer_scope: &Scope,
        indent: usize,
        preformatted: bool,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        if element.children().is_empty() {
            if !preformatted {
                sink.write_indent(indent)?;
            }
            sink.write_str(&leaf_tag(element))?;
            if !preformatted {
                sink.write_line_end()?;
            }
            return Ok(());
        }

        let contents_preformatted = preformatted || self.is_preformatted(element.name());
        let child_indent = indent + self.indent();

        if !preformatted {
            sink.write_indent(indent)?;
        }
        sink.write_str(&start_tag(element, outer_scope))?;

        if contents_preformatted {
            for child in element.children() {
                self.print(child, element.scope(), child_indent, true, sink)?;
            }
        } else if element.children().iter().all(Node::is_text_bearing) {
            let mut contents = String::new();
            for child in element.children() {
                match child {
                    Node::Text(text) => contents.push_str(&text.escaped()),
                    Node::Special(special) => contents.push_str(&special.raw()),
                    Node::Element(_) | Node::Group(_) => (),
                }
            }
            sink.write_str(contents.trim())?;
        } else {
            sink.write_line_end()?;
            for child in element.children() {
                self.print(child, element.scope(), child_indent, false, sink)?;
            }
            sink.write_indent(indent)?;
        }

        sink.write_str(&end_tag(element))?;
        if !preformatted {
            sink.write_line_end()?;
        }
        Ok(())
    }
}

/// Print text that must not be reformatted internally. Outside of a preformatted region, it gets
/// trimmed and put on its own line (or dropped, if it's only whitespace).
fn print_verbatim<S: Sink>(
    raw: &str,
    indent: usize,
    preformatted: bool,
    sink: &mut S,
) -> Result<(), S::Error> {
    if preformatted {
        return sink.write_str(raw);
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    sink.write_indent(indent)?;
    sink.write_str(trimmed)?;
    sink.write_line_end()
}
