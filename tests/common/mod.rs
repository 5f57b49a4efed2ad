#![allow(unused)]

use markup_pretty_printer::{Element, Node, PrettyPrinter, Prolog, LINE_ENDING};

/// Join lines the way the printer does: each one followed by a line terminator.
pub fn lines(lines: &[&str]) -> String {
    let mut string = String::new();
    for line in lines {
        string.push_str(line);
        string.push_str(LINE_ENDING);
    }
    string
}

pub fn printer(indent: usize, preformatted: &[&str]) -> PrettyPrinter {
    PrettyPrinter::new(indent, preformatted.iter().copied()).expect("invalid printer config")
}

pub fn elem(name: &str, children: Vec<Node>) -> Node {
    Node::Element(Element::new(name).with_children(children))
}

pub fn leaf(name: &str) -> Node {
    Node::Element(Element::new(name))
}

pub fn text(s: &str) -> Node {
    Node::text(s)
}

fn compare(message: &str, expected: &str, actual: &str) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message, expected, actual,
        );
        assert_eq!(actual, expected);
    }
}

pub fn assert_pp(printer: &PrettyPrinter, node: &Node, expected_lines: &[&str]) {
    compare("PRETTY PRINTING", &lines(expected_lines), &printer.format(node));
}

/// Like `assert_pp`, for output that doesn't end in a line terminator (or has unusual line
/// structure, as in preformatted regions).
pub fn assert_pp_exact(printer: &PrettyPrinter, node: &Node, expected: &str) {
    compare("PRETTY PRINTING", expected, &printer.format(node));
}

pub fn assert_pp_document(
    printer: &PrettyPrinter,
    node: &Node,
    prolog: &Prolog,
    expected_lines: &[&str],
) {
    compare(
        "PRETTY PRINTING DOCUMENT",
        &lines(expected_lines),
        &printer.format_document(node, prolog),
    );
}
