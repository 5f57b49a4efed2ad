//! The document tree that gets pretty-printed.
//!
//! A document is a tree of [`Node`]s. Nodes are built once and never modified by the printer. An
//! [`Element`] carries its complete namespace [`Scope`]; to declare a namespace on an element,
//! derive its scope from the scope of its parent with [`Scope::bind`]. The printer declares exactly
//! those bindings that the parent's scope does not already have.

mod doctype;
mod escape;
mod scope;

pub use doctype::{DocType, ExternalId};
pub use escape::{escape_attribute, escape_text};
pub use scope::{Binding, Scope};

use std::borrow::Cow;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A node in a markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Node {
    Element(Element),
    Text(Text),
    /// A node that is written verbatim, like a comment.
    Special(Special),
    /// A transparent container. Its children are laid out as if they were children of the
    /// group's parent. It has no tag of its own.
    Group(Vec<Node>),
}

/// A tagged element, with attributes, namespace bindings, and children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Element {
    prefix: Option<String>,
    name: String,
    attributes: Vec<Attribute>,
    scope: Scope,
    children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Attribute {
    pub prefix: Option<String>,
    pub name: String,
    pub value: String,
}

/// Character data. Stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Text(String);

/// Leaf nodes whose textual form is emitted without interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Special {
    /// `<!--contents-->`
    Comment(String),
    /// `<?target data?>`
    ProcessingInstruction { target: String, data: String },
    /// `<![CDATA[contents]]>`
    CData(String),
    /// `&name;`
    EntityRef(String),
    /// Markup that is already serialized, and written exactly as given.
    Unparsed(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(Text::new(text))
    }

    pub fn comment(contents: impl Into<String>) -> Node {
        Node::Special(Special::Comment(contents.into()))
    }

    pub fn group(children: impl IntoIterator<Item = Node>) -> Node {
        Node::Group(children.into_iter().collect())
    }

    /// Whether this node is character data, as opposed to markup. CDATA sections and unparsed
    /// text count as character data. An element whose children are all text-bearing is printed on
    /// a single line.
    pub fn is_text_bearing(&self) -> bool {
        matches!(
            self,
            Node::Text(_) | Node::Special(Special::CData(_)) | Node::Special(Special::Unparsed(_))
        )
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Node {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Node {
        Node::Text(text)
    }
}

impl From<Special> for Node {
    fn from(special: Special) -> Node {
        Node::Special(special)
    }
}

impl Element {
    /// An element with no prefix, attributes, namespace bindings, or children.
    pub fn new(name: impl Into<String>) -> Element {
        Element {
            prefix: None,
            name: name.into(),
            attributes: Vec::new(),
            scope: Scope::empty(),
            children: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Element {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set an attribute. Attributes keep the order they were first set in; setting an attribute
    /// that is already present replaces its value in place.
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Element {
        self.with_attribute_ns(None::<String>, name, value)
    }

    /// Set a prefixed attribute, like `xlink:href`.
    pub fn with_attribute_ns(
        mut self,
        prefix: Option<impl Into<String>>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Element {
        let attribute = Attribute {
            prefix: prefix.map(Into::into),
            name: name.into(),
            value: value.into(),
        };
        let existing = self
            .attributes
            .iter_mut()
            .find(|attr| attr.prefix == attribute.prefix && attr.name == attribute.name);
        match existing {
            Some(attr) => attr.value = attribute.value,
            None => self.attributes.push(attribute),
        }
        self
    }

    /// Use this namespace scope. It should be derived from the scope of this element's parent.
    pub fn with_scope(mut self, scope: Scope) -> Element {
        self.scope = scope;
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Element {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Element {
        self.children.extend(children);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Element {
        self.with_child(Node::text(text))
    }

    /// The local name, without any prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn qualified_name(&self) -> Cow<str> {
        qualify(self.prefix.as_deref(), &self.name)
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The attributes as they appear in a tag: each one preceded by a space.
    pub fn serialized_attributes(&self) -> String {
        let mut out = String::new();
        for attr in &self.attributes {
            attr.write_to(&mut out);
        }
        out
    }

    /// The namespace declarations this element needs, given the scope of its parent: each one
    /// preceded by a space.
    pub fn serialized_namespaces(&self, parent: &Scope) -> String {
        self.scope
            .declarations_since(parent)
            .into_iter()
            .map(Binding::declaration)
            .collect()
    }
}

impl Attribute {
    pub fn qualified_name(&self) -> Cow<str> {
        qualify(self.prefix.as_deref(), &self.name)
    }

    fn write_to(&self, out: &mut String) {
        out.push(' ');
        out.push_str(&self.qualified_name());
        out.push_str("=\"");
        out.push_str(&escape_attribute(&self.value));
        out.push('"');
    }
}

impl Text {
    pub fn new(text: impl Into<String>) -> Text {
        Text(text.into())
    }

    /// The unescaped contents.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The contents as they appear in markup.
    pub fn escaped(&self) -> Cow<str> {
        escape_text(&self.0)
    }
}

impl Special {
    /// The textual form of this node, exactly as it is written out.
    pub fn raw(&self) -> Cow<str> {
        match self {
            Special::Comment(contents) => Cow::Owned(format!("<!--{}-->", contents)),
            Special::ProcessingInstruction { target, data } if data.is_empty() => {
                Cow::Owned(format!("<?{}?>", target))
            }
            Special::ProcessingInstruction { target, data } => {
                Cow::Owned(format!("<?{} {}?>", target, data))
            }
            Special::CData(contents) => Cow::Owned(format!("<![CDATA[{}]]>", contents)),
            Special::EntityRef(name) => Cow::Owned(format!("&{};", name)),
            Special::Unparsed(markup) => Cow::Borrowed(markup),
        }
    }
}

fn qualify<'a>(prefix: Option<&str>, name: &'a str) -> Cow<'a, str> {
    match prefix {
        None => Cow::Borrowed(name),
        Some(prefix) => Cow::Owned(format!("{}:{}", prefix, name)),
    }
}
