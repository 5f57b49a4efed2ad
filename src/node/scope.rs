use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A single namespace binding. A `prefix` of `None` binds the default namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Binding {
    pub prefix: Option<String>,
    pub uri: String,
}

/// The namespace bindings visible at some point in a document.
///
/// A `Scope` is an immutable chain of bindings, each link pointing at the scope it was derived
/// from. Deriving a new scope with [`Scope::bind`] never affects the original, and clones share
/// their links, so a child element's scope is typically its parent's scope plus a few bindings.
#[derive(Clone, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Binding>", into = "Vec<Binding>")
)]
pub struct Scope(Option<Arc<Link>>);

#[derive(Debug)]
struct Link {
    binding: Binding,
    parent: Option<Arc<Link>>,
}

impl Binding {
    /// The `xmlns` declaration for this binding, including its leading space.
    pub fn declaration(&self) -> String {
        use super::escape::escape_attribute;

        match &self.prefix {
            None => format!(" xmlns=\"{}\"", escape_attribute(&self.uri)),
            Some(prefix) => format!(" xmlns:{}=\"{}\"", prefix, escape_attribute(&self.uri)),
        }
    }
}

impl Scope {
    /// The scope with no bindings at all.
    pub fn empty() -> Scope {
        Scope(None)
    }

    /// A new scope containing all of this scope's bindings, plus `prefix` bound to `uri`. The new
    /// binding shadows any existing binding of the same prefix.
    pub fn bind(&self, prefix: Option<&str>, uri: &str) -> Scope {
        Scope(Some(Arc::new(Link {
            binding: Binding {
                prefix: prefix.map(str::to_owned),
                uri: uri.to_owned(),
            },
            parent: self.0.clone(),
        })))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Iterate over every link of the chain, nearest first. Shadowed bindings are included.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        let mut link = self.0.as_deref();
        std::iter::from_fn(move || {
            let current = link?;
            link = current.parent.as_deref();
            Some(&current.binding)
        })
    }

    /// The URI that `prefix` resolves to in this scope, if any.
    pub fn lookup(&self, prefix: Option<&str>) -> Option<&str> {
        self.iter()
            .find(|binding| binding.prefix.as_deref() == prefix)
            .map(|binding| binding.uri.as_str())
    }

    /// Whether `prefix` already resolves to `uri` here. Binding the default namespace to the
    /// empty URI is the same as leaving it unbound.
    pub fn is_visible(&self, prefix: Option<&str>, uri: &str) -> bool {
        match (prefix, self.lookup(prefix)) {
            (None, None) => uri.is_empty(),
            (_, found) => found == Some(uri),
        }
    }

    /// The bindings of this scope that must be declared on an element whose enclosing element
    /// has the `parent` scope: every binding that is not shadowed within this scope and that
    /// `parent` does not already resolve the same way. Returned outermost first.
    pub fn declarations_since<'s>(&'s self, parent: &Scope) -> Vec<&'s Binding> {
        let stop = parent.0.as_ref();
        let mut seen: Vec<Option<&str>> = Vec::new();
        let mut declarations = Vec::new();
        let mut link = self.0.as_ref();
        while let Some(current) = link {
            if let Some(stop) = stop {
                if Arc::ptr_eq(current, stop) {
                    break;
                }
            }
            let prefix = current.binding.prefix.as_deref();
            if !seen.contains(&prefix) {
                seen.push(prefix);
                if !parent.is_visible(prefix, &current.binding.uri) {
                    declarations.push(&current.binding);
                }
            }
            link = current.parent.as_ref();
        }
        declarations.reverse();
        declarations
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Scope {
    fn eq(&self, other: &Scope) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Scope {}

impl From<Vec<Binding>> for Scope {
    /// Build a scope from bindings listed outermost first.
    fn from(bindings: Vec<Binding>) -> Scope {
        bindings.iter().fold(Scope::empty(), |scope, binding| {
            scope.bind(binding.prefix.as_deref(), &binding.uri)
        })
    }
}

impl From<Scope> for Vec<Binding> {
    fn from(scope: Scope) -> Vec<Binding> {
        let mut bindings = scope.iter().cloned().collect::<Vec<_>>();
        bindings.reverse();
        bindings
    }
}
