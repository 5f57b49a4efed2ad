use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A document type declaration, written before the root element when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct DocType {
    /// The name of the root element.
    pub name: String,
    pub external_id: Option<ExternalId>,
    /// The internal DTD subset, written between brackets as given.
    pub internal_subset: Option<String>,
}

/// Where the external DTD subset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ExternalId {
    /// `SYSTEM "uri"`
    System(String),
    /// `PUBLIC "public id" "uri"`
    Public(String, String),
}

impl DocType {
    pub fn new(name: impl Into<String>) -> DocType {
        DocType {
            name: name.into(),
            external_id: None,
            internal_subset: None,
        }
    }

    pub fn with_system_id(mut self, system_id: impl Into<String>) -> DocType {
        self.external_id = Some(ExternalId::System(system_id.into()));
        self
    }

    pub fn with_public_id(
        mut self,
        public_id: impl Into<String>,
        system_id: impl Into<String>,
    ) -> DocType {
        self.external_id = Some(ExternalId::Public(public_id.into(), system_id.into()));
        self
    }

    pub fn with_internal_subset(mut self, subset: impl Into<String>) -> DocType {
        self.internal_subset = Some(subset.into());
        self
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExternalId::System(system_id) => write!(f, "SYSTEM {}", quoted(system_id)),
            ExternalId::Public(public_id, system_id) => {
                write!(f, "PUBLIC \"{}\" {}", public_id, quoted(system_id))
            }
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<!DOCTYPE {}", self.name)?;
        if let Some(external_id) = &self.external_id {
            write!(f, " {}", external_id)?;
        }
        if let Some(subset) = &self.internal_subset {
            write!(f, " [{}]", subset)?;
        }
        write!(f, ">")
    }
}

/// System literals may contain either kind of quote, but not both.
fn quoted(literal: &str) -> String {
    if literal.contains('"') {
        format!("'{}'", literal)
    } else {
        format!("\"{}\"", literal)
    }
}
