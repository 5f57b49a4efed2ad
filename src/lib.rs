mod infra;
mod node;
mod printing;

pub use node::{
    escape_attribute, escape_text, Attribute, Binding, DocType, Element, ExternalId, Node, Scope,
    Special, Text,
};
pub use printing::{
    end_tag, leaf_tag, start_tag, ConfigError, IoSink, PrettyPrinter, PrinterConfig, Prolog, Sink,
    WriteError, LINE_ENDING, XML_DECLARATION,
};
