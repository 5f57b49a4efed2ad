use super::config::PrettyPrinter;
use super::sink::{IoSink, Sink};
use crate::infra::span;
use crate::node::{DocType, Node, Scope};
use std::convert::Infallible;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// The XML declaration written by [`Prolog::with_xml_declaration`].
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// What to write before the root node. By default, nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prolog {
    /// Start with [`XML_DECLARATION`].
    pub xml_declaration: bool,
    /// Then this document type declaration.
    pub doctype: Option<DocType>,
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("Failed to open {} for writing.", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write pretty-printed output.")]
    Io(#[from] io::Error),
}

impl Prolog {
    pub fn new() -> Prolog {
        Prolog::default()
    }

    pub fn with_xml_declaration(mut self) -> Prolog {
        self.xml_declaration = true;
        self
    }

    pub fn with_doctype(mut self, doctype: DocType) -> Prolog {
        self.doctype = Some(doctype);
        self
    }
}

impl PrettyPrinter {
    /// Pretty print `node` to a string.
    pub fn format(&self, node: &Node) -> String {
        self.format_document(node, &Prolog::default())
    }

    /// Pretty print `node` to a string, preceded by the `prolog`.
    pub fn format_document(&self, node: &Node, prolog: &Prolog) -> String {
        span!("format");

        let mut out = String::new();
        let result: Result<(), Infallible> = self.print_document(node, prolog, &mut out);
        match result {
            Ok(()) => out,
            Err(never) => match never {},
        }
    }

    /// Pretty print `node` to `writer`, preceded by the `prolog`. The writer is dropped before
    /// returning, whether or not writing succeeded. If writing fails partway, whatever was already
    /// flushed stays in the destination.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn write_to<W: io::Write>(
        &self,
        node: &Node,
        writer: W,
        prolog: &Prolog,
    ) -> Result<(), WriteError> {
        span!("write_to");

        let mut sink = IoSink::new(writer);
        if let Err(err) = self.print_document(node, prolog, &mut sink) {
            tracing::debug!(error = %err, "writing failed; releasing output");
            return Err(err.into());
        }
        sink.finish()?;
        tracing::debug!("document written");
        Ok(())
    }

    /// Pretty print `node` into the file at `path` as UTF-8, preceded by the `prolog`. The file is
    /// created if needed, and truncated if it exists.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn write_to_path(
        &self,
        node: &Node,
        path: impl AsRef<Path>,
        prolog: &Prolog,
    ) -> Result<(), WriteError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| WriteError::Open {
            path: path.to_owned(),
            source,
        })?;
        self.write_to(node, file, prolog)
    }

    fn print_document<S: Sink>(
        &self,
        node: &Node,
        prolog: &Prolog,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        if prolog.xml_declaration {
            sink.write_str(XML_DECLARATION)?;
            sink.write_line_end()?;
        }
        if let Some(doctype) = &prolog.doctype {
            sink.write_str(&doctype.to_string())?;
            sink.write_line_end()?;
        }
        self.print(node, &Scope::empty(), 0, false, sink)
    }
}
