//! Pretty printing of markup trees.
//!
//! A [`PrettyPrinter`] walks a [`Node`](crate::Node) tree depth first. Each element goes on its
//! own line, indented by its depth, unless:
//!
//! - its children are all text, in which case the (trimmed) text is put on the same line as the
//!   element's tags, or
//! - it's inside a preformatted region, in which case it's written exactly as it is.
//!
//! Output goes to a [`Sink`]: a `String`, or any byte stream via [`IoSink`].

mod config;
mod layout;
mod sink;
mod tags;
mod write;

pub use config::{ConfigError, PrettyPrinter, PrinterConfig};
pub use sink::{IoSink, Sink, LINE_ENDING};
pub use tags::{end_tag, leaf_tag, start_tag};
pub use write::{Prolog, WriteError, XML_DECLARATION};
