use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::convert::TryFrom;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Pretty prints markup trees. Holds only configuration, so a single printer can be shared and
/// used for any number of documents, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyPrinter {
    /// Number of spaces per level of nesting.
    indent: usize,
    /// Elements with these (local) names have their contents printed verbatim.
    preformatted: HashSet<String>,
}

/// A plain description of a [`PrettyPrinter`], e.g. as read from a settings file. Convert it with
/// [`PrettyPrinter::try_from`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PrinterConfig {
    pub indent: i64,
    #[cfg_attr(feature = "serialization", serde(default))]
    pub preformatted: Vec<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Indentation must be non-negative, but was {0}.")]
    NegativeIndent(i64),
    #[error("Preformatted tag name at position {index} is empty.")]
    EmptyPreformattedTag { index: usize },
}

static HTML_PRINTER: Lazy<PrettyPrinter> = Lazy::new(|| PrettyPrinter {
    indent: 2,
    preformatted: ["pre", "script", "style", "textarea"]
        .iter()
        .map(|name| name.to_string())
        .collect(),
});

impl PrettyPrinter {
    /// Construct a printer that indents each level of nesting by `indent` spaces, and leaves the
    /// contents of elements named in `preformatted` untouched.
    pub fn new<I, T>(indent: usize, preformatted: I) -> Result<PrettyPrinter, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut names = HashSet::new();
        for (index, name) in preformatted.into_iter().enumerate() {
            let name = name.into();
            if name.is_empty() {
                return Err(ConfigError::EmptyPreformattedTag { index });
            }
            names.insert(name);
        }
        Ok(PrettyPrinter {
            indent,
            preformatted: names,
        })
    }

    /// A printer suited to HTML: two-space indentation, with `pre`, `script`, `style`, and
    /// `textarea` contents left untouched.
    pub fn html() -> &'static PrettyPrinter {
        &HTML_PRINTER
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn is_preformatted(&self, name: &str) -> bool {
        self.preformatted.contains(name)
    }

    pub fn preformatted(&self) -> impl Iterator<Item = &str> {
        self.preformatted.iter().map(String::as_str)
    }
}

impl Default for PrettyPrinter {
    /// Two-space indentation, nothing preformatted.
    fn default() -> PrettyPrinter {
        PrettyPrinter {
            indent: 2,
            preformatted: HashSet::new(),
        }
    }
}

impl TryFrom<PrinterConfig> for PrettyPrinter {
    type Error = ConfigError;

    fn try_from(config: PrinterConfig) -> Result<PrettyPrinter, ConfigError> {
        if config.indent < 0 {
            return Err(ConfigError::NegativeIndent(config.indent));
        }
        PrettyPrinter::new(config.indent as usize, config.preformatted)
    }
}

impl From<&PrettyPrinter> for PrinterConfig {
    fn from(printer: &PrettyPrinter) -> PrinterConfig {
        let mut preformatted = printer.preformatted().map(str::to_owned).collect::<Vec<_>>();
        preformatted.sort();
        PrinterConfig {
            indent: i64::try_from(printer.indent).unwrap_or(i64::MAX),
            preformatted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_tag() {
        assert_eq!(
            PrettyPrinter::new(2, vec!["pre", "", "code"]),
            Err(ConfigError::EmptyPreformattedTag { index: 1 })
        );
    }

    #[test]
    fn test_rejects_negative_indent() {
        let config = PrinterConfig {
            indent: -1,
            preformatted: vec![],
        };
        assert_eq!(
            PrettyPrinter::try_from(config),
            Err(ConfigError::NegativeIndent(-1))
        );
    }

    #[test]
    fn test_config_conversion() {
        let printer = PrettyPrinter::new(0, vec!["b", "a"]).unwrap();
        let config = PrinterConfig::from(&printer);
        assert_eq!(config.indent, 0);
        assert_eq!(config.preformatted, vec!["a", "b"]);
        assert_eq!(PrettyPrinter::try_from(config).unwrap(), printer);
    }

    #[test]
    fn test_config_conversion_saturates_indent() {
        let printer = PrettyPrinter::new(usize::MAX, Vec::<String>::new()).unwrap();
        assert_eq!(PrinterConfig::from(&printer).indent, i64::MAX);
    }

    #[test]
    fn test_html_printer() {
        let printer = PrettyPrinter::html();
        assert_eq!(printer.indent(), 2);
        assert!(printer.is_preformatted("pre"));
        assert!(printer.is_preformatted("textarea"));
        assert!(!printer.is_preformatted("div"));
    }
}
