//! Errors raised while loading `toolforge.toml`.

use super::FieldPath;
use crate::utils::plural::plural_count;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why the config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("toolforge.toml is not valid TOML")]
    Toml(#[from] toml::de::Error),

    // no #[source]: the list is the whole message
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// Out-of-range settings, gathered from every section before failing.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    rejected: Vec<(FieldPath, String, Option<&'static str>)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `field` with a message.
    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.rejected.push((field, message.into(), None));
    }

    /// Reject `field`, suggesting an accepted value.
    pub fn error_with_hint(&mut self, field: FieldPath, message: impl Into<String>, hint: &'static str) {
        self.rejected.push((field, message.into(), Some(hint)));
    }

    /// Number of rejected settings.
    pub fn len(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Rejected field paths, in section order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rejected.iter().map(|(field, _, _)| field.as_str())
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            "invalid settings in toolforge.toml".red().bold(),
            plural_count(self.len(), "problem")
        )?;
        for (field, message, hint) in &self.rejected {
            write!(f, "\n  {field}: {message}")?;
            if let Some(hint) = hint {
                write!(f, " {}", format_args!("({hint})").dimmed())?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_path() {
        let err = ConfigError::Io(
            PathBuf::from("/etc/toolforge.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "cannot read /etc/toolforge.toml");
    }

    #[test]
    fn test_diagnostics_list_every_field() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("uuid.max_batch"), "must allow at least one UUID");
        diag.error_with_hint(FieldPath::new("json.indent"), "indent 40 is too wide", "use 2 or 4");

        assert_eq!(diag.fields().collect::<Vec<_>>(), ["uuid.max_batch", "json.indent"]);

        let shown = diag.into_result().unwrap_err().to_string();
        assert!(shown.contains("2 problems"));
        assert!(shown.contains("uuid.max_batch"));
        assert!(shown.contains("indent 40 is too wide"));
        assert!(shown.contains("use 2 or 4"));
    }

    #[test]
    fn test_no_diagnostics_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
