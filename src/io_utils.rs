//! CLI-facing error messages for the binaries.
use std::fmt;
use std::io;
use std::path::Path;

use crate::error::BankError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn bank_cli_error(context: &str, err: BankError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &BankError) -> String {
    use crate::error::BankError::*;
    match err {
        MissingInput(what) => format!("No {what} given. Pass it on the command line."),
        FileNotFound(path) => format!(
            "{} does not exist. Check that the file exists and the path is correct.",
            path.display()
        ),
        UnsupportedFormat { .. } => format!(
            "{err}. Only record tables with a {} column are understood.",
            crate::table::TAG_COLUMN
        ),
        InconsistentReference(tag) => format!(
            "Tag {tag} was selected but has no proposal record. Match files and proposal table disagree."
        ),
        MalformedMatchRecord { .. } => format!("{err}. Expected `bankTag testTag ... match`."),
        BankIndex(name) => format!("{name} does not end in _<index>. Rename the old bank file."),
        Glob(msg) => format!("{msg}. Check the match file glob."),
        Csv(e) => format!("{e}"),
        Json(e) => format!("{e}"),
        Io(e) => format!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tag;

    #[test]
    fn hints_name_the_problem() {
        let msg = cli_hint(&BankError::MissingInput("old bank file-name"));
        assert!(msg.contains("old bank file-name"));
        let msg = cli_hint(&BankError::InconsistentReference(Tag::from("X7")));
        assert!(msg.contains("X7"));
    }

    #[test]
    fn io_errors_carry_suggestions() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let cli = io_cli_error("reading", Path::new("m.dat"), err);
        assert!(cli.to_string().contains("Check that the file exists"));
    }
}
