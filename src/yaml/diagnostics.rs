//! YAML error diagnostics pointing at the offending line of a style file

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// YAML error with source location
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(plm::yaml::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    message: String,
}

impl YamlSyntaxError {
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));

        let offset = line_col_to_offset(source, line, column);
        let message = err.to_string();
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize YAML: {0}")]
    Serialize(String),
}

/// Convert a 1-based line/column to a byte offset, clamped to the source
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>();

    if line_start >= source.len() {
        return source.len().saturating_sub(1);
    }

    let rest = &source[line_start..];
    let line_len = rest.find('\n').unwrap_or(rest.len());
    let col_offset = rest
        .char_indices()
        .nth(column.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(line_len)
        .min(line_len);

    line_start + col_offset
}

/// Suggest a fix for the errors people make editing style files by hand
fn generate_help(message: &str) -> Option<String> {
    let msg = message.to_lowercase();

    if msg.contains("tab") {
        return Some("YAML indentation must use spaces, not tabs.".to_string());
    }

    if msg.contains("duplicate") {
        return Some("Each key may appear once per record; remove the duplicate.".to_string());
    }

    if msg.contains("missing field `id`") {
        return Some(
            "Every BOM line, operation and packaging line needs an id such as BOM-1, OP-1 or PK-1."
                .to_string(),
        );
    }

    if msg.contains("record prefix") || msg.contains("record id") {
        return Some("Ids look like PREFIX-KEY, e.g. BOM-1, OP-4, STYLE-SS25-TEE-001.".to_string());
    }

    if msg.contains("unknown variant") && msg.contains("stage") {
        return Some("Valid stages: Idea, Definition, Proto, Quote, Validation, RTM, Live.".to_string());
    }

    if msg.contains("mapping values are not allowed") {
        return Some("Check for a missing space after ':' or inconsistent indentation.".to_string());
    }

    None
}
