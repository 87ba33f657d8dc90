//! Table formatting for list and report commands
//!
//! Commands build a [`Table`] of already-formatted cells and hand it to
//! [`emit`] together with the typed records. Structured formats (json, yaml)
//! serialize the records; the tabular formats render the table.

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;

/// Header plus rows of display strings
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Render in one of the tabular formats; structured formats fall back to TSV
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Auto => Ok(self.render_tabled(false)),
            OutputFormat::Md => Ok(self.render_tabled(true)),
            OutputFormat::Csv => self.render_csv(),
            OutputFormat::Tsv | OutputFormat::Json | OutputFormat::Yaml => Ok(self.render_tsv()),
        }
    }

    fn render_tabled(&self, markdown: bool) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.headers.iter().map(String::as_str));
        for row in &self.rows {
            builder.push_record(row.iter().map(String::as_str));
        }

        let mut table = builder.build();
        if markdown {
            table.with(Style::markdown());
        } else {
            table.with(Style::rounded());
        }

        let mut out = table.to_string();
        out.push('\n');
        out
    }

    fn render_tsv(&self) -> String {
        let mut out = String::new();
        for line in std::iter::once(&self.headers).chain(self.rows.iter()) {
            let cells: Vec<String> = line.iter().map(|c| c.replace(['\t', '\n'], " ")).collect();
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
        out
    }

    fn render_csv(&self) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(&self.headers).into_diagnostic()?;
        for row in &self.rows {
            wtr.write_record(row).into_diagnostic()?;
        }
        let bytes = wtr.into_inner().into_diagnostic()?;
        String::from_utf8(bytes).into_diagnostic()
    }
}

/// Serialize `data` for json/yaml, otherwise render `table`
pub fn format_output<T: Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
    table: &Table,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(data).into_diagnostic()?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => serde_yml::to_string(data).into_diagnostic(),
        other => table.render(other),
    }
}

/// Print [`format_output`] to stdout
pub fn emit<T: Serialize + ?Sized>(format: OutputFormat, data: &T, table: &Table) -> Result<()> {
    print!("{}", format_output(format, data, table)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["ID", "Item"]);
        table.push_row(["PK-1", "Polybag"]);
        table.push_row(["PK-2", "Hangtag, printed"]);
        table
    }

    #[test]
    fn test_tsv_render() {
        let out = sample().render(OutputFormat::Tsv).unwrap();
        assert_eq!(out, "ID\tItem\nPK-1\tPolybag\nPK-2\tHangtag, printed\n");
    }

    #[test]
    fn test_csv_quotes_commas() {
        let out = sample().render(OutputFormat::Csv).unwrap();
        assert!(out.contains("\"Hangtag, printed\""));
        assert!(out.starts_with("ID,Item\n"));
    }

    #[test]
    fn test_markdown_render() {
        let out = sample().render(OutputFormat::Md).unwrap();
        assert!(out.contains("| PK-1"));
        assert!(out.lines().nth(1).is_some_and(|l| l.contains("---")));
    }

    #[test]
    fn test_json_uses_records() {
        let records = vec![serde_json::json!({"id": "PK-1"})];
        let out = format_output(OutputFormat::Json, &records, &sample()).unwrap();
        assert!(out.contains("\"id\": \"PK-1\""));
        assert!(!out.contains("Polybag"));
    }
}
