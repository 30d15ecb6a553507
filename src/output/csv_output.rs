//! CSV export: one row per founder per company

use crate::model::EnrichedCompany;
use crate::output::traits::{OutputError, OutputHandler, OutputResult};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column order of the export
pub const CSV_HEADERS: [&str; 5] = [
    "company_name",
    "batch",
    "short_description",
    "founder_name",
    "founder_linkedin",
];

/// One exported row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow<'a> {
    pub company_name: &'a str,
    pub batch: &'a str,
    pub short_description: &'a str,
    pub founder_name: &'a str,
    pub founder_linkedin: &'a str,
}

/// Flattens companies into rows
///
/// A company without founders still produces one row with empty founder
/// columns.
pub fn flatten_rows<'a>(companies: &'a [EnrichedCompany]) -> Vec<ExportRow<'a>> {
    let mut rows = Vec::new();

    for enriched in companies {
        let company = &enriched.company;
        let row = |founder_name: &'a str, founder_linkedin: &'a str| ExportRow {
            company_name: &company.name,
            batch: &company.batch,
            short_description: &company.short_description,
            founder_name,
            founder_linkedin,
        };

        if enriched.founders.is_empty() {
            rows.push(row("", ""));
        } else {
            for founder in &enriched.founders {
                rows.push(row(founder.name.as_str(), founder.profile_url.as_str()));
            }
        }
    }

    rows
}

/// Output handler writing CSV rows to any writer
pub struct CsvOutputHandler<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> CsvOutputHandler<W> {
    /// Creates a handler and writes the header row
    pub fn new(inner: W) -> OutputResult<Self> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(CSV_HEADERS)?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Write(e.to_string()))
    }
}

impl CsvOutputHandler<File> {
    /// Creates the file (and any missing parent directories)
    pub fn create(path: &Path) -> OutputResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Self::new(File::create(path)?)
    }
}

impl<W: Write> OutputHandler for CsvOutputHandler<W> {
    fn write_companies(&mut self, companies: &[EnrichedCompany]) -> OutputResult<()> {
        for row in flatten_rows(companies) {
            self.writer.serialize(row)?;
            self.rows_written += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn rows_written(&self) -> usize {
        self.rows_written
    }
}

/// Writes all companies to a CSV file
///
/// # Returns
///
/// * `Ok(usize)` - Number of data rows written
/// * `Err(OutputError)` - The file could not be created or written
pub fn export_csv(companies: &[EnrichedCompany], path: &Path) -> OutputResult<usize> {
    let mut handler = CsvOutputHandler::create(path)?;
    handler.write_companies(companies)?;
    handler.finish()?;

    tracing::info!(
        "Exported {} rows for {} companies to {}",
        handler.rows_written(),
        companies.len(),
        path.display()
    );

    Ok(handler.rows_written())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompanyRecord, FounderEntity};
    use tempfile::TempDir;

    fn company(name: &str, founders: Vec<FounderEntity>) -> EnrichedCompany {
        EnrichedCompany::new(
            CompanyRecord {
                name: name.to_string(),
                batch: "W21".to_string(),
                short_description: format!("{} does things", name),
                ..CompanyRecord::default()
            },
            founders,
        )
    }

    #[test]
    fn test_flatten_one_row_per_founder() {
        let companies = vec![company(
            "Acme",
            vec![
                FounderEntity::new("Jane Doe", "https://linkedin.com/in/janedoe"),
                FounderEntity::name_only("John Smith"),
            ],
        )];
        let rows = flatten_rows(&companies);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].founder_name, "Jane Doe");
        assert_eq!(rows[0].founder_linkedin, "https://linkedin.com/in/janedoe");
        assert_eq!(rows[1].founder_name, "John Smith");
        assert_eq!(rows[1].founder_linkedin, "");
        assert!(rows.iter().all(|r| r.company_name == "Acme" && r.batch == "W21"));
    }

    #[test]
    fn test_flatten_company_without_founders() {
        let companies = vec![company("Empty Co", vec![])];
        let rows = flatten_rows(&companies);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company_name, "Empty Co");
        assert_eq!(rows[0].founder_name, "");
        assert_eq!(rows[0].founder_linkedin, "");
    }

    #[test]
    fn test_csv_handler_writes_header_and_rows() {
        let companies = vec![
            company("Acme", vec![FounderEntity::name_only("Jane Doe")]),
            company("Empty, Inc", vec![]),
        ];

        let mut handler = CsvOutputHandler::new(Vec::new()).unwrap();
        handler.write_companies(&companies).unwrap();
        handler.finish().unwrap();
        assert_eq!(handler.rows_written(), 2);

        let output = String::from_utf8(handler.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines[0],
            "company_name,batch,short_description,founder_name,founder_linkedin"
        );
        assert_eq!(lines[1], "Acme,W21,Acme does things,Jane Doe,");
        assert_eq!(lines[2], "\"Empty, Inc\",W21,\"Empty, Inc does things\",,");
    }

    #[test]
    fn test_export_csv_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/founders.csv");
        let companies = vec![company("Acme", vec![FounderEntity::name_only("Jane Doe")])];

        let rows = export_csv(&companies, &path).unwrap();
        assert_eq!(rows, 1);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());
        assert_eq!(reader.records().count(), 1);
    }
}
