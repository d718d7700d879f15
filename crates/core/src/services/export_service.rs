use serde::Serialize;

use crate::errors::CoreError;
use crate::models::entry::Entry;
use crate::models::ledger::DATE_FORMAT;

/// Column order of exported rows.
pub const CSV_HEADER: [&str; 4] = ["date", "kind", "description", "amount"];

#[derive(Serialize)]
struct CsvOutRow<'a> {
    date: String,
    kind: &'a str,
    description: &'a str,
    amount: f64,
}

/// Writes entry selections out as delimited text.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Render entries as CSV with a `date,kind,description,amount` header,
    /// one row per entry in the order given. No other transformation.
    pub fn entries_to_csv<'a, I>(&self, entries: I) -> Result<String, CoreError>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        // Written explicitly so an empty selection still gets a header line
        writer.write_record(CSV_HEADER)?;
        for entry in entries {
            writer.serialize(CsvOutRow {
                date: entry.date.format(DATE_FORMAT).to_string(),
                kind: entry.kind.as_str(),
                description: &entry.description,
                amount: entry.amount,
            })?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CoreError::Export(format!("Failed to flush CSV: {e}")))?;
        String::from_utf8(bytes).map_err(|e| CoreError::Export(format!("CSV is not UTF-8: {e}")))
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
