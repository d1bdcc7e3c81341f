use crate::error::ExportError;
use crate::report::ReportRow;
use log::info;
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The report was empty and the output path was not touched.
    Skipped,
    Written { rows: usize },
}

///
/// Saves the campaign report as CSV.
///
/// The header is taken from the first row: its dimension names followed by its
/// metric names. Every row must carry the same columns in the same order as the
/// first one, otherwise nothing is written and [`ExportError::RowShapeMismatch`]
/// is returned.
///
/// # Arguments
/// * `rows` - The report rows as returned by the reporting API
/// * `csv_output_path` - Where the CSV file is created or overwritten
///
/// # Returns
/// A Result containing either the [`ExportOutcome`] or an [`ExportError`]
pub fn save_to_csv(rows: &[ReportRow], csv_output_path: &Path) -> Result<ExportOutcome, ExportError> {
    let Some(first) = rows.first() else {
        return Ok(ExportOutcome::Skipped);
    };

    if let Some((index, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| !row.has_same_columns(first))
    {
        return Err(ExportError::RowShapeMismatch {
            row: index,
            expected: first.column_names(),
            found: row.column_names(),
        });
    }

    let mut writer = csv::Writer::from_path(csv_output_path)?;
    writer.write_record(first.column_names())?;
    for row in rows {
        writer.write_record(row.values.iter().map(|v| v.value.to_string()))?;
    }
    writer.flush()?;

    info!(
        "wrote {} campaign report rows to {}",
        rows.len(),
        csv_output_path.display()
    );

    Ok(ExportOutcome::Written { rows: rows.len() })
}
