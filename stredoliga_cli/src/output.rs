//! CSV serialization of the season report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stredoliga_lib::SeasonReport;

/// UTF-8 byte-order marker. Spreadsheet applications use it to pick
/// the right encoding for the accented category and competitor names.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Serialize the fully built report and write it in one filesystem
/// operation, so a failed run never leaves a partial file behind.
pub fn write_report_csv(report: &SeasonReport, path: &Path) -> Result<()> {
    let mut data = UTF8_BOM.to_vec();
    {
        let mut writer = csv::Writer::from_writer(&mut data);
        writer.write_record(&report.columns)?;
        for row in &report.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    fs::write(path, data).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
