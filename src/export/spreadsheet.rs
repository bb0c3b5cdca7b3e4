//! The spreadsheet renderer: a CSV artifact with a summary block.

use csv::WriterBuilder;

use crate::{
    Error,
    export::ExportTotals,
    format::{format_currency, format_display_date},
};

/// Renders the export as CSV bytes: title and generation date, the
/// financial summary over the filtered set, then the selected columns
/// and one row per record.
///
/// Zero data rows still produce the title and summary block. An empty
/// field selection omits the header and detail rows entirely.
///
/// # Errors
/// Returns [Error::RenderFailed] if the CSV writer fails.
pub(super) fn render(
    rows: &[Vec<String>],
    headers: &[&str],
    title: &str,
    totals: &ExportTotals,
    generated_on: time::Date,
) -> Result<Vec<u8>, Error> {
    // Rows vary in width between the summary block and the detail table.
    let mut writer = WriterBuilder::new().flexible(true).from_writer(vec![]);

    writer.write_record([title])?;
    writer.write_record([format!("Generated on: {}", format_display_date(generated_on))])?;
    writer.write_record([""])?;

    writer.write_record(["FINANCIAL SUMMARY"])?;
    writer.write_record(["Total Income:", format_currency(totals.total_income).as_str()])?;
    writer.write_record(["Total Expenses:", format_currency(totals.total_expenses).as_str()])?;
    writer.write_record(["Net Balance:", format_currency(totals.net_balance).as_str()])?;

    if totals.total_income == 0.0 && totals.total_expenses > 0.0 {
        writer.write_record([
            "Note: no income transactions in this selection, the net balance reflects expenses only.",
        ])?;
    }

    writer.write_record([""])?;
    writer.write_record(["TRANSACTION DETAILS"])?;
    writer.write_record([""])?;

    if !headers.is_empty() {
        writer.write_record(headers)?;

        for row in rows {
            writer.write_record(row)?;
        }
    }

    writer
        .into_inner()
        .map_err(|error| Error::RenderFailed(error.to_string()))
}
