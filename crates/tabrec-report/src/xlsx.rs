//! Styled XLSX rendering.
//!
//! Layout: the title in A1, the header row at row 3, data from row 4 on.
//! Columns are key, `status`, then the union schema in engine order.
//! Cells carrying a change marker get a yellow fill; their text still
//! contains the `--> ` separator, so spreadsheet-side rules can match on
//! it as well.

use std::fs;

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet};
use tracing::info;

use tabrec_engine::{DiffCell, DiffTable};

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};

const HEADER_ROW: u32 = 3;
const HEADER_FILL: u32 = 0xFDE9D9;

/// Write one reconciled table as a styled workbook.
pub fn write_xlsx_report(table: &DiffTable, config: &ReportConfig) -> ReportResult<()> {
    if let Some(parent) = config.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&config.sheet_name)?;
    write_sheet(sheet, table, &config.title_prefix)?;
    workbook.save(&config.output_path)?;

    info!(
        path = %config.output_path.display(),
        rows = table.len(),
        "wrote report"
    );
    Ok(())
}

fn write_sheet(sheet: &mut Worksheet, table: &DiffTable, title_prefix: &str) -> ReportResult<()> {
    let title_format = Format::new()
        .set_bold()
        .set_font_color(Color::Red)
        .set_font_size(16);
    let header_format = Format::new()
        .set_bold()
        .set_text_wrap()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin);
    let changed_format = Format::new().set_background_color(Color::Yellow);

    let title = format!("{} {}", title_prefix, Local::now().format("%d %b %Y"));
    sheet.write_string_with_format(0, 0, &title, &title_format)?;

    sheet.write_string_with_format(HEADER_ROW, 0, &table.key_column, &header_format)?;
    sheet.write_string_with_format(HEADER_ROW, 1, "status", &header_format)?;
    for (idx, column) in table.columns.iter().enumerate() {
        sheet.write_string_with_format(HEADER_ROW, idx as u16 + 2, column, &header_format)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = HEADER_ROW + 1 + row_idx as u32;
        sheet.write_string(excel_row, 0, &row.key)?;
        sheet.write_string(excel_row, 1, row.status.as_str())?;
        for (col_idx, column) in table.columns.iter().enumerate() {
            let col = col_idx as u16 + 2;
            match row.cell(column) {
                Some(DiffCell::Changed(marker)) => {
                    sheet.write_string_with_format(excel_row, col, marker.render(), &changed_format)?;
                }
                Some(DiffCell::Value(value)) => {
                    sheet.write_string(excel_row, col, value.render())?;
                }
                None => {}
            }
        }
    }

    let last_row = HEADER_ROW + table.rows.len() as u32;
    let last_col = table.columns.len() as u16 + 1;
    sheet.autofilter(HEADER_ROW, 0, last_row, last_col)?;

    Ok(())
}
