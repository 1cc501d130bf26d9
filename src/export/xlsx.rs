// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, record_to_row};
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Caso dataset vuoto
    // ---------------------------
    if records.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        write_text_cell(worksheet, row, 0, &rec.location, band_color)?;
        write_number_cell(worksheet, row, 1, rec.latitude, band_color)?;
        write_number_cell(worksheet, row, 2, rec.longitude, band_color)?;
        write_number_cell(worksheet, row, 3, rec.year.map(f64::from), band_color)?;
        write_text_cell(worksheet, row, 4, &rec.event, band_color)?;
        write_text_cell(worksheet, row, 5, &rec.database, band_color)?;

        for (col, value) in record_to_row(rec).iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_text_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    worksheet
        .write_with_format(row, col, s, &cell_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

/// Celle numeriche allineate a destra; None diventa una cella vuota.
fn write_number_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
    bg: Color,
) -> AppResult<()> {
    match value {
        Some(num) => {
            let fmt = cell_format(bg).set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, num, &fmt)
                .map_err(to_export_error)?;
        }
        None => {
            worksheet
                .write_with_format(row, col, "", &cell_format(bg))
                .map_err(to_export_error)?;
        }
    }
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
