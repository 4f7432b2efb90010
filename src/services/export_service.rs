use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::domain::item::Item;
use crate::services::error_handling::WarungError;

/// Column headers of the CSV artifact, localized as the source app
/// exported them.
const CSV_HEADERS: [&str; 6] = ["ID", "Nama Barang", "Harga", "Stok", "Kategori", "Tanggal Update"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Renders the collection as comma-delimited text: the fixed header row,
/// then one row per item in input order. Conventionally fed the full
/// unfiltered collection. Pure; offering the result as a download is the
/// caller's concern.
pub fn export_to_csv(items: &[Item]) -> Result<String, WarungError> {
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADERS).map_err(csv_error)?;
    for item in items {
        wtr.write_record(&[
            item.id.to_string(),
            item.name.clone(),
            item.price.to_string(),
            item.stock.to_string(),
            item.category.to_string(),
            format_update_date(item),
        ])
        .map_err(csv_error)?;
    }

    let data = wtr.into_inner().map_err(|err| WarungError::Export {
        message: err.to_string(),
    })?;
    String::from_utf8(data).map_err(|err| WarungError::Export {
        message: err.to_string(),
    })
}

/// Pretty JSON rendering of the collection; parses back to the same items.
pub fn export_to_json(items: &[Item]) -> Result<String, WarungError> {
    serde_json::to_string_pretty(items).map_err(|err| WarungError::Export {
        message: err.to_string(),
    })
}

/// Renders in the requested format and writes the artifact to disk.
pub fn export_to_file(
    items: &[Item],
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<(), WarungError> {
    let content = match format {
        ExportFormat::Csv => export_to_csv(items)?,
        ExportFormat::Json => export_to_json(items)?,
    };

    let path = path.as_ref();
    let mut file = std::fs::File::create(path).map_err(|source| WarungError::Storage {
        operation: format!("create export file {}", path.display()),
        source,
    })?;
    file.write_all(content.as_bytes())
        .map_err(|source| WarungError::Storage {
            operation: format!("write export file {}", path.display()),
            source,
        })?;

    info!(count = items.len(), path = %path.display(), "exported items");
    Ok(())
}

/// Day-first date, the id-ID locale rendering the original export used.
fn format_update_date(item: &Item) -> String {
    item.updated_at.format("%d/%m/%Y").to_string()
}

fn csv_error(err: csv::Error) -> WarungError {
    WarungError::Export {
        message: err.to_string(),
    }
}
