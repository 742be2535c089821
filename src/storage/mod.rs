pub mod batch;
pub mod csv;
pub mod debug;
pub mod json;
pub mod parquet;

pub use self::csv::CsvExporter;
pub use self::json::{JsonWriter, report_json, write_report};
pub use self::parquet::ParquetConverter;

use std::fs::File;
use std::path::Path;
use crate::error::Result;

/// Writes a complete table next to `path` and only then moves it over the old file, so an
/// interrupted export never leaves a truncated table behind.
pub(crate) fn replace_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(File) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut partial = path.as_os_str().to_owned();
    partial.push(".partial");
    let partial = Path::new(&partial);

    let result = File::create(partial).map_err(Into::into).and_then(write);
    if let Err(e) = result {
        let _ = std::fs::remove_file(partial);
        return Err(e);
    }
    std::fs::rename(partial, path)?;
    Ok(())
}
