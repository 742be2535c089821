use serde::Serialize;
use std::path::Path;
use tokio::fs::File as TokioFile;
use tokio::io::{AsyncWriteExt, BufWriter as TokioBufWriter};
use crate::error::Result;
use crate::models::ScrapeReport;

/// Streams records as JSON lines, flushing after each one so an interrupted run leaves a
/// readable file behind.
pub struct JsonWriter {
    writer: TokioBufWriter<TokioFile>,
    count: usize,
}

impl JsonWriter {
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let file = TokioFile::create(path).await?;

        Ok(Self {
            writer: TokioBufWriter::new(file),
            count: 0,
        })
    }

    pub async fn write_record<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let mut json = serde_json::to_vec(record)?;
        json.push(b'\n');
        self.writer.write_all(&json).await?;
        self.writer.flush().await?;
        self.count += 1;

        Ok(())
    }

    pub async fn finish(mut self) -> Result<usize> {
        self.writer.flush().await?;
        Ok(self.count)
    }

    pub fn get_count(&self) -> usize {
        self.count
    }
}

pub fn report_json(report: &ScrapeReport<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub async fn write_report(path: impl AsRef<Path>, report: &ScrapeReport<'_>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, report_json(report)?).await?;
    Ok(())
}
