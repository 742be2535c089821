use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;
use std::fs::File;
use std::path::Path;
use tracing::info;
use crate::error::Result;
use crate::models::{RestaurantMenu, RestaurantRecord};
use crate::storage::batch::{menus_batch, restaurants_batch};
use crate::storage::replace_file;

pub struct CsvExporter;

impl CsvExporter {
    pub fn write_restaurants(records: &[RestaurantRecord], output_path: &Path) -> Result<()> {
        let batch = restaurants_batch(records)?;
        write_batch(&batch, output_path)?;
        info!(rows = batch.num_rows(), path = %output_path.display(), "Saved restaurants");
        Ok(())
    }

    pub fn write_menus(menus: &[RestaurantMenu], output_path: &Path) -> Result<()> {
        let batch = menus_batch(menus)?;
        write_batch(&batch, output_path)?;
        info!(rows = batch.num_rows(), path = %output_path.display(), "Saved menu items");
        Ok(())
    }
}

fn write_batch(batch: &RecordBatch, output_path: &Path) -> Result<()> {
    replace_file(output_path, |file: File| {
        let mut writer = WriterBuilder::new().with_header(true).build(file);
        writer.write(batch)?;
        Ok(())
    })
}
