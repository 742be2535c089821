use arrow::array::{ArrayRef, Float64Array, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;
use crate::error::Result;
use crate::models::{RestaurantMenu, RestaurantRecord, menu_rows};

pub fn restaurants_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("cuisines", DataType::Utf8, false),
        Field::new("area", DataType::Utf8, false),
        Field::new("rating", DataType::Float64, true),
        Field::new("delivery_time", DataType::UInt32, true),
        Field::new("cost_for_two", DataType::Utf8, false),
        Field::new("address", DataType::Utf8, false),
        Field::new("restaurant_type", DataType::Utf8, false),
        Field::new("lat", DataType::Float64, false),
        Field::new("lng", DataType::Float64, false),
    ]))
}

pub fn menus_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("restaurant_id", DataType::Utf8, false),
        Field::new("restaurant_name", DataType::Utf8, false),
        Field::new("item_name", DataType::Utf8, false),
        Field::new("price", DataType::Float64, false),
        Field::new("veg", DataType::Utf8, false),
        Field::new("category", DataType::Utf8, false),
        Field::new("description", DataType::Utf8, false),
    ]))
}

pub fn restaurants_batch(records: &[RestaurantRecord]) -> Result<RecordBatch> {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.id.as_str()))),
        Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.name.as_str()))),
        Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.cuisines.as_str()))),
        Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.area.as_str()))),
        Arc::new(records.iter().map(|r| r.rating).collect::<Float64Array>()),
        Arc::new(records.iter().map(|r| r.delivery_time).collect::<UInt32Array>()),
        Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.cost_for_two.as_str()))),
        Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.address.as_str()))),
        Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.restaurant_type.as_str()))),
        Arc::new(Float64Array::from_iter_values(records.iter().map(|r| r.lat))),
        Arc::new(Float64Array::from_iter_values(records.iter().map(|r| r.lng))),
    ];

    Ok(RecordBatch::try_new(restaurants_schema(), columns)?)
}

pub fn menus_batch(menus: &[RestaurantMenu]) -> Result<RecordBatch> {
    let rows = menu_rows(menus);

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.restaurant_id))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.restaurant_name))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.item_name))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.price))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.veg.as_str()))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.category))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.description))),
    ];

    Ok(RecordBatch::try_new(menus_schema(), columns)?)
}
