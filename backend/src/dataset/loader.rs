use polars::prelude::*;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use crate::models::{LaunchRecord, OutcomeClass};

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_VERSION_COLUMN: &str = "Booster Version";

/// Parse the launch CSV file into a Polars DataFrame.
pub fn parse_launch_csv(csv_path: &Path) -> DatasetResult<DataFrame> {
    if !csv_path.exists() {
        return Err(DatasetError::NotFound(csv_path.to_path_buf()));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.to_path_buf()))?
        .finish()?;

    Ok(df)
}

/// Parse the launch CSV and convert it to typed records.
pub fn load_launch_records(csv_path: &Path) -> DatasetResult<Vec<LaunchRecord>> {
    let df = parse_launch_csv(csv_path)?;
    dataframe_to_records(&df)
}

fn required_column(df: &DataFrame, name: &str, dtype: &DataType) -> DatasetResult<Column> {
    let column = df
        .column(name)
        .map_err(|_| DatasetError::MissingColumn(name.to_string()))?;
    // Numeric columns may be inferred as i64 when no decimal point is present
    Ok(column.cast(dtype)?)
}

/// Convert a Polars DataFrame to launch records.
///
/// Extra columns are ignored. A null in any of the four required columns, a negative
/// payload, or a class other than 0/1 rejects the whole frame.
pub fn dataframe_to_records(df: &DataFrame) -> DatasetResult<Vec<LaunchRecord>> {
    let site_column = required_column(df, LAUNCH_SITE_COLUMN, &DataType::String)?;
    let payload_column = required_column(df, PAYLOAD_MASS_COLUMN, &DataType::Float64)?;
    let class_column = required_column(df, CLASS_COLUMN, &DataType::Int64)?;
    let booster_column = required_column(df, BOOSTER_VERSION_COLUMN, &DataType::String)?;

    let sites = site_column.str()?;
    let payloads = payload_column.f64()?;
    let classes = class_column.i64()?;
    let boosters = booster_column.str()?;

    let height = df.height();
    let mut records = Vec::with_capacity(height);

    for row in 0..height {
        let site = sites
            .get(row)
            .ok_or_else(|| DatasetError::invalid_value(row, LAUNCH_SITE_COLUMN, "missing"))?;

        let payload = payloads
            .get(row)
            .ok_or_else(|| DatasetError::invalid_value(row, PAYLOAD_MASS_COLUMN, "missing"))?;
        if !payload.is_finite() || payload < 0.0 {
            return Err(DatasetError::invalid_value(
                row,
                PAYLOAD_MASS_COLUMN,
                format!("expected a non-negative mass, got {}", payload),
            ));
        }

        let class = classes
            .get(row)
            .ok_or_else(|| DatasetError::invalid_value(row, CLASS_COLUMN, "missing"))
            .and_then(|value| {
                OutcomeClass::try_from(value)
                    .map_err(|reason| DatasetError::invalid_value(row, CLASS_COLUMN, reason))
            })?;

        let booster = boosters
            .get(row)
            .ok_or_else(|| DatasetError::invalid_value(row, BOOSTER_VERSION_COLUMN, "missing"))?;

        records.push(LaunchRecord::new(site, payload, class, booster));
    }

    Ok(records)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
