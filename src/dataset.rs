//! The housing dataset.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::prelude::*;

/// Predictor column names in training order.
pub const PREDICTOR_COLUMNS: [&str; 5] = [
    "living_area",
    "basement_area",
    "overall_quality",
    "year_built",
    "garage_capacity",
];

pub const TARGET_COLUMN: &str = "sale_price";

/// One complete row of the housing dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingRecord {
    pub living_area: f64,
    pub basement_area: f64,
    pub overall_quality: u8,
    pub year_built: u16,
    pub garage_capacity: u8,
    pub sale_price: f64,
}

/// Raw CSV row: the six projected columns, each possibly null.
/// Any other column in the file is ignored.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(deserialize_with = "crate::serde::deserialize_nullable_cell")]
    living_area: Option<f64>,

    #[serde(deserialize_with = "crate::serde::deserialize_nullable_cell")]
    basement_area: Option<f64>,

    #[serde(deserialize_with = "crate::serde::deserialize_nullable_cell")]
    overall_quality: Option<u8>,

    #[serde(deserialize_with = "crate::serde::deserialize_nullable_cell")]
    year_built: Option<u16>,

    #[serde(deserialize_with = "crate::serde::deserialize_nullable_cell")]
    garage_capacity: Option<u8>,

    #[serde(deserialize_with = "crate::serde::deserialize_nullable_cell")]
    sale_price: Option<f64>,
}

impl RawRecord {
    /// `None` when any of the six fields is null: the row is dropped
    /// entirely, never imputed.
    fn into_complete(self) -> Option<HousingRecord> {
        Some(HousingRecord {
            living_area: self.living_area?,
            basement_area: self.basement_area?,
            overall_quality: self.overall_quality?,
            year_built: self.year_built?,
            garage_capacity: self.garage_capacity?,
            sale_price: self.sale_price?,
        })
    }
}

/// The loaded dataset: ordered, immutable after construction, shared
/// read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<HousingRecord>,
}

impl Dataset {
    /// Reads the CSV file and projects it onto the six known columns.
    #[instrument(skip_all, fields(path = ?path))]
    pub fn load(path: &Path) -> StdResult<Self, Error> {
        let reader = csv::Reader::from_path(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(reader)
    }

    fn from_reader<R: Read>(mut reader: csv::Reader<R>) -> StdResult<Self, Error> {
        let headers = reader.headers().map_err(|source| Error::Schema {
            reason: source.to_string(),
        })?;
        for column in PREDICTOR_COLUMNS.iter().chain([&TARGET_COLUMN]) {
            if !headers.iter().any(|header| header == *column) {
                return Err(Error::Schema {
                    reason: format!("column `{column}` is missing"),
                });
            }
        }

        let mut records = Vec::new();
        let mut n_dropped = 0_usize;
        for row in reader.deserialize::<RawRecord>() {
            let row = row.map_err(|source| Error::Schema {
                reason: source.to_string(),
            })?;
            match row.into_complete() {
                Some(record) => records.push(record),
                None => n_dropped += 1,
            }
        }
        info!(n_records = records.len(), n_dropped, "loaded");
        Ok(Self { records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Living area vs sale price for every record, in dataset order.
    #[must_use]
    pub fn scatter_points(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|record| (record.living_area, record.sale_price))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
living_area,basement_area,overall_quality,year_built,garage_capacity,sale_price,neighborhood
1500,800,5,2000,2,200000,College Creek
2000,NA,7,2010,3,300000,Old Town
1200,600,4,1985,1,150000,Edwards
1750,900,6,1995,2,,Somerset
";

    fn from_str(data: &str) -> StdResult<Dataset, Error> {
        Dataset::from_reader(csv::Reader::from_reader(data.as_bytes()))
    }

    #[test]
    fn drops_incomplete_rows_ok() -> Result {
        let dataset = from_str(CSV)?;
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].living_area, 1500.0);
        assert_eq!(dataset.records[0].sale_price, 200_000.0);
        assert_eq!(dataset.records[1].year_built, 1985);
        Ok(())
    }

    #[test]
    fn idempotent_ok() -> Result {
        assert_eq!(from_str(CSV)?, from_str(CSV)?);
        Ok(())
    }

    #[test]
    fn scatter_points_ok() -> Result {
        let points = from_str(CSV)?.scatter_points();
        assert_eq!(points, vec![(1500.0, 200_000.0), (1200.0, 150_000.0)]);
        Ok(())
    }

    #[test]
    fn missing_column_fails() {
        let error = from_str("living_area,sale_price\n1500,200000\n").unwrap_err();
        assert!(matches!(error, Error::Schema { .. }));
    }

    #[test]
    fn missing_file_fails() {
        let error = Dataset::load(Path::new("no-such-dataset.csv")).unwrap_err();
        assert!(matches!(error, Error::FileAccess { .. }));
    }
}
