use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::file::reader::ChunkReader;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{
    Dataset, RawRecord, COL_COUNTRY, COL_LAUNCH_MASS, COL_ORBIT_CLASS, COL_POWER, COL_PURPOSE,
};
use super::normalize;

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Anything that makes the source unusable. Fatal to session start: the
/// caller reports it and keeps running without a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the catalogue from a filesystem path or an `http(s)://` URL.
/// Dispatch by extension; every row passes through the column cleaner
/// before the [`Dataset`] is assembled.
pub fn load_source(source: &str) -> Result<Dataset, LoadError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        load_url(source)
    } else {
        load_file(Path::new(source))
    }
}

/// Load from a local file. Supported formats:
/// * `.csv`     – header row with the exact catalogue column names
/// * `.json`    – `[{ "Country of Operator/Owner": ..., ... }, ...]`
/// * `.parquet` – Utf8 / Int64 / Float64 columns under the same names
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(std::fs::File::open(path)?),
        "json" => load_json(&std::fs::read(path)?),
        "parquet" | "pq" => load_parquet(std::fs::File::open(path)?),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

fn load_url(url: &str) -> Result<Dataset, LoadError> {
    let body = reqwest::blocking::get(url)?.error_for_status()?.bytes()?;
    match url_extension(url).as_str() {
        "json" => load_json(&body),
        "parquet" | "pq" => load_parquet(body),
        // CSV is what catalogue URLs serve in practice, so it is also the
        // fallback for URLs without a recognisable extension.
        _ => load_csv(body.as_ref()),
    }
}

fn url_extension(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// Cell handling
// ---------------------------------------------------------------------------

/// Source markers for an absent value, matched exactly.
const NA_MARKERS: [&str; 3] = ["", "nan", "NA"];

fn cell(value: &str) -> Option<String> {
    if NA_MARKERS.contains(&value) {
        None
    } else {
        Some(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Columns are located by exact header name; extra columns are ignored.
fn load_csv<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let col = |name: &str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };
    let country_idx = col(COL_COUNTRY)?;
    let purpose_idx = col(COL_PURPOSE)?;
    let orbit_idx = col(COL_ORBIT_CLASS)?;
    let mass_idx = col(COL_LAUNCH_MASS)?;
    let power_idx = col(COL_POWER)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let raw = RawRecord {
            country: cell(row.get(country_idx).unwrap_or("")),
            purpose: cell(row.get(purpose_idx).unwrap_or("")),
            orbit_class: cell(row.get(orbit_idx).unwrap_or("")),
            launch_mass: cell(row.get(mass_idx).unwrap_or("")),
            power: cell(row.get(power_idx).unwrap_or("")),
        };
        records.push(normalize::normalize(raw));
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (the default `df.to_json(orient='records')`).
/// Absent keys and nulls are missing cells; numeric cells are stringified
/// so the same digit-run extraction applies to every source format.
#[derive(Debug, Deserialize)]
struct JsonRow {
    #[serde(rename = "Country of Operator/Owner", default)]
    country: Option<JsonValue>,
    #[serde(rename = "Purpose", default)]
    purpose: Option<JsonValue>,
    #[serde(rename = "Class of Orbit", default)]
    orbit_class: Option<JsonValue>,
    #[serde(rename = "Launch Mass (kg.)", default)]
    launch_mass: Option<JsonValue>,
    #[serde(rename = "Power (watts)", default)]
    power: Option<JsonValue>,
}

fn json_cell(value: Option<JsonValue>) -> Option<String> {
    match value? {
        JsonValue::Null => None,
        JsonValue::String(s) => cell(&s),
        other => Some(other.to_string()),
    }
}

fn load_json(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let rows: Vec<JsonRow> = serde_json::from_slice(bytes)?;

    let records = rows
        .into_iter()
        .map(|row| {
            normalize::normalize(RawRecord {
                country: json_cell(row.country),
                purpose: json_cell(row.purpose),
                orbit_class: json_cell(row.orbit_class),
                launch_mass: json_cell(row.launch_mass),
                power: json_cell(row.power),
            })
        })
        .collect();

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): cells may arrive as strings or as
/// native numerics depending on the writer.
fn load_parquet<R: ChunkReader + 'static>(input: R) -> Result<Dataset, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(input)?;
    let reader = builder.build()?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();

        let col = |name: &str| -> Result<usize, LoadError> {
            schema
                .index_of(name)
                .map_err(|_| LoadError::MissingColumn(name.to_string()))
        };
        let country_idx = col(COL_COUNTRY)?;
        let purpose_idx = col(COL_PURPOSE)?;
        let orbit_idx = col(COL_ORBIT_CLASS)?;
        let mass_idx = col(COL_LAUNCH_MASS)?;
        let power_idx = col(COL_POWER)?;

        for row in 0..batch.num_rows() {
            let raw = RawRecord {
                country: arrow_cell(batch.column(country_idx), row),
                purpose: arrow_cell(batch.column(purpose_idx), row),
                orbit_class: arrow_cell(batch.column(orbit_idx), row),
                launch_mass: arrow_cell(batch.column(mass_idx), row),
                power: arrow_cell(batch.column(power_idx), row),
            };
            records.push(normalize::normalize(raw));
        }
    }

    Ok(Dataset::from_records(records))
}

/// Read one Arrow cell back to its raw string form (or a missing cell).
fn arrow_cell(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .and_then(|arr| cell(arr.value(row))),
        DataType::LargeUtf8 => cell(col.as_string::<i64>().value(row)),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|arr| arr.value(row).to_string()),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|arr| arr.value(row).to_string()),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|arr| arr.value(row).to_string()),
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|arr| arr.value(row).to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use arrow::array::ArrayRef;
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    const HEADER: &str =
        "\"Name of Satellite, Alternate Names\",Country of Operator/Owner,Purpose,Class of Orbit,Launch Mass (kg.),Power (watts)";

    fn write_csv(rows: &[&str]) -> tempfile::TempPath {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.into_temp_path()
    }

    #[test]
    fn csv_rows_are_cleaned_on_load() {
        let path = write_csv(&[
            "Starling-1,USA,Comm / Nav,LEo,\"1,234 (BOL)\",",
            "Hawkeye,China,EarthObservation,GEO,abc,5000",
        ]);
        let ds = load_file(path.as_ref()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].purpose, "Comm/Nav");
        assert_eq!(ds.records[0].orbit_class, "LEO");
        assert_eq!(ds.records[0].launch_mass, Some(1234));
        assert_eq!(ds.records[0].power, None);
        assert_eq!(ds.records[1].launch_mass, None);
        assert_eq!(ds.records[1].power, Some(5000));
    }

    #[test]
    fn na_markers_are_missing_cells() {
        let path = write_csv(&[
            "Sat-A,USA,Communications,LEO,nan,NA",
            "Sat-B,USA,Communications,LEO,,750",
        ]);
        let ds = load_file(path.as_ref()).unwrap();
        assert_eq!(ds.records[0].launch_mass, None);
        assert_eq!(ds.records[0].power, None);
        assert_eq!(ds.records[1].launch_mass, None);
        assert_eq!(ds.records[1].power, Some(750));
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Country of Operator/Owner,Purpose").unwrap();
        writeln!(file, "USA,Communications").unwrap();
        let path = file.into_temp_path();

        let err = load_file(path.as_ref()).unwrap_err();
        match err {
            LoadError::MissingColumn(name) => assert_eq!(name, COL_ORBIT_CLASS),
            other => panic!("expected MissingColumn, got {other}"),
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("catalogue.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "xlsx"));
    }

    #[test]
    fn json_numeric_cells_are_stringified_before_extraction() {
        let body = br#"[
            {"Country of Operator/Owner": "USA", "Purpose": "Comm/Nav",
             "Class of Orbit": "LEO", "Launch Mass (kg.)": 500,
             "Power (watts)": "1,100W"},
            {"Country of Operator/Owner": "Japan", "Purpose": "EarthScience",
             "Class of Orbit": "GEO", "Launch Mass (kg.)": null}
        ]"#;
        let ds = load_json(body).unwrap();

        assert_eq!(ds.records[0].launch_mass, Some(500));
        assert_eq!(ds.records[0].power, Some(1100));
        // Null and absent keys are both missing cells.
        assert_eq!(ds.records[1].launch_mass, None);
        assert_eq!(ds.records[1].power, None);
    }

    #[test]
    fn parquet_round_trip() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_COUNTRY, DataType::Utf8, true),
            Field::new(COL_PURPOSE, DataType::Utf8, true),
            Field::new(COL_ORBIT_CLASS, DataType::Utf8, true),
            Field::new(COL_LAUNCH_MASS, DataType::Utf8, true),
            Field::new(COL_POWER, DataType::Int64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec![Some("USA"), Some("India")])) as ArrayRef,
                Arc::new(StringArray::from(vec![Some("Comm / Nav"), None])) as ArrayRef,
                Arc::new(StringArray::from(vec![Some("LEo"), Some("MEO")])) as ArrayRef,
                Arc::new(StringArray::from(vec![Some("2,500"), Some("nan")])) as ArrayRef,
                Arc::new(Int64Array::from(vec![None, Some(4200)])) as ArrayRef,
            ],
        )
        .unwrap();

        let mut file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(&mut file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        let path = file.into_temp_path();

        let ds = load_file(path.as_ref()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].orbit_class, "LEO");
        assert_eq!(ds.records[0].purpose, "Comm/Nav");
        assert_eq!(ds.records[0].launch_mass, Some(2500));
        assert_eq!(ds.records[0].power, None);
        assert_eq!(ds.records[1].launch_mass, None);
        assert_eq!(ds.records[1].power, Some(4200));
    }
}
