//! Common routines for loading a model from its input files.
use crate::costs::CostTable;
use crate::plan::Period;
use ::log::info;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub mod cost;
pub mod period;
use cost::read_costs;
use period::read_periods;

/// Parse a CSV file into a vector of records.
///
/// A value that cannot be parsed fails the whole load; no record is silently skipped.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let mut reader =
        csv::Reader::from_path(file_path).with_context(|| input_err_msg(file_path))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T = result.with_context(|| input_err_msg(file_path))?;
        records.push(record);
    }

    Ok(records)
}

/// Parse a TOML file at the specified path.
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let contents = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    toml::from_str(&contents).with_context(|| input_err_msg(file_path))
}

/// Format a standard error message for a problem with an input file.
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().to_string_lossy())
}

/// Read a model from the specified directory.
///
/// # Arguments
///
/// * `model_dir` - Folder containing the model input files
///
/// # Returns
///
/// The ordered period list and the cost table, or an error if either file is invalid.
pub fn load_model(model_dir: &Path) -> Result<(Vec<Period>, CostTable)> {
    let periods = read_periods(model_dir)?;
    let costs = read_costs(model_dir)?;
    info!("Read {} periods", periods.len());

    Ok((periods, costs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: String,
        value: f64,
    }

    #[test]
    fn test_read_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("records.csv");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "id,value\na,1\nb,2.5").unwrap();
        }

        let records: Vec<Record> = read_csv(&file_path).unwrap();
        assert_eq!(
            records,
            vec![
                Record {
                    id: "a".to_string(),
                    value: 1.0
                },
                Record {
                    id: "b".to_string(),
                    value: 2.5
                },
            ]
        );
    }

    #[test]
    fn test_read_csv_bad_number() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("records.csv");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "id,value\na,not_a_number").unwrap();
        }

        assert!(read_csv::<Record>(&file_path).is_err());
    }

    #[test]
    fn test_read_csv_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_csv::<Record>(&dir.path().join("nope.csv")).is_err());
    }
}
