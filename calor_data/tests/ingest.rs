// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end ingestion of documents shaped like the published dataset.

use calor_data::{Dataset, DatasetError, MalformedDatasetError, RawDataset};

const EXCERPT: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    { "year": 1753, "month": 1, "variance": -1.366 },
    { "year": 1753, "month": 2, "variance": -2.223 },
    { "year": 1753, "month": 3, "variance": 0.211 },
    { "year": 2015, "month": 9, "variance": 1.104 }
  ]
}"#;

#[test]
fn excerpt_is_normalized() {
    let dataset = Dataset::from_json_str(EXCERPT).unwrap();
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.base_value(), 8.66);

    let extent = dataset.extent();
    assert_eq!((extent.first_year, extent.last_year), (1753, 2015));
    assert_eq!(extent.year_span(), 263);
    assert!((extent.min_value - (8.66 - 2.223)).abs() < 1e-12);
    assert!((extent.max_value - (8.66 + 1.104)).abs() < 1e-12);

    let sep = dataset.sample(2015, 9).unwrap();
    assert!((sep.absolute(dataset.base_value()) - 9.764).abs() < 1e-12);
}

#[test]
fn pre_parsed_documents_are_accepted() {
    let raw: RawDataset = serde_json::from_str(EXCERPT).unwrap();
    assert_eq!(
        Dataset::from_raw(raw).unwrap(),
        Dataset::from_json_str(EXCERPT).unwrap()
    );
}

#[test]
fn unknown_fields_are_ignored() {
    let doc = r#"{"baseTemperature": 1.0, "source": "x",
        "monthlyVariance": [{"year": 1900, "month": 2, "variance": 0.0, "note": "ok"}]}"#;
    assert_eq!(Dataset::from_json_str(doc).unwrap().len(), 1);
}

#[test]
fn null_variance_is_a_missing_field() {
    let doc = r#"{"baseTemperature": 1.0,
        "monthlyVariance": [{"year": 1900, "month": 2, "variance": null}]}"#;
    assert!(matches!(
        Dataset::from_json_str(doc),
        Err(DatasetError::Malformed(MalformedDatasetError::MissingField {
            index: 0,
            field: "variance"
        }))
    ));
}
