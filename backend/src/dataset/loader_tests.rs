use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to create a temp CSV file
fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

const HEADER: &str = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n";

#[test]
fn test_load_launch_records_basic() {
    let csv = format!(
        "{}1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n2,VAFB SLC-4E,1,500,F9 v1.1  B1003,v1.1\n",
        HEADER
    );
    let file = create_temp_csv(&csv);

    let records = load_launch_records(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].launch_site.as_str(), "CCAFS LC-40");
    assert_eq!(records[0].class, OutcomeClass::Failure);
    assert_eq!(records[0].payload_mass_kg, 0.0);
    assert_eq!(records[1].launch_site.as_str(), "VAFB SLC-4E");
    assert_eq!(records[1].payload_mass_kg, 500.0);
    assert_eq!(records[1].class, OutcomeClass::Success);
    assert_eq!(records[1].booster_version.as_str(), "F9 v1.1  B1003");
}

#[test]
fn test_integer_payload_column_is_accepted() {
    // No decimal point anywhere: Polars infers i64, the loader casts to f64
    let csv = "Launch Site,Payload Mass (kg),class,Booster Version\nA,2500,1,v1\nB,9600,0,v2\n";
    let file = create_temp_csv(csv);

    let records = load_launch_records(file.path()).unwrap();
    assert_eq!(records[1].payload_mass_kg, 9600.0);
}

#[test]
fn test_missing_file() {
    let err = load_launch_records(Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::NotFound(_)));
}

#[test]
fn test_missing_column() {
    let csv = "Launch Site,class,Booster Version\nA,1,v1\n";
    let file = create_temp_csv(csv);

    let err = load_launch_records(file.path()).unwrap_err();
    match err {
        DatasetError::MissingColumn(name) => assert_eq!(name, PAYLOAD_MASS_COLUMN),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_class_value() {
    let csv = "Launch Site,Payload Mass (kg),class,Booster Version\nA,100,1,v1\nA,200,2,v1\n";
    let file = create_temp_csv(csv);

    let err = load_launch_records(file.path()).unwrap_err();
    match err {
        DatasetError::InvalidValue { row, column, .. } => {
            assert_eq!(row, 1);
            assert_eq!(column, CLASS_COLUMN);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_negative_payload_rejected() {
    let csv = "Launch Site,Payload Mass (kg),class,Booster Version\nA,-5.5,1,v1\n";
    let file = create_temp_csv(csv);

    let err = load_launch_records(file.path()).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidValue { row: 0, .. }));
}

#[test]
fn test_empty_payload_cell_rejected() {
    let csv = "Launch Site,Payload Mass (kg),class,Booster Version\nA,100.0,1,v1\nB,,0,v2\n";
    let file = create_temp_csv(csv);

    let err = load_launch_records(file.path()).unwrap_err();
    match err {
        DatasetError::InvalidValue { row, column, .. } => {
            assert_eq!(row, 1);
            assert_eq!(column, PAYLOAD_MASS_COLUMN);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_header_only_yields_no_records() {
    let csv = "Launch Site,Payload Mass (kg),class,Booster Version\n";
    let file = create_temp_csv(csv);

    let records = load_launch_records(file.path()).unwrap();
    assert!(records.is_empty());
}
