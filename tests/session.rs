//! 저장 케이스 목록과 CSV 내보내기 테스트.
use solar_glazing_toolbox::input::{evaluate, CalculationInput};
use solar_glazing_toolbox::session::{
    append_case_csv, default_label, CaseSession, SavedCase, CSV_HEADER,
};

fn case(label: &str, input: CalculationInput) -> SavedCase {
    SavedCase {
        label: label.to_string(),
        material_name: "Low-E double glazing".to_string(),
        report: evaluate(&input).expect("valid input"),
        input,
    }
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("solar_glazing_{}_{name}", std::process::id()))
}

#[test]
fn push_and_remove_by_index_keeps_order() {
    let mut s = CaseSession::new();
    s.push(case("a", CalculationInput::new(1.0, 800.0, 0.6)));
    s.push(case("b", CalculationInput::new(2.0, 800.0, 0.6)));
    s.push(case("c", CalculationInput::new(3.0, 800.0, 0.6)));
    let removed = s.remove(1).expect("index 1 exists");
    assert_eq!(removed.label, "b");
    let labels: Vec<_> = s.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["a", "c"]);
    assert!(s.remove(5).is_none());
    assert_eq!(s.len(), 2);
    s.clear();
    assert!(s.is_empty());
}

#[test]
fn default_labels_count_from_one() {
    let mut s = CaseSession::new();
    assert_eq!(s.next_default_label(), "Case 1");
    s.push(case("x", CalculationInput::new(1.0, 800.0, 0.6)));
    assert_eq!(s.next_default_label(), "Case 2");
    assert_eq!(default_label(7), "Case 7");
}

#[test]
fn csv_rows_with_and_without_layer() {
    let mut s = CaseSession::new();
    s.push(case("base", CalculationInput::new(2.0, 800.0, 0.6)));
    s.push(case(
        "with layer",
        CalculationInput::new(2.0, 800.0, 0.6).with_layer(0.5),
    ));
    let csv = s.to_csv();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(
        lines[1],
        "base,Low-E double glazing,0.6,2,800,,640,960,,,"
    );
    assert_eq!(
        lines[2],
        "with layer,Low-E double glazing,0.6,2,800,0.5,640,960,320,480,50"
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn csv_keeps_small_values_unrounded() {
    let input = CalculationInput::new(0.004, 1.234_56, 0.5555).with_layer(0.123_45);
    let saved = case("small", input);
    let mut s = CaseSession::new();
    s.push(saved.clone());
    let csv = s.to_csv();
    let row = csv.lines().nth(1).unwrap();
    let fields: Vec<f64> = row
        .split(',')
        .skip(2)
        .map(|f| f.parse().expect("numeric column"))
        .collect();
    let layer = saved.report.with_layer.unwrap();
    assert_eq!(
        fields,
        vec![
            0.5555,
            0.004,
            1.234_56,
            0.123_45,
            saved.report.base.absorbed_w,
            saved.report.base.transmitted_w,
            layer.absorbed_w,
            layer.transmitted_w,
            saved.report.reduction_percent.unwrap(),
        ]
    );
    assert!(fields[4] > 0.0 && fields[4] < 0.01);
}

#[test]
fn csv_quotes_labels_with_separators() {
    let mut s = CaseSession::new();
    s.push(case("south, \"big\"", CalculationInput::new(1.0, 100.0, 0.5)));
    let csv = s.to_csv();
    assert!(csv.lines().nth(1).unwrap().starts_with("\"south, \"\"big\"\"\","));
}

#[test]
fn write_and_append_csv_files() {
    let path = temp_path("cases.csv");
    let _ = std::fs::remove_file(&path);

    let mut s = CaseSession::new();
    s.push(case("one", CalculationInput::new(1.0, 800.0, 0.6)));
    s.write_csv(&path).unwrap();
    append_case_csv(&path, &case("two", CalculationInput::new(1.0, 800.0, 0.6))).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.iter().filter(|l| **l == CSV_HEADER).count(), 1);
    assert!(lines[2].starts_with("two,"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn append_to_missing_file_writes_header() {
    let path = temp_path("append_new.csv");
    let _ = std::fs::remove_file(&path);
    append_case_csv(&path, &case("solo", CalculationInput::new(1.0, 800.0, 0.6))).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(CSV_HEADER));
    let _ = std::fs::remove_file(&path);
}
