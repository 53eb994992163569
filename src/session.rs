//! 세션 단위 저장 케이스 목록과 CSV 내보내기. 프로세스 종료 시 함께 사라진다.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::input::{CalculationInput, CalculationReport};

/// 내보내기 파일의 첫 줄.
pub const CSV_HEADER: &str = "label,material,transmittance,area_m2,irradiance_w_m2,layer_absorption,absorbed_w,transmitted_w,absorbed_layer_w,transmitted_layer_w,reduction_pct";

/// 입력/결과 한 쌍의 스냅샷.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedCase {
    pub label: String,
    pub material_name: String,
    pub input: CalculationInput,
    pub report: CalculationReport,
}

/// CSV 저장 오류.
#[derive(Debug)]
pub enum SessionError {
    /// 파일 입출력 오류
    Io(std::io::Error),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "CSV write failed: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        SessionError::Io(value)
    }
}

/// 저장된 케이스를 순서대로 보관한다. 창(세션)마다 하나씩 소유한다.
#[derive(Debug, Clone, Default)]
pub struct CaseSession {
    cases: Vec<SavedCase>,
}

impl CaseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, case: SavedCase) {
        self.cases.push(case);
    }

    /// index 위치의 케이스를 삭제한다. 범위를 벗어나면 아무것도 하지 않는다.
    pub fn remove(&mut self, index: usize) -> Option<SavedCase> {
        if index < self.cases.len() {
            Some(self.cases.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.cases.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedCase> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// 다음 케이스에 쓸 기본 라벨 ("Case n").
    pub fn next_default_label(&self) -> String {
        default_label(self.cases.len() + 1)
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(CSV_HEADER);
        out.push('\n');
        for case in &self.cases {
            out.push_str(&csv_row(case));
            out.push('\n');
        }
        out
    }

    pub fn write_csv(&self, path: &Path) -> Result<(), SessionError> {
        fs::write(path, self.to_csv())?;
        Ok(())
    }
}

/// 기존 CSV 파일 끝에 한 케이스를 덧붙인다. 파일이 없거나 비어 있으면 헤더부터 쓴다.
pub fn append_case_csv(path: &Path, case: &SavedCase) -> Result<(), SessionError> {
    use std::io::Write;

    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let mut f = fs::OpenOptions::new().create(true).append(true).open(path)?;
    if needs_header {
        writeln!(f, "{CSV_HEADER}")?;
    }
    writeln!(f, "{}", csv_row(case))?;
    Ok(())
}

pub fn default_label(n: usize) -> String {
    format!("Case {n}")
}

/// 헤더 없이 한 줄만 만든다. 기존 파일에 덧붙일 때도 쓴다.
/// 수치는 반올림하지 않고 다시 읽으면 같은 f64가 되는 최단 표기로 쓴다.
pub fn csv_row(case: &SavedCase) -> String {
    let input = &case.input;
    let report = &case.report;
    let mut row = String::new();
    let _ = write!(
        row,
        "{},{},{},{},{},",
        csv_field(&case.label),
        csv_field(&case.material_name),
        input.transmittance,
        input.area_m2,
        input.irradiance_w_m2,
    );
    if let Some(a) = input.layer_absorption {
        let _ = write!(row, "{a}");
    }
    let _ = write!(
        row,
        ",{},{},",
        report.base.absorbed_w, report.base.transmitted_w
    );
    match report.with_layer {
        Some(l) => {
            let _ = write!(row, "{},{},", l.absorbed_w, l.transmitted_w);
        }
        None => row.push_str(",,"),
    }
    if let Some(r) = report.reduction_percent {
        let _ = write!(row, "{r}");
    }
    row
}

/// 쉼표/따옴표/줄바꿈이 있으면 따옴표로 감싸고 내부 따옴표는 두 번 쓴다.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
