use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::glazing::{self, CatalogError};
use crate::i18n::{keys, Translator};
use crate::input::{self, CalculationInput, InputError};
use crate::session::{self, CaseSession, SavedCase, SessionError};
use crate::ui_cli;
use crate::units::{convert_area, convert_irradiance, AreaUnit, IrradianceUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 재료 조회 오류
    Catalog(CatalogError),
    /// 입력 범위 오류
    Input(InputError),
    /// CSV 저장 오류
    Session(SessionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Catalog(e) => write!(f, "{e}"),
            AppError::Input(e) => write!(f, "invalid input: {e}"),
            AppError::Session(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        AppError::Catalog(value)
    }
}

impl From<InputError> for AppError {
    fn from(value: InputError) -> Self {
        AppError::Input(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        AppError::Session(value)
    }
}

/// 플래그로 모든 값을 받은 단발성 계산 요청. 면적/일사량은 설정된 표시 단위 기준이다.
#[derive(Debug, Clone)]
pub struct OneShot {
    pub area: f64,
    pub irradiance: f64,
    /// 재료 id 또는 코드
    pub material: String,
    pub layer_absorption: Option<f64>,
    pub label: Option<String>,
    pub csv: Option<PathBuf>,
}

/// 대화형 CLI 루프를 실행한다. csv 경로가 있으면 종료 시 세션 전체를 저장한다.
pub fn run(config: &Config, tr: &Translator, csv: Option<&Path>) -> Result<(), AppError> {
    let mut session = CaseSession::new();
    println!("{}", tr.t(keys::CLI_TITLE));
    loop {
        let (material, input) = ui_cli::prompt_case(tr, config)?;
        let report = input::evaluate(&input)?;
        ui_cli::print_report(tr, config, material, &input, &report);

        if csv.is_some() {
            let label = ui_cli::read_label(tr, session.next_default_label())?;
            session.push(SavedCase {
                label,
                material_name: material.name.to_string(),
                input,
                report,
            });
        }
        if !ui_cli::ask_again(tr)? {
            break;
        }
    }
    if let Some(path) = csv {
        session.write_csv(path)?;
        println!("{} {}", tr.t(keys::CSV_APPENDED), path.display());
    }
    println!("{}", tr.t(keys::APP_EXIT));
    Ok(())
}

/// 단발성 계산을 수행해 결과를 출력하고 저장된 케이스를 반환한다.
pub fn run_once(config: &Config, tr: &Translator, req: &OneShot) -> Result<SavedCase, AppError> {
    let material = glazing::find_by_code(&req.material)
        .ok_or_else(|| CatalogError::UnknownMaterial(req.material.clone()))?;
    let units = &config.default_units;
    let mut input = CalculationInput::new(
        convert_area(req.area, units.area, AreaUnit::SquareMeter),
        convert_irradiance(req.irradiance, units.irradiance, IrradianceUnit::WattPerSquareMeter),
        glazing::transmittance_of(material.id)?,
    );
    if let Some(layer) = req.layer_absorption {
        input = input.with_layer(layer);
    }
    let report = input::evaluate(&input)?;
    ui_cli::print_report(tr, config, material, &input, &report);

    let case = SavedCase {
        label: req.label.clone().unwrap_or_else(|| session::default_label(1)),
        material_name: material.name.to_string(),
        input,
        report,
    };
    if let Some(path) = &req.csv {
        session::append_case_csv(path, &case)?;
        println!("{} {}", tr.t(keys::CSV_APPENDED), path.display());
    }
    Ok(case)
}
