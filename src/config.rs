use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

const CONFIG_FILE: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI (m², W/m², W). 내부 계산 기준.
    SI,
    /// 영국식 (ft², Btu/h·ft², Btu/h)
    Imperial,
}

/// 각 물리량별 표시 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub area: AreaUnit,
    pub irradiance: IrradianceUnit,
    pub power: PowerUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::SI)
    }
}

impl DefaultUnits {
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::SI => Self {
                area: AreaUnit::SquareMeter,
                irradiance: IrradianceUnit::WattPerSquareMeter,
                power: PowerUnit::Watt,
            },
            UnitSystem::Imperial => Self {
                area: AreaUnit::SquareFoot,
                irradiance: IrradianceUnit::BtuPerHourSquareFoot,
                power: PowerUnit::BtuPerHour,
            },
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto", "ko", "en-us" 등
    pub language: String,
    pub language_pack_dir: Option<String>,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    pub default_area_m2: f64,
    pub default_irradiance_w_m2: f64,
    pub default_material_id: u32,
    pub default_layer_absorption: f64,
    /// CSV 내보내기 기본 폴더
    pub export_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            unit_system: UnitSystem::SI,
            default_units: DefaultUnits::default(),
            default_area_m2: 1.0,
            default_irradiance_w_m2: 800.0,
            default_material_id: 1,
            default_layer_absorption: 0.5,
            export_dir: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// 지정 경로에서 로드한다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 단위 시스템을 바꾸고 표시 단위도 프리셋으로 맞춘다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("solar_glazing_{}_{name}", std::process::id()))
    }

    #[test]
    fn missing_file_writes_defaults() {
        let path = temp_path("missing.toml");
        let _ = fs::remove_file(&path);
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = temp_path("roundtrip.toml");
        let mut cfg = Config::default();
        cfg.language = "ko".into();
        cfg.apply_unit_system(UnitSystem::Imperial);
        cfg.default_material_id = 3;
        cfg.save_to(&path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.default_units.area, AreaUnit::SquareFoot);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("language = \"en-us\"").unwrap();
        assert_eq!(cfg.language, "en-us");
        assert_eq!(cfg.default_irradiance_w_m2, 800.0);
    }
}
