use std::path::PathBuf;

use clap::Parser;
use solar_glazing_toolbox::units::{AreaUnit, IrradianceUnit, PowerUnit};
use solar_glazing_toolbox::{app, config, i18n, ui_cli};

/// 유리 일사 흡수/투과 계산기 (CLI)
#[derive(Debug, Parser)]
#[command(name = "solar_glazing_cli", version, about)]
struct Cli {
    /// Window area in the area unit; with --irradiance and --material runs one calculation and exits
    #[arg(long, requires_all = ["irradiance", "material"])]
    area: Option<f64>,
    /// Solar irradiance in the irradiance unit
    #[arg(long, requires = "area")]
    irradiance: Option<f64>,
    /// Material id or code (see --list-materials)
    #[arg(long, requires = "area")]
    material: Option<String>,
    /// Extra protective layer absorption, 0-1
    #[arg(long, requires = "area")]
    layer: Option<f64>,
    /// Case label written to CSV
    #[arg(long, requires = "area")]
    label: Option<String>,
    /// Area unit (m2, ft2); overrides config
    #[arg(long, value_parser = parse_area_unit)]
    area_unit: Option<AreaUnit>,
    /// Irradiance unit (W/m2, Btu/h-ft2); overrides config
    #[arg(long, value_parser = parse_irradiance_unit)]
    irradiance_unit: Option<IrradianceUnit>,
    /// Power unit for results (W, kW, Btu/h); overrides config
    #[arg(long, value_parser = parse_power_unit)]
    power_unit: Option<PowerUnit>,
    /// CSV file: one-shot mode appends, interactive mode writes all cases on exit
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Print the material table and exit
    #[arg(long)]
    list_materials: bool,
    /// Language (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정과 언어를 결정한 뒤 CLI를 실행한다.
fn main() {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default().unwrap_or_else(|e| {
        eprintln!("{e}; using defaults");
        config::Config::default()
    });
    apply_unit_overrides(&cli, &mut cfg.default_units);
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    if let Err(err) = try_run(&cli, &cfg, &tr) {
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli, cfg: &config::Config, tr: &i18n::Translator) -> Result<(), app::AppError> {
    if cli.list_materials {
        ui_cli::print_materials(tr);
        return Ok(());
    }
    if let (Some(area), Some(irradiance), Some(material)) =
        (cli.area, cli.irradiance, cli.material.as_ref())
    {
        let req = app::OneShot {
            area,
            irradiance,
            material: material.clone(),
            layer_absorption: cli.layer,
            label: cli.label.clone(),
            csv: cli.csv.clone(),
        };
        app::run_once(cfg, tr, &req)?;
        return Ok(());
    }
    app::run(cfg, tr, cli.csv.as_deref())
}

/// 플래그로 받은 단위가 있으면 설정의 기본 단위를 이번 실행에 한해 덮어쓴다.
fn apply_unit_overrides(cli: &Cli, units: &mut config::DefaultUnits) {
    if let Some(u) = cli.area_unit {
        units.area = u;
    }
    if let Some(u) = cli.irradiance_unit {
        units.irradiance = u;
    }
    if let Some(u) = cli.power_unit {
        units.power = u;
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, String> {
    AreaUnit::parse(s).ok_or_else(|| format!("unknown area unit: {s} (m2, ft2)"))
}

fn parse_irradiance_unit(s: &str) -> Result<IrradianceUnit, String> {
    IrradianceUnit::parse(s).ok_or_else(|| format!("unknown irradiance unit: {s} (W/m2, Btu/h-ft2)"))
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, String> {
    PowerUnit::parse(s).ok_or_else(|| format!("unknown power unit: {s} (W, kW, Btu/h)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_without_area_is_rejected() {
        assert!(Cli::try_parse_from(["solar_glazing_cli", "--layer", "0.5"]).is_err());
        assert!(Cli::try_parse_from(["solar_glazing_cli", "--label", "south"]).is_err());
    }

    #[test]
    fn one_shot_flags_parse_together() {
        let cli = Cli::try_parse_from([
            "solar_glazing_cli",
            "--area",
            "2",
            "--irradiance",
            "800",
            "--material",
            "low-e",
            "--layer",
            "0.5",
            "--label",
            "south",
        ])
        .unwrap();
        assert_eq!(cli.layer, Some(0.5));
        assert_eq!(cli.label.as_deref(), Some("south"));
    }

    #[test]
    fn unit_flags_override_config_units() {
        let cli = Cli::try_parse_from([
            "solar_glazing_cli",
            "--area-unit",
            "ft2",
            "--power-unit",
            "kW",
        ])
        .unwrap();
        let mut units = config::DefaultUnits::for_system(config::UnitSystem::SI);
        apply_unit_overrides(&cli, &mut units);
        assert_eq!(units.area, AreaUnit::SquareFoot);
        assert_eq!(units.irradiance, IrradianceUnit::WattPerSquareMeter);
        assert_eq!(units.power, PowerUnit::Kilowatt);
    }

    #[test]
    fn unknown_unit_is_rejected() {
        assert!(Cli::try_parse_from(["solar_glazing_cli", "--power-unit", "hp"]).is_err());
    }
}
