use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::glazing::{self, MaterialEntry};
use crate::i18n::{keys, Translator};
use crate::input::{CalculationInput, CalculationReport};
use crate::units::{convert_area, convert_irradiance, convert_power, AreaUnit, IrradianceUnit, PowerUnit};

const BAR_WIDTH: usize = 40;

/// 재료 목록을 메뉴 번호(id) 순으로 출력한다.
pub fn print_materials(tr: &Translator) {
    println!("{}", tr.t(keys::MATERIAL_LIST_HEADING));
    for m in glazing::materials() {
        println!("{}) {} (τ = {:.2})", m.id, m.name, m.transmittance);
    }
}

/// 면적/일사량/재료/보호층을 차례로 입력받는다. 수치는 SI로 환산해 반환한다.
pub fn prompt_case(
    tr: &Translator,
    cfg: &Config,
) -> Result<(&'static MaterialEntry, CalculationInput), AppError> {
    let units = &cfg.default_units;
    let area = read_non_negative(
        tr,
        &tr.tf(keys::PROMPT_AREA, &[("unit", units.area.symbol().to_string())]),
    )?;
    let irradiance = read_non_negative(
        tr,
        &tr.tf(
            keys::PROMPT_IRRADIANCE,
            &[("unit", units.irradiance.symbol().to_string())],
        ),
    )?;

    print_materials(tr);
    let material = loop {
        let sel = read_line(&tr.t(keys::PROMPT_MATERIAL))?;
        match glazing::find_by_code(&sel) {
            Some(m) => break m,
            None => println!("{}", tr.t(keys::ERROR_UNKNOWN_MATERIAL)),
        }
    };

    let mut input = CalculationInput::new(
        convert_area(area, units.area, AreaUnit::SquareMeter),
        convert_irradiance(irradiance, units.irradiance, IrradianceUnit::WattPerSquareMeter),
        material.transmittance,
    );
    if let Some(layer) = read_optional_coefficient(tr, &tr.t(keys::PROMPT_LAYER))? {
        input = input.with_layer(layer);
    }
    Ok((material, input))
}

/// 결과를 설정된 파워 단위로 출력한다.
pub fn print_report(
    tr: &Translator,
    cfg: &Config,
    material: &MaterialEntry,
    input: &CalculationInput,
    report: &CalculationReport,
) {
    let unit = cfg.default_units.power;
    let p = |w: f64| format!("{:.2} {}", convert_power(w, PowerUnit::Watt, unit), unit.symbol());

    println!("{}", tr.t(keys::RESULT_HEADING));
    println!("{} {}", tr.t(keys::RESULT_MATERIAL), material.name);
    println!("{} {}", tr.t(keys::RESULT_ABSORBED), p(report.base.absorbed_w));
    println!("{} {}", tr.t(keys::RESULT_TRANSMITTED), p(report.base.transmitted_w));

    let mut bars = vec![
        (tr.t(keys::RESULT_ABSORBED), report.base.absorbed_w),
        (tr.t(keys::RESULT_TRANSMITTED), report.base.transmitted_w),
    ];

    if let (Some(layer), Some(g), Some(reduction)) = (
        report.with_layer,
        report.attenuated_irradiance_w_m2,
        report.reduction_percent,
    ) {
        let g_unit = cfg.default_units.irradiance;
        println!("{}", tr.t(keys::RESULT_LAYER_HEADING));
        if let Some(a) = input.layer_absorption {
            println!(
                "{}",
                tr.tf(keys::RESULT_LAYER_ABSORPTION, &[("value", format!("{a:.3}"))])
            );
        }
        println!(
            "{} {:.2} {}",
            tr.t(keys::RESULT_ATTENUATED),
            convert_irradiance(g, IrradianceUnit::WattPerSquareMeter, g_unit),
            g_unit.symbol()
        );
        println!("{} {}", tr.t(keys::RESULT_ABSORBED), p(layer.absorbed_w));
        println!("{} {}", tr.t(keys::RESULT_TRANSMITTED), p(layer.transmitted_w));
        println!("{} {:.1} %", tr.t(keys::RESULT_REDUCTION), reduction);
        let suffix = tr.t(keys::CHART_LAYER_SUFFIX);
        bars.push((format!("{}{suffix}", tr.t(keys::RESULT_ABSORBED)), layer.absorbed_w));
        bars.push((format!("{}{suffix}", tr.t(keys::RESULT_TRANSMITTED)), layer.transmitted_w));
    }

    println!("{}", tr.t(keys::CHART_HEADING));
    for line in text_bars(&bars) {
        println!("{line}");
    }
}

/// 가장 큰 값을 BAR_WIDTH 칸으로 두고 막대를 그린다.
pub fn text_bars(rows: &[(String, f64)]) -> Vec<String> {
    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_w = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, v)| {
            let n = if max > 0.0 {
                ((v / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let pad = label_w - label.chars().count();
            format!("{label}{} |{} {v:.0}", " ".repeat(pad), "█".repeat(n))
        })
        .collect()
}

pub fn ask_again(tr: &Translator) -> Result<bool, AppError> {
    let ans = read_line(&tr.t(keys::PROMPT_AGAIN))?;
    Ok(matches!(ans.trim().to_lowercase().as_str(), "y" | "yes" | "예" | "ㅇ"))
}

pub fn read_label(tr: &Translator, default: String) -> Result<String, AppError> {
    let s = read_line(&tr.t(keys::PROMPT_LABEL))?;
    let s = s.trim();
    Ok(if s.is_empty() { default } else { s.to_string() })
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf.trim().to_string())
}

fn read_non_negative(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => return Ok(v),
            Ok(v) => println!("{} {v}", tr.t(keys::ERROR_OUT_OF_RANGE)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_optional_coefficient(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) if (0.0..=1.0).contains(&v) => return Ok(Some(v)),
            Ok(v) => println!("{} {v}", tr.t(keys::ERROR_OUT_OF_RANGE)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
