//! 입력 검증과 보고서 생성. 계산 코어는 범위를 검사하지 않으므로 CLI/GUI는 이 계층을 거친다.

use crate::glazing::{self, CalculationResult};

/// 한 번의 계산에 필요한 입력 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    /// 창 면적 [m²]
    pub area_m2: f64,
    /// 일사량 [W/m²]
    pub irradiance_w_m2: f64,
    /// 유리 투과율 τ
    pub transmittance: f64,
    /// 추가 보호층 흡수율 (없으면 None)
    pub layer_absorption: Option<f64>,
}

/// 기본 결과와 (있다면) 보호층 적용 결과를 함께 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationReport {
    pub base: CalculationResult,
    pub attenuated_irradiance_w_m2: Option<f64>,
    pub with_layer: Option<CalculationResult>,
    pub reduction_percent: Option<f64>,
}

/// 입력 범위 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// 0~1 범위를 벗어난 계수 (투과율, 보호층 흡수율)
    InvalidCoefficient { field: &'static str, value: f64 },
    /// 음수 입력
    Negative { field: &'static str, value: f64 },
    /// NaN/무한대
    NotFinite { field: &'static str },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::InvalidCoefficient { field, value } => {
                write!(f, "{field} must be within [0, 1] (got {value})")
            }
            InputError::Negative { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            InputError::NotFinite { field } => write!(f, "{field} is not a finite number"),
        }
    }
}

impl std::error::Error for InputError {}

impl CalculationInput {
    pub fn new(area_m2: f64, irradiance_w_m2: f64, transmittance: f64) -> Self {
        Self {
            area_m2,
            irradiance_w_m2,
            transmittance,
            layer_absorption: None,
        }
    }

    pub fn with_layer(mut self, layer_absorption: f64) -> Self {
        self.layer_absorption = Some(layer_absorption);
        self
    }

    /// 면적/일사량은 0 이상, 계수는 [0, 1] 범위인지 확인한다.
    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("area", self.area_m2)?;
        non_negative("irradiance", self.irradiance_w_m2)?;
        coefficient("transmittance", self.transmittance)?;
        if let Some(a) = self.layer_absorption {
            coefficient("layer_absorption", a)?;
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

fn coefficient(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(InputError::InvalidCoefficient { field, value });
    }
    Ok(())
}

/// 입력을 검증한 뒤 기본/보호층 결과와 감소율을 계산한다.
pub fn evaluate(input: &CalculationInput) -> Result<CalculationReport, InputError> {
    input.validate()?;
    let base = glazing::calculate(input.transmittance, input.irradiance_w_m2, input.area_m2);
    let Some(layer) = input.layer_absorption else {
        return Ok(CalculationReport {
            base,
            attenuated_irradiance_w_m2: None,
            with_layer: None,
            reduction_percent: None,
        });
    };
    let g_layer = glazing::attenuated_irradiance(input.irradiance_w_m2, layer);
    let with_layer = glazing::calculate(input.transmittance, g_layer, input.area_m2);
    let reduction = glazing::reduction_percent(base.transmitted_w, with_layer.transmitted_w);
    Ok(CalculationReport {
        base,
        attenuated_irradiance_w_m2: Some(g_layer),
        with_layer: Some(with_layer),
        reduction_percent: Some(reduction),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_with_layer_matches_worked_example() {
        let report = evaluate(&CalculationInput::new(2.0, 800.0, 0.6).with_layer(0.5)).unwrap();
        assert!((report.base.transmitted_w - 960.0).abs() < 1e-9);
        assert!((report.attenuated_irradiance_w_m2.unwrap() - 400.0).abs() < 1e-9);
        let layer = report.with_layer.unwrap();
        assert!((layer.absorbed_w - 320.0).abs() < 1e-9);
        assert!((layer.transmitted_w - 480.0).abs() < 1e-9);
        assert!((report.reduction_percent.unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn evaluate_without_layer_leaves_layer_fields_empty() {
        let report = evaluate(&CalculationInput::new(1.0, 800.0, 0.85)).unwrap();
        assert!(report.with_layer.is_none());
        assert!(report.reduction_percent.is_none());
    }

    #[test]
    fn rejects_out_of_range_coefficients() {
        let err = CalculationInput::new(1.0, 800.0, 1.2).validate().unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidCoefficient {
                field: "transmittance",
                value: 1.2
            }
        );
        let err = CalculationInput::new(1.0, 800.0, 0.5)
            .with_layer(-0.1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, InputError::InvalidCoefficient { field: "layer_absorption", .. }));
    }

    #[test]
    fn rejects_negative_and_nan_inputs() {
        assert!(matches!(
            CalculationInput::new(-1.0, 800.0, 0.5).validate(),
            Err(InputError::Negative { field: "area", .. })
        ));
        assert!(matches!(
            CalculationInput::new(1.0, f64::NAN, 0.5).validate(),
            Err(InputError::NotFinite { field: "irradiance" })
        ));
    }

    #[test]
    fn zero_area_is_accepted() {
        let report = evaluate(&CalculationInput::new(0.0, 800.0, 0.5)).unwrap();
        assert_eq!(report.base.absorbed_w, 0.0);
        assert_eq!(report.base.transmitted_w, 0.0);
    }
}
