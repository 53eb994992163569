//! 유리를 통한 일사 흡수/투과량 계산.
//!
//! 반사 항은 따로 두지 않으며 투과되지 않은 에너지는 모두 흡수된 것으로 본다.
//! τ, 보호층 흡수율의 범위 검증은 호출 측(입력 계층) 책임이다.

/// 계산 결과 [W].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub absorbed_w: f64,
    pub transmitted_w: f64,
}

/// 흡수량 = (1 - τ) · G · A
pub fn absorbed(transmittance: f64, irradiance_w_m2: f64, area_m2: f64) -> f64 {
    (1.0 - transmittance) * irradiance_w_m2 * area_m2
}

/// 투과량 = τ · G · A
pub fn transmitted(transmittance: f64, irradiance_w_m2: f64, area_m2: f64) -> f64 {
    transmittance * irradiance_w_m2 * area_m2
}

/// 보호층을 통과한 뒤 남는 일사량 [W/m²].
pub fn attenuated_irradiance(irradiance_w_m2: f64, layer_absorption: f64) -> f64 {
    (1.0 - layer_absorption) * irradiance_w_m2
}

/// 보호층 추가에 따른 투과량 감소율 [%]. 기준 투과량이 0이면 0을 반환한다.
pub fn reduction_percent(transmitted_base_w: f64, transmitted_with_layer_w: f64) -> f64 {
    if transmitted_base_w > 0.0 {
        100.0 * (1.0 - transmitted_with_layer_w / transmitted_base_w)
    } else {
        0.0
    }
}

pub fn calculate(transmittance: f64, irradiance_w_m2: f64, area_m2: f64) -> CalculationResult {
    CalculationResult {
        absorbed_w: absorbed(transmittance, irradiance_w_m2, area_m2),
        transmitted_w: transmitted(transmittance, irradiance_w_m2, area_m2),
    }
}
