use serde::{Deserialize, Serialize};

/// 일사량(단위 면적당 일사 파워) 단위. 내부 기준은 W/m²이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrradianceUnit {
    WattPerSquareMeter,
    BtuPerHourSquareFoot,
}

// 1 Btu/(h·ft²) = 3.154591 W/m²
const W_M2_PER_BTU_H_FT2: f64 = 3.154_591;

impl IrradianceUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            IrradianceUnit::WattPerSquareMeter => "W/m²",
            IrradianceUnit::BtuPerHourSquareFoot => "Btu/h·ft²",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(' ', "").as_str() {
            "w/m2" | "w/m²" => Some(IrradianceUnit::WattPerSquareMeter),
            "btu/hft2" | "btu/h·ft²" | "btu/h-ft2" | "btu/(h·ft2)" => {
                Some(IrradianceUnit::BtuPerHourSquareFoot)
            }
            _ => None,
        }
    }
}

fn to_w_per_m2(value: f64, unit: IrradianceUnit) -> f64 {
    match unit {
        IrradianceUnit::WattPerSquareMeter => value,
        IrradianceUnit::BtuPerHourSquareFoot => value * W_M2_PER_BTU_H_FT2,
    }
}

fn from_w_per_m2(value: f64, unit: IrradianceUnit) -> f64 {
    match unit {
        IrradianceUnit::WattPerSquareMeter => value,
        IrradianceUnit::BtuPerHourSquareFoot => value / W_M2_PER_BTU_H_FT2,
    }
}

/// 일사량을 변환한다.
pub fn convert_irradiance(value: f64, from: IrradianceUnit, to: IrradianceUnit) -> f64 {
    let w = to_w_per_m2(value, from);
    from_w_per_m2(w, to)
}
