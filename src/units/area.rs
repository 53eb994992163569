use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
}

const M2_PER_FT2: f64 = 0.092_903_04;

impl AreaUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareFoot => "ft²",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m2" | "m²" | "sqm" => Some(AreaUnit::SquareMeter),
            "ft2" | "ft²" | "sqft" => Some(AreaUnit::SquareFoot),
            _ => None,
        }
    }
}

fn to_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareFoot => value * M2_PER_FT2,
    }
}

fn from_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareFoot => value / M2_PER_FT2,
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let m2 = to_square_meter(value, from);
    from_square_meter(m2, to)
}
