use serde::{Deserialize, Serialize};

/// 열/일사 파워 단위. 내부 기준은 와트(W)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    BtuPerHour,
}

const W_PER_BTU_H: f64 = 0.293_071_07;

impl PowerUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::BtuPerHour => "Btu/h",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "w" => Some(PowerUnit::Watt),
            "kw" => Some(PowerUnit::Kilowatt),
            "btu/h" | "btuh" => Some(PowerUnit::BtuPerHour),
            _ => None,
        }
    }
}

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::BtuPerHour => value * W_PER_BTU_H,
    }
}

fn from_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value / 1000.0,
        PowerUnit::BtuPerHour => value / W_PER_BTU_H,
    }
}

/// 파워를 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let w = to_watt(value, from);
    from_watt(w, to)
}
