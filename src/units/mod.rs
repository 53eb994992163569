//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod irradiance;
pub mod power;

pub use area::{convert_area, AreaUnit};
pub use irradiance::{convert_irradiance, IrradianceUnit};
pub use power::{convert_power, PowerUnit};
