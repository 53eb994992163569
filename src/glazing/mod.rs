//! 유리 재료 테이블과 일사 흡수/투과 계산.

pub mod materials;
pub mod radiation;

pub use materials::{
    find_by_code, find_material, materials, transmittance_of, CatalogError, MaterialEntry,
};
pub use radiation::{
    absorbed, attenuated_irradiance, calculate, reduction_percent, transmitted, CalculationResult,
};
