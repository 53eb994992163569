//! 선택 가능한 유리(글레이징) 재료와 일사 투과율 테이블.
//! 값은 교육용 대표치이며 실제 설계 시 제조사 데이터로 검증해야 한다.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialEntry {
    /// 메뉴 번호로도 쓰이는 고유 키
    pub id: u32,
    pub code: &'static str,
    pub name: &'static str,
    /// 투과율 τ (0~1)
    pub transmittance: f64,
}

/// 재료 조회 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// 테이블에 없는 재료 키
    UnknownMaterial(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::UnknownMaterial(id) => write!(f, "unknown material: {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// 정의 순서대로 전체 재료 목록을 반환한다.
pub fn materials() -> &'static [MaterialEntry] {
    MATERIALS
}

pub fn find_material(id: u32) -> Option<&'static MaterialEntry> {
    MATERIALS.iter().find(|m| m.id == id)
}

/// 코드 또는 표시 이름으로 찾는다 (대소문자 무시). 숫자 문자열은 id로 해석한다.
pub fn find_by_code(code: &str) -> Option<&'static MaterialEntry> {
    let code = code.trim();
    if let Ok(id) = code.parse::<u32>() {
        return find_material(id);
    }
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

/// id에 해당하는 투과율을 반환한다.
pub fn transmittance_of(id: u32) -> Result<f64, CatalogError> {
    find_material(id)
        .map(|m| m.transmittance)
        .ok_or_else(|| CatalogError::UnknownMaterial(id.to_string()))
}

const MATERIALS: &[MaterialEntry] = &[
    entry(1, "clear", "Clear float glass (single)", 0.85),
    entry(2, "double", "Double glazing (clear)", 0.70),
    entry(3, "low-e", "Low-E double glazing", 0.55),
    entry(4, "tinted", "Tinted glass (bronze)", 0.45),
    entry(5, "reflective", "Reflective coated glass", 0.30),
    entry(6, "polycarbonate", "Polycarbonate sheet", 0.80),
];

const fn entry(id: u32, code: &'static str, name: &'static str, transmittance: f64) -> MaterialEntry {
    MaterialEntry {
        id,
        code,
        name,
        transmittance,
    }
}
