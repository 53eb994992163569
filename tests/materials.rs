//! 재료 테이블 조회 테스트.
use solar_glazing_toolbox::glazing::{
    find_by_code, find_material, materials, transmittance_of, CatalogError,
};

#[test]
fn every_transmittance_is_a_fraction() {
    for m in materials() {
        assert!(
            (0.0..=1.0).contains(&m.transmittance),
            "{} has τ = {}",
            m.name,
            m.transmittance
        );
    }
}

#[test]
fn ids_are_unique_and_listing_is_stable() {
    let first: Vec<u32> = materials().iter().map(|m| m.id).collect();
    let second: Vec<u32> = materials().iter().map(|m| m.id).collect();
    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), first.len());
    assert_eq!(first, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn lookup_by_id() {
    assert_eq!(transmittance_of(3), Ok(0.55));
    assert_eq!(find_material(1).map(|m| m.code), Some("clear"));
}

#[test]
fn unknown_id_fails() {
    assert_eq!(
        transmittance_of(42),
        Err(CatalogError::UnknownMaterial("42".into()))
    );
    assert!(find_material(0).is_none());
}

#[test]
fn lookup_by_code_name_or_number() {
    assert_eq!(find_by_code("LOW-E").map(|m| m.id), Some(3));
    assert_eq!(find_by_code("Tinted glass (bronze)").map(|m| m.id), Some(4));
    assert_eq!(find_by_code(" 2 ").map(|m| m.id), Some(2));
    assert!(find_by_code("nonexistent-id").is_none());
}
