//! 면적/일사량/파워 단위 변환 테스트.
use solar_glazing_toolbox::units::{
    convert_area, convert_irradiance, convert_power, AreaUnit, IrradianceUnit, PowerUnit,
};

#[test]
fn square_meter_to_square_foot() {
    let ft2 = convert_area(1.0, AreaUnit::SquareMeter, AreaUnit::SquareFoot);
    assert!((ft2 - 10.763_910_4).abs() < 1e-6, "ft2={ft2}");
}

#[test]
fn irradiance_btu_conversion() {
    // 1000 W/m² ≈ 317 Btu/(h·ft²)
    let btu = convert_irradiance(
        1000.0,
        IrradianceUnit::WattPerSquareMeter,
        IrradianceUnit::BtuPerHourSquareFoot,
    );
    assert!((btu - 317.0).abs() < 0.1, "btu={btu}");
}

#[test]
fn power_kw_and_btu() {
    assert!((convert_power(960.0, PowerUnit::Watt, PowerUnit::Kilowatt) - 0.96).abs() < 1e-12);
    let btu_h = convert_power(1000.0, PowerUnit::Watt, PowerUnit::BtuPerHour);
    assert!((btu_h - 3412.14).abs() < 0.01, "btu_h={btu_h}");
}

#[test]
fn parse_symbols() {
    assert_eq!(AreaUnit::parse("ft2"), Some(AreaUnit::SquareFoot));
    assert_eq!(
        IrradianceUnit::parse("W/m2"),
        Some(IrradianceUnit::WattPerSquareMeter)
    );
    assert_eq!(PowerUnit::parse("kW"), Some(PowerUnit::Kilowatt));
    assert_eq!(PowerUnit::parse("hp"), None);
}
