//! 흡수/투과 계산 성질 및 예제 값 회귀 테스트.
use solar_glazing_toolbox::glazing::{
    absorbed, attenuated_irradiance, calculate, reduction_percent, transmitted,
};

fn assert_close(label: &str, actual: f64, expected: f64, abs_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= abs_tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {abs_tol})"
    );
}

const TAUS: [f64; 6] = [0.0, 0.1, 0.3, 0.55, 0.85, 1.0];
const IRRADIANCES: [f64; 4] = [0.0, 150.0, 800.0, 1_120.5];
const AREAS: [f64; 4] = [0.0, 0.5, 2.0, 37.25];

#[test]
fn energy_split_sums_to_incident_power() {
    for tau in TAUS {
        for g in IRRADIANCES {
            for a in AREAS {
                let total = absorbed(tau, g, a) + transmitted(tau, g, a);
                assert_close("split", total, g * a, 1e-9 * (g * a).max(1.0));
            }
        }
    }
}

#[test]
fn transmittance_bounds() {
    for g in IRRADIANCES {
        for a in AREAS {
            assert_eq!(transmitted(0.0, g, a), 0.0);
            assert_close("t(1)", transmitted(1.0, g, a), g * a, 1e-12);
            assert_eq!(absorbed(1.0, g, a), 0.0);
            assert_close("a(0)", absorbed(0.0, g, a), g * a, 1e-12);
        }
    }
}

#[test]
fn attenuation_limits() {
    for g in IRRADIANCES {
        assert_eq!(attenuated_irradiance(g, 0.0), g);
        assert_eq!(attenuated_irradiance(g, 1.0), 0.0);
    }
}

#[test]
fn reduction_guard_on_zero_base() {
    assert_eq!(reduction_percent(0.0, 0.0), 0.0);
    assert_eq!(reduction_percent(0.0, 123.0), 0.0);
}

#[test]
fn layer_absorption_never_increases_transmitted() {
    let (tau, g, a) = (0.6, 800.0, 2.0);
    let mut prev = f64::INFINITY;
    for step in 0..=20 {
        let layer = step as f64 / 20.0;
        let t = transmitted(tau, attenuated_irradiance(g, layer), a);
        assert!(t <= prev, "layer={layer} t={t} prev={prev}");
        prev = t;
    }
}

#[test]
fn worked_example_without_layer() {
    let r = calculate(0.6, 800.0, 2.0);
    assert_close("absorbed", r.absorbed_w, 640.0, 1e-9);
    assert_close("transmitted", r.transmitted_w, 960.0, 1e-9);
}

#[test]
fn worked_example_with_layer() {
    let g = attenuated_irradiance(800.0, 0.5);
    assert_close("G'", g, 400.0, 1e-12);
    assert_close("absorbed", absorbed(0.6, g, 2.0), 320.0, 1e-9);
    let t = transmitted(0.6, g, 2.0);
    assert_close("transmitted", t, 480.0, 1e-9);
    assert_close("reduction", reduction_percent(960.0, t), 50.0, 1e-9);
}

#[test]
fn repeated_calls_are_identical() {
    let first = calculate(0.45, 640.0, 3.0);
    for _ in 0..3 {
        assert_eq!(calculate(0.45, 640.0, 3.0), first);
    }
}
