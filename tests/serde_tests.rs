#![cfg(feature = "serde-serialize")]

use spring_softness::{SolverConfig, SpringSettings};

#[test]
fn spring_settings_round_trip() {
    let spring: SpringSettings<f32> = SpringSettings::new()
        .with_stiffness(1234.0)
        .with_error_reduction(0.3);
    let json = serde_json::to_string(&spring).unwrap();
    let back: SpringSettings<f32> = serde_json::from_str(&json).unwrap();
    assert_eq!(spring, back);
}

#[test]
fn loading_reclamps_fields() {
    let json = r#"{"stiffness":-5.0,"damping":10.0,"error_reduction":3.0,"softness":-1.0,"use_advanced":true}"#;
    let spring: SpringSettings<f64> = serde_json::from_str(json).unwrap();
    assert_eq!(spring.stiffness(), 0.0);
    assert_eq!(spring.damping(), 10.0);
    assert_eq!(spring.advanced().error_reduction(), 1.0);
    assert_eq!(spring.advanced().softness(), 0.0);
    assert!(spring.uses_advanced());
}

#[test]
fn solver_config_round_trip() {
    let config: SolverConfig<f64> = SolverConfig::new().with_sub_steps(3);
    let json = serde_json::to_string(&config).unwrap();
    let back: SolverConfig<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
