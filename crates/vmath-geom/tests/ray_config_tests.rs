// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use vmath_core::Vec3;
use vmath_geom::{Interval, Ray, RayConfig, Sphere};

#[test]
fn config_loads_from_json() {
    let raw = r#"{ "ambient_ior": 1.33, "initial_energy": 0.75 }"#;
    let config: RayConfig = serde_json::from_str(raw).expect("valid ray config");
    assert_eq!(
        config,
        RayConfig {
            ambient_ior: 1.33,
            initial_energy: 0.75
        }
    );
    let ray = Ray::with_config(Vec3::ZERO, Vec3::UNIT_X, &config);
    assert_eq!(ray.ior, 1.33);
    assert_eq!(ray.energy, 0.75);
}

#[test]
fn missing_fields_take_defaults() {
    let config: RayConfig = serde_json::from_str(r#"{ "ambient_ior": 1.5 }"#).expect("partial config");
    assert_eq!(config.ambient_ior, 1.5);
    assert_eq!(config.initial_energy, RayConfig::default().initial_energy);

    let empty: RayConfig = serde_json::from_str("{}").expect("empty config");
    assert_eq!(empty, RayConfig::default());
}

#[test]
fn scene_values_round_trip_through_json() {
    let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 0.5);
    let json = serde_json::to_string(&sphere).expect("serialize sphere");
    let back: Sphere = serde_json::from_str(&json).expect("deserialize sphere");
    assert_eq!(back, sphere);

    let window: Interval = serde_json::from_str(r#"{ "min": 0.0, "max": 2.0 }"#).expect("interval");
    assert!(window.contains(1.0));
}
