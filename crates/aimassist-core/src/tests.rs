#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::config::*;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AimDiagnostic;
    use crate::types::EntityId;

    #[test]
    fn test_cone_enabled_when_consistent() {
        let cone = ConeSettings::new(5.0, 200.0, 10f32.to_radians(), 2.5f32.to_radians());
        assert!(cone.enabled);
        assert_eq!(cone.min_distance_sq(), 25.0);
        assert_eq!(cone.max_distance_sq(), 40_000.0);
    }

    #[test]
    fn test_cone_disabled_when_inner_exceeds_outer() {
        let cone = ConeSettings::new(5.0, 200.0, 0.1, 0.2);
        assert!(!cone.enabled, "inner > outer must disable the cone");
    }

    #[test]
    fn test_cone_disabled_when_range_empty() {
        assert!(!ConeSettings::new(50.0, 50.0, 0.2, 0.1).enabled);
        assert!(!ConeSettings::new(80.0, 50.0, 0.2, 0.1).enabled);
    }

    #[test]
    fn test_cone_equal_angles_still_enabled() {
        // outer == inner is allowed
        assert!(ConeSettings::new(0.0, 10.0, 0.3, 0.3).enabled);
    }

    #[test]
    fn test_cone_clamps_out_of_range_values() {
        let cone = ConeSettings::new(-3.0, 100.0, 4.0, -1.0);
        assert_eq!(cone.min_distance, 0.0);
        assert_eq!(cone.outer_half_angle, PI);
        assert_eq!(cone.inner_half_angle, 0.0);
        assert!(cone.enabled);
    }

    #[test]
    fn test_cone_non_finite_is_disabled() {
        let cone = ConeSettings::new(0.0, f32::NAN, 0.2, 0.1);
        assert!(!cone.enabled);
        let cone = ConeSettings::new(0.0, f32::INFINITY, 0.2, 0.1);
        assert!(!cone.enabled);
    }

    #[test]
    fn test_from_params_converts_degrees() {
        let cone = ConeSettings::from_params(&ConeParams::default());
        assert!((cone.outer_half_angle - DEFAULT_OUTER_HALF_ANGLE_DEG.to_radians()).abs() < 1e-7);
        assert!((cone.inner_half_angle - DEFAULT_INNER_HALF_ANGLE_DEG.to_radians()).abs() < 1e-7);
        assert!(cone.enabled);
    }

    #[test]
    fn test_off_params_produce_disabled_cone() {
        assert!(!ConeSettings::from_params(&ConeParams::off()).enabled);
    }

    #[test]
    fn test_cone_set_selects_by_zoom() {
        let params = AutoAimParams {
            zoomed: ConeParams::off(),
            ..Default::default()
        };
        let cones = params.cone_set();
        assert!(cones.select(false).enabled);
        assert!(!cones.select(true).enabled);
        assert_eq!(cones.for_state(AimState::Normal), &cones.normal);
        assert!(cones.any_enabled());

        let none = AutoAimParams {
            normal: ConeParams::off(),
            zoomed: ConeParams::off(),
            ..Default::default()
        };
        assert!(!none.cone_set().any_enabled());
    }

    #[test]
    fn test_params_from_json_defaults_missing_fields() {
        let json = r#"{ "normal": { "max_distance": 120.0 }, "cone_weight": 3.0 }"#;
        let params = AutoAimParams::from_json(json).unwrap();
        assert_eq!(params.normal.max_distance, 120.0);
        assert_eq!(params.normal.min_distance, DEFAULT_MIN_DISTANCE);
        assert_eq!(params.cone_weight, 3.0);
        assert_eq!(params.distance_weight, DEFAULT_DISTANCE_WEIGHT);
        assert_eq!(params.zoomed, ConeParams::zoomed());
        assert_eq!(params.visibility_budget, DEFAULT_VISIBILITY_BUDGET);
        assert!(!params.suppress_with_manual_target);
    }

    #[test]
    fn test_params_from_empty_object_is_default() {
        let params = AutoAimParams::from_json("{}").unwrap();
        assert_eq!(params, AutoAimParams::default());
    }

    #[test]
    fn test_params_malformed_json_is_error() {
        let err = AutoAimParams::from_json("{ \"normal\": ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("malformed auto-aim params"));
    }

    #[test]
    fn test_params_missing_file_is_io_error() {
        let err = AutoAimParams::load(std::path::Path::new("/nonexistent/autoaim.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_json_cone_loads_as_disabled() {
        let json = r#"{ "normal": { "outer_half_angle_deg": 1.0, "inner_half_angle_deg": 5.0 } }"#;
        let params = AutoAimParams::from_json(json).unwrap();
        let cones = params.cone_set();
        assert!(!cones.normal.enabled);
        assert!(cones.zoomed.enabled);
    }

    #[test]
    fn test_diagnostic_is_tagged() {
        let event = AimDiagnostic::CandidateRejected {
            id: EntityId(7),
            reason: RejectReason::NotVisible,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"CandidateRejected\""), "{json}");
        let back: AimDiagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_aim_state_from_zoomed() {
        assert_eq!(AimState::from_zoomed(true), AimState::Zoomed);
        assert_eq!(AimState::from_zoomed(false), AimState::Normal);
    }
}
