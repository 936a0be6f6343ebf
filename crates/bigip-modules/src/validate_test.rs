//! Unit tests for parameter validation

#[cfg(test)]
mod tests {
    use crate::error::ParamError;
    use crate::ltm::pool::{NODE, POOL, POOL_MEMBER};
    use crate::ltm::virtual_server::VIRTUAL;
    use crate::net::route::ROUTE;
    use crate::spec::ParamSpec;
    use crate::sys::settings::NTP;
    use crate::validate::{coerce, validate_with_env, NO_LOG_PLACEHOLDER};
    use serde_json::{json, Map, Value};

    fn args(value: Value) -> Map<String, Value> {
        let mut map = json!({
            "f5_hostname": "bigip.example.com",
            "f5_username": "admin",
            "f5_password": "secret",
        })
        .as_object()
        .cloned()
        .unwrap();
        map.extend(value.as_object().cloned().unwrap());
        map
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_are_filled() {
        let params = validate_with_env(&POOL, &args(json!({"name": "web"})), no_env).unwrap();
        assert_eq!(params.get_str("partition"), Some("Common"));
        assert_eq!(params.get_str("state"), Some("present"));
        assert_eq!(params.get_i64("f5_port"), Some(443));
        assert_eq!(params.get_bool("f5_validate_certs"), Some(true));
        // Parameters without value or default are left out
        assert!(!params.contains("description"));
    }

    #[test]
    fn test_unsupported_parameters_rejected() {
        let err = validate_with_env(&POOL, &args(json!({"name": "web", "zeta": 1, "alpha": 2})), no_env)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported parameters for (bigip_ltm_pool) module: alpha, zeta"
        );
    }

    #[test]
    fn test_ansible_internal_keys_ignored() {
        let raw = args(json!({"name": "web", "_ansible_check_mode": true, "_ansible_diff": false}));
        let params = validate_with_env(&POOL, &raw, no_env).unwrap();
        assert!(!params.contains("_ansible_check_mode"));
    }

    #[test]
    fn test_missing_required_arguments() {
        let raw = json!({"name": "web"}).as_object().cloned().unwrap();
        let err = validate_with_env(&POOL, &raw, no_env).unwrap_err();
        assert_eq!(
            err,
            ParamError::Missing(vec![
                "f5_hostname".to_string(),
                "f5_username".to_string(),
                "f5_password".to_string(),
            ])
        );
    }

    #[test]
    fn test_env_fallback_for_provider() {
        let raw = json!({"name": "web"}).as_object().cloned().unwrap();
        let env = |var: &str| match var {
            "F5_HOSTNAME" => Some("10.1.1.4".to_string()),
            "F5_USERNAME" => Some("admin".to_string()),
            "F5_PASSWORD" => Some("secret".to_string()),
            "F5_PORT" => Some("8443".to_string()),
            "F5_VALIDATE_CERTS" => Some("no".to_string()),
            _ => None,
        };
        let params = validate_with_env(&POOL, &raw, env).unwrap();
        assert_eq!(params.get_str("f5_hostname"), Some("10.1.1.4"));
        assert_eq!(params.get_i64("f5_port"), Some(8443));
        assert_eq!(params.get_bool("f5_validate_certs"), Some(false));
    }

    #[test]
    fn test_explicit_argument_wins_over_env() {
        let env = |var: &str| (var == "F5_HOSTNAME").then(|| "from-env".to_string());
        let params = validate_with_env(&POOL, &args(json!({"name": "web"})), env).unwrap();
        assert_eq!(params.get_str("f5_hostname"), Some("bigip.example.com"));
    }

    #[test]
    fn test_invalid_choice() {
        let err = validate_with_env(
            &POOL,
            &args(json!({"name": "web", "load_balancing_mode": "random"})),
            no_env,
        )
        .unwrap_err();
        assert!(matches!(err, ParamError::InvalidChoice { ref name, .. } if name == "load_balancing_mode"));
        assert!(err.to_string().starts_with("value of load_balancing_mode must be one of: "));
        assert!(err.to_string().ends_with(", got: random"));
    }

    #[test]
    fn test_yaml_boolean_maps_to_choice_word() {
        let params = validate_with_env(
            &POOL,
            &args(json!({"name": "web", "allow_nat": true, "ignore_persisted_weight": false})),
            no_env,
        )
        .unwrap();
        assert_eq!(params.get_str("allow_nat"), Some("yes"));
        assert_eq!(params.get_str("ignore_persisted_weight"), Some("disabled"));
    }

    #[test]
    fn test_int_coerced_from_string() {
        let params = validate_with_env(
            &POOL,
            &args(json!({"name": "web", "slow_ramp_time": "10"})),
            no_env,
        )
        .unwrap();
        assert_eq!(params.get("slow_ramp_time"), Some(&json!(10)));
    }

    #[test]
    fn test_int_rejects_garbage() {
        let err = validate_with_env(
            &POOL,
            &args(json!({"name": "web", "slow_ramp_time": "ten"})),
            no_env,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument slow_ramp_time is of type str and we were unable to convert to int"
        );
    }

    #[test]
    fn test_coerce_bool_spellings() {
        let flag = ParamSpec::bool("enabled");
        for truthy in [json!("yes"), json!("on"), json!("True"), json!(1), json!("1")] {
            assert_eq!(coerce(&flag, truthy).unwrap(), json!(true));
        }
        for falsy in [json!("no"), json!("off"), json!("false"), json!(0)] {
            assert_eq!(coerce(&flag, falsy).unwrap(), json!(false));
        }
        assert!(coerce(&flag, json!("maybe")).is_err());
    }

    #[test]
    fn test_coerce_list_from_string_and_scalar() {
        let list = ParamSpec::list("servers");
        assert_eq!(
            coerce(&list, json!("0.pool.ntp.org, 1.pool.ntp.org")).unwrap(),
            json!(["0.pool.ntp.org", "1.pool.ntp.org"])
        );
        assert_eq!(coerce(&list, json!(5)).unwrap(), json!([5]));
    }

    #[test]
    fn test_coerce_dict_from_key_value_string() {
        let dict = ParamSpec::dict("fqdn");
        assert_eq!(
            coerce(&dict, json!("name=app.example.com, autopopulate=enabled")).unwrap(),
            json!({"name": "app.example.com", "autopopulate": "enabled"})
        );
        assert_eq!(
            coerce(&dict, json!("{\"name\": \"app.example.com\"}")).unwrap(),
            json!({"name": "app.example.com"})
        );
        assert!(coerce(&dict, json!("not a dict")).is_err());
    }

    #[test]
    fn test_mutually_exclusive_rejected() {
        let err = validate_with_env(
            &VIRTUAL,
            &args(json!({"name": "vs", "destination": "10.0.0.10:443", "enabled": true, "disabled": true})),
            no_env,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "parameters are mutually exclusive: enabled|disabled");
    }

    #[test]
    fn test_mutually_exclusive_group_of_four() {
        let err = validate_with_env(
            &ROUTE,
            &args(json!({"name": "default", "network": "default", "gw": "10.0.0.1", "blackhole": true})),
            no_env,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParamError::MutuallyExclusive(vec![
                "gw".to_string(),
                "pool".to_string(),
                "tm_interface".to_string(),
                "blackhole".to_string(),
            ])
        );
    }

    #[test]
    fn test_mutually_exclusive_counts_given_keys() {
        // Any given value counts, including false and empty ones
        for blackhole in [json!(false), json!(true)] {
            let err = validate_with_env(
                &ROUTE,
                &args(json!({"name": "r1", "network": "10.1.0.0/16", "gw": "10.0.0.1", "blackhole": blackhole})),
                no_env,
            )
            .unwrap_err();
            assert!(matches!(err, ParamError::MutuallyExclusive(_)));
        }

        let err = validate_with_env(
            &ROUTE,
            &args(json!({"name": "r1", "network": "10.1.0.0/16", "gw": "10.0.0.1", "pool": ""})),
            no_env,
        )
        .unwrap_err();
        assert!(matches!(err, ParamError::MutuallyExclusive(_)));

        let params = validate_with_env(
            &ROUTE,
            &args(json!({"name": "r1", "network": "10.1.0.0/16", "gw": "10.0.0.1"})),
            no_env,
        )
        .unwrap();
        assert_eq!(params.get_str("gw"), Some("10.0.0.1"));
    }

    #[test]
    fn test_mutually_exclusive_ignores_null() {
        let params = validate_with_env(
            &NODE,
            &args(json!({"name": "n1", "address": "10.0.0.1", "fqdn": null})),
            no_env,
        )
        .unwrap();
        assert_eq!(params.get_str("address"), Some("10.0.0.1"));
    }

    #[test]
    fn test_required_if_present() {
        let err = validate_with_env(&VIRTUAL, &args(json!({"name": "vs"})), no_env).unwrap_err();
        assert_eq!(
            err.to_string(),
            "state is present but all of the following are missing: destination"
        );

        // Removal does not need the destination
        let params = validate_with_env(&VIRTUAL, &args(json!({"name": "vs", "state": "absent"})), no_env);
        assert!(params.is_ok());
    }

    #[test]
    fn test_child_requires_parent() {
        let err = validate_with_env(&POOL_MEMBER, &args(json!({"name": "10.0.0.1:80"})), no_env).unwrap_err();
        assert_eq!(err, ParamError::Missing(vec!["pool".to_string()]));
    }

    #[test]
    fn test_unnamed_module_rejects_name() {
        let err = validate_with_env(&NTP, &args(json!({"name": "ntp"})), no_env).unwrap_err();
        assert!(matches!(err, ParamError::Unsupported { .. }));
    }

    #[test]
    fn test_masked_json_hides_no_log() {
        let params = validate_with_env(&POOL, &args(json!({"name": "web"})), no_env).unwrap();
        let masked = params.to_masked_json(&POOL);
        assert_eq!(masked["f5_password"], json!(NO_LOG_PLACEHOLDER));
        assert_eq!(masked["f5_username"], json!("admin"));
        assert_eq!(masked["name"], json!("web"));
    }
}
