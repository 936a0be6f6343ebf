//! Unit tests for reconcile_helpers module

#[cfg(test)]
mod tests {
    use crate::error::ControllerError;
    use crate::reconcile_helpers::*;
    use crate::test_utils::*;
    use bigip_client::{ObjectName, ResourcePath};
    use bigip_modules::ValueKind;
    use bigip_modules::ltm::pool::{POOL, POOL_MEMBER};
    use bigip_modules::ltm::virtual_server::VIRTUAL;
    use bigip_modules::net::vlan::{INTERFACE, TRUNK};
    use bigip_modules::sys::db::DB;
    use bigip_modules::sys::settings::NTP;
    use serde_json::json;

    #[test]
    fn test_object_name_parsing() {
        assert_eq!(object_name("web", "Common"), ObjectName::partitioned("web", "Common"));
        assert_eq!(object_name("/Tenant/web", "Common"), ObjectName::partitioned("web", "Tenant"));
        assert_eq!(
            object_name("/Tenant/app/web", "Common"),
            ObjectName::partitioned("app/web", "Tenant")
        );
    }

    #[test]
    fn test_resource_path_per_kind() {
        let pool = resource_path(&POOL, &params(&POOL, json!({"name": "web", "partition": "Tenant"}))).unwrap();
        assert_eq!(pool.uri(), "/mgmt/tm/ltm/pool/~Tenant~web");

        let member = resource_path(
            &POOL_MEMBER,
            &params(&POOL_MEMBER, json!({"name": "10.0.0.1:80", "pool": "web"})),
        )
        .unwrap();
        assert_eq!(member.uri(), "/mgmt/tm/ltm/pool/~Common~web/members/~Common~10.0.0.1%3A80");

        let ntp = resource_path(&NTP, &params(&NTP, json!({}))).unwrap();
        assert_eq!(ntp.uri(), "/mgmt/tm/sys/ntp");

        let db = resource_path(&DB, &params(&DB, json!({"name": "ui.advisory.enabled", "value": "true"}))).unwrap();
        assert_eq!(db.uri(), "/mgmt/tm/sys/db/ui.advisory.enabled");

        let trunk = resource_path(&TRUNK, &params(&TRUNK, json!({"name": "uplink"}))).unwrap();
        assert_eq!(trunk.uri(), "/mgmt/tm/net/trunk/uplink");
    }

    #[test]
    fn test_desired_state_maps_names_and_references() {
        let p = params(
            &VIRTUAL,
            json!({
                "name": "vs",
                "destination": "10.0.0.10:443",
                "pool": "web",
                "profiles": ["http", "/Common/tcp"],
                "description": "front end",
            }),
        );
        let desired = desired_state(&VIRTUAL, &p);
        assert_eq!(desired["destination"], json!("/Common/10.0.0.10:443"));
        assert_eq!(desired["pool"], json!("/Common/web"));
        assert_eq!(desired["profiles"], json!(["/Common/http", "/Common/tcp"]));
        assert_eq!(desired["description"], json!("front end"));
        for excluded in ["name", "partition", "state", "f5_hostname", "f5_password"] {
            assert!(!desired.contains_key(excluded), "{} leaked into desired state", excluded);
        }
    }

    #[test]
    fn test_desired_state_renames_attributes() {
        let p = params(
            &POOL_MEMBER,
            json!({"name": "10.0.0.1:80", "pool": "web", "session_state": "user-disabled", "member_state": "user-down"}),
        );
        let desired = desired_state(&POOL_MEMBER, &p);
        assert_eq!(desired["session"], json!("user-disabled"));
        assert_eq!(desired["state"], json!("user-down"));
        // The parent is part of the path, not an attribute
        assert!(!desired.contains_key("pool"));
    }

    #[test]
    fn test_desired_state_flag_counterpart() {
        let p = params(&VIRTUAL, json!({"name": "vs", "destination": "10.0.0.10:80", "enabled": false}));
        let desired = desired_state(&VIRTUAL, &p);
        assert_eq!(desired.get("disabled"), Some(&json!(true)));
        assert!(!desired.contains_key("enabled"));

        let p = params(&INTERFACE, json!({"name": "1.1", "disabled": true}));
        let desired = desired_state(&INTERFACE, &p);
        assert_eq!(desired.get("disabled"), Some(&json!(true)));
    }

    #[test]
    fn test_values_match_loose_scalars() {
        assert!(values_match(&json!(5), Some(&json!("5")), ValueKind::Plain));
        assert!(values_match(&json!(true), Some(&json!("true")), ValueKind::Plain));
        assert!(!values_match(&json!("round-robin"), Some(&json!("ratio-member")), ValueKind::Plain));
    }

    #[test]
    fn test_values_match_missing_equals_empty() {
        assert!(values_match(&json!(""), None, ValueKind::Plain));
        assert!(values_match(&json!([]), None, ValueKind::Plain));
        assert!(values_match(&json!(false), None, ValueKind::Plain));
        assert!(!values_match(&json!("x"), None, ValueKind::Plain));
        assert!(!values_match(&json!(0), None, ValueKind::Plain));
    }

    #[test]
    fn test_values_match_reference_list_ignores_order() {
        let want = json!(["/Common/v1", "/Common/v2"]);
        assert!(values_match(&want, Some(&json!(["/Common/v2", "/Common/v1"])), ValueKind::ReferenceList));
        assert!(!values_match(&want, Some(&json!(["/Common/v1"])), ValueKind::ReferenceList));
        // Plain lists stay ordered
        assert!(!values_match(&want, Some(&json!(["/Common/v2", "/Common/v1"])), ValueKind::Plain));
    }

    #[test]
    fn test_values_match_dict_subset() {
        let want = json!({"name": "app.example.com"});
        let have = json!({"name": "app.example.com", "autopopulate": "disabled", "interval": "3600"});
        assert!(values_match(&want, Some(&have), ValueKind::Plain));
        assert!(!values_match(&json!({"name": "other"}), Some(&have), ValueKind::Plain));
    }

    #[test]
    fn test_diff_returns_only_changed() {
        let remote = remote_object(
            &ResourcePath::named("ltm/pool", ObjectName::partitioned("web", "Common")),
            json!({"loadBalancingMode": "round-robin", "slowRampTime": 10, "description": "old"}),
        );
        let desired = json!({"loadBalancingMode": "round-robin", "slowRampTime": "10", "description": "new"});
        let changes = diff(&POOL, desired.as_object().unwrap(), &remote);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes["description"], json!("new"));
    }

    #[test]
    fn test_diff_flag_against_counterpart() {
        let remote = remote_object(
            &ResourcePath::named("ltm/virtual", ObjectName::partitioned("vs", "Common")),
            json!({"enabled": true, "destination": "/Common/10.0.0.10:80"}),
        );
        let desired = json!({"disabled": true, "destination": "/Common/10.0.0.10:80"});
        let changes = diff(&VIRTUAL, desired.as_object().unwrap(), &remote);
        assert_eq!(changes.keys().collect::<Vec<_>>(), vec!["disabled"]);
        assert_eq!(value_kind_of(&VIRTUAL, "disabled"), ValueKind::Flag { counterpart: Some("enabled") });
    }

    #[test]
    fn test_check_create_only() {
        let path = ResourcePath::named("ltm/node", ObjectName::partitioned("n1", "Common"));
        let remote = remote_object(&path, json!({"address": "10.0.0.1"}));
        let changes = json!({"address": "10.0.0.2"});
        let err = check_create_only(&bigip_modules::ltm::pool::NODE, &path, changes.as_object().unwrap(), &remote)
            .unwrap_err();
        match err {
            ControllerError::ImmutableAttribute { object, attribute, current, desired } => {
                assert_eq!(object, "/Common/n1");
                assert_eq!(attribute, "address");
                assert_eq!(current, "10.0.0.1");
                assert_eq!(desired, "10.0.0.2");
            }
            other => panic!("unexpected error: {}", other),
        }

        let unrelated = json!({"description": "x"});
        assert!(check_create_only(&bigip_modules::ltm::pool::NODE, &path, unrelated.as_object().unwrap(), &remote).is_ok());
    }

    #[test]
    fn test_reportable_changes_use_param_names() {
        let changes = json!({"session": "user-disabled", "disabled": true, "description": "x"});
        let reported = reportable_changes(&POOL_MEMBER, changes.as_object().unwrap());
        assert_eq!(reported["session_state"], json!("user-disabled"));
        assert_eq!(reported["description"], json!("x"));

        let reported = reportable_changes(&VIRTUAL, json!({"disabled": true}).as_object().unwrap());
        assert_eq!(reported["disabled"], json!(true));
    }

    #[test]
    fn test_current_values_fill_null() {
        let remote = remote_object(
            &ResourcePath::unnamed("sys/ntp"),
            json!({"servers": ["0.pool.ntp.org"]}),
        );
        let touched = json!({"servers": [], "timezone": "UTC"});
        let before = current_values(touched.as_object().unwrap(), &remote);
        assert_eq!(before["servers"], json!(["0.pool.ntp.org"]));
        assert_eq!(before["timezone"], json!(null));
    }

    #[test]
    fn test_monitor_rule_is_qualified() {
        assert_eq!(qualify_monitor_rule("Common", &json!("http")), json!("/Common/http"));
        assert_eq!(
            qualify_monitor_rule("Tenant", &json!("http and  /Common/tcp")),
            json!("/Tenant/http and /Common/tcp")
        );
        assert_eq!(
            qualify_monitor_rule("Common", &json!("min 1 of { http tcp }")),
            json!("min 1 of { /Common/http /Common/tcp }")
        );
        assert_eq!(qualify_monitor_rule("Common", &json!("default")), json!("default"));

        let p = params(&POOL, json!({"name": "web", "monitor": "http"}));
        assert_eq!(desired_state(&POOL, &p)["monitor"], json!("/Common/http"));
    }

    #[test]
    fn test_monitor_rule_ignores_device_padding() {
        let kind = ValueKind::MonitorRule;
        assert!(values_match(&json!("/Common/http"), Some(&json!("/Common/http ")), kind));
        assert!(values_match(
            &json!("/Common/http and /Common/tcp"),
            Some(&json!("/Common/http and /Common/tcp ")),
            kind
        ));
        assert!(!values_match(&json!("/Common/http"), Some(&json!("/Common/https ")), kind));
        assert!(values_match(&json!("none"), None, kind));
    }
}
