use pretty_assertions::assert_eq;
use serde_json::json;
use uiconfig_model::{ConditionOperator, DeviceGroup, DeviceGroupCondition};
use uiconfig_types::ETag;

fn chillers() -> DeviceGroup {
    DeviceGroup::new(
        "Chillers",
        vec![DeviceGroupCondition {
            key: "properties.reported.Type".to_string(),
            operator: ConditionOperator::Eq,
            value: json!("Chiller"),
        }],
    )
}

#[test]
fn stored_payload_has_no_identity() {
    let group = chillers()
        .with_identity("g1", ETag::new("e1"))
        .without_identity();
    let value = serde_json::to_value(&group).unwrap();
    assert_eq!(
        value,
        json!({
            "DisplayName": "Chillers",
            "Conditions": [
                {"Key": "properties.reported.Type", "Operator": "EQ", "Value": "Chiller"}
            ]
        })
    );
}

#[test]
fn with_identity_sets_id_and_etag() {
    let group = chillers().with_identity("g1", ETag::new("e1"));
    assert_eq!(group.id, "g1");
    assert_eq!(group.etag, Some(ETag::new("e1")));
}

#[test]
fn null_conditions_deserialize_empty() {
    let group: DeviceGroup =
        serde_json::from_str(r#"{"Id":null,"DisplayName":"All","Conditions":null}"#).unwrap();
    assert!(group.conditions.is_empty());
    assert_eq!(group.id, "");
}

#[test]
fn conditions_keep_order() {
    let group: DeviceGroup = serde_json::from_str(
        r#"{"DisplayName":"x","Conditions":[
            {"Key":"b","Operator":"GT","Value":1},
            {"Key":"a","Operator":"IN","Value":["x","y"]}
        ]}"#,
    )
    .unwrap();
    let keys: Vec<&str> = group.conditions.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(group.conditions[1].operator, ConditionOperator::In);
}

#[test]
fn unknown_operator_is_rejected() {
    let result: Result<DeviceGroup, _> = serde_json::from_str(
        r#"{"DisplayName":"x","Conditions":[{"Key":"a","Operator":"LIKE","Value":1}]}"#,
    );
    assert!(result.is_err());
}

#[test]
fn operator_display() {
    assert_eq!(ConditionOperator::Ge.to_string(), "GE");
    assert_eq!(
        serde_json::to_string(&ConditionOperator::Ne).unwrap(),
        "\"NE\""
    );
}
