use pretty_assertions::assert_eq;
use serde_json::json;
use uiconfig_model::{Logo, Theme, UserSetting, AZURE_MAPS_KEY_FIELD};

// ── Theme ────────────────────────────────────────────────────────

#[test]
fn default_theme_has_name_and_description() {
    let theme = Theme::default();
    assert_eq!(theme.name(), Some(Theme::DEFAULT_NAME));
    assert_eq!(theme.description(), Some(Theme::DEFAULT_DESCRIPTION));
    assert_eq!(theme.maps_key(), None);
}

#[test]
fn theme_with_maps_key_overrides_stored_value() {
    let theme = Theme::from_value(json!({"Name": "Dark", "AzureMapsKey": "stale"}))
        .unwrap()
        .with_maps_key("fresh");
    assert_eq!(theme.maps_key(), Some("fresh"));
    assert_eq!(theme.name(), Some("Dark"));
}

#[test]
fn theme_without_maps_key_strips_field() {
    let theme = Theme::default().with_maps_key("k").without_maps_key();
    assert!(theme.get(AZURE_MAPS_KEY_FIELD).is_none());
}

#[test]
fn theme_rejects_non_object() {
    assert!(Theme::from_value(json!(["Name"])).is_err());
    assert!(serde_json::from_str::<Theme>("42").is_err());
}

#[test]
fn theme_preserves_unknown_fields() {
    let theme: Theme =
        serde_json::from_str(r##"{"Name":"n","Palette":{"primary":"#fff"}}"##).unwrap();
    assert_eq!(theme.get("Palette"), Some(&json!({"primary": "#fff"})));
    assert_eq!(
        theme.into_value(),
        json!({"Name":"n","Palette":{"primary":"#fff"}})
    );
}

// ── Logo ─────────────────────────────────────────────────────────

#[test]
fn default_logo_is_flagged_default() {
    let logo = Logo::default();
    assert!(logo.is_default);
    assert_eq!(logo.name.as_deref(), Some(Logo::DEFAULT_NAME));
    assert_eq!(logo.image_type, Logo::DEFAULT_TYPE);
}

#[test]
fn logo_uses_pascal_case_fields() {
    let logo = Logo::new("aW1n", "image/png", Some("Contoso".to_string()));
    let value = serde_json::to_value(&logo).unwrap();
    assert_eq!(
        value,
        json!({"Image": "aW1n", "Type": "image/png", "Name": "Contoso", "IsDefault": false})
    );
}

#[test]
fn logo_without_name_deserializes() {
    let logo: Logo =
        serde_json::from_str(r#"{"Image":"i","Type":"t","IsDefault":false}"#).unwrap();
    assert_eq!(logo.name, None);
    assert!(!logo.is_default);
}

#[test]
fn merge_keeps_previous_name_when_missing() {
    let previous = Logo::new("old", "image/png", Some("X".to_string()));
    let merged = Logo::new("new", "image/jpeg", None).merged_onto(&previous);

    assert_eq!(merged.image, "new");
    assert_eq!(merged.image_type, "image/jpeg");
    assert_eq!(merged.name.as_deref(), Some("X"));
    assert!(!merged.is_default);
}

#[test]
fn merge_takes_new_name_when_present() {
    let previous = Logo::new("old", "image/png", Some("X".to_string()));
    let merged = Logo::new("new", "image/png", Some("Y".to_string())).merged_onto(&previous);
    assert_eq!(merged.name.as_deref(), Some("Y"));
}

#[test]
fn merge_onto_default_clears_default_flag() {
    let mut update = Logo::new("img", "image/png", None);
    update.is_default = true;
    let merged = update.merged_onto(&Logo::default());

    assert!(!merged.is_default);
    assert_eq!(merged.name.as_deref(), Some(Logo::DEFAULT_NAME));
}

// ── UserSetting ──────────────────────────────────────────────────

#[test]
fn user_setting_is_transparent_json() {
    let setting: UserSetting = serde_json::from_str(r#"{"Lang":"fr"}"#).unwrap();
    assert_eq!(setting.get("Lang"), Some(&json!("fr")));
    assert_eq!(serde_json::to_string(&setting).unwrap(), r#"{"Lang":"fr"}"#);
}
