use super::*;

#[test]
fn from_values_defaults_when_absent() {
    let cfg = ApiConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ApiConfig::default());
    assert_eq!(cfg.base_url, "http://localhost:8081/api/v1");
    assert_eq!(cfg.notification_life_ms, 3000);
}

#[test]
fn from_values_treats_blank_as_absent() {
    let cfg = ApiConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ApiConfig::default());
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = ApiConfig::from_values(Some("https://zoo.example/api/v1//"), None).unwrap();
    assert_eq!(cfg.base_url, "https://zoo.example/api/v1");
}

#[test]
fn from_values_rejects_non_http_scheme() {
    let err = ApiConfig::from_values(Some("ftp://zoo.example"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://zoo.example".to_owned()));
    assert!(err.to_string().contains("CAGE_API_BASE_URL"));
}

#[test]
fn from_values_rejects_bare_scheme() {
    assert!(ApiConfig::from_values(Some("http://"), None).is_err());
}

#[test]
fn from_values_parses_lifetime() {
    let cfg = ApiConfig::from_values(None, Some("1500")).unwrap();
    assert_eq!(cfg.notification_life_ms, 1500);
}

#[test]
fn from_values_rejects_zero_or_garbage_lifetime() {
    assert_eq!(
        ApiConfig::from_values(None, Some("0")).unwrap_err(),
        ConfigError::InvalidLifetime("0".to_owned())
    );
    assert!(ApiConfig::from_values(None, Some("soon")).is_err());
    assert!(ApiConfig::from_values(None, Some("-5")).is_err());
}
