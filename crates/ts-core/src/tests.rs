use crate::*;
use std::io::Write;

// ========== Params ==========

#[test]
fn test_params_defaults() {
    let p = SimplifyParams::default();
    assert_eq!(p.compress_ratio, 40);
    assert!((p.dup_threshold - 0.8).abs() < 1e-12);
    assert!(p.dedupe);
    assert!(p.preserve_order);
    assert!(p.clean_fillers);
}

#[test]
fn test_params_clamped() {
    assert_eq!(SimplifyParams::default().with_compress_ratio(-5).clamped().compress_ratio, 0);
    assert_eq!(SimplifyParams::default().with_compress_ratio(250).clamped().compress_ratio, 100);
    assert_eq!(SimplifyParams::default().with_compress_ratio(55).clamped().compress_ratio, 55);
}

#[test]
fn test_params_clamp_keeps_other_fields() {
    let p = SimplifyParams::default()
        .with_compress_ratio(120)
        .with_dedupe(false)
        .with_dup_threshold(0.5)
        .clamped();
    assert!(!p.dedupe);
    assert!((p.dup_threshold - 0.5).abs() < 1e-12);
}

#[test]
fn test_request_new_uses_default_params() {
    let req = SimplifyRequest::new("abc");
    assert_eq!(req.text, "abc");
    assert_eq!(req.params, SimplifyParams::default());
}

// ========== Result ==========

#[test]
fn test_result_camel_case_json() {
    let r = SimplifyResult {
        text: "a".into(),
        removed: vec!["b".into()],
        orig_len: 10,
        new_len: 4,
    };
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["origLen"], 10);
    assert_eq!(v["newLen"], 4);
    assert_eq!(v["removed"][0], "b");
    assert!(v.get("orig_len").is_none());
}

#[test]
fn test_result_empty() {
    let r = SimplifyResult::empty();
    assert_eq!(r.text, "");
    assert!(r.removed.is_empty());
    assert_eq!(r.orig_len, 0);
    assert_eq!(r.new_len, 0);
}

#[test]
fn test_result_reduction_pct() {
    let r = SimplifyResult { orig_len: 200, new_len: 50, ..Default::default() };
    assert!((r.reduction_pct() - 75.0).abs() < 1e-9);
    assert_eq!(SimplifyResult::empty().reduction_pct(), 0.0);
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let c = SimplifierConfig::default();
    assert_eq!(c.server.port, 8080);
    assert_eq!(c.server.addr(), "0.0.0.0:8080");
    assert!(c.validate().is_ok());
}

#[test]
fn test_config_partial_toml() {
    let c = SimplifierConfig::from_toml_str("[server]\nport = 9000\n\n[defaults]\ncompress_ratio = 60\n").unwrap();
    assert_eq!(c.server.port, 9000);
    assert_eq!(c.server.host, "0.0.0.0");
    assert_eq!(c.defaults.compress_ratio, 60);
    assert!(c.defaults.dedupe);
}

#[test]
fn test_config_empty_toml() {
    let c = SimplifierConfig::from_toml_str("").unwrap();
    assert_eq!(c.server.max_text_chars, 200_000);
}

#[test]
fn test_config_rejects_bad_ratio() {
    let err = SimplifierConfig::from_toml_str("[defaults]\ncompress_ratio = 101\n").unwrap_err();
    assert!(matches!(err, TsError::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_zero_port() {
    let err = SimplifierConfig::from_toml_str("[server]\nport = 0\n").unwrap_err();
    assert!(matches!(err, TsError::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_negative_threshold() {
    let err = SimplifierConfig::from_toml_str("[defaults]\ndup_threshold = -0.1\n").unwrap_err();
    assert!(matches!(err, TsError::InvalidConfig(_)));
}

#[test]
fn test_config_malformed_toml() {
    let err = SimplifierConfig::from_toml_str("[server\nport = ").unwrap_err();
    assert!(matches!(err, TsError::Toml(_)));
}

#[test]
fn test_config_load_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "[server]\nhost = \"127.0.0.1\"\nport = 8181").unwrap();
    let c = SimplifierConfig::load(f.path()).unwrap();
    assert_eq!(c.server.addr(), "127.0.0.1:8181");
}

#[test]
fn test_config_load_missing_file() {
    let err = SimplifierConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, TsError::Io(_)));
}
