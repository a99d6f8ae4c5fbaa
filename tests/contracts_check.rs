mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

fn verify_json(env: &TestEnv, id: &str, code: i32) -> Value {
    let out = env
        .cmd()
        .args(["--json", "verify", id, "--no-log"])
        .assert()
        .code(code)
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn valid_verification_matches_contract() {
    let env = TestEnv::new();
    for id in ["2001014800086", "8001015009087", "8001015009285"] {
        let v = verify_json(&env, id, 0);
        assert_eq!(v["ok"], true);
        validate("verification.schema.json", &v);
    }
}

#[test]
fn failed_verification_matches_contract() {
    let env = TestEnv::new();
    for (id, reason) in [
        ("123", "invalid_length"),
        ("200101480008X", "invalid_characters"),
        ("2001014800087", "checksum_mismatch"),
        ("0013014800083", "invalid_date"),
    ] {
        let v = verify_json(&env, id, 1);
        assert_eq!(v["ok"], false);
        assert_eq!(v["data"]["failure_reason"], reason);
        assert!(v["data"].get("result").is_none());
        validate("verification.schema.json", &v);
    }
}
