use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ConcatError::decode("a.png", "bad magic")
            .to_string()
            .contains("decode error: a.png")
    );
    assert!(
        ConcatError::empty_input("x")
            .to_string()
            .contains("empty input:")
    );
    assert!(
        ConcatError::invalid_config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(
        ConcatError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ConcatError::path_outside_root("x")
            .to_string()
            .contains("path outside root:")
    );
    assert!(ConcatError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ConcatError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn client_errors_exclude_environment_failures() {
    assert!(ConcatError::empty_input("x").is_client_error());
    assert!(ConcatError::path_outside_root("x").is_client_error());
    assert!(ConcatError::decode("a", "b").is_client_error());
    assert!(!ConcatError::encode("x").is_client_error());
    assert!(!ConcatError::Other(anyhow::anyhow!("io")).is_client_error());
}
