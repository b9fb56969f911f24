use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TubesleuthError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TubesleuthError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        TubesleuthError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = TubesleuthError::from(err);
    assert!(matches!(err, TubesleuthError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk gone");
    let err = TubesleuthError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk gone"));
}
