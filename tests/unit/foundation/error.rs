use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FolioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FolioError::config("x").to_string().contains("config error:"));
    assert!(
        FolioError::sequence("x")
            .to_string()
            .contains("sequence error:")
    );
    assert!(
        FolioError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FolioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
