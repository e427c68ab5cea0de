use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EyeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(EyeError::layout("x").to_string().contains("layout error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = EyeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}
