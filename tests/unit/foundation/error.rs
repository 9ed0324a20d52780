use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ScrollError::config("x").to_string().contains("config error:"));
    assert!(ScrollError::style("x").to_string().contains("style error:"));
    assert!(
        ScrollError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: ScrollError = serde_json::from_str::<f64>("nope").unwrap_err().into();
    assert!(matches!(err, ScrollError::Serde(_)));
}

#[test]
fn in_context_prefixes_validation_only() {
    let err = ScrollError::validation("bad window").in_context("target 'orb'");
    assert_eq!(err.to_string(), "validation error: target 'orb': bad window");

    let err = ScrollError::config("nope").in_context("ignored");
    assert_eq!(err.to_string(), "config error: nope");
}
