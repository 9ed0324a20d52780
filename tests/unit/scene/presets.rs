use super::*;

#[test]
fn every_preset_validates() {
    for name in PRESET_NAMES {
        let cfg = SceneConfig::preset(name).unwrap();
        assert_eq!(cfg.name, name);
        cfg.validate().unwrap();
    }
}

#[test]
fn unknown_preset_is_config_error() {
    let err = SceneConfig::preset("nope").unwrap_err();
    assert!(matches!(err, ScrollError::Config(_)));
    assert!(err.to_string().contains("wellness-journey"));
}

#[test]
fn wellness_targets_in_page_order() {
    let cfg = SceneConfig::wellness_journey();
    let names: Vec<&str> = cfg.targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "hero-card",
            "accent",
            "stage",
            "content-panel",
            "pillar",
            "morph-layer",
            "floating-panel",
            "orb"
        ]
    );
}

#[test]
fn presets_survive_json() {
    for name in PRESET_NAMES {
        let cfg = SceneConfig::preset(name).unwrap();
        let json = cfg.to_json_pretty().unwrap();
        let back = SceneConfig::from_json_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back.targets.len(), cfg.targets.len());
        assert_eq!(back.reveal, cfg.reveal);
        for (a, b) in back.targets.iter().zip(&cfg.targets) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.channels.drift, b.channels.drift);
        }
    }
}

#[test]
fn spotlight_pillars_peak_in_sequence() {
    let cfg = SceneConfig::pillar_spotlight();
    let pillar = cfg.target("pillar").unwrap();
    let window = pillar.channels.spotlight.unwrap();
    assert_eq!(pillar.stagger, -0.15);
    assert!((window.sample(0.45) - 1.0).abs() < 1e-9);
    assert!((window.sample(0.6 + pillar.stagger) - 1.0).abs() < 1e-9);
}
