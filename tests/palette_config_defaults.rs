use team_palette::core::config::PaletteConfig;
use team_palette::{ColorAllocator, TeamKind};

#[test]
fn shipped_config_matches_builtin_defaults() {
    let cfg = PaletteConfig::load_from_file("assets/config/palette.ron").expect("load shipped config");
    assert_eq!(cfg, PaletteConfig::default());
    assert!(cfg.validate().is_empty(), "warnings: {:?}", cfg.validate());
}

#[test]
fn layered_override_replaces_one_team() {
    let mut path = std::env::temp_dir();
    path.push("team_palette_override_red.ron");
    std::fs::write(
        &path,
        r#"(teams: { "red": (base: (200.0, 0.0, 0.0), variations: [(200.0, 0.0, 0.0), (180.4, 0.0, 0.0)]) })"#,
    )
    .expect("write temp ron");

    let (cfg, used, errors) =
        PaletteConfig::load_layered(["assets/config/palette.ron".into(), path.clone()]);
    assert!(errors.is_empty(), "errors: {errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.teams.len(), TeamKind::NAMED.len());

    let mut alloc = ColorAllocator::from_config(&cfg).unwrap();
    let red = alloc.team_variations(&TeamKind::Red).unwrap();
    assert_eq!(red.len(), 2);
    let blue = alloc.team_variations(&TeamKind::Blue).unwrap();
    assert_eq!(blue.len(), cfg.variations.count);
    let _ = std::fs::remove_file(path);
}
