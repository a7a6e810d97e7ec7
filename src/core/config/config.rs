use std::collections::BTreeMap;
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::core::color::PaletteColor;
use crate::core::team::TeamKind;

/// Primary palette: 26 visually distinct colors.
/// Source: "A Colour Alphabet and the Limits of Colour Coding", Paul Green-Armytage.
pub const ALPHABET: [[u8; 3]; 26] = [
    [240, 163, 255],
    [0, 117, 220],
    [153, 63, 0],
    [76, 0, 92],
    [25, 25, 25],
    [0, 92, 49],
    [43, 206, 72],
    [255, 204, 153],
    [128, 128, 128],
    [148, 255, 181],
    [143, 124, 0],
    [157, 204, 0],
    [194, 0, 136],
    [0, 51, 128],
    [255, 164, 5],
    [255, 168, 187],
    [66, 102, 0],
    [255, 0, 16],
    [94, 241, 242],
    [0, 153, 143],
    [224, 255, 102],
    [116, 10, 255],
    [153, 0, 0],
    [255, 255, 128],
    [255, 255, 0],
    [255, 80, 5],
];

/// Recycled once the primary palette is exhausted (muted, mid lightness).
pub const FALLBACK: [[u8; 3]; 16] = [
    [190, 120, 120],
    [120, 150, 190],
    [190, 175, 110],
    [120, 180, 140],
    [160, 130, 190],
    [200, 150, 110],
    [110, 170, 175],
    [175, 120, 160],
    [140, 160, 100],
    [100, 120, 160],
    [170, 100, 100],
    [150, 150, 150],
    [210, 190, 160],
    [100, 140, 120],
    [185, 140, 175],
    [130, 110, 90],
];

fn palette_from(rgb: &[[u8; 3]]) -> Vec<PaletteColor> {
    rgb.iter().copied().map(PaletteColor::from).collect()
}

/// How variation lists are generated for named teams that have none in the file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct VariationConfig {
    pub count: usize,
    /// Total HSL lightness range covered by the generated variations (0..1).
    pub lightness_spread: f32,
}
impl Default for VariationConfig {
    fn default() -> Self {
        Self {
            count: 12,
            lightness_spread: 0.3,
        }
    }
}

/// One team's table entry. An empty `variations` list is generated from `base`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TeamTableConfig {
    pub base: PaletteColor,
    pub variations: Vec<PaletteColor>,
}
impl Default for TeamTableConfig {
    fn default() -> Self {
        Self {
            base: PaletteColor::from_rgb8(128, 128, 128),
            variations: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub primary: Vec<PaletteColor>,
    pub fallback: Vec<PaletteColor>,
    /// Keyed by lowercase team name (see `TeamKind::name`).
    pub teams: BTreeMap<String, TeamTableConfig>,
    pub variations: VariationConfig,
}
impl Default for PaletteConfig {
    fn default() -> Self {
        let teams = TeamKind::NAMED
            .iter()
            .filter_map(|team| {
                team.default_base().map(|base| {
                    (
                        team.name().to_owned(),
                        TeamTableConfig {
                            base,
                            variations: Vec::new(),
                        },
                    )
                })
            })
            .collect();
        Self {
            primary: palette_from(&ALPHABET),
            fallback: palette_from(&FALLBACK),
            teams,
            variations: Default::default(),
        }
    }
}

impl PaletteConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load file; on failure returns default config plus error string.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple layers; later overrides earlier (deep merge).
    /// Returns (config, used_paths, errors). Unreadable layers are reported and skipped.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (PaletteConfig::default(), used, errors);
        };
        match val.into_rust::<PaletteConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (PaletteConfig::default(), used, errors)
            }
        }
    }

    /// Substitute the built-in fallback palette when none is configured. Everything else is
    /// kept as loaded.
    pub fn with_builtin_fallback(mut self) -> Self {
        if self.fallback.is_empty() {
            self.fallback = palette_from(&FALLBACK);
        }
        self
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.primary.is_empty() {
            w.push("primary palette is empty; every identity draws from fallback".into());
        }
        if self.fallback.is_empty() {
            w.push("fallback palette is empty; allocator cannot recycle (built-in fallback used)".into());
        }
        fn check_palette(w: &mut Vec<String>, label: &str, colors: &[PaletteColor]) {
            for (i, c) in colors.iter().enumerate() {
                if !c.in_gamut() {
                    w.push(format!("{label}[{i}] channels {:?} outside 0..255", c.channels()));
                }
            }
            for (i, a) in colors.iter().enumerate() {
                if let Some(j) = colors[i + 1..].iter().position(|b| b.rgb8() == a.rgb8()) {
                    w.push(format!(
                        "{label} has duplicate color {} at {i} and {}",
                        a.to_hex(),
                        i + 1 + j
                    ));
                }
            }
        }
        check_palette(&mut w, "primary", &self.primary);
        check_palette(&mut w, "fallback", &self.fallback);

        for (name, entry) in &self.teams {
            let team = TeamKind::from_name(name);
            if !team.is_named() {
                w.push(format!("teams: unknown team '{name}' ignored"));
                continue;
            }
            if !entry.base.in_gamut() {
                w.push(format!("teams.{name}.base outside 0..255"));
            }
            for (i, c) in entry.variations.iter().enumerate() {
                if !c.in_gamut() {
                    w.push(format!("teams.{name}.variations[{i}] outside 0..255"));
                }
            }
        }
        if self.variations.count == 0 {
            w.push("variations.count is 0; generated team tables hold only the base color".into());
        }
        if self.variations.count > 256 {
            w.push(format!(
                "variations.count {} very high; nearby variations will be indistinguishable",
                self.variations.count
            ));
        }
        if !(0.0..=1.0).contains(&self.variations.lightness_spread) {
            w.push(format!(
                "variations.lightness_spread {} outside 0..1",
                self.variations.lightness_spread
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_clean() {
        let cfg = PaletteConfig::default();
        assert_eq!(cfg.primary.len(), 26);
        assert_eq!(cfg.fallback.len(), 16);
        assert_eq!(cfg.teams.len(), TeamKind::NAMED.len());
        let warnings = cfg.validate();
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            primary: [(255.0, 0.0, 0.0), (0.0, 0.0, 255.0)],
            fallback: [(10.0, 10.0, 10.0)],
            teams: {
                "red": (base: (200.0, 30.0, 30.0), variations: [(200.4, 30.5, 30.0)]),
            },
            variations: (count: 4, lightness_spread: 0.2),
        )"#;
        let cfg = PaletteConfig::load_from_file(write_temp(sample).path()).expect("parse config");
        assert_eq!(cfg.primary.len(), 2);
        assert_eq!(cfg.fallback, vec![PaletteColor::from_rgb8(10, 10, 10)]);
        assert_eq!(cfg.teams["red"].variations.len(), 1);
        assert_eq!(cfg.variations.count, 4);
        assert!(cfg.validate().is_empty(), "expected no warnings");
    }

    #[test]
    fn validate_detects_warnings() {
        let mut teams = BTreeMap::new();
        teams.insert("mauve".to_string(), TeamTableConfig::default());
        teams.insert(
            "blue".to_string(),
            TeamTableConfig {
                base: PaletteColor::rgb(0.0, 0.0, 400.0),
                variations: vec![PaletteColor::rgb(-1.0, 0.0, 0.0)],
            },
        );
        let bad = PaletteConfig {
            primary: vec![
                PaletteColor::from_rgb8(1, 2, 3),
                PaletteColor::rgb(300.0, 0.0, 0.0),
                PaletteColor::from_rgb8(1, 2, 3),
            ],
            fallback: Vec::new(),
            teams,
            variations: VariationConfig {
                count: 0,
                lightness_spread: 1.5,
            },
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("fallback palette is empty"));
        assert!(joined.contains("primary[1] channels"));
        assert!(joined.contains("primary has duplicate color #010203 at 0 and 2"));
        assert!(joined.contains("unknown team 'mauve'"));
        assert!(joined.contains("teams.blue.base outside"));
        assert!(joined.contains("teams.blue.variations[0] outside"));
        assert!(joined.contains("variations.count is 0"));
        assert!(joined.contains("variations.lightness_spread 1.5"));
        assert!(warnings.len() >= 8, "expected many warnings, got {}: {joined}", warnings.len());
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = PaletteConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg, PaletteConfig::default());
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r#"(
            primary: [(255.0, 0.0, 0.0)],
            fallback: [(0.0, 255.0, 0.0)],
            teams: { "red": (base: (220.0, 20.0, 20.0)) },
        )"#;
        let override_one = r#"(
            fallback: [(0.0, 0.0, 255.0), (9.0, 9.0, 9.0)],
            teams: { "blue": (base: (20.0, 20.0, 220.0)) },
            variations: (count: 3),
        )"#;
        let (cfg, used, errors) = PaletteConfig::load_layered([
            write_temp(base).path().to_path_buf(),
            write_temp(override_one).path().to_path_buf(),
        ]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.primary, vec![PaletteColor::from_rgb8(255, 0, 0)]);
        assert_eq!(cfg.fallback.len(), 2);
        // maps merge key by key
        assert_eq!(cfg.teams["red"].base, PaletteColor::from_rgb8(220, 20, 20));
        assert_eq!(cfg.teams["blue"].base, PaletteColor::from_rgb8(20, 20, 220));
        assert_eq!(cfg.variations.count, 3);
        assert_eq!(
            cfg.variations.lightness_spread,
            VariationConfig::default().lightness_spread
        );
    }

    #[test]
    fn layered_merge_recurses_into_existing_team() {
        let base = r#"(teams: { "red": (base: (220.0, 20.0, 20.0)) })"#;
        let overlay = r#"(teams: { "red": (variations: [(1.0, 1.0, 1.0)]) })"#;
        let (cfg, _, errors) = PaletteConfig::load_layered([
            write_temp(base).path().to_path_buf(),
            write_temp(overlay).path().to_path_buf(),
        ]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(cfg.teams.len(), 1);
        assert_eq!(cfg.teams["red"].base, PaletteColor::from_rgb8(220, 20, 20));
        assert_eq!(cfg.teams["red"].variations, vec![PaletteColor::from_rgb8(1, 1, 1)]);
    }

    #[test]
    fn builtin_fallback_fills_only_empty_fallback() {
        let cfg = PaletteConfig {
            primary: vec![PaletteColor::from_rgb8(1, 2, 3)],
            fallback: Vec::new(),
            ..PaletteConfig::default()
        }
        .with_builtin_fallback();
        assert_eq!(cfg.primary, vec![PaletteColor::from_rgb8(1, 2, 3)]);
        assert_eq!(cfg.fallback, PaletteConfig::default().fallback);

        let custom = vec![PaletteColor::from_rgb8(9, 9, 9)];
        let kept = PaletteConfig {
            fallback: custom.clone(),
            ..PaletteConfig::default()
        }
        .with_builtin_fallback();
        assert_eq!(kept.fallback, custom);
    }

    #[test]
    fn layered_reports_missing_and_bad_layers() {
        let good = r#"(primary: [(1.0, 2.0, 3.0)])"#;
        let broken = "(primary: [";
        let good_file = write_temp(good);
        let broken_file = write_temp(broken);
        let (cfg, used, errors) = PaletteConfig::load_layered([
            good_file.path().to_path_buf(),
            broken_file.path().to_path_buf(),
            "missing/layer.ron".into(),
        ]);
        assert_eq!(used.len(), 1);
        assert_eq!(errors.len(), 2, "errors: {errors:?}");
        assert!(errors.iter().any(|e| e.contains("parse error")));
        assert!(errors.iter().any(|e| e.contains("read error")));
        assert_eq!(cfg.primary, vec![PaletteColor::from_rgb8(1, 2, 3)]);
    }

    #[test]
    fn no_layers_yields_defaults() {
        let (cfg, used, errors) = PaletteConfig::load_layered(Vec::<String>::new());
        assert!(used.is_empty() && errors.is_empty());
        assert_eq!(cfg, PaletteConfig::default());
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("tmp");
        f.write_all(contents.as_bytes()).unwrap();
        f
    }
}
