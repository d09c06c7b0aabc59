use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::source::SourceResolver;
use super::table::{ICON_SPECS, png_count};
use super::{FAVICON_ICO_NAME, FAVICON_SVG_NAME, GenerateError, generate};
use crate::config::BrandConfig;
use crate::image::backend::SvgConverter;

const AVATAR: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 200 200">
  <circle cx="100" cy="100" r="90" fill="#336699"/>
  <rect x="60" y="60" width="80" height="80" fill="#ffffff"/>
</svg>
"##;

/// Temp project with an avatar (and optionally the extended pair) on disk.
fn make_project(with_extended: bool) -> (TempDir, BrandConfig) {
    let temp = TempDir::new().unwrap();
    let art = temp.path().join("art");
    std::fs::create_dir_all(&art).unwrap();
    std::fs::write(art.join("avatar.svg"), AVATAR).unwrap();
    if with_extended {
        std::fs::write(art.join("logo.svg"), AVATAR).unwrap();
        std::fs::write(art.join("logo_dark.svg"), AVATAR).unwrap();
    }

    let mut config = BrandConfig::default();
    config.sources.avatar = Some(art.join("avatar.svg"));
    config.sources.extended_light = Some(art.join("logo.svg"));
    config.sources.extended_dark = Some(art.join("logo_dark.svg"));
    config.output.dir = temp.path().join("public");

    (temp, config)
}

fn resolver() -> SourceResolver {
    SourceResolver::new(None)
}

fn png_size(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().to_rgba8().dimensions()
}

fn ico_entry_count(path: &Path) -> u16 {
    let data = std::fs::read(path).unwrap();
    u16::from_le_bytes([data[4], data[5]])
}

fn sorted_listing(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    entries.sort();
    entries
}

#[test]
fn test_full_run_writes_every_asset() {
    let (_temp, config) = make_project(true);

    let generated = generate(&config, &resolver()).unwrap();

    assert_eq!(generated.files.len(), png_count() + 2);
    assert_eq!(generated.files.len(), 23);
    assert_eq!(sorted_listing(&config.output.dir).len(), 23);

    for spec in ICON_SPECS {
        for &size in spec.sizes {
            let path = config.output.dir.join(format!("{}-{size}x{size}.png", spec.prefix));
            assert!(generated.files.contains(&path), "{} not recorded", path.display());
            assert_eq!(png_size(&path), (size, size), "{}", path.display());
        }
    }
}

#[test]
fn test_favicon_outputs() {
    let (_temp, config) = make_project(true);
    generate(&config, &resolver()).unwrap();

    assert_eq!(ico_entry_count(&config.output.dir.join(FAVICON_ICO_NAME)), 3);

    let svg = std::fs::read_to_string(config.output.dir.join(FAVICON_SVG_NAME)).unwrap();
    assert!(svg.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 200 200">"#));
    // Children untouched
    assert!(svg.contains(r##"<rect x="60" y="60" width="80" height="80" fill="#ffffff"/>"##));
}

#[test]
fn test_write_order_ends_with_favicons() {
    let (_temp, config) = make_project(true);
    let generated = generate(&config, &resolver()).unwrap();

    let names: Vec<_> = generated
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names[0], "android-icon-36x36.png");
    assert_eq!(names[21], FAVICON_ICO_NAME);
    assert_eq!(names[22], FAVICON_SVG_NAME);
}

#[test]
fn test_missing_avatar_writes_nothing() {
    let (temp, mut config) = make_project(true);
    config.sources.avatar = Some(temp.path().join("art/none.svg"));

    let err = generate(&config, &resolver()).unwrap_err();

    match err {
        GenerateError::MissingAvatar(path) => assert_eq!(path, temp.path().join("art/none.svg")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!config.output.dir.exists());
}

#[test]
fn test_missing_extended_still_generates() {
    let (_temp, config) = make_project(false);

    let generated = generate(&config, &resolver()).unwrap();

    assert_eq!(generated.files.len(), 23);
}

#[test]
fn test_skip_favicon_svg() {
    let (_temp, mut config) = make_project(true);
    config.output.favicon_svg = false;

    let generated = generate(&config, &resolver()).unwrap();

    assert_eq!(generated.files.len(), 22);
    assert!(!config.output.dir.join(FAVICON_SVG_NAME).exists());
    assert!(config.output.dir.join(FAVICON_ICO_NAME).exists());
    assert!(config.output.dir.join("ms-icon-150x150.png").exists());
}

#[test]
fn test_second_run_is_byte_identical() {
    let (_temp, config) = make_project(true);

    let first = generate(&config, &resolver()).unwrap();
    let before: Vec<_> = first
        .files
        .iter()
        .map(|p| std::fs::read(p).unwrap())
        .collect();

    let second = generate(&config, &resolver()).unwrap();
    assert_eq!(first.files, second.files);
    for (path, old) in second.files.iter().zip(before) {
        assert_eq!(std::fs::read(path).unwrap(), old, "{} changed", path.display());
    }
}

#[test]
fn test_render_failure_propagates() {
    let (temp, mut config) = make_project(true);
    let broken = temp.path().join("art/broken.svg");
    std::fs::write(&broken, "<svg><g></svg>").unwrap();
    config.sources.avatar = Some(broken);

    let err = generate(&config, &resolver()).unwrap_err();

    assert!(matches!(err, GenerateError::Render(_)));
    assert!(!config.output.dir.join(FAVICON_ICO_NAME).exists());
}

#[test]
fn test_conventional_lookup_under_tool_dir() {
    let (temp, mut config) = make_project(true);
    std::fs::copy(
        temp.path().join("art/avatar.svg"),
        temp.path().join("logo_thumbnail.svg"),
    )
    .unwrap();
    config.sources.avatar = None;
    config.output.favicon_svg = false;

    let resolver = SourceResolver::new(Some(temp.path().to_path_buf()));
    let generated = generate(&config, &resolver).unwrap();

    assert_eq!(generated.files.len(), 22);
}

#[test]
fn test_missing_dependency_writes_nothing() {
    if which::which("magick").is_ok() {
        return;
    }
    let (_temp, mut config) = make_project(true);
    config.render.converter = SvgConverter::Magick;

    let err = generate(&config, &resolver()).unwrap_err();

    match &err {
        GenerateError::MissingDependency { name, hint } => {
            assert_eq!(*name, "magick");
            assert!(hint.contains("--converter builtin"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.exit_code(), 1);
    assert!(!config.output.dir.exists());
}

#[test]
fn test_missing_avatar_checked_before_dependency() {
    let (temp, mut config) = make_project(true);
    config.sources.avatar = Some(temp.path().join("art/none.svg"));
    config.render.converter = SvgConverter::Magick;

    let err = generate(&config, &resolver()).unwrap_err();

    assert!(matches!(err, GenerateError::MissingAvatar(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_missing_extended_are_reported() {
    let (_temp, config) = make_project(false);

    let sources = resolver().resolve_sources(&config.sources);
    let missing = sources.missing_extended();

    assert_eq!(
        missing,
        vec![
            config.sources.extended_light.as_deref().unwrap(),
            config.sources.extended_dark.as_deref().unwrap(),
        ]
    );
}

#[test]
fn test_render_failure_exit_code() {
    let err = GenerateError::from(anyhow::anyhow!("boom"));
    assert_eq!(err.exit_code(), 1);
}
