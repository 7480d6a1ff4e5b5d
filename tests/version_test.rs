// tests/version_test.rs
use std::str::FromStr;

use pluginctl::version::{bump_version, parse_version, BumpMode};
use pluginctl::PluginCtlError;

#[test]
fn test_major_bump_zeroes_minor_and_patch() {
    let v = parse_version("1.2.3").unwrap();
    assert_eq!(bump_version(&v, BumpMode::Major).to_string(), "2.0.0");
}

#[test]
fn test_minor_bump_zeroes_patch_only() {
    let v = parse_version("1.2.3").unwrap();
    assert_eq!(bump_version(&v, BumpMode::Minor).to_string(), "1.3.0");
}

#[test]
fn test_patch_bump_changes_last_component_only() {
    let v = parse_version("1.2.3").unwrap();
    assert_eq!(bump_version(&v, BumpMode::Patch).to_string(), "1.2.4");
}

#[test]
fn test_bump_clears_prerelease_and_build_metadata() {
    let v = parse_version("1.2.3-beta.1+build.42").unwrap();
    assert_eq!(bump_version(&v, BumpMode::Patch).to_string(), "1.2.4");
    assert_eq!(bump_version(&v, BumpMode::Major).to_string(), "2.0.0");
}

#[test]
fn test_bump_strictly_increases_ordering() {
    let v = parse_version("0.9.17").unwrap();
    for mode in [BumpMode::Major, BumpMode::Minor, BumpMode::Patch] {
        let once = bump_version(&v, mode);
        let twice = bump_version(&once, mode);
        assert!(once > v, "{} bump should increase ordering", mode);
        assert!(twice > once, "repeated {} bump should keep increasing", mode);
    }
}

#[test]
fn test_invalid_mode_string_is_rejected() {
    let err = BumpMode::from_str("revision").unwrap_err();
    match err {
        PluginCtlError::InvalidMode(mode) => assert_eq!(mode, "revision"),
        other => panic!("expected InvalidMode, got {:?}", other),
    }

    assert_eq!(BumpMode::from_str("major").unwrap(), BumpMode::Major);
    assert_eq!(BumpMode::from_str("minor").unwrap(), BumpMode::Minor);
    assert_eq!(BumpMode::from_str("patch").unwrap(), BumpMode::Patch);
}

#[test]
fn test_unparsable_version_is_rejected() {
    // Missing patch component
    let err = parse_version("v1.2").unwrap_err();
    match err {
        PluginCtlError::Version(msg) => assert!(msg.contains("v1.2")),
        other => panic!("expected Version error, got {:?}", other),
    }

    assert!(parse_version("").is_err());
    assert!(parse_version("1.2.3.4").is_err());
    assert!(parse_version("not-a-version").is_err());
}
