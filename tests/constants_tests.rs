// Host-side tests for the canvas front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use orbit_core::Preset;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_never_overexposes() {
    assert!(AMBIENT_LIGHT > 0.0 && DIFFUSE_LIGHT >= 0.0);
    assert!(AMBIENT_LIGHT + DIFFUSE_LIGHT <= 1.0 + 1e-6);
    assert!(LIGHT_DIRECTION.iter().any(|c| *c != 0.0));
    assert!(LINK_LINE_WIDTH > 0.0);
}

#[test]
fn canvas_attributes_are_named() {
    assert!(!CANVAS_ID.is_empty() && !CANVAS_ID.starts_with('#'));
    assert!(PRESET_ATTRIBUTE.starts_with("data-"));
}

#[test]
fn preset_attribute_values_parse() {
    for value in ["cubes", "squares", "links"] {
        let preset: Preset = value.parse().unwrap();
        assert_eq!(preset.name(), value);
    }
}
