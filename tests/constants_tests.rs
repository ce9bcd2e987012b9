// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use invite_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_sane() {
    assert_eq!(PARTICLE_COUNT, 100);
    assert!(PARTICLE_SPEED_SPAN > 0.0);
    assert!((PARTICLE_SIZE_MIN - 0.5).abs() < f32::EPSILON);
    assert!((PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN - 2.5).abs() < f32::EPSILON);
    assert!((PARTICLE_ALPHA_MIN - 0.1).abs() < f32::EPSILON);
    assert!((PARTICLE_ALPHA_MIN + PARTICLE_ALPHA_SPAN - 0.6).abs() < 1e-6);
}

#[test]
fn wall_message_only_uses_wall_letters() {
    assert_eq!(WALL_ALPHABET.chars().count(), 26);
    assert_eq!(WALL_PALETTE.len(), 5);
    assert!(WALL_MESSAGE.chars().all(|c| WALL_ALPHABET.contains(c)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_and_thresholds() {
    assert_eq!(WALL_TICK_PERIOD.as_millis(), 1000);
    assert_eq!(INTRO_FADE_DURATION.as_millis(), 1000);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(AUDIO_INITIAL_VOLUME > 0.0 && AUDIO_INITIAL_VOLUME <= 1.0);
    assert!(MAX_FRAME_DT_SEC as f64 * 1000.0 > WALL_TICK_PERIOD.as_millis() as f64);
}

#[test]
fn reveal_selector_covers_the_wall_and_cards() {
    assert!(REVEAL_SELECTOR.contains(&format!(".{}", LIGHTS_WALL_CLASS)));
    assert!(REVEAL_SELECTOR.contains(&format!(".{}", CARD_CLASS)));
    assert!(REVEAL_ID_ATTR.starts_with("data-"));
    assert!(BULB_COLOR_VAR.starts_with("--"));
}

#[test]
fn glyphs_differ() {
    assert_ne!(MUTED_GLYPH, UNMUTED_GLYPH);
    assert_ne!(NAV_UP_GLYPH, NAV_DOWN_GLYPH);
}
