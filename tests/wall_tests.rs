// Host-side tests for the light wall sequencer.

use invite_core::constants::*;
use invite_core::{LightWall, SequencerState, WallError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn built_wall() -> LightWall {
    let mut wall = LightWall::new(WALL_MESSAGE);
    let mut rng = StdRng::seed_from_u64(42);
    wall.build(WALL_ALPHABET, &WALL_PALETTE, &mut rng).unwrap();
    wall
}

fn lit_glyph(wall: &LightWall) -> Option<char> {
    wall.lit().map(|i| wall.cells()[i].glyph)
}

#[test]
fn build_creates_one_cell_per_letter_in_order() {
    let wall = built_wall();
    let glyphs: String = wall.cells().iter().map(|c| c.glyph).collect();
    assert_eq!(glyphs, WALL_ALPHABET);
    for c in wall.cells() {
        assert!(WALL_PALETTE.contains(&c.color));
        assert!(!c.lit);
    }
}

#[test]
fn rebuild_replaces_previous_cells() {
    let mut wall = built_wall();
    let mut rng = StdRng::seed_from_u64(1);
    wall.build(WALL_ALPHABET, &WALL_PALETTE, &mut rng).unwrap();
    assert_eq!(wall.cells().len(), 26);
}

#[test]
fn empty_palette_is_rejected() {
    let mut wall = LightWall::new(WALL_MESSAGE);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        wall.build(WALL_ALPHABET, &[], &mut rng),
        Err(WallError::EmptyPalette)
    );
}

#[test]
fn palette_colors_vary_across_cells() {
    let wall = built_wall();
    let first = wall.cells()[0].color;
    assert!(wall.cells().iter().any(|c| c.color != first));
}

#[test]
fn ticks_spell_message_in_order_and_repeat() {
    let mut wall = built_wall();
    let mut seen = String::new();
    for _ in 0..12 {
        wall.tick();
        seen.push(lit_glyph(&wall).unwrap());
        assert_eq!(wall.cells().iter().filter(|c| c.lit).count(), 1);
    }
    assert_eq!(seen, "THIAGOTHIAGO");
}

#[test]
fn unmapped_characters_leave_every_cell_dark() {
    let mut wall = LightWall::new("A B");
    let mut rng = StdRng::seed_from_u64(3);
    wall.build(WALL_ALPHABET, &WALL_PALETTE, &mut rng).unwrap();
    assert_eq!(wall.tick().map(|i| wall.cells()[i].glyph), Some('A'));
    assert_eq!(wall.tick(), None);
    assert!(wall.cells().iter().all(|c| !c.lit));
    assert_eq!(wall.tick().map(|i| wall.cells()[i].glyph), Some('B'));
}

#[test]
fn idle_wall_ignores_elapsed_time() {
    let mut wall = built_wall();
    assert_eq!(wall.advance(Duration::from_secs(10)), None);
    assert_eq!(wall.lit(), None);
    assert_eq!(wall.state(), SequencerState::Idle);
}

#[test]
fn running_wall_ticks_once_per_period() {
    let mut wall = built_wall();
    assert!(wall.start());
    assert_eq!(wall.advance(Duration::from_millis(999)), None);
    assert_eq!(lit_glyph(&wall), None);
    assert!(wall.advance(Duration::from_millis(1)).is_some());
    assert_eq!(lit_glyph(&wall), Some('T'));

    // 60fps frames for one more second produce exactly one more tick.
    let mut fired = 0;
    for _ in 0..60 {
        if wall.advance(Duration::from_micros(16_667)).is_some() {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    assert_eq!(lit_glyph(&wall), Some('H'));
}

#[test]
fn second_start_is_a_no_op() {
    let mut wall = built_wall();
    assert!(wall.start());
    assert!(!wall.start());
    wall.advance(Duration::from_millis(1000));
    assert_eq!(lit_glyph(&wall), Some('T'));
    assert!(!wall.start());
    wall.advance(Duration::from_millis(1000));
    // One timer: the cursor moved one letter per second, not two.
    assert_eq!(lit_glyph(&wall), Some('H'));
}

#[test]
fn large_step_matches_individual_ticks() {
    let mut stepped = built_wall();
    let mut jumped = built_wall();
    stepped.start();
    jumped.start();
    for _ in 0..8 {
        stepped.advance(Duration::from_millis(1000));
    }
    jumped.advance(Duration::from_millis(8_500));
    assert_eq!(lit_glyph(&stepped), lit_glyph(&jumped));
    assert_eq!(stepped.cursor(), jumped.cursor());
    assert_eq!(lit_glyph(&jumped), Some('H'));
    // The leftover half period still counts toward the next tick.
    assert!(jumped.advance(Duration::from_millis(500)).is_some());
    assert_eq!(lit_glyph(&jumped), Some('I'));
}
