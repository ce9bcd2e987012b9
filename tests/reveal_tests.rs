// Host-side tests for the scroll reveal observer.

use invite_core::{RevealEvent, RevealObserver, TargetId, TargetKind};

#[test]
fn below_threshold_does_not_reveal() {
    let mut obs = RevealObserver::default();
    let card = obs.register(TargetKind::Card);
    assert!(obs.observe(card, 0.10).is_empty());
    assert!(!obs.is_visible(card));
}

#[test]
fn threshold_is_inclusive() {
    let mut obs = RevealObserver::default();
    let card = obs.register(TargetKind::Card);
    let events = obs.observe(card, 0.15);
    assert_eq!(events.as_slice(), &[RevealEvent::Visible(card)]);
    assert!(obs.is_visible(card));
    assert!(!obs.is_active(card));
}

#[test]
fn visible_flag_never_reverts() {
    let mut obs = RevealObserver::default();
    let fade = obs.register(TargetKind::FadeIn);
    obs.observe(fade, 0.5);
    assert!(obs.observe(fade, 0.0).is_empty());
    assert!(obs.is_visible(fade));
    // Re-entering does not report a second reveal either.
    assert!(obs.observe(fade, 1.0).is_empty());
}

#[test]
fn light_wall_section_is_activated_once() {
    let mut obs = RevealObserver::default();
    let card = obs.register(TargetKind::Card);
    let wall = obs.register(TargetKind::LightWall);
    assert_eq!(obs.kind(wall), Some(TargetKind::LightWall));
    let events = obs.observe(wall, 0.2);
    assert_eq!(
        events.as_slice(),
        &[RevealEvent::Visible(wall), RevealEvent::LightWallActive(wall)]
    );
    assert!(obs.is_active(wall));
    assert!(!obs.is_visible(card));
    assert!(obs.observe(wall, 0.9).is_empty());
}

#[test]
fn unknown_targets_are_ignored() {
    let mut obs = RevealObserver::default();
    obs.register(TargetKind::Card);
    assert_eq!(obs.len(), 1);
    assert!(obs.observe(TargetId(5), 1.0).is_empty());
    assert!(!obs.is_visible(TargetId(5)));
}
