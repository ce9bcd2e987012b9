//! Page-level state: owns every component and turns UI events into effects.
//!
//! The frontend constructs one `Invitation`, forwards DOM events through
//! [`Invitation::dispatcher`], calls [`Invitation::frame`] once per animation
//! frame, and drains [`Invitation::take_effects`] to update the document.

use crate::audio::{AudioController, AudioSink};
use crate::constants::*;
use crate::error::WallError;
use crate::events::{Dispatcher, Effect, EventKind, UiEvent};
use crate::intro::IntroOverlay;
use crate::nav::{self, NavArrow, NavTarget};
use crate::particles::ParticleField;
use crate::reveal::{RevealEvent, RevealObserver, TargetId, TargetKind};
use crate::wall::LightWall;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct InvitationConfig {
    pub particle_count: usize,
    pub alphabet: &'static str,
    pub palette: Vec<&'static str>,
    pub message: &'static str,
    pub reveal_threshold: f64,
    pub fade: Duration,
    pub rsvp_phone: &'static str,
    pub rsvp_message: &'static str,
    pub seed: u64,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            alphabet: WALL_ALPHABET,
            palette: WALL_PALETTE.to_vec(),
            message: WALL_MESSAGE,
            reveal_threshold: REVEAL_THRESHOLD,
            fade: INTRO_FADE_DURATION,
            rsvp_phone: RSVP_PHONE,
            rsvp_message: RSVP_MESSAGE,
            seed: 42,
        }
    }
}

pub struct Invitation<S: AudioSink> {
    pub audio: AudioController<S>,
    pub intro: IntroOverlay,
    pub particles: ParticleField,
    pub wall: LightWall,
    pub reveal: RevealObserver,
    nav_arrow: NavArrow,
    rsvp_phone: &'static str,
    rsvp_message: &'static str,
    effects: Vec<Effect>,
}

impl<S: AudioSink> Invitation<S> {
    pub fn new(
        config: &InvitationConfig,
        sink: S,
        width: f32,
        height: f32,
    ) -> Result<Self, WallError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let particles = ParticleField::new(config.particle_count, width, height, rng.gen());
        let mut wall = LightWall::new(config.message);
        wall.build(config.alphabet, &config.palette, &mut rng)?;
        Ok(Self {
            audio: AudioController::new(sink),
            intro: IntroOverlay::new(config.fade),
            particles,
            wall,
            reveal: RevealObserver::new(config.reveal_threshold),
            nav_arrow: NavArrow::Down,
            rsvp_phone: config.rsvp_phone,
            rsvp_message: config.rsvp_message,
            effects: Vec::new(),
        })
    }

    pub fn dispatcher() -> Dispatcher<Self> {
        let mut d = Dispatcher::default();
        d.on(EventKind::OverlayClick, on_overlay_click::<S>)
            .on(EventKind::VolumeInput, on_volume_input::<S>)
            .on(EventKind::MuteClick, on_mute_click::<S>)
            .on(EventKind::Intersection, on_intersection::<S>)
            .on(EventKind::Resize, on_resize::<S>)
            .on(EventKind::NavClick, on_nav_click::<S>)
            .on(EventKind::Scroll, on_scroll::<S>)
            .on(EventKind::RsvpClick, on_rsvp_click::<S>);
        d
    }

    pub fn register_target(&mut self, kind: TargetKind) -> TargetId {
        self.reveal.register(kind)
    }

    pub fn nav_arrow(&self) -> NavArrow {
        self.nav_arrow
    }

    /// Kick off the page: request autoplay and publish the initial icon.
    pub fn start(&mut self) {
        self.audio.autoplay();
        let icon = self.audio.icon();
        self.effects.push(Effect::SetMuteIcon(icon));
    }

    /// Per-frame step: move particles, then run the fade and wall timers.
    pub fn frame(&mut self, dt: Duration) {
        self.particles.tick();
        if self.intro.advance(dt) {
            self.effects.push(Effect::RevealMain);
        }
        if let Some(lit) = self.wall.advance(dt) {
            self.effects.push(Effect::LightCell(lit));
        }
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

fn on_overlay_click<S: AudioSink>(inv: &mut Invitation<S>, _: &UiEvent) {
    inv.audio.resume_if_paused();
    if inv.intro.click() {
        inv.effects.push(Effect::FadeOverlay);
    }
}

fn on_volume_input<S: AudioSink>(inv: &mut Invitation<S>, ev: &UiEvent) {
    if let UiEvent::VolumeInput(v) = *ev {
        let icon = inv.audio.set_volume(v);
        inv.effects.push(Effect::SetMuteIcon(icon));
    }
}

fn on_mute_click<S: AudioSink>(inv: &mut Invitation<S>, _: &UiEvent) {
    let icon = inv.audio.toggle_mute();
    inv.effects.push(Effect::SetMuteIcon(icon));
}

fn on_intersection<S: AudioSink>(inv: &mut Invitation<S>, ev: &UiEvent) {
    let UiEvent::Intersection { target, ratio } = *ev else {
        return;
    };
    for re in inv.reveal.observe(target, ratio) {
        match re {
            RevealEvent::Visible(id) => inv.effects.push(Effect::MarkVisible(id)),
            RevealEvent::LightWallActive(id) => {
                inv.effects.push(Effect::MarkActive(id));
                inv.wall.start();
            }
        }
    }
}

fn on_resize<S: AudioSink>(inv: &mut Invitation<S>, ev: &UiEvent) {
    if let UiEvent::Resized { width, height } = *ev {
        inv.particles.on_resize(width, height);
    }
}

fn on_nav_click<S: AudioSink>(inv: &mut Invitation<S>, ev: &UiEvent) {
    let UiEvent::NavClicked {
        scroll_y,
        section_tops,
    } = ev
    else {
        return;
    };
    match nav::nav_target(inv.nav_arrow, section_tops, *scroll_y) {
        NavTarget::Top => inv.effects.push(Effect::ScrollToTop),
        NavTarget::Section(i) => inv.effects.push(Effect::ScrollToSection(i)),
    }
}

fn on_scroll<S: AudioSink>(inv: &mut Invitation<S>, ev: &UiEvent) {
    let UiEvent::Scrolled {
        scroll_top,
        client_height,
        scroll_height,
    } = *ev
    else {
        return;
    };
    let arrow = nav::arrow_for_scroll(scroll_top, client_height, scroll_height);
    if arrow != inv.nav_arrow {
        inv.nav_arrow = arrow;
        inv.effects.push(Effect::SetNavArrow(arrow));
    }
}

fn on_rsvp_click<S: AudioSink>(inv: &mut Invitation<S>, _: &UiEvent) {
    inv.effects.push(Effect::OpenRsvp {
        phone: inv.rsvp_phone.to_string(),
        message: inv.rsvp_message.to_string(),
    });
}
