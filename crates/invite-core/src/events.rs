//! Named UI events, the handler table, and the effects handlers request.

use crate::audio::MuteIcon;
use crate::nav::NavArrow;
use crate::reveal::TargetId;
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    OverlayClicked,
    VolumeInput(f64),
    MuteClicked,
    Intersection { target: TargetId, ratio: f64 },
    Resized { width: f32, height: f32 },
    NavClicked { scroll_y: f64, section_tops: Vec<f64> },
    Scrolled { scroll_top: f64, client_height: f64, scroll_height: f64 },
    RsvpClicked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    OverlayClick,
    VolumeInput,
    MuteClick,
    Intersection,
    Resize,
    NavClick,
    Scroll,
    RsvpClick,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::OverlayClick,
        EventKind::VolumeInput,
        EventKind::MuteClick,
        EventKind::Intersection,
        EventKind::Resize,
        EventKind::NavClick,
        EventKind::Scroll,
        EventKind::RsvpClick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventKind::OverlayClick => "overlay-click",
            EventKind::VolumeInput => "volume-input",
            EventKind::MuteClick => "mute-click",
            EventKind::Intersection => "intersection",
            EventKind::Resize => "resize",
            EventKind::NavClick => "nav-click",
            EventKind::Scroll => "scroll",
            EventKind::RsvpClick => "rsvp-click",
        }
    }
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::OverlayClicked => EventKind::OverlayClick,
            UiEvent::VolumeInput(_) => EventKind::VolumeInput,
            UiEvent::MuteClicked => EventKind::MuteClick,
            UiEvent::Intersection { .. } => EventKind::Intersection,
            UiEvent::Resized { .. } => EventKind::Resize,
            UiEvent::NavClicked { .. } => EventKind::NavClick,
            UiEvent::Scrolled { .. } => EventKind::Scroll,
            UiEvent::RsvpClicked => EventKind::RsvpClick,
        }
    }
}

/// DOM mutations requested by the core, applied in order by the frontend.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SetMuteIcon(MuteIcon),
    FadeOverlay,
    /// Hide the overlay, show main content and start the hero animation.
    RevealMain,
    MarkVisible(TargetId),
    MarkActive(TargetId),
    LightCell(Option<usize>),
    ScrollToTop,
    ScrollToSection(usize),
    SetNavArrow(NavArrow),
    OpenRsvp { phone: String, message: String },
}

pub type Handler<S> = fn(&mut S, &UiEvent);

pub struct Dispatcher<S> {
    handlers: FnvHashMap<EventKind, Handler<S>>,
}

impl<S> Default for Dispatcher<S> {
    fn default() -> Self {
        Self {
            handlers: FnvHashMap::default(),
        }
    }
}

impl<S> Dispatcher<S> {
    /// Register `handler` for `kind`, replacing any previous one.
    pub fn on(&mut self, kind: EventKind, handler: Handler<S>) -> &mut Self {
        self.handlers.insert(kind, handler);
        self
    }

    pub fn handles(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Returns false when no handler is registered for the event's kind.
    pub fn dispatch(&self, state: &mut S, event: &UiEvent) -> bool {
        match self.handlers.get(&event.kind()) {
            Some(handler) => {
                handler(state, event);
                true
            }
            None => {
                log::debug!("no handler for {}", event.kind().name());
                false
            }
        }
    }
}
