pub mod audio;
pub mod constants;
pub mod error;
pub mod events;
pub mod intro;
pub mod invitation;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod wall;

pub use audio::{AudioController, AudioSink, MuteIcon};
pub use error::{PlaybackError, WallError};
pub use events::{Dispatcher, Effect, EventKind, UiEvent};
pub use intro::{IntroOverlay, IntroState};
pub use invitation::{Invitation, InvitationConfig};
pub use nav::{NavArrow, NavTarget};
pub use particles::{Particle, ParticleField};
pub use reveal::{RevealEvent, RevealObserver, TargetId, TargetKind};
pub use wall::{LightWall, SequencerState, WallCell};
