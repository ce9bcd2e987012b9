use crate::constants::{AUDIO_INITIAL_VOLUME, MUTED_GLYPH, UNMUTED_GLYPH};

/// The single playable background track, as seen by the controller.
///
/// `play` is fire-and-forget: the host resolves it asynchronously and a
/// rejection (autoplay policy) is logged by the implementation.
pub trait AudioSink {
    fn play(&mut self);
    fn is_paused(&self) -> bool;
    fn is_muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn set_looping(&mut self, looping: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MuteIcon {
    Muted,
    Unmuted,
}

impl MuteIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            MuteIcon::Muted => MUTED_GLYPH,
            MuteIcon::Unmuted => UNMUTED_GLYPH,
        }
    }
}

pub struct AudioController<S: AudioSink> {
    sink: S,
}

impl<S: AudioSink> AudioController<S> {
    /// Configure the track to loop at the initial volume. Playback is not
    /// requested here; call [`AudioController::autoplay`].
    pub fn new(mut sink: S) -> Self {
        sink.set_looping(true);
        sink.set_volume(AUDIO_INITIAL_VOLUME);
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn autoplay(&mut self) {
        log::info!("[audio] requesting autoplay");
        self.sink.play();
    }

    pub fn resume_if_paused(&mut self) {
        if self.sink.is_paused() {
            self.sink.play();
        }
    }

    pub fn set_volume(&mut self, volume: f64) -> MuteIcon {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
        self.icon()
    }

    pub fn toggle_mute(&mut self) -> MuteIcon {
        if self.sink.is_muted() {
            self.sink.set_muted(false);
            self.resume_if_paused();
        } else {
            self.sink.set_muted(true);
        }
        self.icon()
    }

    pub fn icon(&self) -> MuteIcon {
        if self.sink.is_muted() || self.sink.volume() == 0.0 {
            MuteIcon::Muted
        } else {
            MuteIcon::Unmuted
        }
    }
}
