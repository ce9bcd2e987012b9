// Shared audio double for host-side tests.

#![allow(dead_code)]
use invite_core::AudioSink;

/// In-memory stand-in for the `<audio>` element. With `block_autoplay` set,
/// the first play request is refused the way a browser autoplay policy would.
#[derive(Debug, Default)]
pub struct FakeSink {
    pub paused: bool,
    pub muted: bool,
    pub volume: f64,
    pub looping: bool,
    pub play_requests: usize,
    pub block_autoplay: bool,
}

impl FakeSink {
    pub fn new() -> Self {
        Self {
            paused: true,
            volume: 1.0,
            ..Self::default()
        }
    }

    pub fn blocking_autoplay() -> Self {
        Self {
            block_autoplay: true,
            ..Self::new()
        }
    }
}

impl AudioSink for FakeSink {
    fn play(&mut self) {
        self.play_requests += 1;
        if self.block_autoplay && self.play_requests == 1 {
            return;
        }
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}
