use invite_core::{AudioSink, PlaybackError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Background track backed by an `<audio>` element that is never attached to
/// the document.
pub struct HtmlAudioSink {
    el: web::HtmlAudioElement,
}

impl HtmlAudioSink {
    pub fn new(src: &str) -> anyhow::Result<Self> {
        let el = web::HtmlAudioElement::new_with_src(src).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { el })
    }
}

impl AudioSink for HtmlAudioSink {
    fn play(&mut self) {
        let promise = match self.el.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] play() threw: {:?}", e);
                return;
            }
        };
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                let err = PlaybackError::Rejected(format!("{:?}", e));
                log::info!("[audio] Autoplay prevented. Waiting for user interaction. ({})", err);
            }
        });
    }

    fn is_paused(&self) -> bool {
        self.el.paused()
    }

    fn is_muted(&self) -> bool {
        self.el.muted()
    }

    fn set_muted(&mut self, muted: bool) {
        self.el.set_muted(muted);
    }

    fn volume(&self) -> f64 {
        self.el.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.el.set_volume(volume);
    }

    fn set_looping(&mut self, looping: bool) {
        self.el.set_loop(looping);
    }
}
