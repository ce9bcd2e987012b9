use std::time::Duration;

// Page tuning shared by the core state machines and the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SPEED_SPAN: f32 = 0.5; // velocity components in [-span/2, span/2)
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const PARTICLE_ALPHA_MIN: f32 = 0.1;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.5;

// Light wall
pub const WALL_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
// Red appears twice, so it is twice as likely as the other bulbs.
pub const WALL_PALETTE: [&str; 5] = ["#e71d36", "#2ec4b6", "#ff9f1c", "#fdfffc", "#e71d36"];
pub const WALL_MESSAGE: &str = "THIAGO";
pub const WALL_TICK_PERIOD: Duration = Duration::from_millis(1000);

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;

// Intro overlay
pub const INTRO_FADE_DURATION: Duration = Duration::from_millis(1000);

// Audio
pub const AUDIO_SRC: &str = "/music.mp3";
pub const AUDIO_INITIAL_VOLUME: f64 = 0.2;
pub const MUTED_GLYPH: &str = "\u{1F507}";
pub const UNMUTED_GLYPH: &str = "\u{1F50A}";

// Mobile navigation (CSS pixels)
pub const NAV_SCROLL_BUFFER_PX: f64 = 100.0;
pub const NAV_BOTTOM_SLACK_PX: f64 = 50.0;
pub const NAV_DOWN_GLYPH: &str = "\u{2193}";
pub const NAV_UP_GLYPH: &str = "\u{2191}";

// RSVP
pub const RSVP_BASE_URL: &str = "https://wa.me/";
pub const RSVP_PHONE: &str = "573175710585";
pub const RSVP_MESSAGE: &str =
    "\u{A1}Hola! Quiero confirmar mi asistencia al cumplea\u{F1}os de Thiago \u{1F6B2}";
