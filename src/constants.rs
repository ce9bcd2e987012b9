/// Document hooks and drawing constants for the web frontend.
///
/// Selectors and class names match the page markup; keeping them here keeps
/// string literals out of the wiring code.
// Element ids
pub const OVERLAY_ID: &str = "overlay";
pub const CANVAS_ID: &str = "spores";
pub const WALL_ID: &str = "wall";
pub const MUTE_BUTTON_ID: &str = "mute-btn";
pub const VOLUME_SLIDER_ID: &str = "vol-slider";
pub const RSVP_BUTTON_ID: &str = "rsvp-btn";
pub const NAV_BUTTON_ID: &str = "nav-down";

// Selectors
pub const MAIN_SELECTOR: &str = "main";
pub const HERO_SELECTOR: &str = ".hero";
pub const SECTION_SELECTOR: &str = "section";
pub const REVEAL_SELECTOR: &str = ".card, .fade-in, .lights-wall";

// Class names
pub const CARD_CLASS: &str = "card";
pub const LIGHTS_WALL_CLASS: &str = "lights-wall";
pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";
pub const ANIMATE_CLASS: &str = "animate";
pub const WALL_LETTER_CLASS: &str = "wall-letter";
pub const BULB_CLASS: &str = "bulb";
pub const LIT_CLASS: &str = "lit";

// Attribute carrying the reveal target id on observed elements
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";
// CSS custom property read by the bulb stylesheet
pub const BULB_COLOR_VAR: &str = "--color";

// Particle fill, as rgb components of an rgba() style
pub const PARTICLE_RGB: [u8; 3] = [180, 200, 255];

// Frame time clamp (seconds); a backgrounded tab resumes with one large step
pub const MAX_FRAME_DT_SEC: f32 = 5.0;

pub const RSVP_TARGET: &str = "_blank";
