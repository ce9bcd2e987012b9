use crate::dom;
use crate::constants::{ANIMATE_CLASS, VISIBLE_CLASS};
use web_sys as web;

/// Start the CSS opacity transition on the intro overlay.
#[inline]
pub fn fade_out(overlay: &web::Element) {
    dom::set_style(overlay, "opacity", "0");
}

#[inline]
pub fn hide(overlay: &web::Element) {
    dom::set_style(overlay, "display", "none");
}

/// Overlay gone: show the main content and kick off the hero entrance.
pub fn reveal(overlay: &web::Element, main: &web::Element, hero: Option<&web::Element>) {
    hide(overlay);
    dom::add_class(main, VISIBLE_CLASS);
    if let Some(hero) = hero {
        dom::add_class(hero, ANIMATE_CLASS);
    }
}
