use crate::constants::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavArrow {
    #[default]
    Down,
    Up,
}

impl NavArrow {
    pub fn glyph(self) -> &'static str {
        match self {
            NavArrow::Down => NAV_DOWN_GLYPH,
            NavArrow::Up => NAV_UP_GLYPH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Top,
    Section(usize),
}

/// First section whose top lies below the scroll position plus a buffer.
#[inline]
pub fn next_section(section_tops: &[f64], scroll_y: f64) -> Option<usize> {
    let threshold = scroll_y + NAV_SCROLL_BUFFER_PX;
    section_tops.iter().position(|&top| top > threshold)
}

#[inline]
pub fn is_near_bottom(scroll_top: f64, client_height: f64, scroll_height: f64) -> bool {
    scroll_top + client_height >= scroll_height - NAV_BOTTOM_SLACK_PX
}

#[inline]
pub fn arrow_for_scroll(scroll_top: f64, client_height: f64, scroll_height: f64) -> NavArrow {
    if is_near_bottom(scroll_top, client_height, scroll_height) {
        NavArrow::Up
    } else {
        NavArrow::Down
    }
}

/// Where a nav button press should scroll to.
pub fn nav_target(arrow: NavArrow, section_tops: &[f64], scroll_y: f64) -> NavTarget {
    if arrow == NavArrow::Up {
        return NavTarget::Top;
    }
    match next_section(section_tops, scroll_y) {
        Some(i) => NavTarget::Section(i),
        None => NavTarget::Top,
    }
}

/// Messaging deep link. `encode` is the host's URI component encoder.
pub fn rsvp_url(phone: &str, message: &str, encode: impl Fn(&str) -> String) -> String {
    format!("{}{}?text={}", RSVP_BASE_URL, phone, encode(message))
}
