//! Document handles plus the shared invitation state, and the code that
//! applies core effects back onto the document.

use crate::audio::HtmlAudioSink;
use crate::constants::*;
use crate::dom;
use crate::overlay;
use crate::render::SporeRenderer;
use crate::wall::WallView;
use invite_core::nav::rsvp_url;
use invite_core::{Dispatcher, Effect, Invitation, TargetId, UiEvent};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type PageState = Invitation<HtmlAudioSink>;

pub struct PageDom {
    pub document: web::Document,
    pub overlay: web::Element,
    pub main: web::Element,
    pub hero: Option<web::Element>,
    pub wall: web::Element,
    pub mute_button: Option<web::Element>,
    pub nav_button: Option<web::Element>,
}

impl PageDom {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        let hero = document.query_selector(HERO_SELECTOR).ok().flatten();
        if hero.is_none() {
            log::warn!("missing {}, hero animation skipped", HERO_SELECTOR);
        }
        Ok(Self {
            document: document.clone(),
            overlay: dom::require_by_id(document, OVERLAY_ID)?,
            main: dom::require_selector(document, MAIN_SELECTOR)?,
            hero,
            wall: dom::require_by_id(document, WALL_ID)?,
            mute_button: document.get_element_by_id(MUTE_BUTTON_ID),
            nav_button: document.get_element_by_id(NAV_BUTTON_ID),
        })
    }
}

pub struct Page {
    pub state: RefCell<PageState>,
    pub dispatcher: Dispatcher<PageState>,
    pub dom: PageDom,
    pub wall_view: WallView,
    pub renderer: Option<SporeRenderer>,
    /// Observed elements, indexed by `TargetId`.
    pub reveal_targets: RefCell<Vec<web::Element>>,
}

impl Page {
    /// Route one UI event through the handler table, then apply its effects.
    pub fn dispatch(&self, event: UiEvent) {
        let effects = {
            let mut state = self.state.borrow_mut();
            self.dispatcher.dispatch(&mut state, &event);
            state.take_effects()
        };
        self.apply(effects);
    }

    pub fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SetMuteIcon(icon) => {
                    if let Some(btn) = &self.dom.mute_button {
                        btn.set_text_content(Some(icon.glyph()));
                    }
                }
                Effect::FadeOverlay => overlay::fade_out(&self.dom.overlay),
                Effect::RevealMain => {
                    overlay::reveal(&self.dom.overlay, &self.dom.main, self.dom.hero.as_ref())
                }
                Effect::MarkVisible(id) => self.with_target(id, |el| dom::add_class(el, VISIBLE_CLASS)),
                Effect::MarkActive(id) => self.with_target(id, |el| dom::add_class(el, ACTIVE_CLASS)),
                Effect::LightCell(lit) => self.wall_view.light(lit),
                Effect::ScrollToTop => scroll_to_top(),
                Effect::ScrollToSection(i) => self.scroll_to_section(i),
                Effect::SetNavArrow(arrow) => {
                    if let Some(btn) = &self.dom.nav_button {
                        btn.set_inner_html(arrow.glyph());
                    }
                }
                Effect::OpenRsvp { phone, message } => open_rsvp(&phone, &message),
            }
        }
    }

    pub fn sections(&self) -> Vec<web::HtmlElement> {
        dom::select_all(&self.dom.document, SECTION_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect()
    }

    fn with_target(&self, id: TargetId, f: impl FnOnce(&web::Element)) {
        match self.reveal_targets.borrow().get(id.0) {
            Some(el) => f(el),
            None => log::warn!("[reveal] no element for target {}", id.0),
        }
    }

    fn scroll_to_section(&self, index: usize) {
        let Some(section) = self.sections().into_iter().nth(index) else {
            scroll_to_top();
            return;
        };
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

fn scroll_to_top() {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

fn open_rsvp(phone: &str, message: &str) {
    let url = rsvp_url(phone, message, |text| {
        String::from(js_sys::encode_uri_component(text))
    });
    log::info!("[rsvp] opening {}", url);
    if let Some(w) = web::window() {
        if let Err(e) = w.open_with_url_and_target(&url, RSVP_TARGET) {
            log::error!("[rsvp] window.open failed: {:?}", e);
        }
    }
}
