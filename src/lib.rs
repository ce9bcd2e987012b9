#![cfg(target_arch = "wasm32")]
use invite_core::constants::AUDIO_SRC;
use invite_core::{Invitation, InvitationConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod page;
mod render;
mod reveal;
mod wall;

use page::{Page, PageDom};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("invite-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// A missing or unusable canvas only costs the particle background.
fn init_renderer(document: &web::Document) -> Option<render::SporeRenderer> {
    let Some(canvas) = document
        .get_element_by_id(constants::CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::warn!("[particles] missing #{} canvas", constants::CANVAS_ID);
        return None;
    };
    dom::sync_canvas_to_viewport(&canvas);
    match render::SporeRenderer::new(canvas) {
        Ok(r) => Some(r),
        Err(e) => {
            log::error!("[particles] canvas init error: {:?}", e);
            None
        }
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let page_dom = PageDom::lookup(&document)?;

    let renderer = init_renderer(&document);
    let (width, height) = dom::viewport_size();

    let config = InvitationConfig {
        seed: random_seed(),
        ..InvitationConfig::default()
    };
    let sink = audio::HtmlAudioSink::new(AUDIO_SRC)?;
    let mut invitation = Invitation::new(&config, sink, width, height)?;
    invitation.start();
    let wall_view = wall::WallView::build(&document, &page_dom.wall, invitation.wall.cells())?;

    let page = Rc::new(Page {
        state: RefCell::new(invitation),
        dispatcher: page::PageState::dispatcher(),
        dom: page_dom,
        wall_view,
        renderer,
        reveal_targets: RefCell::new(Vec::new()),
    });
    let initial = page.state.borrow_mut().take_effects();
    page.apply(initial);

    events::wire_all(&page);
    reveal::observe_targets(&page, config.reveal_threshold)?;

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(page))));
    Ok(())
}
