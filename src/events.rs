use crate::constants::*;
use crate::dom;
use crate::page::Page;
use invite_core::UiEvent;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_all(page: &Rc<Page>) {
    wire_overlay_click(page);
    wire_audio_controls(page);
    wire_resize(page);
    wire_rsvp(page);
    wire_nav(page);
}

fn wire_overlay_click(page: &Rc<Page>) {
    let p = page.clone();
    dom::add_listener(&page.dom.overlay, "click", move |_: web::Event| {
        p.dispatch(UiEvent::OverlayClicked);
    });
}

fn wire_audio_controls(page: &Rc<Page>) {
    let doc = &page.dom.document;
    match doc.get_element_by_id(VOLUME_SLIDER_ID) {
        Some(slider) => {
            let p = page.clone();
            dom::add_listener(&slider, "input", move |ev: web::Event| {
                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
                else {
                    return;
                };
                match input.value().parse::<f64>() {
                    Ok(v) => p.dispatch(UiEvent::VolumeInput(v)),
                    Err(_) => log::warn!("[audio] ignoring slider value {:?}", input.value()),
                }
            });
        }
        None => log::warn!("missing #{}, volume slider skipped", VOLUME_SLIDER_ID),
    }

    let p = page.clone();
    dom::add_click_listener(doc, MUTE_BUTTON_ID, move || {
        p.dispatch(UiEvent::MuteClicked);
    });
}

fn wire_resize(page: &Rc<Page>) {
    let Some(window) = web::window() else {
        return;
    };
    let p = page.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        let (width, height) = match &p.renderer {
            Some(r) => dom::sync_canvas_to_viewport(r.canvas()),
            None => dom::viewport_size(),
        };
        p.dispatch(UiEvent::Resized { width, height });
    });
}

fn wire_rsvp(page: &Rc<Page>) {
    let p = page.clone();
    dom::add_click_listener(&page.dom.document, RSVP_BUTTON_ID, move || {
        p.dispatch(UiEvent::RsvpClicked);
    });
}

fn wire_nav(page: &Rc<Page>) {
    if page.dom.nav_button.is_none() || page.sections().is_empty() {
        log::warn!("[nav] no nav button or sections, navigation skipped");
        return;
    }

    let p = page.clone();
    dom::add_click_listener(&page.dom.document, NAV_BUTTON_ID, move || {
        let scroll_y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let section_tops = p
            .sections()
            .iter()
            .map(|s| s.offset_top() as f64)
            .collect();
        p.dispatch(UiEvent::NavClicked {
            scroll_y,
            section_tops,
        });
    });

    let Some(window) = web::window() else {
        return;
    };
    let p = page.clone();
    dom::add_listener(&window, "scroll", move |_: web::Event| {
        let Some(w) = web::window() else {
            return;
        };
        let Some(root) = w.document().and_then(|d| d.document_element()) else {
            return;
        };
        let scroll_top = w
            .scroll_y()
            .ok()
            .filter(|y| *y != 0.0)
            .unwrap_or(root.scroll_top() as f64);
        let client_height = w
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        p.dispatch(UiEvent::Scrolled {
            scroll_top,
            client_height,
            scroll_height: root.scroll_height() as f64,
        });
    });
}
