use crate::constants::*;
use crate::dom;
use crate::page::Page;
use invite_core::{TargetId, TargetKind, UiEvent};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn kind_of(el: &web::Element) -> TargetKind {
    let classes = el.class_list();
    if classes.contains(LIGHTS_WALL_CLASS) {
        TargetKind::LightWall
    } else if classes.contains(CARD_CLASS) {
        TargetKind::Card
    } else {
        TargetKind::FadeIn
    }
}

/// Register every scroll-reveal element with the core and start observing.
pub fn observe_targets(page: &Rc<Page>, threshold: f64) -> anyhow::Result<()> {
    let elements = dom::select_all(&page.dom.document, REVEAL_SELECTOR);
    {
        let mut state = page.state.borrow_mut();
        let mut targets = page.reveal_targets.borrow_mut();
        for el in &elements {
            let id = state.register_target(kind_of(el));
            _ = el.set_attribute(REVEAL_ID_ATTR, &id.0.to_string());
            targets.push(el.clone());
        }
    }

    let page_cb = page.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(target) = entry
                    .target()
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    continue;
                };
                // Non-intersecting entries can still report a stale ratio.
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                page_cb.dispatch(UiEvent::Intersection {
                    target: TargetId(target),
                    ratio,
                });
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();
    for el in &elements {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", elements.len());
    Ok(())
}
