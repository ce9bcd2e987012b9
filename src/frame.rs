use crate::constants::MAX_FRAME_DT_SEC;
use crate::page::Page;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub page: Rc<Page>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(page: Rc<Page>) -> Self {
        Self {
            page,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = clamp_dt(now - self.last_instant);
        self.last_instant = now;

        let effects = {
            let mut state = self.page.state.borrow_mut();
            state.frame(dt);
            if let Some(r) = &self.page.renderer {
                r.draw(state.particles.particles());
            }
            state.take_effects()
        };
        self.page.apply(effects);
    }
}

#[inline]
fn clamp_dt(dt: Duration) -> Duration {
    dt.min(Duration::from_secs_f32(MAX_FRAME_DT_SEC))
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}
