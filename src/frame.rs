use crate::input::PointerState;
use crate::{with_controller, SharedController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Large frame gaps (tab in background) are clamped so tweens do not jump.
const MAX_FRAME_DT_SEC: f32 = 0.1;

pub struct FrameContext {
    pub controller: SharedController,
    pub pointer: Rc<RefCell<PointerState>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(std::time::Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        let pointer = *self.pointer.borrow();
        with_controller(&self.controller, |c| {
            if pointer.inside {
                c.update(pointer.ndc.x, pointer.ndc.y);
            }
            c.tick(dt);
            if let Some(audio) = c.host_mut().audio_mut() {
                audio.poll();
            }
        });
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
