use crate::constants::{IMAGE_OVERLAY_CLOSE_SELECTOR, MODAL_CLOSE_SELECTOR};
use crate::dom;
use crate::input;
use crate::{with_controller, SharedController};
use room_core::ClickOutcome;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub controller: SharedController,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    // pointermove
    {
        let pointer_m = w.pointer.clone();
        let canvas_m = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut p = pointer_m.borrow_mut();
            p.ndc = input::pointer_ndc(&ev, &canvas_m);
            // captured drags keep reporting past the canvas edge
            p.inside = input::within_ndc(p.ndc);
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave
    {
        let pointer_l = w.pointer.clone();
        let controller_l = w.controller.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            pointer_l.borrow_mut().inside = false;
            with_controller(&controller_l, |c| c.clear_hover());
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // click
    {
        let controller_c = w.controller.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            let outcome = with_controller(&controller_c, |c| {
                let outcome = c.on_click();
                // reopened by a close button, or by the page leaving a camera mode
                if outcome.takes_pointer() {
                    c.set_enabled(false);
                }
                outcome
            });
            if outcome != ClickOutcome::Ignored {
                log::info!("[click] {:?}", outcome);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // window focus returns after an external link
    if let Some(window) = web::window() {
        let controller_f = w.controller.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::FocusEvent| {
            with_controller(&controller_f, |c| c.on_focus());
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // close buttons hand the pointer back
    for selector in [MODAL_CLOSE_SELECTOR, IMAGE_OVERLAY_CLOSE_SELECTOR] {
        let controller_x = w.controller.clone();
        dom::add_click_listener(&w.document, selector, move || {
            with_controller(&controller_x, |c| {
                c.host_mut().close_ui();
                c.set_enabled(true);
            });
        });
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, controller: &SharedController) {
    let resize = {
        let canvas = canvas.clone();
        let controller = controller.clone();
        move || {
            dom::sync_canvas_backing_size(&canvas);
            let aspect = input::canvas_aspect(&canvas);
            with_controller(&controller, |c| {
                let mut camera = c.camera().clone();
                camera.aspect = aspect;
                c.set_camera(camera);
            });
        }
    };
    resize();
    let closure = Closure::wrap(Box::new(resize) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
