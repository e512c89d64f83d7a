use crate::dom;
use crate::model::PageTransition;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store in step with the window; the render loop
/// picks up the new size (and camera aspect) on its next tick.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Report `pagehide` and `pageshow` to `handler`. Both fire around bfcache
/// entry and restore as well as real unloads and loads.
pub fn wire_page_transitions(handler: impl FnMut(PageTransition) + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let handler = Rc::new(RefCell::new(handler));
    for (name, show) in [("pagehide", false), ("pageshow", true)] {
        let handler = handler.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
            let persisted = ev.persisted();
            let transition = if show {
                PageTransition::Show { persisted }
            } else {
                PageTransition::Hide { persisted }
            };
            match handler.try_borrow_mut() {
                Ok(mut h) => (*h)(transition),
                Err(_) => log::warn!("[ui] {} while busy; ignored", name),
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
