use crate::dom;
use crate::model::PointerOffset;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole document; last write wins.
pub fn wire_pointermove(document: &web::Document, pointer: Rc<Cell<PointerOffset>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let (vw, vh) = dom::viewport_size(&window);
        pointer.set(PointerOffset::from_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            vw as f32,
            vh as f32,
        ));
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());

    closure.forget();
}
