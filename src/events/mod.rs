pub mod pointer;
pub mod window;

pub use pointer::wire_pointermove;
pub use window::{wire_canvas_resize, wire_page_transitions};
