use super::constants::POINTER_OFFSET_SCALE;

/// Pointer offset from the viewport center, scaled to parallax radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    #[inline]
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            x: (client_x - viewport_w * 0.5) * POINTER_OFFSET_SCALE,
            y: (client_y - viewport_h * 0.5) * POINTER_OFFSET_SCALE,
        }
    }
}
