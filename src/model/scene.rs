//! Scene graph state for the reactor.
//!
//! The renderer owns GPU buffers; this module owns the values that change
//! from tick to tick (transforms, colors, particle positions) plus the fixed
//! camera and light descriptions.

use super::constants::*;
use super::particles::ParticleField;
use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;

/// Euler rotation (XYZ order) plus per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn with_rotation(rotation: Vec3) -> Self {
        Self {
            rotation,
            ..Self::default()
        }
    }

    pub fn set_uniform_scale(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }

    /// Local-to-parent matrix: rotate X, then Y, then Z (intrinsic), then scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ) * Mat4::from_scale(self.scale)
    }
}

/// Unlit material: flat color with fixed opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: u32,
    pub opacity: f32,
}

impl Material {
    pub fn rgba(&self) -> [f32; 4] {
        let [r, g, b] = hex_to_rgb(self.color);
        [r, g, b, self.opacity]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneNode {
    pub transform: Transform,
    pub material: Material,
}

impl SceneNode {
    fn new(color: u32, opacity: f32) -> Self {
        Self {
            transform: Transform::default(),
            material: Material { color, opacity },
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn reactor_default(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Recompute the aspect ratio from surface dimensions; zero sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub color: u32,
    pub intensity: f32,
    pub distance: f32,
    pub position: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            color: LIGHT_COLOR,
            intensity: LIGHT_INTENSITY,
            distance: LIGHT_DISTANCE,
            position: Vec3::ZERO,
        }
    }
}

/// Everything the animation step mutates. All four objects hang off
/// `group`, which carries the pointer parallax.
#[derive(Clone, Debug)]
pub struct ReactorScene {
    pub time: f32,
    pub group: Transform,
    pub core: SceneNode,
    pub inner_ring: SceneNode,
    pub outer_ring: SceneNode,
    pub particle_material: Material,
    pub particles: ParticleField,
    pub light: PointLight,
}

impl ReactorScene {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut outer_ring = SceneNode::new(COLOR_REACTOR_BLUE, OUTER_RING_OPACITY);
        outer_ring.transform.rotation.x = OUTER_BASE_TILT;
        Self {
            time: 0.0,
            group: Transform::default(),
            core: SceneNode::new(COLOR_REACTOR_BLUE, CORE_OPACITY),
            inner_ring: SceneNode::new(COLOR_REACTOR_CYAN, INNER_RING_OPACITY),
            outer_ring,
            particle_material: Material {
                color: COLOR_REACTOR_BLUE,
                opacity: PARTICLE_OPACITY,
            },
            particles: ParticleField::new(PARTICLE_COUNT, rng),
            light: PointLight::default(),
        }
    }

    /// World matrix of a child node (group * local).
    pub fn world_matrix(&self, node: &SceneNode) -> Mat4 {
        self.group.matrix() * node.transform.matrix()
    }
}
