use super::constants::{
    PARTICLE_DECAY, PARTICLE_RESPAWN_THRESHOLD, PARTICLE_SPAWN_EXTENT,
};
use glam::Vec3;
use rand::Rng;

/// Fixed-size cloud of points flowing toward the origin.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
}

#[inline]
fn spawn_point<R: Rng>(rng: &mut R) -> Vec3 {
    let half = PARTICLE_SPAWN_EXTENT * 0.5;
    Vec3::new(
        rng.gen_range(-half..=half),
        rng.gen_range(-half..=half),
        rng.gen_range(-half..=half),
    )
}

impl ParticleField {
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        Self {
            positions: (0..count).map(|_| spawn_point(rng)).collect(),
        }
    }

    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Pull every point toward the origin; a point whose |x| drops under the
    /// threshold respawns somewhere in the spawn cube. Only X is checked.
    /// Returns how many points respawned.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut respawned = 0;
        for p in &mut self.positions {
            *p *= PARTICLE_DECAY;
            if p.x.abs() < PARTICLE_RESPAWN_THRESHOLD {
                *p = spawn_point(rng);
                respawned += 1;
            }
        }
        respawned
    }

    /// Flat xyz view for uploading as a vertex buffer.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }
}
