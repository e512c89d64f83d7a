use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use std::f32::consts::TAU;

/// Indexed triangle mesh generated once at startup.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unique undirected edges of all triangles, smallest index first.
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
        let mut out = Vec::with_capacity(self.indices.len());
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                if seen.insert(key) {
                    out.push([key.0, key.1]);
                }
            }
        }
        out
    }

    /// Expanded vertex list for a `LineList` draw of the wireframe.
    pub fn line_list(&self) -> Vec<[f32; 3]> {
        self.edges()
            .iter()
            .flat_map(|e| e.iter().map(|&i| self.positions[i as usize].to_array()))
            .collect()
    }

    /// Expanded vertex list for a `TriangleList` draw.
    pub fn triangle_list(&self) -> Vec<[f32; 3]> {
        self.indices
            .iter()
            .map(|&i| self.positions[i as usize].to_array())
            .collect()
    }
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

// Merges vertices that land on the same point when adjacent faces are subdivided.
struct Welder {
    lookup: FnvHashMap<[i32; 3], u32>,
    positions: Vec<Vec3>,
}

impl Welder {
    fn new() -> Self {
        Self {
            lookup: FnvHashMap::default(),
            positions: Vec::new(),
        }
    }

    fn insert(&mut self, p: Vec3) -> u32 {
        let key = [
            (p.x * 1e2).round() as i32,
            (p.y * 1e2).round() as i32,
            (p.z * 1e2).round() as i32,
        ];
        let positions = &mut self.positions;
        *self.lookup.entry(key).or_insert_with(|| {
            positions.push(p);
            (positions.len() - 1) as u32
        })
    }
}

/// Geodesic sphere: each icosahedron face is split into `(detail + 1)^2`
/// triangles and every vertex is pushed out to `radius`.
pub fn icosahedron(radius: f32, detail: u32) -> Mesh {
    let base = icosahedron_vertices();
    let cols = detail as usize + 1;
    let mut welder = Welder::new();
    let mut indices = Vec::with_capacity(20 * cols * cols * 3);

    for face in ICOSAHEDRON_FACES {
        let (a, b, c) = (base[face[0]], base[face[1]], base[face[2]]);
        // grid[i][j]: row i walks from edge a-b toward c
        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let f = i as f32 / cols as f32;
            let aj = a.lerp(c, f);
            let bj = b.lerp(c, f);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    let p = if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    };
                    welder.insert(p.normalize() * radius)
                })
                .collect();
            grid.push(row);
        }
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                if j % 2 == 0 {
                    indices.extend_from_slice(&[grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
                } else {
                    indices.extend_from_slice(&[
                        grid[i][k + 1],
                        grid[i + 1][k + 1],
                        grid[i + 1][k],
                    ]);
                }
            }
        }
    }

    Mesh {
        positions: welder.positions,
        indices,
    }
}

// Quad grid of (major + 1) x (minor + 1) vertices, two triangles per cell.
fn grid_indices(major: u32, minor: u32) -> Vec<u32> {
    let stride = minor + 1;
    let mut indices = Vec::with_capacity((major * minor * 6) as usize);
    for j in 1..=major {
        for i in 1..=minor {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    indices
}

fn knot_curve(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let cu = u.cos();
    let su = u.sin();
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * cu,
        radius * (2.0 + cs) * su * 0.5,
        radius * qu_over_p.sin() * 0.5,
    )
}

/// (p, q) torus knot swept by a circular tube.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> Mesh {
    let mut positions =
        Vec::with_capacity(((tubular_segments + 1) * (radial_segments + 1)) as usize);
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;
        let p1 = knot_curve(u, p, q, radius);
        let p2 = knot_curve(u + 0.01, p, q, radius);
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize();
        let n = b.cross(t).normalize();
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            positions.push(p1 + n * cx + b * cy);
        }
    }
    Mesh {
        positions,
        indices: grid_indices(tubular_segments, radial_segments),
    }
}

/// Ring torus lying in the XY plane.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let mut positions =
        Vec::with_capacity(((radial_segments + 1) * (tubular_segments + 1)) as usize);
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            positions.push(Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            ));
        }
    }
    Mesh {
        positions,
        indices: grid_indices(radial_segments, tubular_segments),
    }
}
