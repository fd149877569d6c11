//! Vertex type and procedural mesh builders.
//!
//! The crate ships no model or texture assets; the floor is six vertices
//! and the tank is assembled from axis-aligned boxes plus a Z-axis
//! cylinder for the turret.

use glam::{Vec2, Vec3};

/// A mesh vertex: position, normal, texture coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// World/model-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Texture coordinates (may exceed 1.0 for repeating textures).
    pub uv: [f32; 2],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x2,
    ];

    /// Vertex buffer layout for all scene pipelines.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// An indexed triangle mesh under construction.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    /// Vertex list.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Append an axis-aligned box centered at `center` with the given
    /// half extents. Faces wind counter-clockwise seen from outside.
    pub fn push_box(&mut self, center: Vec3, half: Vec3) {
        // (normal, tangent, bitangent) triples with t × b = n, so the
        // shared corner order stays counter-clockwise from outside.
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::Y, Vec3::X),
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        ];

        for (n, t, b) in FACES {
            let base = self.vertices.len() as u32;
            let face_center = center + n * (n.abs() * half).length();
            let ht = t * (t.abs() * half).length();
            let hb = b * (b.abs() * half).length();

            for (st, sb, uv) in [
                (-1.0, -1.0, [0.0, 0.0]),
                (1.0, -1.0, [1.0, 0.0]),
                (1.0, 1.0, [1.0, 1.0]),
                (-1.0, 1.0, [0.0, 1.0]),
            ] {
                self.vertices.push(MeshVertex {
                    position: (face_center + ht * st + hb * sb).to_array(),
                    normal: n.to_array(),
                    uv,
                });
            }
            self.indices.extend_from_slice(&[
                base,
                base + 1,
                base + 2,
                base,
                base + 2,
                base + 3,
            ]);
        }
    }

    /// Append a cylinder along the Z axis centered at `center`, with
    /// radial side normals and flat caps.
    pub fn push_cylinder(
        &mut self,
        center: Vec3,
        radius: f32,
        half_height: f32,
        segments: u32,
    ) {
        let segments = segments.max(3);
        let step = std::f32::consts::TAU / segments as f32;

        for i in 0..segments {
            let a0 = i as f32 * step;
            let a1 = (i + 1) as f32 * step;
            let n0 = Vec3::new(a0.cos(), a0.sin(), 0.0);
            let n1 = Vec3::new(a1.cos(), a1.sin(), 0.0);
            let bottom0 = center + n0 * radius - Vec3::Z * half_height;
            let bottom1 = center + n1 * radius - Vec3::Z * half_height;
            let top0 = center + n0 * radius + Vec3::Z * half_height;
            let top1 = center + n1 * radius + Vec3::Z * half_height;

            // Side quad.
            let base = self.vertices.len() as u32;
            let u0 = i as f32 / segments as f32;
            let u1 = (i + 1) as f32 / segments as f32;
            for (pos, n, uv) in [
                (bottom0, n0, [u0, 0.0]),
                (bottom1, n1, [u1, 0.0]),
                (top1, n1, [u1, 1.0]),
                (top0, n0, [u0, 1.0]),
            ] {
                self.vertices.push(MeshVertex {
                    position: pos.to_array(),
                    normal: n.to_array(),
                    uv,
                });
            }
            self.indices.extend_from_slice(&[
                base,
                base + 1,
                base + 2,
                base,
                base + 2,
                base + 3,
            ]);

            // Caps: fan triangles sharing the cap center.
            let top_center = center + Vec3::Z * half_height;
            let bottom_center = center - Vec3::Z * half_height;
            self.push_cap_triangle(top_center, top0, top1, Vec3::Z);
            self.push_cap_triangle(bottom_center, bottom1, bottom0, Vec3::NEG_Z);
        }
    }

    fn push_cap_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, normal: Vec3) {
        let base = self.vertices.len() as u32;
        for pos in [a, b, c] {
            self.vertices.push(MeshVertex {
                position: pos.to_array(),
                normal: normal.to_array(),
                uv: [0.5, 0.5],
            });
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// The shared tank mesh: two tracks, a hull, a cylindrical turret,
    /// and a barrel pointing along +X. Sits on the Z = 0 plane.
    #[must_use]
    pub fn tank() -> Self {
        let mut mesh = Self::default();

        // Tracks.
        mesh.push_box(
            Vec3::new(0.0, 1.2, 0.4),
            Vec3::new(2.0, 0.4, 0.4),
        );
        mesh.push_box(
            Vec3::new(0.0, -1.2, 0.4),
            Vec3::new(2.0, 0.4, 0.4),
        );
        // Hull.
        mesh.push_box(
            Vec3::new(0.0, 0.0, 1.3),
            Vec3::new(1.8, 1.0, 0.5),
        );
        // Turret.
        mesh.push_cylinder(Vec3::new(0.0, 0.0, 2.2), 0.9, 0.4, 16);
        // Barrel.
        mesh.push_box(
            Vec3::new(2.0, 0.0, 2.2),
            Vec3::new(1.4, 0.12, 0.12),
        );

        mesh
    }
}

/// The floor's six vertices: two triangles spanning
/// `[-half, half]²` in the Z = 0 plane, texture coordinates repeating
/// `repetitions` times across the span.
#[must_use]
pub fn floor_vertices(half: Vec2, repetitions: f32) -> [MeshVertex; 6] {
    let n = [0.0, 0.0, 1.0];
    let v = |x: f32, y: f32, u: f32, t: f32| MeshVertex {
        position: [x, y, 0.0],
        normal: n,
        uv: [u, t],
    };

    let corner_a = v(-half.x, -half.y, 0.0, 0.0);
    let corner_b = v(-half.x, half.y, 0.0, repetitions);
    let corner_c = v(half.x, -half.y, repetitions, 0.0);
    let corner_d = v(half.x, half.y, repetitions, repetitions);

    [corner_a, corner_b, corner_c, corner_b, corner_d, corner_c]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn normals_are_unit(mesh: &Mesh) {
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < EPS, "normal {:?}", v.normal);
        }
    }

    fn indices_in_bounds(mesh: &Mesh) {
        assert_eq!(mesh.indices.len() % 3, 0);
        for &i in &mesh.indices {
            assert!((i as usize) < mesh.vertices.len());
        }
    }

    #[test]
    fn box_has_six_quad_faces() {
        let mut mesh = Mesh::default();
        mesh.push_box(Vec3::ZERO, Vec3::ONE);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        normals_are_unit(&mesh);
        indices_in_bounds(&mesh);
    }

    #[test]
    fn box_faces_wind_outward() {
        let mut mesh = Mesh::default();
        mesh.push_box(Vec3::ZERO, Vec3::ONE);
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [
                Vec3::from_array(mesh.vertices[tri[0] as usize].position),
                Vec3::from_array(mesh.vertices[tri[1] as usize].position),
                Vec3::from_array(mesh.vertices[tri[2] as usize].position),
            ];
            let geometric = (b - a).cross(c - a);
            let stored =
                Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
            assert!(
                geometric.dot(stored) > 0.0,
                "triangle winds against its normal"
            );
        }
    }

    #[test]
    fn cylinder_normals_and_indices_hold_up() {
        let mut mesh = Mesh::default();
        mesh.push_cylinder(Vec3::new(1.0, 2.0, 3.0), 0.9, 0.4, 16);
        normals_are_unit(&mesh);
        indices_in_bounds(&mesh);

        // All positions stay within radius of the axis and the height
        // bounds.
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let radial =
                Vec2::new(p.x - 1.0, p.y - 2.0).length();
            assert!(radial <= 0.9 + EPS);
            assert!(p.z >= 3.0 - 0.4 - EPS && p.z <= 3.0 + 0.4 + EPS);
        }
    }

    #[test]
    fn tank_sits_on_the_ground() {
        let mesh = Mesh::tank();
        normals_are_unit(&mesh);
        indices_in_bounds(&mesh);

        let min_z = mesh
            .vertices
            .iter()
            .map(|v| v.position[2])
            .fold(f32::INFINITY, f32::min);
        assert!(min_z.abs() < EPS);
    }

    #[test]
    fn floor_layout_matches_the_two_triangle_quad() {
        let verts = floor_vertices(Vec2::new(20.0, 20.0), 20.0);
        assert_eq!(verts[0].position, [-20.0, -20.0, 0.0]);
        assert_eq!(verts[1].position, [-20.0, 20.0, 0.0]);
        assert_eq!(verts[2].position, [20.0, -20.0, 0.0]);
        // The second triangle shares two corners with the first.
        assert_eq!(verts[3], verts[1]);
        assert_eq!(verts[5], verts[2]);
        assert_eq!(verts[4].position, [20.0, 20.0, 0.0]);
        assert_eq!(verts[4].uv, [20.0, 20.0]);
        assert_eq!(verts[0].uv, [0.0, 0.0]);
    }
}
