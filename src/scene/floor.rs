use glam::Vec2;

use super::mesh::{floor_vertices, MeshVertex};

/// The ground plane: a textured quad in the Z = 0 plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    /// Half extent along X and Y.
    pub half_extent: f32,
    /// How many times the checkerboard repeats across the span.
    pub repetitions: f32,
}

impl Floor {
    /// Create a floor covering `[-half_extent, half_extent]²`.
    #[must_use]
    pub fn new(half_extent: f32, repetitions: f32) -> Self {
        Self {
            half_extent,
            repetitions,
        }
    }

    /// Produce the six vertices the renderer uploads.
    #[must_use]
    pub fn vertices(&self) -> [MeshVertex; 6] {
        floor_vertices(
            Vec2::splat(self.half_extent),
            self.repetitions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_span_the_half_extent() {
        let floor = Floor::new(20.0, 20.0);
        let verts = floor.vertices();
        for v in &verts {
            assert!(v.position[0].abs() == 20.0);
            assert!(v.position[1].abs() == 20.0);
            assert_eq!(v.position[2], 0.0);
        }
    }
}
