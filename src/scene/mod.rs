//! Scene contents: the ground plane, the tanks, and the procedural
//! meshes both are built from.

/// Ground plane parameters and vertex production.
pub mod floor;
/// Vertex type and procedural mesh builders.
pub mod mesh;
/// Tank placement, orbit animation, and world matrices.
pub mod tank;

pub use floor::Floor;
pub use mesh::{Mesh, MeshVertex};
pub use tank::{Orbit, Tank};

use crate::options::SceneOptions;

/// Everything that gets drawn: one floor and a handful of tanks.
pub struct Scene {
    /// The ground plane.
    pub floor: Floor,
    /// All tanks, static and orbiting.
    pub tanks: Vec<Tank>,
    /// When true, orbit angles stop advancing.
    pub orbit_paused: bool,
}

impl Scene {
    /// Build the scene described by the given options: one orbiting tank
    /// plus a static tank at each configured position.
    #[must_use]
    pub fn from_options(options: &SceneOptions) -> Self {
        let mut tanks = vec![Tank::orbiting(Orbit {
            radius: options.orbit_radius,
            height: options.orbit_height,
            speed: options.orbit_speed,
        })];
        for pos in &options.static_tanks {
            tanks.push(Tank::static_at((*pos).into()));
        }

        Self {
            floor: Floor::new(
                options.floor_half_extent,
                options.floor_repetitions,
            ),
            tanks,
            orbit_paused: false,
        }
    }

    /// Advance orbit animation. Static tanks are unaffected.
    pub fn update(&mut self, dt: f32) {
        if self.orbit_paused {
            return;
        }
        for tank in &mut self.tanks {
            tank.update(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_has_one_orbiter() {
        let scene = Scene::from_options(&SceneOptions::default());
        let orbiting =
            scene.tanks.iter().filter(|t| t.orbit.is_some()).count();
        assert_eq!(orbiting, 1);
        assert!(scene.tanks.len() > 1);
    }

    #[test]
    fn pausing_freezes_orbits() {
        let mut scene = Scene::from_options(&SceneOptions::default());
        scene.orbit_paused = true;
        let before = scene.tanks[0].angle;
        scene.update(1.0);
        assert_eq!(scene.tanks[0].angle, before);

        scene.orbit_paused = false;
        scene.update(1.0);
        assert!(scene.tanks[0].angle != before);
    }
}
