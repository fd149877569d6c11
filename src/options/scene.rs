use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Scene layout: floor dimensions, texture tiling, and tank placement.
pub struct SceneOptions {
    /// Floor half extent along X and Y.
    pub floor_half_extent: f32,
    /// How many times the checkerboard repeats across the floor.
    pub floor_repetitions: f32,
    /// Squares per side of the generated checkerboard texture.
    pub checker_squares: u32,
    /// Pixels per checkerboard square.
    pub checker_square_px: u32,
    /// Orbiting tank: distance from the origin.
    pub orbit_radius: f32,
    /// Orbiting tank: height above the floor.
    pub orbit_height: f32,
    /// Orbiting tank: angular speed in radians per second.
    pub orbit_speed: f32,
    /// Positions of the parked tanks.
    pub static_tanks: Vec<[f32; 3]>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            floor_half_extent: 20.0,
            floor_repetitions: 20.0,
            checker_squares: 2,
            checker_square_px: 64,
            orbit_radius: 8.0,
            orbit_height: 3.0,
            orbit_speed: 1.0,
            static_tanks: vec![[-10.0, 5.0, 0.0], [-6.0, -9.0, 0.0]],
        }
    }
}
