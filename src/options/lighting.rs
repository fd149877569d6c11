use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Two-light setup shared by every scene shader. Directions point from
/// the surface toward the light source (normalized in the shader).
pub struct LightingOptions {
    /// Key light direction.
    pub light1_dir: [f32; 3],
    /// Fill light direction.
    pub light2_dir: [f32; 3],
    /// Key light intensity.
    pub light1_intensity: f32,
    /// Fill light intensity.
    pub light2_intensity: f32,
    /// Ambient term.
    pub ambient: f32,
    /// Specular intensity (key light only).
    pub specular_intensity: f32,
    /// Specular shininess exponent.
    pub shininess: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light1_dir: [0.4, -0.5, 0.76],
            light2_dir: [-0.6, 0.7, 0.39],
            light1_intensity: 1.0,
            light2_intensity: 0.4,
            ambient: 0.25,
            specular_intensity: 0.35,
            shininess: 32.0,
        }
    }
}
