use glam::{Mat4, Vec3};

/// Circular orbit parameters around the world origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Distance from the origin.
    pub radius: f32,
    /// Height above the floor.
    pub height: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
}

/// One tank: either parked at a fixed position or circling the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tank {
    /// Orbit parameters, or `None` for a parked tank.
    pub orbit: Option<Orbit>,
    /// Current orbit angle in radians (unused for parked tanks).
    pub angle: f32,
    /// Parked position (unused for orbiting tanks).
    pub position: Vec3,
}

impl Tank {
    /// A tank circling the origin.
    #[must_use]
    pub fn orbiting(orbit: Orbit) -> Self {
        Self {
            orbit: Some(orbit),
            angle: 0.0,
            position: Vec3::ZERO,
        }
    }

    /// A parked tank at a fixed position.
    #[must_use]
    pub fn static_at(position: Vec3) -> Self {
        Self {
            orbit: None,
            angle: 0.0,
            position,
        }
    }

    /// Advance the orbit angle. Parked tanks ignore time.
    pub fn update(&mut self, dt: f32) {
        if let Some(orbit) = self.orbit {
            self.angle = (self.angle + orbit.speed * dt)
                .rem_euclid(std::f32::consts::TAU);
        }
    }

    /// The model-to-world matrix.
    ///
    /// For an orbiting tank: translate out from the origin, then rotate
    /// the whole frame about Z. The combination moves the model in a
    /// circle.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        self.orbit.map_or_else(
            || Mat4::from_translation(self.position),
            |orbit| {
                let translation = Mat4::from_translation(Vec3::new(
                    orbit.radius,
                    0.0,
                    orbit.height,
                ));
                Mat4::from_rotation_z(self.angle) * translation
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn orbiter() -> Tank {
        Tank::orbiting(Orbit {
            radius: 8.0,
            height: 3.0,
            speed: 1.0,
        })
    }

    #[test]
    fn orbit_starts_at_radius_on_x() {
        let tank = orbiter();
        let pos = tank.world_matrix().transform_point3(Vec3::ZERO);
        assert!((pos - Vec3::new(8.0, 0.0, 3.0)).length() < EPS);
    }

    #[test]
    fn quarter_turn_moves_to_y() {
        let mut tank = orbiter();
        tank.update(std::f32::consts::FRAC_PI_2);
        let pos = tank.world_matrix().transform_point3(Vec3::ZERO);
        assert!((pos - Vec3::new(0.0, 8.0, 3.0)).length() < 1e-4);
    }

    #[test]
    fn angle_wraps_at_tau() {
        let mut tank = orbiter();
        tank.update(std::f32::consts::TAU + 0.25);
        assert!((tank.angle - 0.25).abs() < 1e-4);
    }

    #[test]
    fn parked_tank_never_moves() {
        let mut tank = Tank::static_at(Vec3::new(-10.0, 5.0, 0.0));
        tank.update(10.0);
        let pos = tank.world_matrix().transform_point3(Vec3::ZERO);
        assert!((pos - Vec3::new(-10.0, 5.0, 0.0)).length() < EPS);
    }
}
