//! Screen placement and camera-aligned transform
//!
//! The legend is a unit triad in its own local space. [`Placement::matrix`]
//! produces the local-to-screen transform that rotates the triad to match
//! the viewport camera, scales it to the desired on-screen radius, and
//! moves it to the committed anchor point.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::placement::{DEPTH_FLATTEN, REST_TILT_DEGREES};

/// Where and how large the legend appears on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Committed anchor in screen coordinates, measured from the top-left
    /// corner. Only a drag commit moves this.
    pub anchor: Vec2,
    /// Desired on-screen radius of the triad.
    pub size: f32,
    /// Seismic convention: vertical and depth axes inverted (z-axis down)
    /// relative to the renderer's z-axis-up convention.
    pub seismic_coords: bool,
}

impl Placement {
    /// Creates a placement at the given anchor.
    pub fn new(anchor: Vec2, size: f32, seismic_coords: bool) -> Self {
        Self {
            anchor,
            size,
            seismic_coords,
        }
    }

    /// Local-to-screen transform for the given camera orientation.
    ///
    /// Steps are composed so that each one applies after the previous:
    /// seismic axis flip, fixed tilt to the camera-facing rest pose,
    /// camera azimuth about Y, camera elevation about X, screen-plane
    /// scaling with a flattened depth axis, and finally translation to
    /// the anchor. Reordering any of them changes the result.
    ///
    /// Angles are in degrees. Only valid for turntable cameras; a camera
    /// with roll would need a full basis, not two angles.
    pub fn matrix(&self, azimuth_deg: f32, elevation_deg: f32) -> Mat4 {
        let mut m = Mat4::IDENTITY;

        // Invert vertical and depth axes in the seismic convention.
        if self.seismic_coords {
            m = Mat4::from_scale(Vec3::new(1.0, -1.0, -1.0)) * m;
        }

        // Tilt the rest pose upright, then follow the camera orbit.
        m = Mat4::from_rotation_x(REST_TILT_DEGREES.to_radians()) * m;
        m = Mat4::from_rotation_y(azimuth_deg.to_radians()) * m;
        m = Mat4::from_rotation_x(elevation_deg.to_radians()) * m;

        // Scale in the screen plane only; the overlay carries no real depth.
        m = Mat4::from_scale(Vec3::new(self.size, self.size, DEPTH_FLATTEN)) * m;
        m = Mat4::from_translation(self.anchor.extend(0.0)) * m;

        m
    }

    /// Whether a screen point falls inside the legend's interactive
    /// footprint (the highlight circle around the anchor).
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.anchor) <= self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(seismic: bool) -> Placement {
        Placement::new(Vec2::new(60.0, 60.0), 50.0, seismic)
    }

    #[test]
    fn test_matrix_is_deterministic() {
        let p = placement(true);
        for azimuth in [-180.0, -30.0, 0.0, 45.0, 170.0] {
            for elevation in [-80.0, 0.0, 35.5, 90.0] {
                assert_eq!(p.matrix(azimuth, elevation), p.matrix(azimuth, elevation));
            }
        }
    }

    #[test]
    fn test_origin_maps_to_anchor_at_rest() {
        // With both camera angles at zero the origin lands exactly on the
        // anchor, in either coordinate convention.
        for seismic in [false, true] {
            let p = placement(seismic);
            let origin = p.matrix(0.0, 0.0).transform_point3(Vec3::ZERO);
            assert_eq!(origin.truncate(), p.anchor);
            assert_eq!(origin.z, 0.0);
        }
    }

    #[test]
    fn test_x_axis_spans_display_size_at_rest() {
        let p = placement(false);
        let tip = p.matrix(0.0, 0.0).transform_point3(Vec3::X);
        assert!((tip.x - 110.0).abs() < 1e-4);
        assert!((tip.y - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_seismic_flips_vertical_and_depth() {
        // The seismic matrix is the standard one with a (1, -1, -1) scale
        // applied before everything else.
        let standard = placement(false).matrix(30.0, -45.0);
        let seismic = placement(true).matrix(30.0, -45.0);
        let flipped = standard * Mat4::from_scale(Vec3::new(1.0, -1.0, -1.0));
        assert!(seismic.abs_diff_eq(flipped, 1e-5));
    }

    #[test]
    fn test_depth_is_flattened() {
        let m = placement(true).matrix(25.0, 40.0);
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            let mapped = m.transform_point3(axis);
            assert!(mapped.z.abs() <= crate::constants::placement::DEPTH_FLATTEN + 1e-6);
        }
    }

    #[test]
    fn test_contains_respects_radius() {
        let p = placement(true);
        assert!(p.contains(Vec2::new(60.0, 60.0)));
        assert!(p.contains(Vec2::new(60.0, 110.0))); // on the rim
        assert!(!p.contains(Vec2::new(60.0, 110.5)));
        assert!(!p.contains(Vec2::ZERO));
    }
}
