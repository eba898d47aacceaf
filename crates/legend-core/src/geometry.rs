//! Canonical triad line geometry
//!
//! The legend's geometry is a unit-length axis triad expressed as a line
//! list. Hosts transform it by [`Placement::matrix`](crate::Placement::matrix)
//! and hand it to whatever line primitive they render with; the vertex
//! layout is GPU-ready.

use crate::constants::colors;

/// Line vertex with a per-axis color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct AxisVertex {
    /// Vertex position in legend-local space.
    pub position: [f32; 3],
    /// Vertex color (RGB).
    pub color: [f32; 3],
}

/// Generates the unit triad line list (X=red, Y=green, Z=blue).
///
/// Three segments, each from the origin along one local axis. Consecutive
/// vertex pairs form one segment.
pub fn triad_vertices() -> Vec<AxisVertex> {
    vec![
        AxisVertex {
            position: [0.0, 0.0, 0.0],
            color: colors::X_AXIS,
        },
        AxisVertex {
            position: [1.0, 0.0, 0.0],
            color: colors::X_AXIS,
        },
        AxisVertex {
            position: [0.0, 0.0, 0.0],
            color: colors::Y_AXIS,
        },
        AxisVertex {
            position: [0.0, 1.0, 0.0],
            color: colors::Y_AXIS,
        },
        AxisVertex {
            position: [0.0, 0.0, 0.0],
            color: colors::Z_AXIS,
        },
        AxisVertex {
            position: [0.0, 0.0, 1.0],
            color: colors::Z_AXIS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triad_is_three_segments_from_origin() {
        let vertices = triad_vertices();
        assert_eq!(vertices.len(), 6); // 3 segments * 2 vertices
        for segment in vertices.chunks(2) {
            assert_eq!(segment[0].position, [0.0, 0.0, 0.0]);
            assert_eq!(segment[0].color, segment[1].color);
        }
    }

    #[test]
    fn test_axes_are_unit_length_and_distinct() {
        let vertices = triad_vertices();
        let tips = [vertices[1], vertices[3], vertices[5]];
        for (i, tip) in tips.iter().enumerate() {
            let len: f32 = tip.position.iter().map(|c| c * c).sum::<f32>().sqrt();
            assert!((len - 1.0).abs() < 1e-6);
            // One unit along exactly the i-th axis
            assert_eq!(tip.position[i], 1.0);
        }
        assert_ne!(tips[0].color, tips[1].color);
        assert_ne!(tips[1].color, tips[2].color);
        assert_ne!(tips[0].color, tips[2].color);
    }
}
