//! Backend-independent shape outlines centered on the origin

use crate::shape::ShapeKind;

/// Outline of one shape before translation and rotation
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    /// Axis-aligned rectangle given by its top-left corner and size
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
    },
    /// Circle centered on the origin
    Circle {
        /// Radius
        radius: f64,
    },
    /// Closed polygon through the listed vertices
    Polygon(Vec<(f64, f64)>),
}

impl ShapeGeometry {
    /// Whether the outline encloses no area and can be skipped
    pub fn is_degenerate(&self) -> bool {
        match self {
            Self::Rect { width, height, .. } => *width <= 0.0 || *height <= 0.0,
            Self::Circle { radius } => *radius <= 0.0,
            Self::Polygon(points) => {
                points.len() < 3
                    || points
                        .iter()
                        .all(|&(x, y)| x.abs() < f64::EPSILON && y.abs() < f64::EPSILON)
            }
        }
    }
}

/// Outline of `kind` at the given size
///
/// - square: side `size`
/// - circle: radius `size / 2`
/// - triangle: equilateral, apex up, base `size`, height `size * sqrt(3) / 2`
/// - hexagon: vertices at `k * 60` degrees with radius `size`
///
/// The hexagon uses the full size as its radius, so it covers about twice
/// the nominal cell width.
pub fn shape_geometry(kind: ShapeKind, size: f64) -> ShapeGeometry {
    match kind {
        ShapeKind::Square => ShapeGeometry::Rect {
            x: -size / 2.0,
            y: -size / 2.0,
            width: size,
            height: size,
        },
        ShapeKind::Circle => ShapeGeometry::Circle { radius: size / 2.0 },
        ShapeKind::Triangle => {
            let height = size * 3.0_f64.sqrt() / 2.0;
            ShapeGeometry::Polygon(vec![
                (0.0, -height / 2.0),
                (-size / 2.0, height / 2.0),
                (size / 2.0, height / 2.0),
            ])
        }
        ShapeKind::Hexagon => ShapeGeometry::Polygon(
            (0..6)
                .map(|k| {
                    let angle = std::f64::consts::FRAC_PI_3 * f64::from(k);
                    (size * angle.cos(), size * angle.sin())
                })
                .collect(),
        ),
    }
}
