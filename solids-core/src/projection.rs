/// Rotation and perspective projection of 3D points to screen space
use nalgebra::Point3;

use crate::error::GeometryError;
use crate::transform::RotationState;

/// Focal constant converting rotated depth into a 2D scale multiplier.
pub const FOCAL_LENGTH: f32 = 400.0;
/// Distance from the virtual camera to the object origin.
pub const CAMERA_DISTANCE: f32 = 4.0;

/// A projected point: screen-space pixels plus the post-rotation,
/// pre-divide depth, kept for caller-side depth effects such as z-sorting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Project one point into a `width` x `height` viewport under `rotation`.
///
/// The point is rotated around the Y axis, then around the X axis (the two
/// do not commute; this order is part of the contract), then perspective
/// scaled by `FOCAL_LENGTH / (CAMERA_DISTANCE + depth)` and centered on the
/// viewport.
///
/// Depths at or behind `-CAMERA_DISTANCE` put the point on or behind the
/// camera plane: the scale explodes or flips sign. That case is deliberately
/// not clamped; the catalog's object extents stay well inside the safe
/// range, and a divisor of exactly zero surfaces as a `NumericDomain` error
/// rather than a silent non-finite coordinate.
pub fn project(
    point: &Point3<f32>,
    width: f32,
    height: f32,
    rotation: RotationState,
) -> Result<Point2D, GeometryError> {
    let finite_inputs = point.iter().all(|c| c.is_finite())
        && width.is_finite()
        && height.is_finite()
        && rotation.x.is_finite()
        && rotation.y.is_finite();
    if !finite_inputs {
        return Err(GeometryError::NumericDomain {
            context: "projection input",
        });
    }

    // Y-axis rotation
    let (sin_y, cos_y) = rotation.y.sin_cos();
    let x1 = point.x * cos_y - point.z * sin_y;
    let z1 = point.z * cos_y + point.x * sin_y;

    // X-axis rotation
    let (sin_x, cos_x) = rotation.x.sin_cos();
    let y2 = point.y * cos_x - z1 * sin_x;
    let z2 = z1 * cos_x + point.y * sin_x;

    // Perspective
    let scale = FOCAL_LENGTH / (CAMERA_DISTANCE + z2);

    let x = x1 * scale + width / 2.0;
    let y = y2 * scale + height / 2.0;
    if !(x.is_finite() && y.is_finite()) {
        return Err(GeometryError::NumericDomain {
            context: "perspective divide",
        });
    }

    Ok(Point2D { x, y, depth: z2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32, z: f32) -> Point3<f32> {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_origin_maps_to_viewport_center() {
        let p = project(&pt(0.0, 0.0, 0.0), 800.0, 600.0, RotationState::zero()).unwrap();
        assert_eq!(p.x, 400.0);
        assert_eq!(p.y, 300.0);
        assert_eq!(p.depth, 0.0);
    }

    #[test]
    fn test_identity_rotation_is_pure_perspective() {
        let (x, y, z) = (1.0, -0.5, 2.0);
        let p = project(&pt(x, y, z), 800.0, 600.0, RotationState::zero()).unwrap();
        let scale = FOCAL_LENGTH / (CAMERA_DISTANCE + z);
        assert!((p.x - (x * scale + 400.0)).abs() < 1e-4);
        assert!((p.y - (y * scale + 300.0)).abs() < 1e-4);
        assert!((p.depth - z).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_order_is_y_then_x() {
        let point = pt(1.0, 0.7, -0.3);
        let joint = project(&point, 800.0, 600.0, RotationState::new(0.3, 0.3)).unwrap();

        // Manually compose in the contract order and compare.
        let (sy, cy) = 0.3_f32.sin_cos();
        let x1 = point.x * cy - point.z * sy;
        let z1 = point.z * cy + point.x * sy;
        let (sx, cx) = 0.3_f32.sin_cos();
        let y2 = point.y * cx - z1 * sx;
        let z2 = z1 * cx + point.y * sx;
        let scale = FOCAL_LENGTH / (CAMERA_DISTANCE + z2);
        assert!((joint.x - (x1 * scale + 400.0)).abs() < 1e-4);
        assert!((joint.y - (y2 * scale + 300.0)).abs() < 1e-4);
    }

    #[test]
    fn test_rotations_do_not_commute() {
        let point = pt(1.0, 0.7, -0.3);
        let x_only = project(&point, 800.0, 600.0, RotationState::new(0.3, 0.0)).unwrap();
        let y_only = project(&point, 800.0, 600.0, RotationState::new(0.0, 0.3)).unwrap();
        let joint = project(&point, 800.0, 600.0, RotationState::new(0.3, 0.3)).unwrap();
        assert!((joint.x - x_only.x).abs() > 1e-3);
        assert!((joint.y - y_only.y).abs() > 1e-3);
    }

    #[test]
    fn test_depth_is_pre_divide() {
        // A point rotated into positive depth keeps that depth unscaled.
        let p = project(&pt(0.0, 0.0, 1.5), 800.0, 600.0, RotationState::zero()).unwrap();
        assert_eq!(p.depth, 1.5);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = project(&pt(bad, 0.0, 0.0), 800.0, 600.0, RotationState::zero()).unwrap_err();
            assert!(matches!(err, GeometryError::NumericDomain { .. }));
        }
        let err = project(
            &pt(0.0, 0.0, 0.0),
            800.0,
            600.0,
            RotationState::new(f32::NAN, 0.0),
        )
        .unwrap_err();
        assert!(matches!(err, GeometryError::NumericDomain { .. }));
    }

    #[test]
    fn test_camera_plane_divisor_is_an_error() {
        // z2 == -CAMERA_DISTANCE makes the perspective divisor exactly zero.
        let err = project(
            &pt(1.0, 0.0, -CAMERA_DISTANCE),
            800.0,
            600.0,
            RotationState::zero(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GeometryError::NumericDomain {
                context: "perspective divide"
            }
        ));
    }
}
