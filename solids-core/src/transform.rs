/// Rotation state accumulated from user input or auto-rotation
///
/// Angles are unbounded radians; the projector feeds them straight into
/// `sin`/`cos`, which are naturally periodic, so callers never need to wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);

        state.rotate(0.1, 0.2);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.2).abs() < 1e-6);

        state.rotate(-0.1, 0.3);
        assert!(state.x.abs() < 1e-6);
        assert!((state.y - 0.5).abs() < 1e-6);
    }
}
