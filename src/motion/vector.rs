use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point or velocity in continuous game units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `target` by factor `t`
    ///
    /// `t == 1.0` returns `target` exactly, which the integrator relies on to
    /// land on the target velocity without overshoot.
    pub fn lerp(self, target: Vec2, t: f64) -> Self {
        if t >= 1.0 {
            return target;
        }
        Self {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_partial_and_full() {
        let from = Vec2::new(0.0, 10.0);
        let to = Vec2::new(4.0, 0.0);
        assert_eq!(from.lerp(to, 0.5), Vec2::new(2.0, 5.0));
        assert_eq!(from.lerp(to, 1.0), to);
        assert_eq!(from.lerp(to, 0.0), from);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_operators() {
        let p = Vec2::new(9.5, 5.0) + Vec2::new(10.0, 0.0) * 0.1;
        assert!((p.x - 10.5).abs() < 1e-12);
        assert_eq!(p.y, 5.0);
        assert_eq!(Vec2::from((1.0, 2.0)) - Vec2::new(1.0, 2.0), Vec2::ZERO);
    }
}
