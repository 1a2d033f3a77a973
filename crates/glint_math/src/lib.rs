// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
mod vec;

pub use interval::Interval;
pub use ray::Ray;
pub use vec::{reflect, ApproxEq, VecExt, EPSILON};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec4_operations() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(4.0, 5.0, 6.0, 7.0);
        assert!((a + b).approx_eq(&Vec4::new(5.0, 7.0, 9.0, 11.0)));
        assert!((b - a).approx_eq(&Vec4::splat(3.0)));
    }
}
