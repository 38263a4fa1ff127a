//! Shape generation for 2D primitives

use glam::{Affine2, Vec2};

use super::vertex::Vertex;

/// Two triangles covering `[min, min + size]`, mapped through `transform`
pub fn quad(transform: &Affine2, min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let corners = [
        min,
        min + Vec2::new(size.x, 0.0),
        min + size,
        min + Vec2::new(0.0, size.y),
    ]
    .map(|c| transform.transform_point2(c));

    let v = |p: Vec2| Vertex::new(p.x, p.y, color);
    [
        v(corners[0]),
        v(corners[1]),
        v(corners[2]),
        v(corners[2]),
        v(corners[3]),
        v(corners[0]),
    ]
}

/// Axis-aligned bounds of a vertex list (min, max)
pub fn bounds(vertices: &[Vertex]) -> Option<(Vec2, Vec2)> {
    let mut iter = vertices.iter().map(|v| Vec2::from_array(v.position));
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_quad_covers_rect() {
        let verts = quad(
            &Affine2::IDENTITY,
            Vec2::new(10.0, 20.0),
            Vec2::new(5.0, 8.0),
            [1.0; 4],
        );
        let (lo, hi) = bounds(&verts).unwrap();
        assert_eq!(lo, Vec2::new(10.0, 20.0));
        assert_eq!(hi, Vec2::new(15.0, 28.0));
    }

    #[test]
    fn test_transformed_quad() {
        let t = Affine2::from_translation(Vec2::new(100.0, 0.0)) * Affine2::from_scale(Vec2::splat(2.0));
        let verts = quad(&t, Vec2::ZERO, Vec2::new(10.0, 10.0), [1.0; 4]);
        let (lo, hi) = bounds(&verts).unwrap();
        assert_eq!(lo, Vec2::new(100.0, 0.0));
        assert_eq!(hi, Vec2::new(120.0, 20.0));
    }

    #[test]
    fn test_bounds_empty() {
        assert!(bounds(&[]).is_none());
    }
}
