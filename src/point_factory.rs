//! Uniformly random in-bounds points.

use rand::Rng;

use crate::error::CubeError;
use crate::model::{Dimension, Point};

/// A uniformly random point inside the dimension.
pub fn random(dim: Dimension) -> Point {
    sample(&mut rand::thread_rng(), dim, 0)
}

/// A uniformly random point inset from the border by `offset`.
///
/// Every coordinate lands in `[offset, axis - offset)`. Fails with
/// [`CubeError::InvalidOffset`] when any axis is not larger than twice the
/// offset.
pub fn random_inset(dim: Dimension, offset: u32) -> Result<Point, CubeError> {
    random_inset_with(&mut rand::thread_rng(), dim, offset)
}

/// Like [`random_inset`], drawing from a caller-supplied generator so
/// sampling can be made deterministic.
pub fn random_inset_with<R: Rng>(
    rng: &mut R,
    dim: Dimension,
    offset: u32,
) -> Result<Point, CubeError> {
    let margin = 2 * offset as u64;
    if dim.width() as u64 <= margin || dim.height() as u64 <= margin || dim.depth() as u64 <= margin
    {
        return Err(CubeError::InvalidOffset {
            offset,
            dimension: dim,
        });
    }
    Ok(sample(rng, dim, offset))
}

/// Draw one point. Requires `axis > 2 * offset` on every axis.
fn sample<R: Rng>(rng: &mut R, dim: Dimension, offset: u32) -> Point {
    let x = rng.gen_range(offset..dim.width() - offset);
    let y = rng.gen_range(offset..dim.height() - offset);
    let z = rng.gen_range(offset..dim.depth() - offset);
    Point::new(x as i32, y as i32, z as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_is_in_bounds() {
        let dim = Dimension::new(2, 3, 4).unwrap();
        for _ in 0..100 {
            assert!(dim.contains(random(dim)));
        }
    }

    #[test]
    fn test_unit_dimension_has_one_choice() {
        let dim = Dimension::cubic(1).unwrap();
        assert_eq!(random(dim), Point::new(0, 0, 0));
    }

    #[test]
    fn test_inset_respects_offset() {
        let dim = Dimension::cubic(5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = random_inset_with(&mut rng, dim, 2).unwrap();
            assert_eq!(p, Point::new(2, 2, 2));
        }
    }

    #[test]
    fn test_invalid_offset() {
        let dim = Dimension::new(4, 8, 8).unwrap();
        // width 4 <= 2 * 2
        let err = random_inset(dim, 2).unwrap_err();
        assert!(matches!(err, CubeError::InvalidOffset { .. }));
        // offset large enough to overflow a naive doubling
        assert!(random_inset(dim, u32::MAX).is_err());
    }

    proptest! {
        #[test]
        fn random_inset_stays_in_range(
            w in 1u32..16,
            h in 1u32..16,
            d in 1u32..16,
            offset in 0u32..8,
            seed in proptest::num::u64::ANY,
        ) {
            let dim = Dimension::new(w, h, d).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            match random_inset_with(&mut rng, dim, offset) {
                Ok(p) => {
                    prop_assert!(dim.contains(p));
                    for (c, axis) in [(p.x, w), (p.y, h), (p.z, d)] {
                        prop_assert!(c >= offset as i32);
                        prop_assert!(c < (axis - offset) as i32);
                    }
                }
                Err(CubeError::InvalidOffset { .. }) => {
                    prop_assert!(w <= 2 * offset || h <= 2 * offset || d <= 2 * offset);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }
}
