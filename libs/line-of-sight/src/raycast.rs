//! Raycast query adapter.
//!
//! Wraps the host's [`RayIntersector`] and counts how many queries a sweep
//! issued, so the bound `step_count * (1 + edge_resolve_iterations)` can be
//! observed from the outside.

use std::cell::Cell;
use std::marker::PhantomData;

use crate::host::RayIntersector;

/// Counting adapter over a host intersector.
pub struct RaycastQuery<'a, V, R: ?Sized> {
    intersector: &'a R,
    queries: Cell<usize>,
    _point: PhantomData<fn(V) -> V>,
}

impl<'a, V, R> RaycastQuery<'a, V, R>
where
    R: RayIntersector<V> + ?Sized,
{
    /// Wraps an intersector.
    pub fn new(intersector: &'a R) -> Self {
        Self {
            intersector,
            queries: Cell::new(0),
            _point: PhantomData,
        }
    }

    /// Casts `origin → target`; `None` means the segment is clear.
    pub fn cast(&self, origin: V, target: V) -> Option<V> {
        self.queries.set(self.queries.get() + 1);
        self.intersector.intersect_ray(origin, target)
    }

    /// Number of queries issued through this adapter.
    pub fn query_count(&self) -> usize {
        self.queries.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_cast_delegates_and_counts() {
        let always_hit = |from: DVec2, _to: DVec2| Some(from + DVec2::X);
        let rays: RaycastQuery<DVec2, _> = RaycastQuery::new(&always_hit);
        assert_eq!(rays.cast(DVec2::ZERO, DVec2::Y), Some(DVec2::X));
        assert_eq!(rays.cast(DVec2::ONE, DVec2::Y), Some(DVec2::new(2.0, 1.0)));
        assert_eq!(rays.query_count(), 2);
    }

    #[test]
    fn test_miss_is_not_an_error() {
        let never_hit = |_: DVec2, _: DVec2| -> Option<DVec2> { None };
        let rays: RaycastQuery<DVec2, _> = RaycastQuery::new(&never_hit);
        assert_eq!(rays.cast(DVec2::ZERO, DVec2::X), None);
        assert_eq!(rays.query_count(), 1);
    }
}
