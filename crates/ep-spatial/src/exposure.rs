//! Proximity index over the exposure set.
//!
//! Built once per tick from the positions of every infected agent, before
//! anyone moves.  Queries go through an R-tree (via `rstar`) with a padded
//! search radius; the final decision is always [`Point::in_range`], so the
//! strict `distance < radius` rule holds regardless of float rounding in the
//! squared-distance prefilter.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use ep_core::Point;

/// Padding added to the query radius before the R-tree prefilter.
const QUERY_PADDING: f64 = 1.0;

#[derive(Clone, Debug)]
struct ExposureEntry {
    point: [f64; 2],
}

impl ExposureEntry {
    #[inline]
    fn position(&self) -> Point {
        Point::new(self.point[0], self.point[1])
    }
}

impl RTreeObject for ExposureEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ExposureEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Positions of every infected agent at the start of a tick.
pub struct ExposureIndex {
    tree: RTree<ExposureEntry>,
}

impl ExposureIndex {
    /// Bulk-load the index from the exposure positions.
    pub fn build<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let entries: Vec<ExposureEntry> = positions
            .into_iter()
            .map(|p| ExposureEntry { point: [p.x, p.y] })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// `true` if at least one exposure position lies strictly within
    /// `radius` of `position`.
    pub fn is_exposed(&self, position: Point, radius: f64) -> bool {
        if self.is_empty() || radius.is_nan() || radius <= 0.0 {
            return false;
        }
        let search = radius + QUERY_PADDING;
        self.tree
            .locate_within_distance([position.x, position.y], search * search)
            .any(|entry| position.in_range(entry.position(), radius))
    }
}
