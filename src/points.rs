use crate::error::SamplerError;
use nalgebra::Point2;

/// The fixed vertex positions for one sampling run.
///
/// Loaded once, immutable afterwards; vertex `i` sits at `points[i]`.
/// Edge weights everywhere in the crate are Euclidean distances between
/// these positions.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point2<f64>>,
}

impl PointSet {
    /// Build a point set from an ordered list of positions.
    ///
    /// Fails with `InvalidInput` for fewer than 2 points: no connected
    /// simple graph exists on the remaining vertex counts worth sampling.
    pub fn new(points: Vec<Point2<f64>>) -> Result<Self, SamplerError> {
        if points.len() < 2 {
            return Err(SamplerError::InvalidInput { found: points.len() });
        }
        Ok(Self { points })
    }

    /// Convenience constructor from raw coordinate pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, SamplerError> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn n(&self) -> usize {
        self.points.len()
    }

    /// Fewest edges keeping `n` vertices connected (a spanning tree).
    #[inline(always)]
    pub fn min_edges(&self) -> usize {
        self.n() - 1
    }

    /// Most edges a simple graph on `n` vertices can carry.
    #[inline(always)]
    pub fn max_edges(&self) -> usize {
        self.n() * (self.n() - 1) / 2
    }

    /// Euclidean distance between vertices `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        nalgebra::distance(&self.points[i], &self.points[j])
    }

    pub fn position(&self, i: usize) -> Point2<f64> {
        self.points[i]
    }
}
