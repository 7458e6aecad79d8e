use crate::data::{CorrespondenceSet, Point2D};
use crate::error::MatchError;
use serde::{Deserialize, Serialize};

/// Mean Euclidean distance between index-aligned points of two images
pub fn mean_distance(p1: &[Point2D], p2: &[Point2D]) -> Result<f64, MatchError> {
    if p1.len() != p2.len() {
        return Err(MatchError::DimensionMismatch {
            left: p1.len(),
            right: p2.len(),
        });
    }
    if p1.is_empty() {
        return Err(MatchError::EmptyDataset);
    }

    let accum: f64 = p1.iter().zip(p2).map(|(a, b)| a.distance(b)).sum();
    Ok(accum / p1.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairDistance {
    /// 1-based image numbers
    pub images: (usize, usize),
    pub mean_distance: f64,
}

/// Mean distance for every image pair of the set: 1-2 for pairs,
/// 1-2, 2-3 and 1-3 for triplets.
pub fn pairwise_mean_distances(set: &CorrespondenceSet) -> Result<Vec<PairDistance>, MatchError> {
    let n = set.arity().points();
    let projections: Vec<Vec<Point2D>> = (0..n).map(|k| set.image_points(k)).collect();

    let mut pairs: Vec<(usize, usize)> = (0..n - 1).map(|k| (k, k + 1)).collect();
    if n > 2 {
        pairs.push((0, n - 1));
    }

    pairs
        .into_iter()
        .map(|(a, b)| {
            Ok(PairDistance {
                images: (a + 1, b + 1),
                mean_distance: mean_distance(&projections[a], &projections[b])?,
            })
        })
        .collect()
}
