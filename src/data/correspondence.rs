use crate::error::MatchError;
use serde::{Deserialize, Serialize};

/// Image-pixel coordinate, possibly sub-pixel
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Number of images each correspondence spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    Pair,
    Triplet,
}

impl Arity {
    pub fn points(self) -> usize {
        match self {
            Arity::Pair => 2,
            Arity::Triplet => 3,
        }
    }

    /// Numbers expected on one line of a match file
    pub fn values_per_line(self) -> usize {
        self.points() * 2
    }
}

/// Matched points across 2 or 3 images, one tuple per feature.
///
/// Tuple `i` holds the position of feature `i` in image 1, image 2 and,
/// for triplets, image 3. Every tuple has the set's arity.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrespondenceSet {
    arity: Arity,
    points: Vec<Point2D>,
}

impl CorrespondenceSet {
    pub fn new(arity: Arity) -> Self {
        Self {
            arity,
            points: Vec::new(),
        }
    }

    pub fn from_tuples<I, T>(arity: Arity, tuples: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[Point2D]>,
    {
        let mut set = Self::new(arity);
        for tuple in tuples {
            set.push(tuple.as_ref())?;
        }
        Ok(set)
    }

    pub(crate) fn push(&mut self, tuple: &[Point2D]) -> Result<(), MatchError> {
        if tuple.len() != self.arity.points() {
            return Err(MatchError::ArityMismatch {
                expected: self.arity.points(),
                found: tuple.len(),
            });
        }
        self.points.extend_from_slice(tuple);
        Ok(())
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.points.len() / self.arity.points()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[Point2D]> {
        let n = self.arity.points();
        let start = index.checked_mul(n)?;
        self.points.get(start..start.checked_add(n)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Point2D]> + '_ {
        self.points.chunks_exact(self.arity.points())
    }

    /// Positions of every feature in image `image` (0-based)
    pub fn image_points(&self, image: usize) -> Vec<Point2D> {
        if image >= self.arity.points() {
            return Vec::new();
        }
        self.iter().map(|tuple| tuple[image]).collect()
    }
}
