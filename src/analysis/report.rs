use crate::analysis::{pairwise_mean_distances, PairDistance};
use crate::data::{Arity, CorrespondenceSet};
use crate::error::MatchError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Alignment-quality summary for one match file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_file: String,
    pub mode: Arity,
    pub correspondences: usize,
    pub distances: Vec<PairDistance>,
}

impl MatchReport {
    pub fn compute(match_file: &str, set: &CorrespondenceSet) -> Result<Self, MatchError> {
        let distances = pairwise_mean_distances(set)?;
        for d in &distances {
            tracing::info!(
                image_a = d.images.0,
                image_b = d.images.1,
                mean_distance = d.mean_distance,
                "Computed mean correspondence distance"
            );
        }

        Ok(Self {
            match_file: match_file.to_string(),
            mode: set.arity(),
            correspondences: set.len(),
            distances,
        })
    }

    /// Statistic for images 1 and 2; the remaining triplet pairs go to the
    /// log and the JSON report only
    pub fn summary_line(&self) -> Option<String> {
        self.distances.iter().find(|d| d.images == (1, 2)).map(|d| {
            format!(
                "The mean distance of the features from image 1 and image 2 is: {}",
                d.mean_distance
            )
        })
    }

    pub fn print_summary(&self) {
        if let Some(line) = self.summary_line() {
            println!("{}", line);
        }
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Report saved");
        Ok(())
    }
}
