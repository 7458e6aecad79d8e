use crate::analysis::MatchReport;
use crate::config::Config;
use crate::data::{load_correspondences, CorrespondenceSet};
use crate::visualization::{load_images, MatchOverlay};
use crate::Result;
use opencv::core::Mat;

/// Everything one visualization pass needs, loaded up front so that any
/// failure happens before a window is opened
pub struct Session {
    pub config: Config,
    pub correspondences: CorrespondenceSet,
    pub report: MatchReport,
    pub images: Vec<Mat>,
}

impl Session {
    pub fn load(config: Config) -> Result<Self> {
        let image_paths = config.image_paths()?;
        for path in &image_paths {
            tracing::debug!(path = %path.display(), "Resolved image path");
        }
        let images = load_images(&image_paths)?;

        let match_path = config.match_file_path();
        tracing::debug!(path = %match_path.display(), "Resolved match file path");
        let correspondences = load_correspondences(&match_path, config.mode.arity())?;

        let report = MatchReport::compute(config.mode.file_name(), &correspondences)?;

        Ok(Self {
            config,
            correspondences,
            report,
            images,
        })
    }

    pub fn render(self) -> Result<MatchOverlay> {
        MatchOverlay::render(self.images, &self.correspondences)
    }
}
