use crate::visualization::MatchOverlay;
use crate::Result;
use anyhow::Context;
use opencv::core::{Mat, Vector};
use opencv::imgcodecs;
use opencv::prelude::*;
use std::path::{Path, PathBuf};

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow::anyhow!("path is not valid UTF-8: {}", path.display()))
}

/// Load a colour image; a missing or undecodable file is an error
pub fn load_image(path: &Path) -> Result<Mat> {
    let image = imgcodecs::imread(path_str(path)?, imgcodecs::IMREAD_COLOR)?;
    if image.empty() {
        anyhow::bail!("Could not load the equirectangular image {}", path.display());
    }
    tracing::debug!(
        path = %path.display(),
        cols = image.cols(),
        rows = image.rows(),
        "Loaded image"
    );
    Ok(image)
}

pub fn load_images(paths: &[PathBuf]) -> Result<Vec<Mat>> {
    paths.iter().map(|path| load_image(path)).collect()
}

pub fn save_image(path: &Path, image: &Mat) -> Result<()> {
    let written = imgcodecs::imwrite(path_str(path)?, image, &Vector::new())
        .with_context(|| format!("failed to encode {}", path.display()))?;
    if !written {
        anyhow::bail!("could not write image {}", path.display());
    }
    Ok(())
}

/// Write `image_1.png` .. `image_N.png` and `composite.png` into `dir`
pub fn save_overlay(overlay: &MatchOverlay, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(overlay.sources.len() + 1);
    for (i, image) in overlay.sources.iter().enumerate() {
        let path = dir.join(format!("image_{}.png", i + 1));
        save_image(&path, image)?;
        written.push(path);
    }
    let composite_path = dir.join("composite.png");
    save_image(&composite_path, &overlay.composite)?;
    written.push(composite_path);

    tracing::info!(dir = %dir.display(), files = written.len(), "Saved overlay images");
    Ok(written)
}
