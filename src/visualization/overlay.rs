use crate::data::{Arity, CorrespondenceSet, Point2D};
use crate::Result;
use opencv::core::{self, Mat, Point, Scalar, Vector, RNG};
use opencv::imgproc;
use opencv::prelude::*;

pub const MARKER_RADIUS: i32 = 5;
pub const LINK_THICKNESS: i32 = 2;
/// Seed for the per-correspondence link colours, so reruns look identical
pub const LINK_COLOR_SEED: u64 = 12345;

pub fn source_marker_color() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

pub fn composite_marker_color() -> Scalar {
    Scalar::new(0.0, 255.0, 255.0, 0.0)
}

/// Pixel position used for drawing; fractional coordinates truncate
pub fn to_pixel(p: &Point2D) -> Point {
    Point::new(p.x as i32, p.y as i32)
}

pub fn draw_markers(image: &mut Mat, points: &[Point2D], color: Scalar) -> Result<()> {
    let (cols, rows) = (image.cols() as f64, image.rows() as f64);
    let outside = points
        .iter()
        .filter(|p| p.x < 0.0 || p.y < 0.0 || p.x >= cols || p.y >= rows)
        .count();
    if outside > 0 {
        tracing::warn!(outside, cols, rows, "Points fall outside the image");
    }

    for p in points {
        imgproc::circle(image, to_pixel(p), MARKER_RADIUS, color, 1, imgproc::LINE_8, 0)?;
    }
    Ok(())
}

/// Merge one colour channel from each source image into a BGR composite.
///
/// Pairs use blue and red from image 2 with image 1 in grey as green;
/// triplets use blue from image 1, green from image 2 and red from image 3.
pub fn channel_composite(images: &[Mat], arity: Arity) -> Result<Mat> {
    check_image_count(images, arity)?;
    let reference = images[0].size()?;
    for (i, image) in images.iter().enumerate().skip(1) {
        let size = image.size()?;
        if size != reference {
            anyhow::bail!(
                "image {} is {}x{} but image 1 is {}x{}",
                i + 1,
                size.width,
                size.height,
                reference.width,
                reference.height
            );
        }
    }

    let mut merged_channels = Vector::<Mat>::new();
    match arity {
        Arity::Pair => {
            let mut gray1 = Mat::default();
            imgproc::cvt_color_def(&images[0], &mut gray1, imgproc::COLOR_BGR2GRAY)?;
            let bgr2 = split_channels(&images[1])?;
            merged_channels.push(bgr2.get(0)?);
            merged_channels.push(gray1);
            merged_channels.push(bgr2.get(2)?);
        }
        Arity::Triplet => {
            for (channel, image) in images.iter().enumerate() {
                merged_channels.push(split_channels(image)?.get(channel)?);
            }
        }
    }

    let mut composite = Mat::default();
    core::merge(&merged_channels, &mut composite)?;
    Ok(composite)
}

fn split_channels(image: &Mat) -> Result<Vector<Mat>> {
    if image.channels() != 3 {
        anyhow::bail!("expected a 3-channel BGR image, found {} channels", image.channels());
    }
    let mut channels = Vector::<Mat>::new();
    core::split(image, &mut channels)?;
    Ok(channels)
}

/// Connect successive points of every correspondence with a randomly
/// coloured anti-aliased line
pub fn draw_links(image: &mut Mat, set: &CorrespondenceSet, seed: u64) -> Result<()> {
    let mut rng = RNG::new(seed)?;
    for tuple in set.iter() {
        let color = Scalar::new(
            rng.uniform(0, 255)? as f64,
            rng.uniform(0, 255)? as f64,
            rng.uniform(0, 255)? as f64,
            0.0,
        );
        for segment in tuple.windows(2) {
            imgproc::line(
                image,
                to_pixel(&segment[0]),
                to_pixel(&segment[1]),
                color,
                LINK_THICKNESS,
                imgproc::LINE_AA,
                0,
            )?;
        }
    }
    Ok(())
}

fn check_image_count(images: &[Mat], arity: Arity) -> Result<()> {
    if images.len() != arity.points() {
        anyhow::bail!(
            "{} images supplied for correspondences spanning {}",
            images.len(),
            arity.points()
        );
    }
    Ok(())
}

/// Annotated source images plus the channel-merged composite
pub struct MatchOverlay {
    pub sources: Vec<Mat>,
    pub composite: Mat,
}

impl MatchOverlay {
    pub fn render(mut images: Vec<Mat>, set: &CorrespondenceSet) -> Result<Self> {
        let arity = set.arity();
        check_image_count(&images, arity)?;

        // channels are taken before any marker lands on the sources
        let mut composite = channel_composite(&images, arity)?;

        for (k, image) in images.iter_mut().enumerate() {
            let points = set.image_points(k);
            draw_markers(image, &points, source_marker_color())?;
            draw_markers(&mut composite, &points, composite_marker_color())?;
        }
        draw_links(&mut composite, set, LINK_COLOR_SEED)?;

        tracing::debug!(
            images = images.len(),
            correspondences = set.len(),
            "Rendered match overlay"
        );

        Ok(Self {
            sources: images,
            composite,
        })
    }
}
