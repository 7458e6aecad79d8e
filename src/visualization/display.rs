use crate::visualization::MatchOverlay;
use crate::Result;
use opencv::highgui;

/// Window titles: "Image 1".."Image N" for the sources, "Image N+1" for the composite
pub fn window_titles(sources: usize) -> (Vec<String>, String) {
    let titles = (1..=sources).map(|i| format!("Image {}", i)).collect();
    (titles, format!("Image {}", sources + 1))
}

/// Show every image in its own resizable window and block until a key is pressed
pub fn show_overlay(overlay: &MatchOverlay) -> Result<()> {
    let (source_titles, composite_title) = window_titles(overlay.sources.len());

    highgui::named_window(&composite_title, highgui::WINDOW_NORMAL)?;
    highgui::imshow(&composite_title, &overlay.composite)?;

    for (title, image) in source_titles.iter().zip(&overlay.sources) {
        highgui::named_window(title, highgui::WINDOW_NORMAL)?;
        highgui::imshow(title, image)?;
    }

    tracing::info!("Waiting for a key press to close the windows");
    highgui::wait_key(0)?;
    highgui::destroy_all_windows()?;
    Ok(())
}
