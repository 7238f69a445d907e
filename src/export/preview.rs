//! Flat label previews.
//!
//! Draws the same five text fields the swatch model carries onto a PNG, so
//! a batch can be checked without opening the 3D host.

use image::RgbaImage;
use imageproc::drawing::draw_text_mut;
use rusttype::{Font, Scale};
use std::path::Path;

use super::jobs::{ExportJob, TextField};
use super::renderer::SceneRenderer;
use crate::error::{Result, SwatchError};

/// Preview dimensions
pub const PREVIEW_WIDTH: u32 = 400;
pub const PREVIEW_HEIGHT: u32 = 240;

/// Colors for the preview
pub mod colors {
    use image::Rgba;

    pub const BACKGROUND: Rgba<u8> = Rgba([245, 245, 240, 255]);
    pub const TEXT_PRIMARY: Rgba<u8> = Rgba([20, 20, 20, 255]);
    pub const TEXT_SECONDARY: Rgba<u8> = Rgba([90, 90, 90, 255]);
}

const FONT_PATHS: [&str; 6] = [
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// Load a font from `path`, or from common system locations when `None`.
pub fn load_font(path: Option<&Path>) -> Result<Font<'static>> {
    if let Some(path) = path {
        let data = std::fs::read(path).map_err(|e| SwatchError::io(path, e))?;
        return Font::try_from_vec(data).ok_or_else(|| {
            SwatchError::Render(format!("{} is not a usable font", path.display()))
        });
    }

    for candidate in FONT_PATHS {
        let candidate = Path::new(candidate);
        if candidate.exists()
            && let Ok(data) = std::fs::read(candidate)
            && let Some(font) = Font::try_from_vec(data)
        {
            log::debug!("Using font {}", candidate.display());
            return Ok(font);
        }
    }

    Err(SwatchError::Render(
        "No system font found; set font_path in the config".into(),
    ))
}

/// Renders each job as a PNG label.
pub struct LabelPreviewRenderer {
    font: Font<'static>,
}

impl LabelPreviewRenderer {
    pub fn new(font: Font<'static>) -> Self {
        Self { font }
    }

    /// Draw the label for one job.
    pub fn draw(&self, job: &ExportJob) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(PREVIEW_WIDTH, PREVIEW_HEIGHT, colors::BACKGROUND);

        let large = Scale::uniform(40.0);
        let medium = Scale::uniform(28.0);
        let small = Scale::uniform(22.0);

        let line = |field: TextField| job.text(field);

        draw_text_mut(
            &mut img,
            colors::TEXT_PRIMARY,
            20,
            16,
            large,
            &self.font,
            &line(TextField::Colour),
        );
        draw_text_mut(
            &mut img,
            colors::TEXT_PRIMARY,
            20,
            76,
            medium,
            &self.font,
            &line(TextField::Manufacturer),
        );
        draw_text_mut(
            &mut img,
            colors::TEXT_PRIMARY,
            20,
            114,
            medium,
            &self.font,
            &line(TextField::Material),
        );

        let temps = format!(
            "Nozzle {}   Bed {}",
            line(TextField::TempNozzle),
            line(TextField::TempBed)
        );
        draw_text_mut(
            &mut img,
            colors::TEXT_SECONDARY,
            20,
            180,
            small,
            &self.font,
            &temps,
        );

        img
    }
}

impl SceneRenderer for LabelPreviewRenderer {
    fn extension(&self) -> &str {
        "png"
    }

    fn render(&mut self, job: &ExportJob, path: &Path) -> Result<()> {
        self.draw(job)
            .save(path)
            .map_err(|e| SwatchError::Render(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::run_export;

    #[test]
    fn test_load_font_missing_path() {
        let result = load_font(Some(Path::new("/definitely/not/a/font.ttf")));
        assert!(matches!(result, Err(SwatchError::IoFailure { .. })));
    }

    #[test]
    fn test_load_font_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        assert!(matches!(
            load_font(Some(&path)),
            Err(SwatchError::Render(_))
        ));
    }

    #[test]
    #[ignore = "requires a system TrueType font (DejaVu Sans or Arial)"]
    fn test_preview_export_writes_png() {
        let font = load_font(None).expect("no system font found");
        let dir = tempfile::tempdir().unwrap();
        let job = ExportJob {
            colour: "Orange".into(),
            manufacturer: "Prusament".into(),
            material: "PLA".into(),
            temp_nozzle: "215".into(),
            temp_bed: "60".into(),
        };

        let mut renderer = LabelPreviewRenderer::new(font);
        let summary = run_export(std::slice::from_ref(&job), &mut renderer, dir.path()).unwrap();

        assert_eq!(summary.files[0], dir.path().join("Prusament_PLA_Orange.png"));
        let img = image::open(&summary.files[0]).unwrap();
        assert_eq!(img.width(), PREVIEW_WIDTH);
        assert_eq!(img.height(), PREVIEW_HEIGHT);
    }
}
