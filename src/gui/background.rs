use anyhow::{Context, Result};
use eframe::egui::{self, pos2, Color32, ColorImage, Painter, Rect, TextureHandle, TextureOptions};
use log::info;

use std::path::{Path, PathBuf};

pub(crate) const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// Image painted behind everything else, stretched to whatever size the
/// window currently has.
#[derive(Default)]
pub(crate) struct Background {
    path: Option<PathBuf>,
    texture: Option<TextureHandle>,
}

impl Background {
    /// On failure the previously loaded image, if any, stays in place
    pub(crate) fn load(&mut self, ctx: &egui::Context, path: &Path) -> Result<()> {
        let image = load_color_image(path)?;
        info!(
            "Loaded background {} ({}x{})",
            path.display(),
            image.size[0],
            image.size[1]
        );

        self.texture = Some(ctx.load_texture("background", image, TextureOptions::LINEAR));
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn paint(&self, painter: &Painter, rect: Rect) {
        let texture = match &self.texture {
            Some(v) => v,
            None => return,
        };

        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, Color32::WHITE);
    }
}

pub(crate) fn load_color_image(path: &Path) -> Result<ColorImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to load background image {}", path.display()))?
        .to_rgba8();

    let size = [image.width() as usize, image.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}
