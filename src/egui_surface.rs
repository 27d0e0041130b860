use image::DynamicImage;

use crate::color::HexColor;
use crate::model::RectGeometry;
use crate::surface::{
    EntryHandle, ImageSource, PresentationSurface, RectHandle, RectStyle, SurfaceError,
};

const STROKE_WIDTH: f32 = 1.0;

enum LoadedImage {
    /// Fetched and decoded by the egui image loaders.
    Remote(String),
    Local {
        raw: DynamicImage,
        texture: Option<egui::TextureHandle>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct RectShape {
    geometry: RectGeometry,
    style: RectStyle,
}

#[derive(Clone, Debug, PartialEq)]
struct ListEntry {
    key: EntryHandle,
    color: HexColor,
    text: String,
}

/// Retained scene painted by egui each frame: one image, the box rectangles
/// on top of it and the description list.
#[derive(Default)]
pub struct EguiSurface {
    image: Option<LoadedImage>,
    // `None` until the first render.
    rects: Vec<Option<RectShape>>,
    entries: Vec<ListEntry>,
}

impl EguiSurface {
    #[cfg(test)]
    fn rect_count(&self) -> usize {
        self.rects.len()
    }

    #[cfg(test)]
    fn entry_texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }

    fn ensure_texture(&mut self, ctx: &egui::Context) {
        let Some(LoadedImage::Local { raw, texture }) = &mut self.image else {
            return;
        };
        if texture.is_some() {
            return;
        }
        let rgba = raw.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let pixels = rgba.as_flat_samples();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());
        *texture = Some(ctx.load_texture("image", color_image, egui::TextureOptions::LINEAR));
    }

    /// Widget showing the image at its original size, or `None` before
    /// [`PresentationSurface::show_image`] succeeded.
    pub fn image_widget(&mut self, ctx: &egui::Context) -> Option<egui::Image<'static>> {
        self.ensure_texture(ctx);
        let image = match self.image.as_ref()? {
            LoadedImage::Remote(url) => egui::Image::new(url.clone()),
            LoadedImage::Local { texture, .. } => {
                let texture = texture.as_ref()?;
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
            }
        };
        Some(image.fit_to_original_size(1.0))
    }

    /// Paint every rendered rectangle relative to `origin`, the top-left of
    /// the image on screen.
    pub fn paint_rects(&self, painter: &egui::Painter, origin: egui::Pos2) {
        for shape in self.rects.iter().flatten() {
            let g = shape.geometry;
            let rect = egui::Rect::from_min_size(
                origin + egui::vec2(g.x, g.y),
                egui::vec2(g.width, g.height),
            );
            let stroke = shape.style.stroke;
            painter.rect_filled(rect, 0.0, stroke.to_egui_with_alpha(shape.style.fill_alpha));
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(STROKE_WIDTH, stroke.to_egui()),
                egui::StrokeKind::Middle,
            );
        }
    }

    pub fn list_ui(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for entry in &self.entries {
                ui.label(egui::RichText::new(&entry.text).color(entry.color.to_egui()))
                    .on_hover_text(entry.key.to_string());
            }
        });
    }
}

impl PresentationSurface for EguiSurface {
    fn show_image(&mut self, source: &ImageSource) -> Result<(), SurfaceError> {
        let loaded = match source {
            ImageSource::Url(url) => LoadedImage::Remote(url.clone()),
            ImageSource::Path(path) => {
                let raw = image::open(path).map_err(|e| SurfaceError::ImageUnavailable {
                    source_name: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                tracing::debug!(
                    width = raw.width(),
                    height = raw.height(),
                    "decoded local image"
                );
                LoadedImage::Local { raw, texture: None }
            }
        };
        self.image = Some(loaded);
        Ok(())
    }

    fn create_rect(&mut self) -> RectHandle {
        self.rects.push(None);
        RectHandle(self.rects.len() - 1)
    }

    fn render_rect(
        &mut self,
        handle: RectHandle,
        geometry: RectGeometry,
        style: RectStyle,
    ) -> Result<(), SurfaceError> {
        let slot = self
            .rects
            .get_mut(handle.0)
            .ok_or(SurfaceError::UnknownRect(handle))?;
        *slot = Some(RectShape { geometry, style });
        Ok(())
    }

    fn append_list_entry(&mut self, key: EntryHandle, color: HexColor, text: String) {
        self.entries.push(ListEntry { key, color, text });
    }

    fn replace_list_entry(&mut self, key: &EntryHandle, text: String) -> Result<(), SurfaceError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| &e.key == key)
            .ok_or_else(|| SurfaceError::UnknownEntry(key.clone()))?;
        entry.text = text;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> RectGeometry {
        RectGeometry::normalized(1.0, 2.0, 3.0, 4.0)
    }

    fn style() -> RectStyle {
        RectStyle::for_color(HexColor::from_rgb(9, 9, 9))
    }

    #[test]
    fn missing_local_image_is_reported() {
        let mut surface = EguiSurface::default();
        let err = surface
            .show_image(&ImageSource::parse("/definitely/not/here.png"))
            .unwrap_err();
        assert!(matches!(err, SurfaceError::ImageUnavailable { .. }));
    }

    #[test]
    fn local_png_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();
        let mut surface = EguiSurface::default();
        surface.show_image(&ImageSource::Path(path)).unwrap();
        assert!(matches!(surface.image, Some(LoadedImage::Local { .. })));
    }

    #[test]
    fn rects_render_through_their_handles() {
        let mut surface = EguiSurface::default();
        let a = surface.create_rect();
        let b = surface.create_rect();
        surface.render_rect(b, geometry(), style()).unwrap();
        assert_eq!(surface.rect_count(), 2);
        assert!(surface.rects[a.0].is_none());
        assert_eq!(surface.rects[b.0].map(|s| s.geometry), Some(geometry()));
    }

    #[test]
    fn unknown_handles_are_errors() {
        let mut surface = EguiSurface::default();
        assert!(matches!(
            surface.render_rect(RectHandle(0), geometry(), style()),
            Err(SurfaceError::UnknownRect(RectHandle(0)))
        ));
        let key = EntryHandle("list-item-0".into());
        assert!(surface.replace_list_entry(&key, "x".into()).is_err());
    }

    #[test]
    fn entries_keep_order_and_replace_by_key() {
        let mut surface = EguiSurface::default();
        let color = HexColor::from_rgb(1, 2, 3);
        surface.append_list_entry(EntryHandle("list-item-0".into()), color, "first".into());
        surface.append_list_entry(EntryHandle("list-item-1".into()), color, "second".into());
        surface
            .replace_list_entry(&EntryHandle("list-item-0".into()), "updated".into())
            .unwrap();
        let texts: Vec<_> = surface.entry_texts().collect();
        assert_eq!(texts, ["updated", "second"]);
    }
}
