use std::path::PathBuf;

use thiserror::Error;

use crate::color::{HexColor, FILL_ALPHA};
use crate::model::{BoxId, RectGeometry};

/// Where the annotated image comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Path(PathBuf),
}

impl ImageSource {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::Path(PathBuf::from(raw))
        }
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Handle to a rectangle owned by a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RectHandle(pub usize);

/// Handle to a list entry owned by a surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntryHandle(pub String);

impl EntryHandle {
    pub fn for_box(id: BoxId) -> Self {
        Self(format!("list-item-{id}"))
    }
}

impl std::fmt::Display for EntryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectStyle {
    pub stroke: HexColor,
    pub fill_alpha: u8,
}

impl RectStyle {
    pub fn for_color(color: HexColor) -> Self {
        Self {
            stroke: color,
            fill_alpha: FILL_ALPHA,
        }
    }

    /// Fill as a CSS-style color, `#rrggbbaa`.
    pub fn fill(&self) -> String {
        self.stroke.with_alpha_suffix(self.fill_alpha)
    }
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to load image {source_name}: {reason}")]
    ImageUnavailable { source_name: String, reason: String },
    #[error("no rectangle for handle {0:?}")]
    UnknownRect(RectHandle),
    #[error("no list entry with key {0}")]
    UnknownEntry(EntryHandle),
}

/// The image slot, rectangle layer and list container a controller draws into.
pub trait PresentationSurface {
    /// Put the image under the drawing layer. Fails if it cannot be shown.
    fn show_image(&mut self, source: &ImageSource) -> Result<(), SurfaceError>;

    fn create_rect(&mut self) -> RectHandle;

    fn render_rect(
        &mut self,
        handle: RectHandle,
        geometry: RectGeometry,
        style: RectStyle,
    ) -> Result<(), SurfaceError>;

    /// Append an entry at the end of the list, keyed by `key`.
    fn append_list_entry(&mut self, key: EntryHandle, color: HexColor, text: String);

    fn replace_list_entry(&mut self, key: &EntryHandle, text: String) -> Result<(), SurfaceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_urls_and_paths() {
        assert_eq!(
            ImageSource::parse("https://example.com/a.jpg"),
            ImageSource::Url("https://example.com/a.jpg".into())
        );
        assert_eq!(
            ImageSource::parse("photos/street.png"),
            ImageSource::Path(PathBuf::from("photos/street.png"))
        );
    }

    #[test]
    fn entry_keys_derive_from_box_id() {
        assert_eq!(EntryHandle::for_box(BoxId(4)).0, "list-item-4");
    }

    #[test]
    fn style_fill_uses_reduced_alpha() {
        let style = RectStyle::for_color(HexColor::from_rgb(0xab, 0xcd, 0xef));
        assert_eq!(style.stroke.to_string(), "#abcdef");
        assert_eq!(style.fill(), "#abcdef30");
    }
}
