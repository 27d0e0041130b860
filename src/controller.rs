use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::HexColor;
use crate::model::{BoundingBox, BoxId};
use crate::surface::{
    EntryHandle, ImageSource, PresentationSurface, RectHandle, RectStyle, SurfaceError,
};

/// Pointer notifications from the drawing surface, in surface offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

#[derive(Clone, Debug)]
struct BoxVisuals {
    rect: RectHandle,
    entry: EntryHandle,
}

/// Owns the boxes and the drag state, and keeps the surface in sync with them.
pub struct AnnotationController<S: PresentationSurface> {
    surface: S,
    image: ImageSource,
    boxes: Vec<BoundingBox>,
    drawing: Option<BoxId>,
    visuals: HashMap<BoxId, BoxVisuals>,
    rng: StdRng,
}

impl<S: PresentationSurface> AnnotationController<S> {
    pub fn new(surface: S, image: ImageSource) -> Result<Self, SurfaceError> {
        Self::with_rng(surface, image, StdRng::from_os_rng())
    }

    /// Like [`AnnotationController::new`] with a caller-supplied color source.
    pub fn with_rng(mut surface: S, image: ImageSource, rng: StdRng) -> Result<Self, SurfaceError> {
        surface.show_image(&image)?;
        tracing::info!(image = %image, "annotation controller ready");
        Ok(Self {
            surface,
            image,
            boxes: Vec::new(),
            drawing: None,
            visuals: HashMap::new(),
            rng,
        })
    }

    pub fn handle(&mut self, event: PointerEvent) -> Result<(), SurfaceError> {
        match event {
            PointerEvent::Down { x, y } => self.begin_draw(x, y),
            PointerEvent::Move { x, y } => self.update_draw(x, y),
            PointerEvent::Up => {
                self.end_draw();
                Ok(())
            }
        }
    }

    /// Start a new box at (x, y). Any box still being drawn is abandoned.
    pub fn begin_draw(&mut self, x: f32, y: f32) -> Result<(), SurfaceError> {
        let id = BoxId(self.boxes.len());
        let new_box = BoundingBox::new(id, x, y, HexColor::random(&mut self.rng));
        if let Some(previous) = self.drawing.replace(id) {
            tracing::debug!(%previous, "abandoning unfinished box");
        }
        tracing::debug!(%id, x, y, color = %new_box.color, "begin box");

        let rect = self.surface.create_rect();
        let entry = EntryHandle::for_box(id);
        self.surface
            .append_list_entry(entry.clone(), new_box.color, new_box.description());
        self.visuals.insert(id, BoxVisuals { rect, entry });
        self.boxes.push(new_box);

        self.render_rect(id)
    }

    /// Stretch the box being drawn to (x, y). No-op when nothing is drawn.
    pub fn update_draw(&mut self, x: f32, y: f32) -> Result<(), SurfaceError> {
        let Some(id) = self.drawing else {
            return Ok(());
        };
        let Some(current) = self.boxes.get(id.0) else {
            return Ok(());
        };
        let updated = current.stretched_to(x, y);
        tracing::trace!(%id, width = updated.width, height = updated.height, "resize box");
        self.boxes[id.0] = updated;

        self.render_rect(id)?;
        self.render_list_entry(id)
    }

    pub fn end_draw(&mut self) {
        if let Some(id) = self.drawing.take() {
            tracing::debug!(%id, "finish box");
        }
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    pub fn drawing(&self) -> Option<BoxId> {
        self.drawing
    }

    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn render_rect(&mut self, id: BoxId) -> Result<(), SurfaceError> {
        let (Some(b), Some(visuals)) = (self.boxes.get(id.0), self.visuals.get(&id)) else {
            return Ok(());
        };
        self.surface
            .render_rect(visuals.rect, b.geometry(), RectStyle::for_color(b.color))
    }

    fn render_list_entry(&mut self, id: BoxId) -> Result<(), SurfaceError> {
        let (Some(b), Some(visuals)) = (self.boxes.get(id.0), self.visuals.get(&id)) else {
            return Ok(());
        };
        self.surface
            .replace_list_entry(&visuals.entry, b.description())
    }
}
