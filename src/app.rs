use crate::controller::{AnnotationController, PointerEvent};
use crate::egui_surface::EguiSurface;
use crate::settings::Settings;

/// Where the image sits on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    /// Top-left of the image; offsets are measured from here.
    pub origin: egui::Pos2,
    /// Part of the image actually visible, after clipping by the panel.
    pub visible: egui::Rect,
}

/// Convert raw egui input into controller events. Events outside the visible
/// part of the canvas are dropped; offsets are rounded to whole points.
pub fn pointer_events(events: &[egui::Event], canvas: Canvas) -> Vec<PointerEvent> {
    let offset = |pos: egui::Pos2| {
        let rel = pos - canvas.origin;
        (rel.x.round(), rel.y.round())
    };
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerMoved(pos) if canvas.visible.contains(*pos) => {
                let (x, y) = offset(*pos);
                Some(PointerEvent::Move { x, y })
            }
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } if canvas.visible.contains(*pos) => {
                if *pressed {
                    let (x, y) = offset(*pos);
                    Some(PointerEvent::Down { x, y })
                } else {
                    Some(PointerEvent::Up)
                }
            }
            _ => None,
        })
        .collect()
}

// ── App ─────────────────────────────────────────────────────────────────────

pub struct AnnotateApp {
    controller: AnnotationController<EguiSurface>,
    list_panel_width: f32,
    // Canvas from the previous frame; pointer input is mapped against it.
    canvas: Option<Canvas>,
}

impl AnnotateApp {
    pub fn new(controller: AnnotationController<EguiSurface>, settings: &Settings) -> Self {
        Self {
            controller,
            list_panel_width: settings.list_panel_width,
            canvas: None,
        }
    }

    fn dispatch_input(&mut self, ctx: &egui::Context) {
        let Some(canvas) = self.canvas else {
            return;
        };
        let events = ctx.input(|i| pointer_events(&i.events, canvas));
        for event in events {
            if let Err(e) = self.controller.handle(event) {
                tracing::warn!(?event, "surface rejected update: {e}");
            }
        }
    }
}

impl eframe::App for AnnotateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl AnnotateApp {
    fn show(&mut self, ctx: &egui::Context) {
        self.dispatch_input(ctx);

        egui::SidePanel::right("boxes")
            .default_width(self.list_panel_width)
            .show(ctx, |ui| {
                ui.heading(format!("Boxes ({})", self.controller.boxes().len()));
                ui.separator();
                self.controller.surface().list_ui(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(image) = self.controller.surface_mut().image_widget(ctx) else {
                self.canvas = None;
                ui.label(format!("Loading {}", self.controller.image()));
                return;
            };
            // Drawn at original size; whatever overflows the panel is clipped.
            let response = ui.add(image.sense(egui::Sense::click_and_drag()));
            let image_rect = response.rect;
            self.canvas = Some(Canvas {
                origin: image_rect.min,
                visible: image_rect.intersect(ui.clip_rect()),
            });

            let painter = ui.painter_at(image_rect);
            self.controller.surface().paint_rects(&painter, image_rect.min);

            if self.controller.drawing().is_some() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
    }
}
