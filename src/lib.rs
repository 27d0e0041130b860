pub mod app;
pub mod color;
pub mod controller;
pub mod egui_surface;
pub mod image_picker;
pub mod logging;
pub mod model;
pub mod settings;
pub mod surface;
