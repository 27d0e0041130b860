use anyhow::Context;
use bbox_annotate::app::AnnotateApp;
use bbox_annotate::controller::AnnotationController;
use bbox_annotate::egui_surface::EguiSurface;
use bbox_annotate::settings::{Settings, SETTINGS_FILE};
use bbox_annotate::surface::ImageSource;
use bbox_annotate::{image_picker, logging};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load_or_init(SETTINGS_FILE)
        .with_context(|| format!("{SETTINGS_FILE} is not valid settings JSON"))?;
    logging::init(settings.debug_logging);

    let source = match std::env::args().nth(1) {
        Some(arg) => ImageSource::parse(&arg),
        None => image_picker::pick(&settings.image_library, &mut rand::rng())
            .map(ImageSource::parse)
            .context("image library is empty; pass an image path or URL")?,
    };

    let controller = AnnotationController::new(EguiSurface::default(), source.clone())
        .with_context(|| format!("cannot annotate {source}"))?;

    let title = format!("bbox-annotate - {source}");
    tracing::info!(%source, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(AnnotateApp::new(controller, &settings)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run eframe: {e}"))
}
