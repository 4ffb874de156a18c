use eframe::egui;
use kanapad::app::KanaPadApp;
use kanapad::logging;
use kanapad::settings::Settings;

fn main() -> anyhow::Result<()> {
    logging::init_tracing(logging::debug_flag(std::env::args()));

    let settings = Settings::load();
    let (width, height) = settings.window_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("kanapad")
            .with_inner_size([width, height])
            .with_min_inner_size([360.0, 560.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "kanapad",
        native_options,
        Box::new(move |cc| Ok(Box::new(KanaPadApp::new(cc, settings)?))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start kanapad: {e}"))
}

fn load_icon() -> egui::IconData {
    // Blue disc with an orange ring, drawn programmatically
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let cx = x as f32 - size as f32 / 2.0;
            let cy = y as f32 - size as f32 / 2.0;
            let dist = (cx * cx + cy * cy).sqrt();
            let radius = size as f32 / 2.0 - 2.0;

            if dist < radius - 6.0 {
                rgba[idx] = 0;
                rgba[idx + 1] = 122;
                rgba[idx + 2] = 255;
                rgba[idx + 3] = 255;
            } else if dist < radius {
                rgba[idx] = 255;
                rgba[idx + 1] = 149;
                rgba[idx + 2] = 0;
                rgba[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
