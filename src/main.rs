mod app;
mod widgets;

use app::App;
use ft_core::init_core;

fn main() -> anyhow::Result<()> {
    init_core()?;

    eframe::run_native(
        "FadeText",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 480.0])
                .with_min_inner_size([520.0, 300.0]),
            default_theme: eframe::Theme::Dark,
            follow_system_theme: false,
            ..Default::default()
        },
        Box::new(|cc: &eframe::CreationContext| Box::new(App::new(cc))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;

    Ok(())
}
