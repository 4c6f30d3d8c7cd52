mod preview;
mod settings_panel;
mod status_bar;

pub use preview::preview_ui;
pub use settings_panel::settings_panel_ui;
pub use status_bar::status_bar_ui;
