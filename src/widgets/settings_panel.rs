use ft_core::Setting;

pub fn settings_panel_ui(ui: &mut egui::Ui, setting: &mut Setting) {
    ui.add_space(8.0);
    ui.heading("Settings");
    ui.separator();

    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            ui.label("Blur width");
            ui.add(egui::Slider::new(&mut setting.blur_line_width, 0.0..=1.0));
            ui.end_row();

            ui.label("Max lines");
            ui.add(egui::Slider::new(&mut setting.max_lines, 1..=10));
            ui.end_row();

            ui.label("Min lines");
            ui.add(egui::Slider::new(&mut setting.min_lines, 1..=10));
            ui.end_row();

            ui.label("Font size");
            ui.add(egui::Slider::new(&mut setting.font_size, 8.0..=40.0).suffix(" pt"));
            ui.end_row();

            ui.label("Width");
            ui.add(egui::Slider::new(&mut setting.container_width, 80.0..=800.0).suffix(" px"));
            ui.end_row();
        });

    ui.separator();
    ui.label("Text");
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut setting.text)
                .desired_width(f32::INFINITY)
                .desired_rows(8),
        );
    });

    if ui.button("Reset").clicked() {
        *setting = Setting::default();
    }
}
