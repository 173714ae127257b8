use eframe::egui;

use crate::ui::spacing;
use crate::ui::theme;

/// Common error banner component
pub fn error_banner(ui: &mut egui::Ui, error_message: &str) {
    if ui.available_width() < 50.0 {
        return;
    }
    let theme = theme::current_theme();
    egui::Frame::new()
        .fill(theme.destructive.gamma_multiply(0.2))
        .corner_radius(egui::CornerRadius::same(spacing::RADIUS_MD))
        .inner_margin(egui::Margin::symmetric(
            spacing::SPACING_MD as i8,
            spacing::SPACING_SM as i8,
        ))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .color(theme.destructive),
                );
                ui.label(egui::RichText::new(error_message).color(theme.text_primary));
            });
        });
}
