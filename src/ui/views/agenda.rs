use eframe::egui;

use crate::ui::app::LaHoraApp;
use crate::ui::components;
use crate::ui::spacing;
use crate::ui::theme;
use crate::ui::typography;

impl LaHoraApp {
    pub(crate) fn ui_agenda(&mut self, ui: &mut egui::Ui) {
        let theme = theme::current_theme();
        let datetime = &self.datetime;

        ui.add_space(spacing::SPACING_MD);
        ui.label(typography::h2("Agenda"));
        ui.add_space(spacing::SPACING_SM);

        for slot in &mut self.sessions {
            egui::Frame::new()
                .fill(theme.bg_card)
                .stroke(egui::Stroke::new(
                    1.0,
                    if slot.timespan.is_current() {
                        theme.happening_now
                    } else {
                        theme.border
                    },
                ))
                .corner_radius(egui::CornerRadius::same(spacing::RADIUS_MD))
                .inner_margin(egui::Margin::symmetric(
                    spacing::SPACING_MD as i8,
                    spacing::SPACING_SM as i8,
                ))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(typography::bold_label(&slot.title));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            components::datetime::date_time_label(ui, datetime, &slot.start_iso);
                        });
                    });
                    ui.add_space(spacing::SPACING_XS);
                    ui.horizontal(|ui| {
                        slot.timespan.show(ui, datetime);
                    });
                    ui.label(typography::small(slot.speaker.clone()).color(theme.text_muted));
                });
            ui.add_space(spacing::SPACING_SM);
        }
    }
}
