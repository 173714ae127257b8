use eframe::egui;

use crate::ui::app::LaHoraApp;
use crate::ui::components;
use crate::ui::components::status;
use crate::ui::spacing;
use crate::ui::theme;
use crate::ui::typography;

/// Sample instant shown in the preview section.
const PREVIEW_ISO: &str = "2024-06-15T19:30:00Z";

impl LaHoraApp {
    pub(crate) fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let theme = theme::current_theme();

        ui.add_space(spacing::SPACING_MD);
        ui.label(typography::h2("Display settings"));
        ui.add_space(spacing::SPACING_SM);
        ui.label(
            typography::small("Explicit values take precedence over the host locale/timezone.")
                .color(theme.text_muted),
        );
        ui.add_space(spacing::SPACING_MD);

        ui.label(typography::small("Locale (BCP-47 tag, e.g. fr-FR)"));
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.locale_input);
            if ui.button("Apply").clicked() {
                self.apply_locale();
            }
        });
        ui.add_space(spacing::SPACING_SM);

        ui.label(typography::small(
            "Time zone (IANA name or offset, e.g. Europe/Madrid, +05:30)",
        ));
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.time_zone_input);
            if ui.button("Apply").clicked() {
                self.apply_time_zone();
            }
        });

        if let Some(error) = &self.settings_error {
            ui.add_space(spacing::SPACING_SM);
            status::error_banner(ui, error);
        }

        ui.add_space(spacing::SPACING_LG);
        ui.separator();
        ui.add_space(spacing::SPACING_SM);
        ui.label(typography::small("Preview").color(theme.text_muted));
        ui.horizontal(|ui| {
            components::datetime::date_time_label(ui, &self.datetime, PREVIEW_ISO);
            ui.label(typography::weak("/"));
            components::datetime::time_label(ui, &self.datetime, PREVIEW_ISO);
        });
        ui.label(
            typography::small(format!(
                "{} · {}",
                self.datetime.date_time_formatter().locale(),
                self.datetime.date_time_formatter().time_zone()
            ))
            .color(theme.text_muted),
        );
    }

    fn apply_locale(&mut self) {
        let tag = self.locale_input.trim().to_string();
        if tag.is_empty() {
            return;
        }
        match self.datetime.set_locale(&tag) {
            Ok(()) => self.settings_error = None,
            Err(err) => self.settings_error = Some(err.to_string()),
        }
    }

    fn apply_time_zone(&mut self) {
        let zone = self.time_zone_input.trim().to_string();
        if zone.is_empty() {
            return;
        }
        match self.datetime.set_time_zone(&zone) {
            Ok(()) => self.settings_error = None,
            Err(err) => self.settings_error = Some(err.to_string()),
        }
    }
}
