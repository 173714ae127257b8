use eframe::egui;

use crate::domain::Instant;
use crate::format::DisplayFormatter;
use crate::state::DateTimeContext;
use crate::ui::typography;

/// Abbreviated date plus clock time for a single instant, e.g.
/// "Jan 5, 2:30 PM". The original ISO value rides along as a hover tooltip.
pub fn date_time_label(ui: &mut egui::Ui, ctx: &DateTimeContext, iso: &str) -> egui::Response {
    instant_label(ui, ctx.date_time_formatter(), iso)
}

/// Clock time only for a single instant, e.g. "2:30 PM".
pub fn time_label(ui: &mut egui::Ui, ctx: &DateTimeContext, iso: &str) -> egui::Response {
    instant_label(ui, ctx.time_formatter(), iso)
}

fn instant_label(ui: &mut egui::Ui, formatter: &DisplayFormatter, iso: &str) -> egui::Response {
    let instant = Instant::parse(iso);
    let text = formatter.format(&instant);
    ui.label(typography::label(text))
        .on_hover_text(instant.iso())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DateTimeContext;
    use egui_kittest::Harness;
    use egui_kittest::kittest::Queryable;

    #[test]
    fn test_date_time_label_renders_formatted_text() {
        let ctx = DateTimeContext::new();
        let mut harness = Harness::new_ui(move |ui| {
            date_time_label(ui, &ctx, "2024-01-05T21:30:00Z");
        });
        harness.run();
        // Fallback pair is en-US / MST7MDT; January renders at UTC-7.
        harness.get_by_label("Jan 5, 2:30 PM");
    }

    #[test]
    fn test_time_label_renders_formatted_text() {
        let ctx = DateTimeContext::new();
        let mut harness = Harness::new_ui(move |ui| {
            time_label(ui, &ctx, "2024-01-05T21:30:00Z");
        });
        harness.run();
        harness.get_by_label("2:30 PM");
    }

    #[test]
    fn test_unparseable_timestamp_renders_raw() {
        let ctx = DateTimeContext::new();
        let mut harness = Harness::new_ui(move |ui| {
            date_time_label(ui, &ctx, "not-a-date");
        });
        harness.run();
        harness.get_by_label("not-a-date");
    }
}
