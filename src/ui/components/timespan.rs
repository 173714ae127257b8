use eframe::egui;
use tokio::sync::mpsc;

use crate::domain::Interval;
use crate::state::watcher::{self, WatcherHandle, RECHECK_PERIOD};
use crate::state::DateTimeContext;
use crate::ui::theme;
use crate::ui::typography;

/// A mounted "`<start> to <end>`" display with a live "happening now"
/// indicator.
///
/// The view owns the recheck task for its interval: construction evaluates
/// the current status immediately and spawns the watcher, changing the
/// bounds replaces it, and dropping the view cancels it.
pub struct TimespanView {
    interval: Interval,
    is_current: bool,
    rx: mpsc::Receiver<bool>,
    watcher: WatcherHandle,
}

impl TimespanView {
    pub fn new(start_iso: &str, end_iso: &str) -> Self {
        let interval = Interval::new(start_iso, end_iso);
        let is_current = interval.is_current_now();
        let (watcher, rx) = watcher::spawn(interval.clone());
        Self {
            interval,
            is_current,
            rx,
            watcher,
        }
    }

    /// Replace the interval. A no-op when the bounds are unchanged;
    /// otherwise the running watcher is cancelled, the status re-evaluated
    /// immediately and a fresh watcher spawned.
    pub fn set_bounds(&mut self, start_iso: &str, end_iso: &str) {
        if self.interval.start().iso() == start_iso && self.interval.end().iso() == end_iso {
            return;
        }
        let interval = Interval::new(start_iso, end_iso);
        self.is_current = interval.is_current_now();
        let (watcher, rx) = watcher::spawn(interval.clone());
        self.watcher = watcher;
        self.rx = rx;
        self.interval = interval;
    }

    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Label for assistive technology: "`<start> to <end>`", with
    /// " (current)" appended while the interval contains now.
    pub fn accessible_label(&self, ctx: &DateTimeContext) -> String {
        let formatter = ctx.time_formatter();
        let mut label = format!(
            "{} to {}",
            formatter.format(self.interval.start()),
            formatter.format(self.interval.end())
        );
        if self.is_current {
            label.push_str(" (current)");
        }
        label
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &DateTimeContext) -> egui::Response {
        // Drain status updates produced since the last frame.
        while let Ok(current) = self.rx.try_recv() {
            self.is_current = current;
        }

        let theme = theme::current_theme();
        let formatter = ctx.time_formatter();
        let start_text = formatter.format(self.interval.start());
        let end_text = formatter.format(self.interval.end());
        let text_color = if self.is_current {
            theme.happening_now
        } else {
            theme.text_primary
        };

        let response = ui
            .horizontal(|ui| {
                ui.label(typography::label(&start_text).color(text_color))
                    .on_hover_text(self.interval.start().iso());
                ui.label(typography::weak("to"));
                ui.label(typography::label(&end_text).color(text_color))
                    .on_hover_text(self.interval.end().iso());
                if self.is_current {
                    ui.label(
                        typography::small(egui_phosphor::regular::BROADCAST)
                            .color(theme.happening_now),
                    )
                    .on_hover_text("Happening now");
                }
            })
            .response;

        let label = self.accessible_label(ctx);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Other, true, label.clone())
        });

        // Make status flips visible without waiting for user input.
        ui.ctx().request_repaint_after(RECHECK_PERIOD);

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use egui_kittest::Harness;
    use egui_kittest::kittest::Queryable;

    #[test]
    fn test_timespan_renders_both_bounds() {
        let ctx = DateTimeContext::new();
        let mut view = TimespanView::new("2024-01-01T17:00:00Z", "2024-01-01T18:00:00Z");
        let mut harness = Harness::new_ui(move |ui| {
            view.show(ui, &ctx);
        });
        harness.run_steps(2);
        // Fallback pair is en-US / MST7MDT; January renders at UTC-7.
        harness.get_by_label("10:00 AM");
        harness.get_by_label("11:00 AM");
        harness.get_by_label("10:00 AM to 11:00 AM");
    }

    #[test]
    fn test_past_interval_is_not_current() {
        let view = TimespanView::new("2024-01-01T17:00:00Z", "2024-01-01T18:00:00Z");
        assert!(!view.is_current());

        let ctx = DateTimeContext::new();
        assert_eq!(view.accessible_label(&ctx), "10:00 AM to 11:00 AM");
    }

    #[test]
    fn test_spanning_interval_is_current() {
        let start = (Utc::now() - Duration::minutes(30)).to_rfc3339();
        let end = (Utc::now() + Duration::minutes(30)).to_rfc3339();
        let view = TimespanView::new(&start, &end);
        assert!(view.is_current());

        let ctx = DateTimeContext::new();
        assert!(view.accessible_label(&ctx).ends_with(" (current)"));
    }

    #[test]
    fn test_set_bounds_reevaluates_immediately() {
        let mut view = TimespanView::new("2024-01-01T17:00:00Z", "2024-01-01T18:00:00Z");
        assert!(!view.is_current());

        let start = (Utc::now() - Duration::minutes(30)).to_rfc3339();
        let end = (Utc::now() + Duration::minutes(30)).to_rfc3339();
        view.set_bounds(&start, &end);
        assert!(view.is_current());
    }
}
