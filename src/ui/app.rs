//! Main application state and UI logic for the LaHora demo.

use catppuccin_egui::MOCHA;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use eframe::egui;

use crate::state::DateTimeContext;
use crate::ui::components::TimespanView;
use crate::ui::spacing;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Agenda,
    Settings,
}

/// Explicit locale/timezone overrides supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locale: Option<String>,
    pub time_zone: Option<String>,
}

/// One agenda entry backed by a mounted timespan view.
pub struct SessionSlot {
    pub title: String,
    pub speaker: String,
    pub start_iso: String,
    pub end_iso: String,
    pub timespan: TimespanView,
}

impl SessionSlot {
    fn new(title: &str, speaker: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let start_iso = start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let end_iso = end.to_rfc3339_opts(SecondsFormat::Secs, true);
        let timespan = TimespanView::new(&start_iso, &end_iso);
        Self {
            title: title.to_string(),
            speaker: speaker.to_string(),
            start_iso,
            end_iso,
            timespan,
        }
    }
}

/// Root egui application for LaHora
pub struct LaHoraApp {
    pub view: AppView,

    /// Shared formatting context passed to every widget.
    pub datetime: DateTimeContext,

    pub sessions: Vec<SessionSlot>,

    pub locale_input: String,
    pub time_zone_input: String,
    /// Error message from a rejected locale/timezone override, if any
    pub settings_error: Option<String>,
}

impl LaHoraApp {
    pub fn new(cc: &eframe::CreationContext<'_>, overrides: Overrides) -> Self {
        Self::setup_fonts(&cc.egui_ctx);

        let mut datetime = DateTimeContext::new();
        if let Some(zone) = &overrides.time_zone
            && let Err(err) = datetime.set_time_zone(zone)
        {
            log::warn!("--timezone rejected: {err}");
        }
        if let Some(tag) = &overrides.locale
            && let Err(err) = datetime.set_locale(tag)
        {
            log::warn!("--locale rejected: {err}");
        }

        Self {
            view: AppView::Agenda,
            datetime,
            sessions: demo_schedule(),
            locale_input: String::new(),
            time_zone_input: String::new(),
            settings_error: None,
        }
    }

    pub fn setup_fonts(ctx: &egui::Context) {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        ctx.set_fonts(fonts);
    }
}

/// A schedule anchored around "now" so the live indicator has something to
/// light up during a demo run.
fn demo_schedule() -> Vec<SessionSlot> {
    let now = Utc::now();
    vec![
        SessionSlot::new(
            "Doors & registration",
            "Front desk",
            now - Duration::minutes(120),
            now - Duration::minutes(60),
        ),
        SessionSlot::new(
            "Keynote: time is a place",
            "R. Castellanos",
            now - Duration::minutes(30),
            now + Duration::minutes(30),
        ),
        SessionSlot::new(
            "Workshop: reading the tz database",
            "M. Okafor",
            now + Duration::minutes(60),
            now + Duration::minutes(150),
        ),
        SessionSlot::new(
            "Closing panel",
            "All speakers",
            now + Duration::minutes(180),
            now + Duration::minutes(240),
        ),
    ]
}

impl eframe::App for LaHoraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        catppuccin_egui::set_theme(ctx, MOCHA);

        // First interactive frame: switch from the fixed fallback to the
        // host locale/timezone before anything is painted. No-op afterwards.
        self.datetime.ensure_ambient();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(spacing::SPACING_SM);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::CLOCK)
                        .size(22.0)
                        .color(MOCHA.mauve),
                );
                ui.add_space(2.0);
                ui.heading(
                    egui::RichText::new("LaHora")
                        .strong()
                        .color(MOCHA.text)
                        .size(18.0),
                );

                ui.add_space(20.0);

                let agenda_response = ui.add(
                    egui::Button::new(egui::RichText::new("AGENDA").color(
                        if self.view == AppView::Agenda {
                            MOCHA.mauve
                        } else {
                            MOCHA.subtext1
                        },
                    ))
                    .frame(false)
                    .corner_radius(egui::CornerRadius::same(4)),
                );
                if agenda_response.clicked() {
                    self.view = AppView::Agenda;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let settings_response = ui.add(
                        egui::Button::new(egui::RichText::new("SETTINGS").color(
                            if self.view == AppView::Settings {
                                MOCHA.mauve
                            } else {
                                MOCHA.subtext1
                            },
                        ))
                        .frame(false)
                        .corner_radius(egui::CornerRadius::same(4)),
                    );
                    if settings_response.clicked() {
                        self.view = AppView::Settings;
                    }
                });
            });
            ui.add_space(spacing::SPACING_SM);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.view {
                    AppView::Agenda => self.ui_agenda(ui),
                    AppView::Settings => self.ui_settings(ui),
                });
        });
    }
}
