//! Theme definitions for LaHora
//!
//! Semantic color names built on top of the Catppuccin Mocha palette so the
//! widgets stay consistent with the rest of the application.

use catppuccin_egui::MOCHA;
use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg_primary: egui::Color32,
    pub text_primary: egui::Color32,

    pub bg_secondary: egui::Color32,
    pub text_secondary: egui::Color32,

    pub bg_card: egui::Color32,
    pub text_muted: egui::Color32,
    pub text_disabled: egui::Color32,

    pub brand: egui::Color32,

    /// Tint for a time span that contains the current moment.
    pub happening_now: egui::Color32,

    pub destructive: egui::Color32,

    pub border: egui::Color32,
}

impl Theme {
    /// Creates a new theme based on the Catppuccin Mocha palette
    pub fn mocha() -> Self {
        Self {
            bg_primary: MOCHA.base,
            text_primary: egui::Color32::from_rgb(230, 233, 239),

            bg_secondary: MOCHA.mantle,
            text_secondary: egui::Color32::from_rgb(186, 194, 222),

            bg_card: MOCHA.mantle,
            text_muted: MOCHA.subtext0,
            text_disabled: MOCHA.overlay1,

            brand: MOCHA.mauve,

            happening_now: MOCHA.green,

            destructive: MOCHA.red,

            border: MOCHA.surface1,
        }
    }

    pub fn current() -> Self {
        Self::mocha()
    }
}

/// Global instance of the current theme
pub fn current_theme() -> Theme {
    Theme::current()
}
