use eframe::egui;

/// Large bold heading
pub fn h1(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).strong().size(20.0)
}

/// Medium bold heading
pub fn h2(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).strong().size(16.0)
}

/// Standard UI label size (small)
pub fn label(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).size(13.0)
}

/// Bold UI label size (13.0)
pub fn bold_label(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).strong().size(13.0)
}

/// Small text
pub fn small(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).size(11.0)
}

/// Muted body text
pub fn weak(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).weak()
}
