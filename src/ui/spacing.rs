//! Standardized spacing constants for consistent UI in LaHora.

/// Extra small spacing value (4px)
pub const SPACING_XS: f32 = 4.0;

/// Small spacing value (8px)
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing value (12px)
pub const SPACING_MD: f32 = 12.0;

/// Large spacing value (16px)
pub const SPACING_LG: f32 = 16.0;

/// Extra large spacing value (24px)
pub const SPACING_XL: f32 = 24.0;

/// Corner radius for cards and list rows
pub const RADIUS_MD: u8 = 6;
