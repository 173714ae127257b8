//! UI layer - egui components and views

pub mod app;
pub mod components;
pub mod spacing;
pub mod theme;
pub mod typography;
pub mod views;
