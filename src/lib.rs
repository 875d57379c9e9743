//! Drum-mode playfield presentation.
//!
//! Components are stepped once per frame from `screens::gameplay::update` and
//! then emit sprites in a fixed order from `screens::gameplay::draw`. Nothing
//! here touches a GPU or a window; the platform layer consumes the
//! `core::gfx::RenderList`.

pub mod config;
pub mod core;
pub mod game;
pub mod screens;
pub mod ui;
pub mod utils;
