//! Keep Desktop Application
//!
//! A desktop app for short, tagged, color-coded notes.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "keep=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Keep...");

    let window = WindowBuilder::new()
        .with_title("Keep")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
