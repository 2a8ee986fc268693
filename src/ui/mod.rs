//! eframe/egui front end

pub mod app;
pub mod board_view;
pub mod session;
pub mod theme;

pub use app::GomokuApp;
