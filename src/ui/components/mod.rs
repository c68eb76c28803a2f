pub mod app;
pub mod controls;
pub mod playlist;
pub mod progress;
pub mod search;
pub mod sidebar;
pub mod spinner;
