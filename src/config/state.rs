// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Show the snippet under each result
    pub show_details: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 900,
            window_h: 760,
            show_details: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
