// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::AppOptions,
        settings::Settings,
        state::{AppState, GuiState},
    },
    fetch::LiveFetcher,
    session::SearchSession,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    crate::log::init();

    let settings = Settings::load().unwrap_or_else(|e| {
        loge!("Settings: {e}; using defaults");
        Settings::default()
    });

    eframe::run_native(
        "Legal Search Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(settings)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // committed search + per-source pages/results
    pub session: SearchSession,

    // None if the HTTP client could not be built; searching is then disabled
    pub fetcher: Option<LiveFetcher>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let state = AppState {
            options: AppOptions::from_settings(settings.clone()),
            gui: GuiState::default(),
        };

        let (fetcher, status) = match LiveFetcher::new(settings) {
            Ok(f) => (Some(f), s!("Idle")),
            Err(e) => {
                loge!("Init: HTTP client failed: {e}");
                (None, format!("Error: HTTP client unavailable ({e})"))
            }
        };

        logf!(
            "Init: browser={:?} webdriver={} sources={}",
            state.options.settings.browser,
            state.options.settings.webdriver_url,
            state.options.search.sources.count()
        );

        Self {
            state,
            session: SearchSession::new(),
            fetcher,
            status: Arc::new(Mutex::new(status)),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Legal Search Dashboard");
            ui.label("This dashboard searches multiple legal databases for your query.");
            ui.add_space(6.0);

            components::source_toggles::draw(ui, self);
            components::search_bar::draw(ui, self);

            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("results_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::results::draw(ui, self);
                });
        });
    }
}
