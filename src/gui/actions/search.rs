// src/gui/actions/search.rs
use crate::gui::{app::App, progress::GuiProgress};

pub fn search(app: &mut App) {
    let Some(keyword) = app.state.options.search.query().map(String::from) else {
        app.status("Enter a keyword to search");
        logd!("Search: Clicked with an empty keyword");
        return;
    };
    let Some(fetcher) = app.fetcher.as_ref() else {
        app.status("Error: HTTP client unavailable");
        return;
    };

    let enabled = app.state.options.search.sources;
    logf!("Search: Begin keyword={keyword:?} enabled={enabled:?}");

    let mut prog = GuiProgress::new(app.status.clone());

    // → Blocks the UI thread until every enabled source answered or failed ←
    app.session.search(fetcher, &keyword, &enabled, Some(&mut prog));
}
