// src/gui/actions/paginate.rs
use crate::{gui::app::App, source::Source};

pub fn next_page(app: &mut App, source: Source) {
    turn(app, source, true);
}

pub fn prev_page(app: &mut App, source: Source) {
    turn(app, source, false);
}

fn turn(app: &mut App, source: Source, forward: bool) {
    let Some(fetcher) = app.fetcher.as_ref() else {
        app.status("Error: HTTP client unavailable");
        return;
    };

    let moved = if forward {
        app.session.next_page(fetcher, source)
    } else {
        app.session.prev_page(fetcher, source)
    };
    if !moved {
        logd!("UI: {source} page change ignored (page {})", app.session.page(source));
        return;
    }

    let st = app.session.state(source);
    match &st.error {
        Some(err) => app.status(err.clone()),
        None => app.status(format!("{source}: page {} ({} result(s))", st.page, st.records.len())),
    }
}
