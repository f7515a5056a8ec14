use crate::session::SessionState;
use crate::ui::Route;
use dioxus::prelude::*;
use tracing::info;

use super::header::Header;

/// Bound session update callbacks
///
/// Handed explicitly to the views that change the session (header, login,
/// signup); nothing else can write it.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionActions {
    set: Callback<SessionState>,
}

impl SessionActions {
    pub fn new(set: Callback<SessionState>) -> Self {
        SessionActions { set }
    }

    pub fn log_in(&self, session: SessionState) {
        self.set.call(session);
    }

    pub fn log_out(&self) {
        self.set.call(SessionState::signed_out());
    }
}

/// State owned by the layout and shared with its routes
#[derive(Clone, Copy)]
pub struct ShellState {
    pub session: ReadSignal<SessionState>,
    pub search_query: ReadSignal<String>,
    pub actions: SessionActions,
}

/// Layout component: header above the routed view
#[component]
pub fn Shell() -> Element {
    let mut session = use_signal(SessionState::signed_out);
    let mut search_query = use_signal(String::new);

    let set_session = use_callback(move |next: SessionState| {
        match next.display_name() {
            Some(name) => info!("Logged in as {}", name),
            None => info!("Logged out"),
        }
        session.set(next);
    });
    let actions = SessionActions::new(set_session);

    use_context_provider(|| ShellState {
        session: ReadSignal::from(session),
        search_query: ReadSignal::from(search_query),
        actions,
    });

    rsx! {
        Header {
            session: session(),
            actions,
            on_search: move |query: String| search_query.set(query),
        }
        main { class: "relative", Outlet::<Route> {} }
    }
}

/// Hook for route components to unpack the layout state into props
pub fn use_shell() -> ShellState {
    use_context::<ShellState>()
}
