//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest worker/storage status message - read
    pub status_line: ReadSignal<Option<String>>,
    set_status_line: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(status_line: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            status_line: status_line.0,
            set_status_line: status_line.1,
        }
    }

    /// Show a one-line status in the footer
    pub fn set_status(&self, line: impl Into<String>) {
        self.set_status_line.set(Some(line.into()));
    }
}
