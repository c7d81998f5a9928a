//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Messages from spawned tasks back to the event loop
//! - [`TopicInput`] - The single-line topic field
//!
//! All state lives on the event loop. Network calls and timers run on
//! spawned tasks and report back through the message channel.

mod handlers;
mod input;
mod messages;

pub use input::TopicInput;
pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::{ArboardClipboard, ReqwestHttpClient};
use crate::clipboard::ClipboardAction;
use crate::flow::{HealthStatus, RequestFlow, TweetApi};
use crate::startup::ClientConfig;
use crate::traits::{ClipboardProvider, HttpClient};
use crate::ui::RenderOutputs;
use crate::view_state::{CopyButtonView, InputView, ViewModel};

/// Lines moved by PageUp/PageDown
const PAGE_SCROLL: u16 = 10;

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Whether the next loop iteration must redraw
    pub needs_redraw: bool,
    /// Animation tick counter (spinner)
    pub tick_count: u64,
    /// Topic being edited
    pub input: TopicInput,
    /// Panel state and the last rendered result
    pub flow: RequestFlow,
    /// Copy control with its acknowledgment window
    pub copy: ClipboardAction,
    /// Outcome of the startup health probe
    pub health: HealthStatus,
    /// Vertical scroll of the result area
    pub scroll: u16,
    /// Scroll limit measured by the last frame; `None` until the current
    /// result has been drawn
    pub max_scroll: Option<u16>,
    /// Transport for the generate and health endpoints
    pub api: TweetApi,
    /// Base address shown in the footer
    pub api_base_url: String,
    /// Sender handed to spawned tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create an app talking to the real service and the system clipboard.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_clients(
            config,
            Arc::new(ReqwestHttpClient::new()),
            Box::new(ArboardClipboard::new()),
        )
    }

    /// Create an app with injected HTTP and clipboard implementations.
    pub fn with_clients(
        config: &ClientConfig,
        http: Arc<dyn HttpClient>,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            input: TopicInput::new(),
            flow: RequestFlow::with_max_iteration(config.max_iteration),
            copy: ClipboardAction::new(clipboard),
            health: HealthStatus::Checking,
            scroll: 0,
            max_scroll: None,
            api: TweetApi::new(http, config),
            api_base_url: config.api_base_url.clone(),
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations. Only the loading spinner animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.flow.view().is_loading() {
            self.mark_dirty();
        }
    }

    /// Submit the current topic.
    ///
    /// The request runs on a spawned task and reports back with
    /// [`AppMessage::GenerationFinished`]. Does nothing while busy.
    pub fn submit(&mut self) {
        let Ok(request) = self.flow.begin(self.input.text()) else {
            return;
        };
        self.copy.reset();

        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = api.generate(&request).await;
            let _ = tx.send(AppMessage::GenerationFinished(outcome));
        });
    }

    /// Copy the displayed final tweet.
    pub fn copy_result(&mut self) {
        self.copy.copy(self.flow.displayed_tweet(), &self.message_tx);
    }

    /// Probe the service in the background.
    pub fn spawn_health_check(&self) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let status = api.health().await;
            let _ = tx.send(AppMessage::HealthChecked(status));
        });
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let next = self.scroll.saturating_add(lines);
        self.scroll = match self.scroll_limit() {
            Some(max) => next.min(max),
            None => next,
        };
    }

    pub fn page_up(&mut self) {
        self.scroll_up(PAGE_SCROLL);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(PAGE_SCROLL);
    }

    /// Store values measured by the last frame and clamp scroll to them.
    pub fn apply_render_outputs(&mut self, outputs: RenderOutputs) {
        self.max_scroll = Some(outputs.max_scroll);
        self.scroll = self.scroll.min(outputs.max_scroll);
    }

    /// Upper bound for scrolling, if known. Unmeasured results are clamped
    /// by the next frame instead.
    fn scroll_limit(&self) -> Option<u16> {
        if !self.flow.view().is_result_visible() {
            return Some(0);
        }
        self.max_scroll
    }

    /// Borrow the current state as a render-ready view model.
    pub fn view_model(&self) -> ViewModel<'_> {
        let view = self.flow.view();

        let result = if view.is_result_visible() {
            self.flow.result()
        } else {
            None
        };
        let history = if view.is_history_visible() {
            self.flow.result().map(|r| r.history.as_slice())
        } else {
            None
        };

        ViewModel {
            input: InputView {
                text: self.input.text(),
                cursor: self.input.cursor(),
            },
            trigger: view.trigger(),
            error: view.error_text(),
            error_hint: self
                .flow
                .last_error()
                .map(|err| err.category().recovery_hint()),
            loading: view.is_loading(),
            result,
            history,
            copy_button: CopyButtonView {
                label: self.copy.label(),
                acknowledged: self.copy.is_acknowledged(),
            },
            health: self.health,
            api_base_url: &self.api_base_url,
            scroll: self.scroll,
            tick_count: self.tick_count,
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("should_quit", &self.should_quit)
            .field("input", &self.input)
            .field("flow", &self.flow)
            .field("health", &self.health)
            .field("scroll", &self.scroll)
            .field("max_scroll", &self.max_scroll)
            .finish_non_exhaustive()
    }
}
