//! State management module for the sharecard TUI application.
//!
//! This module provides the decomposed state architecture:
//!
//! - [`MenuController`] - the share menu open/close state machine
//! - [`SurfaceState`] - the attribute store the renderer presents
//! - [`ViewportClass`] - mobile/desktop classification, derived on demand
//! - [`AppConfig`] - persistent configuration and behavior flags
//! - [`Debouncer`] - the cancellable resize-settle timer
//!
//! [`App`] wires these together with the share dispatcher and the message
//! channel that timer tasks report back on.

use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

use crate::commands::{AppCommand, InputContext, map_key};
use crate::constants::{FOCUS_DEFER, RESIZE_DEBOUNCE, TICK_RATE};
use crate::domain::SharePlatform;
use crate::share::ShareDispatcher;
use crate::tui::Tui;
use crate::ui;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod menu;
pub mod surface;
pub mod timers;
pub mod viewport;

#[cfg(test)]
mod tests;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{AppConfig, ArticleDefaults, MenuBehavior};
pub use menu::{MenuController, MenuState};
pub use surface::{FocusTarget, PresentationSurface, SurfaceState};
pub use timers::Debouncer;
pub use viewport::{Presentation, TerminalViewport, ViewportClass, ViewportSource};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from timer tasks back to the main app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// The resize burst has been quiet for the debounce interval.
    ResizeSettled,
    /// The focus-defer interval after opening has elapsed.
    FocusFirstLink,
}

// ============================================================================
// App
// ============================================================================

/// Top-level application state.
pub struct App {
    /// Share menu state machine.
    pub menu: MenuController,
    /// Attribute store the renderer presents.
    pub surface: SurfaceState,
    /// Outbound share dispatch.
    pub dispatcher: ShareDispatcher,
    /// Loaded configuration.
    pub config: AppConfig,
    /// Set to exit the main loop.
    pub exit: bool,
    viewport: Box<dyn ViewportSource + Send>,
    terminal_size: (u16, u16),
    message_tx: mpsc::UnboundedSender<AppMessage>,
    message_rx: mpsc::UnboundedReceiver<AppMessage>,
    resize_debounce: Debouncer,
}

impl App {
    /// Creates a new App with a dispatcher that opens the system browser.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let dispatcher = ShareDispatcher::new(
            config.article.to_context(),
            config.behavior.track_shares,
        );
        Self::with_dispatcher(config, dispatcher)
    }

    /// Creates a new App around an injected dispatcher, reading the viewport
    /// width from the terminal.
    #[must_use]
    pub fn with_dispatcher(config: AppConfig, dispatcher: ShareDispatcher) -> Self {
        Self::with_parts(config, dispatcher, Box::new(TerminalViewport))
    }

    /// Creates a new App with every seam injected.
    #[must_use]
    pub fn with_parts(
        config: AppConfig,
        dispatcher: ShareDispatcher,
        viewport: Box<dyn ViewportSource + Send>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            menu: MenuController::new(config.behavior),
            surface: SurfaceState::new(SharePlatform::ALL.len()),
            dispatcher,
            config,
            exit: false,
            viewport,
            terminal_size: (0, 0),
            message_tx,
            message_rx,
            resize_debounce: Debouncer::new(),
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        self.terminal_size = (size.width, size.height);

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            terminal.draw(|frame| ui::render(self, frame))?;

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse);
                    }
                    Event::Resize(width, height) => {
                        self.on_resize(width, height);
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                last_tick = Instant::now();
            }

            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Drains pending timer messages.
    pub fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::ResizeSettled => {
                    self.menu.reset(&mut self.surface);
                }
                AppMessage::FocusFirstLink => {
                    self.menu.focus_first_link(&mut self.surface);
                }
            }
        }
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    /// Records the new terminal size and restarts the resize-settle timer.
    ///
    /// The reset itself only happens once the burst of resize events has
    /// been quiet for the debounce interval.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.resize_debounce.schedule(
            RESIZE_DEBOUNCE,
            self.message_tx.clone(),
            AppMessage::ResizeSettled,
        );
    }

    /// Records the terminal size without touching the debounce timer.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Current terminal size in cells.
    #[must_use]
    pub const fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Current viewport width in layout units, derived on demand from the
    /// injected source; never cached.
    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.viewport.width(self.terminal_size.0)
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Determines the current input context from menu state.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if self.menu.is_open() {
            InputContext::ShareMenu
        } else {
            InputContext::Card
        }
    }

    /// Maps and executes a key event.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Executes an application command.
    pub fn execute_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::ToggleShareMenu => {
                let defer = self.menu.toggle(self.viewport_width(), &mut self.surface);
                if defer {
                    timers::defer(
                        FOCUS_DEFER,
                        self.message_tx.clone(),
                        AppMessage::FocusFirstLink,
                    );
                }
            }
            AppCommand::Dismiss => {
                self.menu.close(&mut self.surface);
            }
            AppCommand::FocusNextLink => {
                self.menu.focus_next_link(&mut self.surface);
            }
            AppCommand::FocusPrevLink => {
                self.menu.focus_prev_link(&mut self.surface);
            }
            AppCommand::TabForward => {
                self.menu.tab_forward(&mut self.surface);
            }
            AppCommand::TabBackward => {
                self.menu.tab_backward(&mut self.surface);
            }
            AppCommand::ActivateFocusedLink => {
                self.activate_focused_link();
            }
            AppCommand::NativeShare => {
                self.dispatcher.dispatch_native();
            }
            AppCommand::Noop => {}
        }
    }

    /// Dispatches the focused link's platform, then closes the menu.
    ///
    /// Sharing is a terminal action for the menu: it closes afterwards even
    /// when the dispatch itself failed or the identifier was unknown.
    fn activate_focused_link(&mut self) {
        if let Some(index) = self.surface.focused_link()
            && let Some(&platform) = SharePlatform::ALL.get(index)
            && let Err(e) = self.dispatcher.dispatch(platform)
        {
            tracing::warn!("Share via {} failed: {e}", platform.as_str());
        }
        self.menu.close(&mut self.surface);
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Handles mouse input: button toggle, link activation, outside-click
    /// close.
    pub fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        let (width, height) = self.terminal_size;
        let area = Rect::new(0, 0, width, height);
        let zones = ui::layout::zones(area, self.surface.presentation);
        let position = Position::new(mouse.column, mouse.row);

        if zones.share_button.contains(position) {
            self.execute_command(AppCommand::ToggleShareMenu);
            return;
        }

        if let Some(index) = zones.link_at(position) {
            self.surface.focus_link(index);
            self.execute_command(AppCommand::ActivateFocusedLink);
            return;
        }

        // Clicks inside the link group chrome stay in the menu; anything
        // outside both the button and the group closes it.
        let inside_group = zones
            .link_group
            .is_some_and(|group| group.contains(position));
        if !inside_group {
            self.menu.close(&mut self.surface);
        }
    }
}
