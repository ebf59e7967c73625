//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and routes input events into the component tree.
//!
//! This is the only module that knows about ratatui and crossterm. State
//! changes flow through `core::store::Store`; components only read snapshots
//! and send actions.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws when an event arrived, the terminal was resized, or a
//! deferred post-render task ran. All pending events are drained before the
//! next draw.
//!
//! ## Event Routing
//!
//! ```text
//!  ForceQuit ─────────────────────────────▶ quit
//!  Resize ────────────────────────────────▶ redraw
//!  anything else ──▶ root.handle_input()
//!                        │ unhandled Escape ──▶ quit
//! ```
//!
//! The root is a full-screen cover, so a presented modal sees input before
//! the screen underneath it.

pub mod component;
pub mod components;
pub mod deferred;
pub mod event;
pub mod navigation;
pub mod presentation;
pub mod screens;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::reducer::update;
use crate::core::state::ContentState;
use crate::core::store::Store;
use crate::tui::component::Component;
use crate::tui::deferred::DeferredQueue;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::{ScreenContext, content_view};

const IDLE_POLL: Duration = Duration::from_millis(500);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Search bars place a cursor
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

/// What the loop should do after routing one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn route_event(root: &mut impl Component, event: &TuiEvent) -> Flow {
    match event {
        TuiEvent::ForceQuit => Flow::Quit,
        TuiEvent::Resize => Flow::Continue,
        _ => {
            let handled = root.handle_input(event);
            debug!("Routed {:?} (handled: {})", event, handled);
            if !handled && *event == TuiEvent::Escape {
                Flow::Quit
            } else {
                Flow::Continue
            }
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store = Store::new(ContentState::default(), update);
    let deferred = DeferredQueue::new();
    let context = ScreenContext::from_config(&config, deferred.clone());
    let mut root = content_view(store, &context);

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(e) = &guard {
        log::warn!("Could not enable terminal modes: {}", e);
    }

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        // Post-render hooks queued by the previous frame
        if deferred.run_pending() > 0 {
            needs_redraw = true;
        }

        if needs_redraw {
            if let Err(e) = terminal.draw(|frame| root.render(frame, frame.area())) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Short poll while hooks are waiting so they land on the next tick
        let timeout = if deferred.is_empty() { IDLE_POLL } else { Duration::ZERO };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if route_event(&mut root, &event) == Flow::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            info!("Quit requested");
            break Ok(());
        }
    };

    drop(guard);
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Label;

    #[test]
    fn test_force_quit_always_quits() {
        let mut root = Label::new("x").consuming();
        assert_eq!(route_event(&mut root, &TuiEvent::ForceQuit), Flow::Quit);
    }

    #[test]
    fn test_unhandled_escape_quits() {
        let mut root = Label::new("x");
        assert_eq!(route_event(&mut root, &TuiEvent::Escape), Flow::Quit);
        let mut modal = Label::new("x").consuming();
        assert_eq!(route_event(&mut modal, &TuiEvent::Escape), Flow::Continue);
    }

    #[test]
    fn test_resize_is_not_routed() {
        let mut root = Label::new("x");
        assert_eq!(route_event(&mut root, &TuiEvent::Resize), Flow::Continue);
    }
}
