//! Tests for the state module.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, AppConfig, MenuBehavior, MenuState, Presentation};
use crate::commands::{AppCommand, InputContext};
use crate::constants::RESIZE_DEBOUNCE;
use crate::share::{NoNativeShare, ShareDispatcher};
use crate::state::surface::PresentationSurface;
use crate::test_utils::{
    CellViewport, ContextMother, FailingLauncher, FixedViewport, RecordingLauncher,
    ScriptedNativeShare,
};

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Columns chosen so the fallback width (columns x 8) lands on the desktop
/// side of the breakpoint.
const DESKTOP_COLUMNS: u16 = 100;

/// Columns landing on the mobile side.
const MOBILE_COLUMNS: u16 = 40;

fn test_config(behavior: MenuBehavior) -> AppConfig {
    AppConfig {
        behavior,
        ..AppConfig::default()
    }
}

/// Creates a test App with a recording launcher instead of a browser and a
/// column-derived viewport width.
fn create_test_app(behavior: MenuBehavior) -> (App, RecordingLauncher) {
    let recorder = RecordingLauncher::new();
    let dispatcher = ShareDispatcher::with_parts(
        ContextMother::example(),
        Box::new(recorder.clone()),
        Box::new(NoNativeShare),
        behavior.track_shares,
    );
    let mut app = App::with_parts(test_config(behavior), dispatcher, Box::new(CellViewport));
    app.update_terminal_size(DESKTOP_COLUMNS, 30);
    (app, recorder)
}

fn eager_behavior() -> MenuBehavior {
    MenuBehavior {
        tab_wrap_closes: true,
        defer_focus_on_open: false,
        track_shares: false,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

// ========================================================================
// Input Context Tests
// ========================================================================

#[test]
fn test_input_context_follows_menu_state() {
    let (mut app, _) = create_test_app(eager_behavior());
    assert_eq!(app.input_context(), InputContext::Card);

    app.execute_command(AppCommand::ToggleShareMenu);
    assert_eq!(app.input_context(), InputContext::ShareMenu);

    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.input_context(), InputContext::Card);
}

// ========================================================================
// Open/Close Flow Tests
// ========================================================================

#[test]
fn test_toggle_on_desktop_opens_tooltip() {
    let (mut app, _) = create_test_app(eager_behavior());

    app.handle_key_event(key(KeyCode::Char('s')));

    assert_eq!(app.menu.state(), MenuState::Open(Presentation::Tooltip));
    assert!(app.surface.expanded);
    assert!(!app.surface.hidden);
    assert_eq!(app.surface.focused_link(), Some(0));
}

#[test]
fn test_toggle_on_mobile_opens_footer_takeover() {
    let (mut app, _) = create_test_app(eager_behavior());
    app.update_terminal_size(MOBILE_COLUMNS, 30);

    app.handle_key_event(key(KeyCode::Char('s')));

    assert_eq!(
        app.menu.state(),
        MenuState::Open(Presentation::FooterTakeover)
    );
}

#[test]
fn test_injected_viewport_width_decides_presentation() {
    // Desktop-sized terminal, but the injected source reports a mobile
    // width: the source wins.
    let dispatcher = ShareDispatcher::with_parts(
        ContextMother::example(),
        Box::new(RecordingLauncher::new()),
        Box::new(NoNativeShare),
        false,
    );
    let mut app = App::with_parts(
        test_config(eager_behavior()),
        dispatcher,
        Box::new(FixedViewport(320)),
    );
    app.update_terminal_size(DESKTOP_COLUMNS, 30);

    app.execute_command(AppCommand::ToggleShareMenu);
    assert_eq!(
        app.menu.state(),
        MenuState::Open(Presentation::FooterTakeover)
    );
}

#[test]
fn test_escape_closes_and_restores_baseline() {
    let (mut app, _) = create_test_app(eager_behavior());

    app.handle_key_event(key(KeyCode::Char('s')));
    app.handle_key_event(key(KeyCode::Esc));

    assert_eq!(app.menu.state(), MenuState::Closed);
    assert!(!app.surface.expanded);
    assert!(app.surface.hidden);
    assert_eq!(app.surface.presentation, None);
    assert!((0..3).all(|i| !app.surface.is_link_focusable(i)));
    assert_eq!(app.surface.focused_link(), None);
}

#[tokio::test]
async fn test_deferred_focus_arrives_via_message() {
    let behavior = MenuBehavior {
        defer_focus_on_open: true,
        ..eager_behavior()
    };
    let (mut app, _) = create_test_app(behavior);

    app.execute_command(AppCommand::ToggleShareMenu);
    assert_eq!(app.surface.focused_link(), None);

    // Simulate the focus-defer timer delivering.
    tokio::time::sleep(crate::constants::FOCUS_DEFER * 2).await;
    app.process_messages();
    assert_eq!(app.surface.focused_link(), Some(0));
}

// ========================================================================
// Keyboard Navigation Tests
// ========================================================================

#[test]
fn test_arrow_navigation_wraps_both_ways() {
    let (mut app, _) = create_test_app(eager_behavior());
    app.handle_key_event(key(KeyCode::Char('s')));

    // Down from link 0 through the group and around.
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.surface.focused_link(), Some(1));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.surface.focused_link(), Some(2));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.surface.focused_link(), Some(0));

    // Up from link 0 wraps to the last.
    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.surface.focused_link(), Some(2));
}

#[test]
fn test_tab_past_last_link_closes_menu() {
    let (mut app, _) = create_test_app(eager_behavior());
    app.handle_key_event(key(KeyCode::Char('s')));

    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Tab));
    assert!(app.menu.is_open());

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.menu.state(), MenuState::Closed);
    assert_eq!(app.surface.focused_link(), None);
}

// ========================================================================
// Dispatch Tests
// ========================================================================

#[test]
fn test_facebook_share_launches_exact_url_and_closes() {
    let (mut app, recorder) = create_test_app(eager_behavior());

    app.handle_key_event(key(KeyCode::Char('s')));
    app.handle_key_event(key(KeyCode::Enter));

    let launches = recorder.launches();
    assert_eq!(launches.len(), 1);
    assert_eq!(
        launches[0].0,
        "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Farticle"
    );
    assert_eq!(app.menu.state(), MenuState::Closed);
}

#[test]
fn test_twitter_share_via_navigation() {
    let (mut app, recorder) = create_test_app(eager_behavior());

    app.handle_key_event(key(KeyCode::Char('s')));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));

    let launches = recorder.launches();
    assert_eq!(launches.len(), 1);
    assert!(launches[0].0.starts_with("https://twitter.com/intent/tweet?"));
    assert!(!app.menu.is_open());
}

#[tokio::test]
async fn test_activate_with_focus_on_button_only_closes() {
    let behavior = MenuBehavior {
        defer_focus_on_open: true,
        ..eager_behavior()
    };
    let (mut app, recorder) = create_test_app(behavior);

    app.execute_command(AppCommand::ToggleShareMenu);
    assert_eq!(app.surface.focused_link(), None);

    app.execute_command(AppCommand::ActivateFocusedLink);
    assert!(recorder.launches().is_empty());
    assert!(!app.menu.is_open());
}

#[test]
fn test_launch_failure_still_closes_menu() {
    let dispatcher = ShareDispatcher::with_parts(
        ContextMother::example(),
        Box::new(FailingLauncher),
        Box::new(NoNativeShare),
        false,
    );
    let mut app = App::with_parts(
        test_config(eager_behavior()),
        dispatcher,
        Box::new(CellViewport),
    );
    app.update_terminal_size(DESKTOP_COLUMNS, 30);

    app.handle_key_event(key(KeyCode::Char('s')));
    app.handle_key_event(key(KeyCode::Enter));

    // The failure is logged; the menu still treats the share as terminal.
    assert_eq!(app.menu.state(), MenuState::Closed);
    assert!(!app.exit);
}

#[test]
fn test_native_share_leaves_menu_open() {
    let recorder = RecordingLauncher::new();
    let native = ScriptedNativeShare::succeeding();
    let dispatcher = ShareDispatcher::with_parts(
        ContextMother::with_description(),
        Box::new(recorder.clone()),
        Box::new(native.clone()),
        false,
    );
    let mut app = App::with_parts(
        test_config(eager_behavior()),
        dispatcher,
        Box::new(CellViewport),
    );
    app.update_terminal_size(DESKTOP_COLUMNS, 30);

    app.execute_command(AppCommand::ToggleShareMenu);
    app.execute_command(AppCommand::NativeShare);

    assert!(app.menu.is_open());
    let requests = native.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "https://example.com/article");
    assert_eq!(requests[0].title, "Shift the overall look and feel");
    assert!(recorder.launches().is_empty());
}

#[test]
fn test_native_share_cancellation_is_nonfatal() {
    let dispatcher = ShareDispatcher::with_parts(
        ContextMother::example(),
        Box::new(RecordingLauncher::new()),
        Box::new(ScriptedNativeShare::cancelling()),
        false,
    );
    let mut app = App::with_parts(
        test_config(eager_behavior()),
        dispatcher,
        Box::new(CellViewport),
    );
    app.update_terminal_size(DESKTOP_COLUMNS, 30);

    app.execute_command(AppCommand::ToggleShareMenu);
    app.execute_command(AppCommand::NativeShare);

    // Cancellation is logged, never surfaced; the app keeps running.
    assert!(app.menu.is_open());
    assert!(!app.exit);
}

// ========================================================================
// Mouse Tests
// ========================================================================

#[test]
fn test_click_on_share_button_toggles() {
    let (mut app, _) = create_test_app(eager_behavior());
    let area = ratatui::layout::Rect::new(0, 0, DESKTOP_COLUMNS, 30);
    let zones = crate::ui::layout::zones(area, None);
    let button = zones.share_button;

    app.handle_mouse_input(left_click(button.x, button.y));
    assert!(app.menu.is_open());

    app.handle_mouse_input(left_click(button.x, button.y));
    assert!(!app.menu.is_open());
}

#[test]
fn test_click_on_link_dispatches_and_closes() {
    let (mut app, recorder) = create_test_app(eager_behavior());
    app.execute_command(AppCommand::ToggleShareMenu);

    let area = ratatui::layout::Rect::new(0, 0, DESKTOP_COLUMNS, 30);
    let zones = crate::ui::layout::zones(area, app.surface.presentation);
    let row = zones.link_rows[2];

    app.handle_mouse_input(left_click(row.x, row.y));

    let launches = recorder.launches();
    assert_eq!(launches.len(), 1);
    assert!(launches[0].0.starts_with("https://pinterest.com/pin/create/button/?"));
    assert!(!app.menu.is_open());
}

#[test]
fn test_click_outside_closes_menu() {
    let (mut app, _) = create_test_app(eager_behavior());
    app.execute_command(AppCommand::ToggleShareMenu);

    app.handle_mouse_input(left_click(0, 0));
    assert!(!app.menu.is_open());
}

#[test]
fn test_click_outside_when_closed_stays_closed() {
    let (mut app, _) = create_test_app(eager_behavior());
    app.handle_mouse_input(left_click(0, 0));
    assert!(!app.menu.is_open());
}

// ========================================================================
// Resize Debounce Tests
// ========================================================================

#[tokio::test(start_paused = true)]
async fn test_resize_burst_resets_once_after_quiescence() {
    let (mut app, _) = create_test_app(eager_behavior());
    app.execute_command(AppCommand::ToggleShareMenu);
    assert!(app.menu.is_open());

    // Five resize events within 100ms of each other.
    for i in 0..5u16 {
        app.on_resize(DESKTOP_COLUMNS + i, 30);
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        tokio::time::advance(std::time::Duration::from_millis(20)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    // Still open just before the debounce interval elapses.
    tokio::time::advance(RESIZE_DEBOUNCE - std::time::Duration::from_millis(21)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    app.process_messages();
    assert!(app.menu.is_open());

    // One reset lands 250ms after the last event.
    tokio::time::advance(std::time::Duration::from_millis(1)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    app.process_messages();
    assert_eq!(app.menu.state(), MenuState::Closed);
    assert_eq!(app.surface.presentation, None);
}
