// Folio - tests/e2e_boot.rs
//
// End-to-end tests for the boot screen over the real built-in content.
//
// These tests drive the reveal cursor and the phase transition with
// simulated clock readings — no mocks, no stubs. This exercises the full
// path from the embedded portfolio.toml to the line statuses and wakeup
// deadlines the GUI renders from.

use folio::app::state::{AppState, Phase};
use folio::core::boot::{BootSequence, LineStatus};
use folio::core::content;
use folio::ui::theme::ThemeMode;
use folio::util::constants;
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

const TICK: Duration = Duration::from_millis(constants::BOOT_TICK_INTERVAL_MS);

/// Fresh application state over the built-in content, mounted at `now`.
fn mounted_state(now: Instant) -> AppState {
    let portfolio = content::load_builtin_portfolio().expect("built-in content must load");
    AppState::new(
        portfolio,
        ThemeMode::Light,
        constants::DEFAULT_FONT_SIZE,
        false,
        now,
    )
}

// =============================================================================
// Reveal sequence over the built-in boot log
// =============================================================================

/// The built-in boot log reveals one line per tick until the last line,
/// and every line ends up done.
#[test]
fn e2e_builtin_boot_log_reveals_in_order() {
    let portfolio = content::load_builtin_portfolio().expect("built-in content must load");
    let lines = portfolio.boot.lines.clone();
    assert!(lines.len() >= 2, "built-in boot log should have several lines");

    let t0 = Instant::now();
    let mut boot = BootSequence::new(lines.clone(), TICK, t0);

    for ticks in 0..lines.len() as u32 + 5 {
        boot.tick(t0 + TICK * ticks);
        let expected = (ticks as usize).min(lines.len() - 1);
        assert_eq!(boot.reveal_index(), expected, "at T={ticks}");

        let visible: Vec<_> = boot.visible_lines().collect();
        assert_eq!(visible.len(), expected + 1);
        for (i, (text, status)) in visible.iter().enumerate() {
            assert_eq!(*text, lines[i], "line order must match the content file");
            if boot.is_complete() || i < expected {
                assert_eq!(*status, LineStatus::Done, "line {i} at T={ticks}");
            } else {
                assert_eq!(*status, LineStatus::InProgress, "line {i} at T={ticks}");
            }
        }
    }

    assert!(boot.is_complete());
    assert_eq!(boot.progress(), 1.0);
    assert_eq!(boot.next_deadline(), None);
}

/// Waking at deadlines only (no intermediate frames) walks the whole
/// sequence: each wakeup advances the cursor by exactly one line.
#[test]
fn e2e_deadline_driven_schedule_visits_every_line() {
    let portfolio = content::load_builtin_portfolio().expect("built-in content must load");
    let t0 = Instant::now();
    let mut boot = BootSequence::new(portfolio.boot.lines.clone(), TICK, t0);

    let mut wakeups = 0usize;
    while let Some(deadline) = boot.next_deadline() {
        assert!(boot.tick(deadline), "a due deadline must advance the cursor");
        wakeups += 1;
        assert!(wakeups <= boot.len(), "scheduler must terminate");
    }
    assert_eq!(wakeups, boot.len() - 1);
    assert!(boot.is_complete());
}

/// A frame that arrives late (several intervals of jank) catches the
/// cursor up in one tick rather than queueing stale wakeups.
#[test]
fn e2e_late_frame_catches_up() {
    let portfolio = content::load_builtin_portfolio().expect("built-in content must load");
    let len = portfolio.boot.lines.len();
    let t0 = Instant::now();
    let mut boot = BootSequence::new(portfolio.boot.lines.clone(), TICK, t0);

    assert!(boot.tick(t0 + TICK * 3));
    assert_eq!(boot.reveal_index(), 3.min(len - 1));
}

// =============================================================================
// Phase transition
// =============================================================================

/// The loading screen ends at the one-shot deadline regardless of the
/// revealer, and finishing tears the revealer down.
#[test]
fn e2e_loading_transition_is_one_shot() {
    let t0 = Instant::now();
    let mut state = mounted_state(t0);

    assert_eq!(state.phase, Phase::Loading);
    assert!(state.boot.is_some());
    assert_eq!(
        state.loading_deadline(),
        t0 + Duration::from_millis(constants::LOAD_SCREEN_DURATION_MS)
    );

    // Drive the revealer to completion; the phase does not change.
    if let Some(boot) = state.boot.as_mut() {
        boot.tick(t0 + Duration::from_secs(60));
        assert!(boot.is_complete());
    }
    assert_eq!(state.phase, Phase::Loading);

    state.finish_loading();
    assert_eq!(state.phase, Phase::Ready);
    assert!(state.boot.is_none(), "revealer is dropped on transition");
}

/// With the 450ms tick and 3500ms screen, exactly 7 reveal wakeups fall
/// before the transition deadline (3150ms), so an 8-line log finishes
/// just inside the loading screen.
#[test]
fn e2e_tick_budget_inside_loading_screen() {
    let ticks_before_transition =
        constants::LOAD_SCREEN_DURATION_MS / constants::BOOT_TICK_INTERVAL_MS;
    assert_eq!(ticks_before_transition, 7);

    let portfolio = content::load_builtin_portfolio().expect("built-in content must load");
    assert!(
        portfolio.boot.lines.len() <= ticks_before_transition as usize + 1,
        "built-in boot log must fully reveal before the loading screen ends"
    );
}
