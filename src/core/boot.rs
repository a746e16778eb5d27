// Folio - core/boot.rs
//
// The boot-screen log revealer: a single timer-driven cursor over a fixed,
// ordered list of log lines. One line is revealed per tick; the cursor
// never moves backwards and never passes the last line.
//
// The clock is injected (`Instant` arguments) so the component is fully
// deterministic under test. Scheduling is deadline-based: the owner asks
// `next_deadline()` when to wake up next, and gets `None` once the terminal
// line is reached so no further wakeups are scheduled.

use std::time::{Duration, Instant};

/// Render state of a single revealed log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// The line has finished "executing" (rendered with a check mark).
    Done,
    /// The line is the one currently in progress (rendered with a prompt).
    InProgress,
}

/// Timer-driven reveal cursor over a fixed log sequence.
///
/// Constructed when the loading view mounts; dropped when it unmounts.
/// The cursor starts at 0, so the first line is visible immediately.
#[derive(Debug)]
pub struct BootSequence {
    lines: Vec<String>,
    revealed: usize,
    interval: Duration,
    mounted: Instant,
}

impl BootSequence {
    /// Create a sequence revealing one line per `interval`, starting at `now`.
    pub fn new(lines: Vec<String>, interval: Duration, now: Instant) -> Self {
        Self {
            lines,
            revealed: 0,
            // A zero interval would make every deadline immediate.
            interval: interval.max(Duration::from_millis(1)),
            mounted: now,
        }
    }

    /// Advance the cursor to match the wall clock.
    ///
    /// The cursor lands on `min(elapsed_ticks, len - 1)` and is monotone:
    /// a stale `now` never moves it backwards. Returns true when the cursor
    /// advanced, so callers can skip redundant repaints.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_complete() {
            return false;
        }
        let elapsed_ticks = (now.saturating_duration_since(self.mounted).as_millis()
            / self.interval.as_millis()) as usize;
        let target = elapsed_ticks.min(self.terminal_index());
        if target > self.revealed {
            self.revealed = target;
            true
        } else {
            false
        }
    }

    /// Index of the most recently revealed line.
    pub fn reveal_index(&self) -> usize {
        self.revealed
    }

    /// Number of lines in the sequence.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the sequence has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the cursor has reached the last line.
    pub fn is_complete(&self) -> bool {
        self.revealed + 1 >= self.lines.len()
    }

    /// Fraction of the sequence revealed so far: (cursor + 1) / len.
    ///
    /// Monotone over time and exactly 1.0 at the terminal index.
    /// An empty sequence reports 1.0 (nothing left to reveal).
    pub fn progress(&self) -> f32 {
        if self.lines.is_empty() {
            return 1.0;
        }
        (self.revealed + 1) as f32 / self.lines.len() as f32
    }

    /// The currently visible lines with their render status.
    ///
    /// Lines before the cursor are done and the cursor line is in progress,
    /// except once the sequence completes: then every line is done (the
    /// final "system stable" line is not left hanging).
    pub fn visible_lines(&self) -> impl Iterator<Item = (&str, LineStatus)> {
        let complete = self.is_complete();
        let cursor = self.revealed;
        self.lines
            .iter()
            .take(self.revealed + 1)
            .enumerate()
            .map(move |(i, line)| {
                let status = if complete || i < cursor {
                    LineStatus::Done
                } else {
                    LineStatus::InProgress
                };
                (line.as_str(), status)
            })
    }

    /// When the next reveal tick is due, or `None` once the terminal line
    /// is reached (the timer cancels itself instead of firing no-op ticks).
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.is_complete() {
            None
        } else {
            Some(self.mounted + self.interval * (self.revealed as u32 + 1))
        }
    }

    fn terminal_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(450);

    fn seq(lines: &[&str]) -> (BootSequence, Instant) {
        let now = Instant::now();
        let boot = BootSequence::new(
            lines.iter().map(|s| s.to_string()).collect(),
            TICK,
            now,
        );
        (boot, now)
    }

    /// The cursor equals min(T, len - 1) for every tick count T.
    #[test]
    fn test_reveal_index_is_min_of_ticks_and_terminal() {
        let (mut boot, t0) = seq(&["a", "b", "c", "d", "e"]);
        for ticks in 0..20u32 {
            boot.tick(t0 + TICK * ticks);
            assert_eq!(boot.reveal_index(), (ticks as usize).min(4), "at T={ticks}");
        }
    }

    /// Progress never decreases and is exactly 1.0 at the terminal index.
    #[test]
    fn test_progress_monotone_and_terminal() {
        let (mut boot, t0) = seq(&["a", "b", "c"]);
        let mut last = 0.0f32;
        for ticks in 0..10u32 {
            boot.tick(t0 + TICK * ticks);
            let p = boot.progress();
            assert!(p >= last, "progress regressed: {p} < {last}");
            last = p;
        }
        assert_eq!(last, 1.0);
        assert!(boot.is_complete());
    }

    /// The three-line walkthrough: statuses after 0, 1, and 2+ ticks.
    #[test]
    fn test_three_line_walkthrough() {
        let (mut boot, t0) = seq(&["a", "b", "c"]);

        // After 0 ticks: only "a", in progress.
        let visible: Vec<_> = boot.visible_lines().collect();
        assert_eq!(visible, vec![("a", LineStatus::InProgress)]);

        // After 1 tick: "a" done, "b" in progress.
        boot.tick(t0 + TICK);
        let visible: Vec<_> = boot.visible_lines().collect();
        assert_eq!(
            visible,
            vec![("a", LineStatus::Done), ("b", LineStatus::InProgress)]
        );

        // After 2 ticks: all three visible, all done.
        boot.tick(t0 + TICK * 2);
        let visible: Vec<_> = boot.visible_lines().collect();
        assert_eq!(
            visible,
            vec![
                ("a", LineStatus::Done),
                ("b", LineStatus::Done),
                ("c", LineStatus::Done),
            ]
        );

        // Further ticks produce no change.
        assert!(!boot.tick(t0 + TICK * 50));
        assert_eq!(boot.reveal_index(), 2);
    }

    /// A stale clock reading never moves the cursor backwards.
    #[test]
    fn test_cursor_never_regresses() {
        let (mut boot, t0) = seq(&["a", "b", "c", "d"]);
        boot.tick(t0 + TICK * 2);
        assert_eq!(boot.reveal_index(), 2);
        assert!(!boot.tick(t0 + TICK)); // older timestamp
        assert_eq!(boot.reveal_index(), 2);
    }

    /// Deadlines advance with the cursor and stop at the terminal index.
    #[test]
    fn test_deadline_self_cancels_at_terminal() {
        let (mut boot, t0) = seq(&["a", "b", "c"]);
        assert_eq!(boot.next_deadline(), Some(t0 + TICK));

        boot.tick(t0 + TICK);
        assert_eq!(boot.next_deadline(), Some(t0 + TICK * 2));

        boot.tick(t0 + TICK * 2);
        assert_eq!(boot.next_deadline(), None);
    }

    /// Tick reports whether the cursor actually advanced.
    #[test]
    fn test_tick_reports_advancement() {
        let (mut boot, t0) = seq(&["a", "b"]);
        assert!(!boot.tick(t0)); // mid-interval, no movement
        assert!(!boot.tick(t0 + TICK / 2));
        assert!(boot.tick(t0 + TICK));
        assert!(!boot.tick(t0 + TICK)); // repeat of the same instant
    }

    /// An empty sequence degrades safely instead of dividing by zero.
    #[test]
    fn test_empty_sequence_is_immediately_complete() {
        let now = Instant::now();
        let mut boot = BootSequence::new(Vec::new(), TICK, now);
        assert!(boot.is_complete());
        assert_eq!(boot.progress(), 1.0);
        assert_eq!(boot.next_deadline(), None);
        assert!(!boot.tick(now + TICK * 10));
        assert_eq!(boot.visible_lines().count(), 0);
    }

    /// A single-line sequence is complete at mount (cursor 0 is terminal).
    #[test]
    fn test_single_line_complete_at_mount() {
        let (boot, _) = seq(&["only"]);
        assert!(boot.is_complete());
        assert_eq!(boot.progress(), 1.0);
        let visible: Vec<_> = boot.visible_lines().collect();
        assert_eq!(visible, vec![("only", LineStatus::Done)]);
    }
}
