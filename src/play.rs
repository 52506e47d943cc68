//! Signal-sequence playback.
//!
//! [`Player`] is the playback state machine: it flattens a macro's cycle
//! script into a work queue and drains it one timed step at a time. Each
//! signal stays lit from its activation until the end of its cycle, so the
//! picture accumulates within a cycle and resets at each cycle boundary.
//!
//! The player never reads the clock or schedules anything itself. The caller
//! drives it by calling [`Player::tick`] with the current time from whatever
//! frame loop it runs; [`runner`] provides a ready-made threaded loop for
//! interactive use. Passing time in keeps playback deterministic:
//! ```
//! use lc3_wirevis::play::{Player, PlayState, Tick};
//! use lc3_wirevis::play::view::NullView;
//! use lc3_wirevis::seq::lc3_macro_table;
//! use std::time::Instant;
//!
//! let mut player = Player::new(lc3_macro_table(), Box::new(NullView));
//! player.start("ADD_REG");
//! assert_eq!(player.state(), PlayState::Running);
//!
//! // The first signal fires one wire-time after start.
//! let t0 = Instant::now();
//! assert_eq!(player.tick(t0), Tick::Continue);
//! assert_eq!(player.tick(t0 + player.active_wire_time()), Tick::Continue);
//! ```

use std::time::{Duration, Instant};

use log::{trace, warn};

use crate::seq::MacroTable;

use self::queue::{PlaybackQueue, WorkItem};
use self::view::SignalView;

mod queue;
pub mod runner;
pub mod view;

/// The wire-time at neutral speed: one signal activation per 200 ms.
pub const BASE_WIRE_TIME: Duration = Duration::from_millis(200);

/// The neutral point of the speed scale (reproduces [`BASE_WIRE_TIME`]).
pub const NEUTRAL_SPEED: f64 = 50.0;

// Floor for the wire-time so the tick gates can never pass on every frame
// forever with a zero duration.
const MIN_WIRE_TIME: Duration = Duration::from_millis(1);

/// The playback state of a [`Player`].
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum PlayState {
    /// No macro is playing and the queue is empty.
    #[default]
    Idle,
    /// A macro is playing and ticks advance it.
    Running,
    /// A macro is mid-playback but frozen; ticks do nothing.
    Paused,
}

/// Whether the drive loop should keep ticking.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[must_use = "a Done tick means the drive loop should stop"]
pub enum Tick {
    /// There may be more work; keep ticking.
    Continue,
    /// The player is not running (idle, paused, or just finished).
    Done,
}

/// The playback state machine.
///
/// Holds the macro table, the view it pushes highlight changes to, and the
/// in-flight queue. All methods are synchronous and non-blocking; timing
/// comes entirely from the `now` passed to [`tick`](Player::tick).
pub struct Player {
    table: MacroTable,
    view: Box<dyn SignalView + Send>,
    queue: PlaybackQueue,
    state: PlayState,
    active_wire_time: Duration,
    last_activation: Option<Instant>,
}

impl Player {
    /// Creates an idle player over the given macro table and view.
    pub fn new(table: MacroTable, view: Box<dyn SignalView + Send>) -> Self {
        Self {
            table,
            view,
            queue: PlaybackQueue::new(),
            state: PlayState::default(),
            active_wire_time: BASE_WIRE_TIME,
            last_activation: None,
        }
    }

    /// The current playback state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Whether the player is currently running (and thus wants ticks).
    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    /// The current time between signal activations.
    ///
    /// Cycle boundaries hold for twice this long, so the completed cycle
    /// lingers on screen before it is cleared.
    pub fn active_wire_time(&self) -> Duration {
        self.active_wire_time
    }

    /// Sets the time between signal activations directly.
    ///
    /// Most callers want [`set_speed`](Player::set_speed) instead.
    pub fn set_active_wire_time(&mut self, time: Duration) {
        self.active_wire_time = time.max(MIN_WIRE_TIME);
    }

    /// The macro table this player plays from.
    pub fn table(&self) -> &MacroTable {
        &self.table
    }

    /// Starts playing the macro under `key` from its first cycle.
    ///
    /// Any playback in progress is stopped and its highlights cleared first.
    /// An unknown key logs a warning and leaves the player untouched, so a
    /// stale key from the UI cannot kill a running animation.
    pub fn start(&mut self, key: &str) {
        let Some(data) = self.table.lookup(key) else {
            warn!("start: no macro under key {key:?}");
            return;
        };
        let sequence = data.sequence.clone();

        self.stop();
        self.queue = PlaybackQueue::from_sequence(&sequence);
        self.state = PlayState::Running;
        trace!("start: {key:?}, {} work items", self.queue.len());
    }

    /// Freezes playback in place. No-op unless running.
    ///
    /// Active highlights stay lit and the queue keeps its position.
    pub fn pause(&mut self) {
        if self.state == PlayState::Running {
            self.state = PlayState::Paused;
        }
    }

    /// Resumes paused playback. No-op unless paused.
    ///
    /// The gate clock restarts from the next tick, so the remaining work
    /// picks up exactly where [`pause`](Player::pause) left it.
    pub fn resume(&mut self) {
        if self.state == PlayState::Paused {
            self.state = PlayState::Running;
            self.last_activation = None;
        }
    }

    /// Stops playback: clears all highlights, drops queued work, goes idle.
    ///
    /// Idempotent, and callable from any state.
    pub fn stop(&mut self) {
        self.view.clear_all();
        self.queue.clear();
        self.state = PlayState::Idle;
        self.last_activation = None;
    }

    /// Clears every highlight without touching playback state.
    pub fn reset_wires(&mut self) {
        self.view.clear_all();
    }

    /// Sets the playback speed from a 0 to 100 slider scale.
    ///
    /// 50 is neutral (the 200 ms base wire-time); each 50 points quadruples
    /// or quarters the rate from there, so 0 is half speed and 100 is double.
    /// Out-of-range values clamp to the nearest bound and a non-finite scale
    /// falls back to neutral. Takes effect from the next gate check, mid-run
    /// included.
    pub fn set_speed(&mut self, scale: f64) {
        let scale = if scale.is_finite() { scale.clamp(0.0, 100.0) } else { NEUTRAL_SPEED };
        let divisor = 4f64.powf(scale / 100.0) / 2.0;
        self.set_active_wire_time(Duration::from_secs_f64(
            BASE_WIRE_TIME.as_secs_f64() / divisor,
        ));
    }

    /// Advances playback by one frame at time `now`.
    ///
    /// At most one work item is consumed per tick: the front signal activates
    /// once `active_wire_time` has elapsed since the last consumption, and a
    /// cycle boundary clears the screen once twice that has elapsed (both
    /// gates compare with `>=`). Returns [`Tick::Done`] when the player is
    /// not running or the queue has drained; the final cycle's highlights are
    /// left lit for inspection.
    pub fn tick(&mut self, now: Instant) -> Tick {
        if self.state != PlayState::Running {
            return Tick::Done;
        }
        if self.queue.is_empty() {
            self.state = PlayState::Idle;
            self.last_activation = None;
            return Tick::Done;
        }

        let gate = match self.queue.front() {
            Some(WorkItem::CycleBreak) => 2 * self.active_wire_time,
            _ => self.active_wire_time,
        };
        let ready = self.last_activation
            .map_or(true, |last| now.saturating_duration_since(last) >= gate);
        if !ready {
            return Tick::Continue;
        }

        match self.queue.pop() {
            Some(WorkItem::Signal(id)) => {
                trace!("tick: activate {id}");
                if !self.view.activate(&id) {
                    warn!("tick: no diagram element for signal {id:?}");
                }
            }
            Some(WorkItem::CycleBreak) => {
                trace!("tick: cycle break");
                self.view.clear_all();
            }
            None => {}
        }
        self.last_activation = Some(now);
        Tick::Continue
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("state", &self.state)
            .field("queued", &self.queue.len())
            .field("active_wire_time", &self.active_wire_time)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::view::{RecordingView, ViewEvent};
    use super::*;
    use crate::seq::{MacroData, SignalId};
    use std::time::{Duration, Instant};

    fn table_of(entries: &[(&str, &[&[&'static str]])]) -> MacroTable {
        let mut table = MacroTable::new();
        for (key, cycles) in entries {
            table.insert(*key, MacroData {
                label: key.to_string(),
                pseudocode: None,
                sequence: cycles.iter()
                    .map(|c| c.iter().copied().map(SignalId::from).collect())
                    .collect(),
            });
        }
        table
    }

    fn player_of(entries: &[(&str, &[&[&'static str]])]) -> (Player, RecordingView) {
        let view = RecordingView::new();
        (Player::new(table_of(entries), Box::new(view.clone())), view)
    }

    // Ticks at a fixed interval until the player reports Done, returning the
    // number of ticks consumed. Bounded so a gate bug fails instead of hanging.
    fn drain(player: &mut Player, step: Duration) -> usize {
        let mut now = Instant::now();
        for i in 0..10_000 {
            if player.tick(now) == Tick::Done {
                return i;
            }
            now += step;
        }
        panic!("playback did not finish");
    }

    fn activations(view: &RecordingView) -> Vec<String> {
        view.events().into_iter()
            .filter_map(|ev| match ev {
                ViewEvent::Activate(id) => Some(id.to_string()),
                ViewEvent::ClearAll => None,
            })
            .collect()
    }

    #[test]
    fn signals_play_in_cross_cycle_order() {
        let (mut player, view) = player_of(&[("M", &[&["a", "b"], &["c"], &["d", "e"]])]);
        player.start("M");
        drain(&mut player, BASE_WIRE_TIME);

        assert_eq!(activations(&view), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(player.state(), PlayState::Idle);
    }

    #[test]
    fn cycle_breaks_clear_accumulated_signals() {
        let (mut player, view) = player_of(&[("M", &[&["a", "b"], &["c"]])]);
        player.start("M");
        drain(&mut player, BASE_WIRE_TIME);

        let events = view.events();
        assert_eq!(events, vec![
            ViewEvent::ClearAll, // from start's implicit stop
            ViewEvent::Activate(SignalId::from("a")),
            ViewEvent::Activate(SignalId::from("b")),
            ViewEvent::ClearAll,
            ViewEvent::Activate(SignalId::from("c")),
        ]);
        // The last cycle stays on screen after playback ends.
        assert_eq!(view.active_signals().len(), 1);
    }

    #[test]
    fn break_gate_is_twice_the_wire_time_inclusive() {
        let (mut player, view) = player_of(&[("M", &[&["a"], &["b"]])]);
        player.start("M");

        let t0 = Instant::now();
        assert_eq!(player.tick(t0), Tick::Continue); // pops "a", gate origin = t0
        assert_eq!(view.events().len(), 2);

        // 399 time-units since the origin: one short of the 2x break gate.
        assert_eq!(player.tick(t0 + Duration::from_millis(399)), Tick::Continue);
        assert_eq!(view.events().len(), 2);
        // Exactly 400: the >= gate passes.
        assert_eq!(player.tick(t0 + Duration::from_millis(400)), Tick::Continue);
        assert_eq!(view.events().last(), Some(ViewEvent::ClearAll).as_ref());
    }

    #[test]
    fn first_item_fires_on_the_first_tick() {
        let (mut player, view) = player_of(&[("M", &[&["a"]])]);
        player.start("M");

        // No gate origin yet, so the first tick consumes immediately.
        assert_eq!(player.tick(Instant::now()), Tick::Continue);
        assert_eq!(activations(&view), vec!["a"]);
    }

    #[test]
    fn stop_is_idempotent_and_clears_everything() {
        let (mut player, view) = player_of(&[("M", &[&["a", "b"], &["c"]])]);
        player.start("M");
        let _ = player.tick(Instant::now());
        assert!(!view.active_signals().is_empty());

        player.stop();
        player.stop();
        assert_eq!(player.state(), PlayState::Idle);
        assert!(view.active_signals().is_empty());
        assert_eq!(player.tick(Instant::now()), Tick::Done);
    }

    #[test]
    fn pause_freezes_and_resume_picks_up_in_order() {
        let (mut player, view) = player_of(&[("M", &[&["a", "b", "c", "d"]])]);
        player.start("M");

        let mut now = Instant::now();
        let _ = player.tick(now);
        now += BASE_WIRE_TIME;
        let _ = player.tick(now);
        assert_eq!(activations(&view), vec!["a", "b"]);

        player.pause();
        player.pause();
        assert_eq!(player.state(), PlayState::Paused);
        // Ticks while paused consume nothing, however late they arrive.
        assert_eq!(player.tick(now + Duration::from_secs(60)), Tick::Done);
        assert_eq!(activations(&view), vec!["a", "b"]);

        player.resume();
        player.resume();
        drain(&mut player, BASE_WIRE_TIME);
        assert_eq!(activations(&view), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn resume_without_a_macro_stays_idle() {
        let (mut player, _view) = player_of(&[("M", &[&["a"]])]);
        player.resume();
        assert_eq!(player.state(), PlayState::Idle);
        assert_eq!(player.tick(Instant::now()), Tick::Done);
    }

    #[test]
    fn unknown_key_leaves_playback_untouched() {
        let (mut player, view) = player_of(&[("M", &[&["a", "b"]])]);
        player.start("M");
        let _ = player.tick(Instant::now());

        player.start("NO_SUCH_MACRO");
        assert_eq!(player.state(), PlayState::Running);
        assert_eq!(activations(&view), vec!["a"]);

        drain(&mut player, BASE_WIRE_TIME);
        assert_eq!(activations(&view), vec!["a", "b"]);
    }

    #[test]
    fn restart_drops_the_previous_macros_state() {
        let (mut player, view) = player_of(&[
            ("A", &[&["a1", "a2", "a3"]]),
            ("B", &[&["b1"]]),
        ]);
        player.start("A");
        let _ = player.tick(Instant::now());
        assert!(!view.active_signals().is_empty());

        player.start("B");
        assert!(view.active_signals().is_empty());
        drain(&mut player, BASE_WIRE_TIME);
        // Nothing of A ever resurfaces.
        assert_eq!(view.active_signals().iter().map(|id| id.to_string()).collect::<Vec<_>>(), vec!["b1"]);
    }

    #[test]
    fn empty_macro_finishes_immediately() {
        let (mut player, _view) = player_of(&[("EMPTY", &[])]);
        player.start("EMPTY");
        assert_eq!(player.state(), PlayState::Running);
        assert_eq!(player.tick(Instant::now()), Tick::Done);
        assert_eq!(player.state(), PlayState::Idle);
    }

    #[test]
    fn empty_cycles_are_silent_steps() {
        let (mut player, view) = player_of(&[("M", &[&["a"], &[], &["b"]])]);
        player.start("M");
        drain(&mut player, BASE_WIRE_TIME);
        assert_eq!(activations(&view), vec!["a", "b"]);
    }

    #[test]
    fn speed_scale_maps_monotonically() {
        let (mut player, _view) = player_of(&[]);

        player.set_speed(50.0);
        assert_eq!(player.active_wire_time(), BASE_WIRE_TIME);

        player.set_speed(0.0);
        let slowest = player.active_wire_time();
        player.set_speed(25.0);
        let slow = player.active_wire_time();
        player.set_speed(75.0);
        let fast = player.active_wire_time();
        player.set_speed(100.0);
        let fastest = player.active_wire_time();

        assert!(slowest > slow && slow > BASE_WIRE_TIME);
        assert!(BASE_WIRE_TIME > fast && fast > fastest);
        // The scale's endpoints are half and double the neutral rate.
        assert_eq!(slowest, BASE_WIRE_TIME * 2);
        assert_eq!(fastest, BASE_WIRE_TIME / 2);
    }

    #[test]
    fn speed_scale_clamps_bad_input() {
        let (mut player, _view) = player_of(&[]);

        player.set_speed(-3.0);
        let below = player.active_wire_time();
        player.set_speed(0.0);
        assert_eq!(below, player.active_wire_time());

        player.set_speed(250.0);
        let above = player.active_wire_time();
        player.set_speed(100.0);
        assert_eq!(above, player.active_wire_time());

        player.set_speed(f64::NAN);
        assert_eq!(player.active_wire_time(), BASE_WIRE_TIME);
        player.set_speed(f64::INFINITY);
        assert_eq!(player.active_wire_time(), BASE_WIRE_TIME);
    }

    #[test]
    fn reset_wires_clears_without_stopping() {
        let (mut player, view) = player_of(&[("M", &[&["a", "b"]])]);
        player.start("M");
        let _ = player.tick(Instant::now());
        assert!(!view.active_signals().is_empty());

        player.reset_wires();
        assert!(view.active_signals().is_empty());
        assert_eq!(player.state(), PlayState::Running);
    }

    #[test]
    fn fetch_plays_all_signals_and_breaks() {
        let view = RecordingView::new();
        let mut player = Player::new(crate::seq::lc3_macro_table(), Box::new(view.clone()));
        player.start("FETCH");
        drain(&mut player, BASE_WIRE_TIME);

        let events = view.events();
        let signals = events.iter().filter(|ev| matches!(ev, ViewEvent::Activate(_))).count();
        let clears = events.iter().filter(|ev| matches!(ev, ViewEvent::ClearAll)).count();
        assert_eq!(signals, 49);
        assert_eq!(clears, 3); // start's implicit stop plus two cycle breaks
        assert_eq!(view.active_signals().len(), 9);
    }
}
