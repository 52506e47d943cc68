//! A threaded drive loop for interactive playback.
//!
//! [`spawn`] moves a [`Player`] onto a worker thread and returns a
//! [`Controller`] of channel-backed handles for the user-facing controls.
//! The worker multiplexes the command channel with a frame ticker that only
//! exists while the player is running; pausing or stopping drops the ticker,
//! so a canceled playback leaves nothing scheduled anywhere.
//!
//! ```no_run
//! use lc3_wirevis::play::{runner, Player};
//! use lc3_wirevis::play::view::NullView;
//! use lc3_wirevis::seq::lc3_macro_table;
//!
//! let player = Player::new(lc3_macro_table(), Box::new(NullView));
//! let ctrl = runner::spawn(player);
//!
//! ctrl.start("LD")?;
//! ctrl.set_speed(75.0)?;
//! ctrl.pause()?;
//! ctrl.resume()?;
//!
//! ctrl.close();
//! # Ok::<(), lc3_wirevis::play::runner::Disconnected>(())
//! ```

use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel as cbc;

use super::Player;

/// How often the worker ticks its player while running.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A control message for the playback worker.
#[derive(Clone, PartialEq, Debug)]
pub enum Command {
    /// Start the macro under this key.
    Start(String),
    /// Freeze playback.
    Pause,
    /// Unfreeze playback.
    Resume,
    /// Cancel playback and clear the screen.
    Stop,
    /// Set the speed scale (0 to 100).
    SetSpeed(f64),
    /// Clear the screen without touching playback.
    ResetWires,
}

/// The playback worker hung up (it can no longer receive commands).
///
/// Only happens if the worker thread panicked, since the worker otherwise
/// outlives its [`Controller`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Disconnected;

impl std::fmt::Display for Disconnected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("playback worker disconnected")
    }
}
impl std::error::Error for Disconnected {}

/// A handle to a playback worker spawned by [`spawn`].
///
/// Every control method sends asynchronously and returns as soon as the
/// command is queued.
#[derive(Debug)]
pub struct Controller {
    commands: cbc::Sender<Command>,
    handle: JoinHandle<Player>,
}

impl Controller {
    /// Sends a raw [`Command`] to the worker.
    pub fn send(&self, cmd: Command) -> Result<(), Disconnected> {
        self.commands.send(cmd).map_err(|_| Disconnected)
    }

    /// Starts the macro under `key`.
    pub fn start(&self, key: impl Into<String>) -> Result<(), Disconnected> {
        self.send(Command::Start(key.into()))
    }

    /// Freezes playback in place.
    pub fn pause(&self) -> Result<(), Disconnected> {
        self.send(Command::Pause)
    }

    /// Resumes paused playback.
    pub fn resume(&self) -> Result<(), Disconnected> {
        self.send(Command::Resume)
    }

    /// Cancels playback and clears the screen.
    pub fn stop(&self) -> Result<(), Disconnected> {
        self.send(Command::Stop)
    }

    /// Sets the speed scale (0 to 100, 50 neutral).
    pub fn set_speed(&self, scale: f64) -> Result<(), Disconnected> {
        self.send(Command::SetSpeed(scale))
    }

    /// Clears the screen without touching playback.
    pub fn reset_wires(&self) -> Result<(), Disconnected> {
        self.send(Command::ResetWires)
    }

    /// Shuts the worker down and returns its player.
    ///
    /// Returns `None` if the worker panicked.
    pub fn close(self) -> Option<Player> {
        drop(self.commands);
        self.handle.join().ok()
    }
}

/// Spawns a playback worker that owns `player`, ticking at
/// [`FRAME_INTERVAL`] while running.
pub fn spawn(player: Player) -> Controller {
    spawn_with_frame(player, FRAME_INTERVAL)
}

/// [`spawn`] with a custom frame interval.
pub fn spawn_with_frame(player: Player, frame: Duration) -> Controller {
    let (commands, rx) = cbc::unbounded();
    let handle = std::thread::spawn(move || run(player, rx, frame));
    Controller { commands, handle }
}

fn run(mut player: Player, rx: cbc::Receiver<Command>, frame: Duration) -> Player {
    loop {
        if player.is_running() {
            // The ticker lives exactly as long as the running state; leaving
            // this loop drops it, so nothing stays scheduled while paused,
            // stopped, or finished.
            let ticker = cbc::tick(frame);
            while player.is_running() {
                cbc::select! {
                    recv(rx) -> msg => match msg {
                        Ok(cmd) => apply(&mut player, cmd),
                        Err(_) => return player,
                    },
                    recv(ticker) -> msg => if let Ok(now) = msg {
                        let _ = player.tick(now);
                    },
                }
            }
        } else {
            match rx.recv() {
                Ok(cmd) => apply(&mut player, cmd),
                Err(_) => return player,
            }
        }
    }
}

fn apply(player: &mut Player, cmd: Command) {
    match cmd {
        Command::Start(key) => player.start(&key),
        Command::Pause => player.pause(),
        Command::Resume => player.resume(),
        Command::Stop => player.stop(),
        Command::SetSpeed(scale) => player.set_speed(scale),
        Command::ResetWires => player.reset_wires(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::view::{RecordingView, ViewEvent};
    use crate::play::PlayState;
    use crate::seq::{MacroData, MacroTable, SignalId};

    fn tiny_player(view: RecordingView) -> Player {
        let mut table = MacroTable::new();
        table.insert("M", MacroData {
            label: "M".to_string(),
            pseudocode: None,
            sequence: vec![
                vec![SignalId::from("a"), SignalId::from("b")],
                vec![SignalId::from("c")],
            ],
        });
        let mut player = Player::new(table, Box::new(view));
        player.set_active_wire_time(Duration::from_millis(5));
        player
    }

    #[test]
    fn worker_plays_a_macro_to_completion() {
        let view = RecordingView::new();
        let ctrl = spawn_with_frame(tiny_player(view.clone()), Duration::from_millis(1));

        ctrl.start("M").unwrap();
        // 3 signals + 1 break at 5 ms wire-time finish well within this.
        std::thread::sleep(Duration::from_millis(500));

        let player = ctrl.close().expect("worker should not panic");
        assert_eq!(player.state(), PlayState::Idle);

        let activations: Vec<_> = view.events().into_iter()
            .filter_map(|ev| match ev {
                ViewEvent::Activate(id) => Some(id.to_string()),
                ViewEvent::ClearAll => None,
            })
            .collect();
        assert_eq!(activations, vec!["a", "b", "c"]);
    }

    #[test]
    fn stop_cancels_before_completion() {
        let view = RecordingView::new();
        let mut player = tiny_player(view.clone());
        // Slow enough that the stop lands mid-playback.
        player.set_active_wire_time(Duration::from_secs(60));
        let ctrl = spawn_with_frame(player, Duration::from_millis(1));

        ctrl.start("M").unwrap();
        std::thread::sleep(Duration::from_millis(100));
        ctrl.stop().unwrap();

        let player = ctrl.close().expect("worker should not panic");
        assert_eq!(player.state(), PlayState::Idle);
        assert!(view.active_signals().is_empty());
    }

    #[test]
    fn close_returns_an_idle_worker() {
        let ctrl = spawn(tiny_player(RecordingView::new()));
        let player = ctrl.close().expect("worker should not panic");
        assert_eq!(player.state(), PlayState::Idle);
    }
}
