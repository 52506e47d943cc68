//! A signal-sequence playback engine for visualizing the LC-3 datapath.
//!
//! This crate is the core of an interactive teaching visualization:
//! for each LC-3 instruction (plus the FETCH and DECODE pseudo-instructions),
//! it holds a canned script of which control and data signals are live during
//! each clock cycle, and it plays those scripts back as timed highlight
//! activations against a datapath diagram.
//!
//! Note that this crate does *not* execute LC-3 programs. No register or
//! memory contents are computed anywhere; the mapping from instruction to
//! signal sequence is hand-authored data, and playback only decides *when*
//! each named wire lights up.
//!
//! # Usage
//!
//! Playback requires a macro table (the signal scripts) and a view
//! (the renderer-facing side effects). The bundled LC-3 table is available
//! through [`seq::lc3_macro_table`]:
//! ```
//! use lc3_wirevis::play::{Player, Tick};
//! use lc3_wirevis::play::view::RecordingView;
//! use lc3_wirevis::seq::lc3_macro_table;
//! use std::time::{Duration, Instant};
//!
//! let view = RecordingView::new();
//! let mut player = Player::new(lc3_macro_table(), Box::new(view.clone()));
//!
//! player.start("FETCH");
//!
//! // The caller owns the clock. Here, we fake a frame loop:
//! let mut now = Instant::now();
//! while let Tick::Continue = player.tick(now) {
//!     now += Duration::from_millis(200);
//! }
//!
//! // FETCH's final cycle loads the IR; its 9 signals stay lit at the end.
//! assert_eq!(view.active_signals().len(), 9);
//! ```
//!
//! For interactive use, the [`play::runner`] module drives a [`Player`] on a
//! worker thread with a real frame ticker, and exposes the user-facing
//! controls (start, pause, resume, stop, speed) as channel commands.
//!
//! [`Player`]: play::Player
#![warn(missing_docs)]

pub mod seq;
pub mod pseudocode;
pub mod play;
pub mod diagram;
