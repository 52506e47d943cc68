//! The renderer-facing seam of playback.
//!
//! A [`Player`] pushes its highlight changes through a [`SignalView`].
//! Renderers implement the trait; this module also provides the stock
//! implementations: [`NullView`] for headless runs, [`RecordingView`] for
//! tests and consistency checks, and [`ChannelView`] for renderers living on
//! another thread.
//!
//! [`Player`]: super::Player

use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use crossbeam_channel as cbc;

use crate::seq::SignalId;

/// The highlight surface playback draws on.
///
/// Implementations should be cheap and non-blocking; playback calls these
/// from its drive loop.
pub trait SignalView {
    /// Lights up the element named by `id`, returning whether a matching
    /// element exists. `false` is non-fatal; the player logs and moves on.
    fn activate(&mut self, id: &SignalId) -> bool;

    /// Turns off every lit element.
    fn clear_all(&mut self);
}

impl dyn SignalView {
    // assert SignalView is dyn-safe
}

/// A view that displays nothing and accepts every signal.
#[derive(Clone, Copy, Default, Debug)]
pub struct NullView;

impl SignalView for NullView {
    fn activate(&mut self, _id: &SignalId) -> bool {
        true
    }
    fn clear_all(&mut self) {}
}

/// One highlight change, as observed or forwarded by a view.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ViewEvent {
    /// The element named by the id lit up.
    Activate(SignalId),
    /// Every lit element turned off.
    ClearAll,
}

#[derive(Default)]
struct RecordState {
    events: Vec<ViewEvent>,
    active: BTreeSet<SignalId>,
}

/// A view that records the event stream and the currently-lit set.
///
/// Clones share one buffer, so a clone handed to a [`Player`] can be
/// inspected from outside while playback runs. Optionally resolves ids
/// against a known-element registry, in which case unknown ids are still
/// recorded but reported unresolved (activate returns `false`) and never
/// join the lit set.
///
/// [`Player`]: super::Player
#[derive(Clone, Default)]
pub struct RecordingView {
    state: Arc<Mutex<RecordState>>,
    known: Option<Arc<HashSet<SignalId>>>,
}

impl RecordingView {
    /// Creates a view that resolves every id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a view that only resolves ids in `elements`.
    pub fn with_elements(elements: impl IntoIterator<Item = SignalId>) -> Self {
        Self {
            state: Arc::default(),
            known: Some(Arc::new(elements.into_iter().collect())),
        }
    }

    fn state(&self) -> MutexGuard<'_, RecordState> {
        // a panic while holding this lock leaves nothing inconsistent
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Every highlight change so far, in order.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.state().events.clone()
    }

    /// The currently-lit elements.
    pub fn active_signals(&self) -> BTreeSet<SignalId> {
        self.state().active.clone()
    }
}

impl SignalView for RecordingView {
    fn activate(&mut self, id: &SignalId) -> bool {
        let resolved = self.known.as_ref().map_or(true, |known| known.contains(id));
        let mut state = self.state();
        state.events.push(ViewEvent::Activate(id.clone()));
        if resolved {
            state.active.insert(id.clone());
        }
        resolved
    }

    fn clear_all(&mut self) {
        let mut state = self.state();
        state.events.push(ViewEvent::ClearAll);
        state.active.clear();
    }
}

impl std::fmt::Debug for RecordingView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("RecordingView")
            .field("events", &state.events.len())
            .field("active", &state.active)
            .finish_non_exhaustive()
    }
}

/// A view that forwards each [`ViewEvent`] over a channel.
///
/// Lets a renderer on another thread (a UI event loop, say) consume highlight
/// changes at its own pace. If the receiver is gone, `activate` reports the
/// signal unresolved and the player keeps going.
#[derive(Clone, Debug)]
pub struct ChannelView {
    tx: cbc::Sender<ViewEvent>,
}

impl ChannelView {
    /// Creates a view and the receiving end of its event stream.
    pub fn new() -> (Self, cbc::Receiver<ViewEvent>) {
        let (tx, rx) = cbc::unbounded();
        (Self { tx }, rx)
    }
}

impl SignalView for ChannelView {
    fn activate(&mut self, id: &SignalId) -> bool {
        self.tx.send(ViewEvent::Activate(id.clone())).is_ok()
    }

    fn clear_all(&mut self) {
        let _ = self.tx.send(ViewEvent::ClearAll);
    }
}
