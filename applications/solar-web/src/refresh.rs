//! Fetch-and-apply loop
//!
//! Polls the snapshot source, renders only when the logger has produced a new timestamp,
//! and never lets a failure escape a poll. Polls overlap: a tick starts a new poll even
//! when earlier ones are still waiting on the network.

use std::cell::{Cell, Ref, RefCell};

use futures::stream::FuturesUnordered;
use futures::{Stream, StreamExt};

use crate::api::SnapshotSource;
use crate::config::ElementIds;
use crate::render::{render, Renderer};
use crate::state::ClientState;

/// Result of a single poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new snapshot was written to the page
    Rendered,
    /// The snapshot timestamp matched the one already shown
    Unchanged,
    /// Fetching or parsing failed; already logged
    Failed,
}

/// Owns the page state shared by all in-flight polls
///
/// State and renderer are only touched after a fetch resolves, never across an await.
pub struct Refresher<S, R> {
    source: S,
    renderer: RefCell<R>,
    elements: ElementIds,
    state: Cell<ClientState>,
}

impl<S: SnapshotSource, R: Renderer> Refresher<S, R> {
    pub fn new(source: S, renderer: R) -> Self {
        Self {
            source,
            renderer: RefCell::new(renderer),
            elements: ElementIds::default(),
            state: Cell::new(ClientState::new()),
        }
    }

    pub fn with_elements(mut self, elements: ElementIds) -> Self {
        self.elements = elements;
        self
    }

    pub fn state(&self) -> ClientState {
        self.state.get()
    }

    pub fn renderer(&self) -> Ref<'_, R> {
        self.renderer.borrow()
    }

    pub async fn fetch_and_apply(&self) -> RefreshOutcome {
        let snapshot = match self.source.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::error!("Failed to refresh solar data: {}", e);
                return RefreshOutcome::Failed;
            }
        };

        let mut state = self.state.get();
        if !state.is_new(&snapshot) {
            log::debug!("Solar data unchanged (last_refresh={})", snapshot.last_refresh);
            return RefreshOutcome::Unchanged;
        }

        state.record(&snapshot);
        self.state.set(state);
        render(&snapshot, &self.elements, &mut *self.renderer.borrow_mut());
        log::info!(
            "Rendered solar data (last_refresh={}, now={}W)",
            snapshot.last_refresh,
            snapshot.webdata_now_p
        );

        RefreshOutcome::Rendered
    }

    /// Poll once immediately, then start another poll on every tick
    ///
    /// Returns once the tick stream has ended and every started poll has finished.
    pub async fn run<T>(&self, ticks: T)
    where
        T: Stream<Item = ()>,
    {
        let mut ticks = std::pin::pin!(ticks.fuse());
        let mut in_flight = FuturesUnordered::new();
        in_flight.push(self.fetch_and_apply());

        loop {
            futures::select_biased! {
                _ = in_flight.select_next_some() => {}
                tick = ticks.next() => match tick {
                    Some(()) => in_flight.push(self.fetch_and_apply()),
                    None => break,
                },
                complete => break,
            }
        }

        while in_flight.next().await.is_some() {}

        log::info!("Refresh loop stopped");
    }
}
