//! Request lifecycle for a remote lookup.
//!
//! A [`FetchRequest`] walks `Idle -> Pending -> Resolved | Rejected` each
//! time a query is submitted. Failures are ordinary state: callers branch on
//! [`FetchState::settled`] instead of relying on anything unwinding.

use tracing::{debug, instrument, warn};

/// Synchronous lookup capability.
pub trait Fetcher {
    /// Value returned by a successful lookup.
    type Item;
    /// Error returned by a failed lookup.
    type Error: std::fmt::Display;

    /// Looks up `query`.
    fn fetch(&self, query: &str) -> Result<Self::Item, Self::Error>;
}

/// Where a request is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T, E> {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A lookup is in flight.
    Pending,
    /// The lookup succeeded.
    Resolved(T),
    /// The lookup failed.
    Rejected(E),
}

impl<T, E> FetchState<T, E> {
    /// True before any query has been submitted.
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    /// True while a lookup is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// The successful value, if resolved.
    pub fn resolved(&self) -> Option<&T> {
        match self {
            FetchState::Resolved(item) => Some(item),
            _ => None,
        }
    }

    /// The failure, if rejected.
    pub fn rejected(&self) -> Option<&E> {
        match self {
            FetchState::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// `None` until the request settles, then its outcome.
    pub fn settled(&self) -> Option<Result<&T, &E>> {
        match self {
            FetchState::Idle | FetchState::Pending => None,
            FetchState::Resolved(item) => Some(Ok(item)),
            FetchState::Rejected(err) => Some(Err(err)),
        }
    }
}

/// Drives a [`Fetcher`] through the request lifecycle.
pub struct FetchRequest<F: Fetcher> {
    fetcher: F,
    query: String,
    state: FetchState<F::Item, F::Error>,
}

impl<F: Fetcher> FetchRequest<F> {
    /// Creates an idle request.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            query: String::new(),
            state: FetchState::Idle,
        }
    }

    /// Submits `query`, replacing any previous result.
    ///
    /// An empty query leaves the request idle and performs no lookup.
    #[instrument(skip(self))]
    pub fn submit(&mut self, query: &str) -> &FetchState<F::Item, F::Error> {
        self.query = query.to_string();
        if query.is_empty() {
            self.state = FetchState::Idle;
            return &self.state;
        }

        self.state = FetchState::Pending;
        debug!("Fetch pending");
        self.state = match self.fetcher.fetch(query) {
            Ok(item) => {
                debug!("Fetch resolved");
                FetchState::Resolved(item)
            }
            Err(err) => {
                warn!(error = %err, "Fetch rejected");
                FetchState::Rejected(err)
            }
        };
        &self.state
    }

    /// The last submitted query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current lifecycle state.
    pub fn state(&self) -> &FetchState<F::Item, F::Error> {
        &self.state
    }
}
