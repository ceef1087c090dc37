use serde::Serialize;

/// What one view currently shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> ViewState<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Generation captured when a view starts a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A view's state plus the generation counter that guards it.
///
/// Every new request, clear or validation failure bumps the generation, so a
/// response carrying an older ticket is dropped instead of overwriting newer
/// state. The last non-loading state is kept so a finished page can be
/// rendered while another request for the same view is still in flight.
#[derive(Clone, Debug, Serialize)]
pub struct ViewSlot<T> {
    state: ViewState<T>,
    #[serde(skip)]
    settled: ViewState<T>,
    generation: u64,
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Idle,
            settled: ViewState::Idle,
            generation: 0,
        }
    }
}

impl<T> ViewSlot<T> {
    #[must_use]
    pub const fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// The current state, or the last settled one while a request is in flight.
    #[must_use]
    pub const fn shown(&self) -> &ViewState<T> {
        if self.state.is_loading() {
            &self.settled
        } else {
            &self.state
        }
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks the view as loading and returns the ticket the response must present.
    pub fn begin(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.state = ViewState::Loading;
        Ticket(self.generation)
    }
}

impl<T: Clone> ViewSlot<T> {
    /// A slot that shows `state` and has no request history.
    #[must_use]
    pub fn showing(state: ViewState<T>) -> Self {
        Self {
            settled: state.clone(),
            state,
            generation: 0,
        }
    }

    /// Copy of this slot with any in-flight loading replaced by the last settled state.
    #[must_use]
    pub fn at_rest(&self) -> Self {
        Self {
            state: self.shown().clone(),
            settled: self.settled.clone(),
            generation: self.generation,
        }
    }

    /// Replaces the state outright, invalidating any request in flight.
    pub fn replace(&mut self, state: ViewState<T>) {
        self.generation = self.generation.wrapping_add(1);
        self.settled = state.clone();
        self.state = state;
    }

    /// Applies a response if its ticket is still current. Returns whether it was applied.
    pub fn settle(&mut self, ticket: Ticket, state: ViewState<T>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.settled = state.clone();
        self.state = state;
        true
    }
}
