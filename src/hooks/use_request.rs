use crate::models::error::AppError;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Lifecycle of one async action owned by a view.
#[derive(Clone, PartialEq, Debug)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Success(Rc<T>),
    Failure(String),
}

impl<T> RequestState<T> {
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the data if the action succeeded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn settle(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::Success(Rc::new(data)),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

/// Where a `RequestMachine` stores its state.
pub trait StateSlot<T> {
    fn set(&self, state: RequestState<T>);

    fn is_idle(&self) -> bool;
}

impl<T: 'static> StateSlot<T> for UseStateHandle<RequestState<T>> {
    fn set(&self, state: RequestState<T>) {
        UseStateHandle::set(self, state);
    }

    fn is_idle(&self) -> bool {
        matches!(**self, RequestState::Idle)
    }
}

impl<T> StateSlot<T> for Rc<RefCell<RequestState<T>>> {
    fn set(&self, state: RequestState<T>) {
        *self.borrow_mut() = state;
    }

    fn is_idle(&self) -> bool {
        matches!(*self.borrow(), RequestState::Idle)
    }
}

/// Transition rules for one async action.
///
/// `begin` refuses while a request is in flight and clears the previous
/// result. `finish` always clears the in-flight flag but only commits while
/// the owner is alive.
pub struct RequestMachine<T, S> {
    slot: S,
    in_flight: Rc<Cell<bool>>,
    alive: Rc<Cell<bool>>,
    _data: PhantomData<fn() -> T>,
}

impl<T, S: Clone> Clone for RequestMachine<T, S> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            in_flight: self.in_flight.clone(),
            alive: self.alive.clone(),
            _data: PhantomData,
        }
    }
}

impl<T, S: StateSlot<T>> RequestMachine<T, S> {
    pub const fn new(slot: S, in_flight: Rc<Cell<bool>>, alive: Rc<Cell<bool>>) -> Self {
        Self {
            slot,
            in_flight,
            alive,
            _data: PhantomData,
        }
    }

    pub const fn slot(&self) -> &S {
        &self.slot
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Enters `Pending`. Returns false, changing nothing, if already in flight.
    pub fn begin(&self) -> bool {
        if self.in_flight.replace(true) {
            return false;
        }
        self.slot.set(RequestState::Pending);
        true
    }

    /// Settles the running request. Returns false when the result was dropped
    /// because the owner is gone.
    pub fn finish<F>(&self, result: Result<T, AppError>, on_success: F) -> bool
    where
        F: FnOnce(&T),
    {
        self.in_flight.set(false);

        if !self.alive.get() {
            return false;
        }

        if let Ok(data) = &result {
            on_success(data);
        }
        self.slot.set(RequestState::settle(result));
        true
    }

    /// Drops a settled result. No-op while a request is in flight.
    pub fn reset(&self) {
        if !self.in_flight.get() && !self.slot.is_idle() {
            self.slot.set(RequestState::Idle);
        }
    }

    /// Settles immediately with an error that never reached the network.
    pub fn fail(&self, error: &AppError) {
        if !self.in_flight.get() {
            self.slot.set(RequestState::Failure(error.to_string()));
        }
    }
}

/// Handle returned by `use_request`
pub struct RequestHandle<T> {
    machine: RequestMachine<T, UseStateHandle<RequestState<T>>>,
}

impl<T> Clone for RequestHandle<T> {
    fn clone(&self) -> Self {
        Self {
            machine: self.machine.clone(),
        }
    }
}

impl<T: 'static> RequestHandle<T> {
    pub fn state(&self) -> &RequestState<T> {
        self.machine.slot()
    }

    /// True from `run` until the operation settles, even before a re-render.
    pub fn in_flight(&self) -> bool {
        self.machine.in_flight()
    }

    pub fn reset(&self) {
        self.machine.reset();
    }

    pub fn fail(&self, error: &AppError) {
        self.machine.fail(error);
    }

    /// Starts `operation` unless one is already running.
    ///
    /// `on_success` runs right before the result is committed, and neither
    /// happens if the owning view unmounted in the meantime.
    pub fn run<Fut, S>(&self, operation: Fut, on_success: S) -> bool
    where
        Fut: Future<Output = Result<T, AppError>> + 'static,
        S: FnOnce(&T) + 'static,
    {
        if !self.machine.begin() {
            gloo::console::warn!("Request already in flight, ignoring trigger");
            return false;
        }

        let machine = self.machine.clone();

        spawn_local(async move {
            let result = operation.await;
            if !machine.finish(result, on_success) {
                gloo::console::log!("View unmounted, dropping request result");
            }
        });

        true
    }
}

/// Flag that stays true while the calling component is mounted.
#[hook]
pub fn use_liveness() -> Rc<Cell<bool>> {
    let alive = use_state(|| Rc::new(Cell::new(true)));

    {
        let alive = (*alive).clone();
        use_effect_with((), move |_| {
            alive.set(true);
            move || alive.set(false)
        });
    }

    (*alive).clone()
}

/// State machine plus in-flight and liveness guards for one async action.
#[hook]
pub fn use_request<T: 'static>() -> RequestHandle<T> {
    use_request_from(RequestState::Idle)
}

/// Like `use_request`, starting from `initial` on first render.
#[hook]
pub fn use_request_from<T: 'static>(initial: RequestState<T>) -> RequestHandle<T> {
    let state = use_state(move || initial);
    let in_flight = use_state(|| Rc::new(Cell::new(false)));
    let alive = use_liveness();

    RequestHandle {
        machine: RequestMachine::new(state, (*in_flight).clone(), alive),
    }
}
