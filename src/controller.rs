use std::cell::{Cell, RefCell};
use log::{debug, info, warn};
use crate::brasil_api::AddressLookup;
use crate::brasil_api::model::Address;
use crate::cep::InputCode;
use crate::error::LookupError;
use crate::render::Render;

/// Where the controller is in its lookup lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// transient, only inside `submit` before the input is accepted or rejected
    Validating,
    Busy,
    Success,
    Failed,
}

/// Everything the presentation layer needs to draw the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupState {
    pub input: InputCode,
    pub result: Option<Address>,
    pub error: Option<String>,
    pub busy: bool,
    pub phase: Phase,
}

/// Owns the view state of a single CEP lookup form.
///
/// All methods take `&self` so several submissions can be driven on one
/// thread at once. Each accepted or rejected submission gets a new
/// generation; a lookup that settles after a newer generation was issued,
/// or after [`teardown`](Self::teardown), is dropped without touching state.
pub struct LookupController<S, R> {
    service: S,
    renderer: R,
    state: RefCell<LookupState>,
    generation: Cell<u64>,
    torn_down: Cell<bool>,
}

impl<S: AddressLookup, R: Render> LookupController<S, R> {
    pub fn new(service: S, renderer: R) -> Self {
        Self {
            service,
            renderer,
            state: RefCell::new(LookupState::default()),
            generation: Cell::new(0),
            torn_down: Cell::new(false),
        }
    }

    pub fn state(&self) -> LookupState {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    /// recompute the input code from the raw text of the input field
    pub fn on_input_changed(&self, raw: &str) {
        if self.torn_down.get() {
            return;
        }
        self.state.borrow_mut().input = InputCode::from_raw(raw);
        self.renderer.input_changed(&*self.state.borrow());
    }

    /// Validate the input code and look it up. Returns the phase the
    /// controller is in once this call is done.
    pub async fn submit(&self) -> Phase {
        if self.torn_down.get() {
            debug!("submit after teardown ignored");
            return self.phase();
        }
        let generation = self.next_generation();

        let code = {
            let mut state = self.state.borrow_mut();
            state.phase = Phase::Validating;
            state.input.complete().map(str::to_owned)
        };

        let Some(code) = code else {
            let err = LookupError::InvalidInput { len: self.state.borrow().input.len() };
            info!("rejected input [{}]: {:?}", self.state.borrow().input, err);
            // the previous result stays on screen next to the error
            self.update(|state| {
                state.busy = false;
                state.error = Some(err.to_string());
                state.phase = Phase::Failed;
            });
            return Phase::Failed;
        };

        self.update(|state| {
            state.busy = true;
            state.error = None;
            state.result = None;
            state.phase = Phase::Busy;
        });

        info!("looking up CEP [{}]", code);
        let outcome = self.service.lookup(&code).await;

        if self.torn_down.get() {
            debug!("controller torn down, dropping lookup result for [{}]", code);
            return self.phase();
        }
        if generation != self.generation.get() {
            debug!("lookup #{} for [{}] superseded by #{}, dropping result", generation, code, self.generation.get());
            return self.phase();
        }

        match outcome {
            Ok(address) => {
                info!("found address for [{}]", code);
                self.update(|state| {
                    state.busy = false;
                    state.error = None;
                    state.result = Some(address);
                    state.phase = Phase::Success;
                });
            }
            Err(err) => {
                warn!("lookup for [{}] failed: {:?}", code, err);
                self.update(|state| {
                    state.busy = false;
                    state.error = Some(err.to_string());
                    state.phase = Phase::Failed;
                });
            }
        }
        self.phase()
    }

    /// Stop applying results and notifying the renderer. Lookups still in
    /// flight run to completion, their results are dropped.
    pub fn teardown(&self) {
        self.torn_down.set(true);
    }

    fn next_generation(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    fn update(&self, f: impl FnOnce(&mut LookupState)) {
        if self.torn_down.get() {
            return;
        }
        f(&mut *self.state.borrow_mut());
        self.renderer.render(&*self.state.borrow());
    }
}
