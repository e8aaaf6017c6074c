use std::{cell::Cell, future::Future, rc::Rc};

use leptos::*;

use crate::api::ApiError;

#[derive(Debug, Default)]
struct GateInner {
    issued: Cell<u64>,
    applied: Cell<u64>,
    cancelled: Cell<bool>,
}

/// Orders responses of one logical fetch.
///
/// Each request takes a sequence number from [`RequestGate::begin`]. A
/// response is applied only if nothing newer has been applied yet and the
/// owner has not been torn down, so state never regresses to an older
/// response and never changes after unmount.
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    inner: Rc<GateInner>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        let next = self.inner.issued.get() + 1;
        self.inner.issued.set(next);
        next
    }

    pub fn try_apply(&self, seq: u64) -> bool {
        if self.inner.cancelled.get() || seq <= self.inner.applied.get() {
            return false;
        }
        self.inner.applied.set(seq);
        true
    }

    /// True while no request newer than `seq` has been issued.
    pub fn is_latest(&self, seq: u64) -> bool {
        !self.inner.cancelled.get() && seq == self.inner.issued.get()
    }

    /// Rejects every request issued so far. Later requests apply as usual.
    pub fn invalidate(&self) {
        self.inner.applied.set(self.inner.issued.get());
    }

    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }
}

/// Gate cancelled when the calling component is cleaned up.
pub fn use_request_gate() -> RequestGate {
    let gate = RequestGate::new();
    let owned = gate.clone();
    on_cleanup(move || owned.cancel());
    gate
}

/// Page-owned remote data: the last applied value, the last error and a
/// loading flag, all written through one [`RequestGate`].
pub struct PageData<T: 'static> {
    gate: RequestGate,
    pub value: RwSignal<Option<T>>,
    pub error: RwSignal<Option<ApiError>>,
    pub loading: RwSignal<bool>,
}

impl<T: 'static> Clone for PageData<T> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            value: self.value,
            error: self.error,
            loading: self.loading,
        }
    }
}

impl<T: Clone + 'static> PageData<T> {
    pub fn new() -> Self {
        Self {
            gate: use_request_gate(),
            value: create_rw_signal(None),
            error: create_rw_signal(None),
            loading: create_rw_signal(false),
        }
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    pub fn begin(&self) -> u64 {
        self.loading.set(true);
        self.gate.begin()
    }

    /// Applies a finished request. Returns false when the response was
    /// discarded.
    pub fn apply(&self, seq: u64, result: Result<T, ApiError>) -> bool {
        if !self.gate.try_apply(seq) {
            return false;
        }
        match result {
            Ok(value) => {
                self.value.set(Some(value));
                self.error.set(None);
            }
            Err(err) => {
                log::warn!("page fetch failed: {}", err);
                self.error.set(Some(err));
            }
        }
        if self.gate.is_latest(seq) {
            self.loading.set(false);
        }
        true
    }

    pub fn load<F>(&self, request: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let seq = self.begin();
        let this = self.clone();
        spawn_local(async move {
            let result = request.await;
            this.apply(seq, result);
        });
    }

    pub fn get(&self) -> Option<T> {
        self.value.get()
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.value.update(|value| {
            if let Some(value) = value.as_mut() {
                f(value);
            }
        });
    }
}

impl<T: Clone + 'static> Default for PageData<T> {
    fn default() -> Self {
        Self::new()
    }
}
