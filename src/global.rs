//! Process-wide biased source and its control surface.
//!
//! The first call into this module builds an [`RngService`] over a
//! clock-seeded [`Lcg`] and installs it; later calls reuse it.  Every
//! operation here is total.
//!
//! The service sits behind a non-reentrant mutex.  Calling back into this
//! module from inside `with` panics instead of deadlocking.

use std::{
    cell::Cell,
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use crate::core::{
    config::StrengthUpdate,
    rng::Lcg,
    service::{RngService, Settings, Status},
};

static SERVICE: OnceLock<Mutex<RngService<Lcg>>> = OnceLock::new();

thread_local! {
    // set while this thread runs a `with` closure
    static HELD: Cell<bool> = const { Cell::new(false) };
}

/// Clears `HELD` on drop, unwinding included.
struct HeldGuard;

impl HeldGuard {
    fn enter() -> Self {
        HELD.with(|h| h.set(true));
        Self
    }
}

impl Drop for HeldGuard {
    fn drop(&mut self) {
        HELD.with(|h| h.set(false));
    }
}

fn service() -> MutexGuard<'static, RngService<Lcg>> {
    assert!(
        !HELD.with(Cell::get),
        "re-entrant call into the global rng service"
    );
    SERVICE
        .get_or_init(|| {
            let mut svc = RngService::new(Lcg::seed_from_time());
            svc.install();
            Mutex::new(svc)
        })
        .lock()
        // the service holds plain data, so a poisoned lock is still usable
        .unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` against the shared service.
pub(crate) fn with<R>(f: impl FnOnce(&mut RngService<Lcg>) -> R) -> R {
    let mut svc = service();
    let _held = HeldGuard::enter();
    f(&mut *svc)
}

/// The entry point every consumer should draw from.
pub fn random() -> f64 {
    service().random()
}

/// Re-arms the bias after a [`restore`].  Happens automatically on first use.
pub fn install() {
    service().install();
}

pub fn restore() {
    service().restore();
}

pub fn set_strength(update: StrengthUpdate) {
    service().configure(&update);
}

#[must_use]
pub fn get_settings() -> Settings {
    service().status().into()
}

#[must_use]
pub fn status() -> Status {
    service().status()
}

pub fn enable_turbo(enable: bool) {
    service().set_deterministic_override(enable);
}
