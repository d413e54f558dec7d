//! The process-wide control surface.  Tests share one service, so they run
//! one at a time and leave it installed with default strength.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rng_bias::{Settings, StrengthUpdate, global};

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn reset() {
    global::enable_turbo(false);
    global::install();
    global::set_strength(StrengthUpdate::new().bias_prob(0.97).std(0.06));
}

#[test]
fn self_installs_on_first_use() {
    let _g = serial();
    let v = rng_bias::random();
    assert!((0.0..=1.0).contains(&v));
    assert!(global::get_settings().enabled);
    reset();
}

#[test]
fn restore_twice_then_reinstall() {
    let _g = serial();
    global::restore();
    global::restore();
    assert!(!global::get_settings().enabled);
    for _ in 0..100 {
        let v = global::random();
        assert!((0.0..1.0).contains(&v));
    }
    global::install();
    assert!(global::get_settings().enabled);
    reset();
}

#[test]
fn turbo_pins_every_draw() {
    let _g = serial();
    global::install();
    global::enable_turbo(true);
    assert!((0..1_000).all(|_| global::random() == 0.5));
    assert!(global::status().deterministic);
    global::enable_turbo(false);
    assert!(!global::status().deterministic);
    reset();
}

#[test]
fn set_strength_is_clamped_and_partial() {
    let _g = serial();
    global::install();
    global::set_strength(StrengthUpdate::new().bias_prob(5.0));
    global::set_strength(StrengthUpdate::parse("std=-3, biasProb=oops"));
    assert_eq!(
        global::get_settings(),
        Settings {
            bias_prob: 1.0,
            std: 0.0,
            enabled: true,
        }
    );
    assert!((0..1_000).all(|_| global::random() == 0.5));
    reset();
}
