//! Blink scheduling. A blink closes an icon part, reopens it after a sampled
//! delay, then arms the next blink one period later. Only one timeout is
//! pending at a time and its handle lives in the driver, so dropping or
//! stopping the driver cancels the cycle.
//!
//! Timeouts come from a `TimerHost`: the browser implementation wraps Leptos
//! timeouts, tests use a manual clock.

use super::blink::BlinkTiming;
use rand::RngCore;
use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
    time::Duration,
};
use tracing::{debug, trace, warn};

/// Source of one-shot, cancellable timeouts.
pub trait TimerHost: 'static {
    type Handle;

    /// Arms `task` to run once after `delay`. `None` means the host refused.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// The two edges of a blink handed to the state owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlinkStep {
    Close,
    Open,
}

/// Applies a step to the view state. Returns `false` once the state is gone,
/// which stops the cycle.
pub type ApplyStep = Box<dyn Fn(BlinkStep) -> bool>;

struct Inner<H: TimerHost> {
    host: H,
    timing: BlinkTiming,
    rng: RefCell<Box<dyn RngCore>>,
    apply: ApplyStep,
    pending: RefCell<Option<H::Handle>>,
    stopped: Cell<bool>,
}

/// Owns a running blink cycle. Dropping it cancels the pending timeout.
pub struct BlinkDriver<H: TimerHost> {
    inner: Rc<Inner<H>>,
}

impl<H: TimerHost> BlinkDriver<H> {
    /// Starts the cycle; the first blink fires one period from now.
    pub fn start(host: H, timing: BlinkTiming, rng: Box<dyn RngCore>, apply: ApplyStep) -> Self {
        let inner = Rc::new(Inner {
            host,
            timing,
            rng: RefCell::new(rng),
            apply,
            pending: RefCell::new(None),
            stopped: Cell::new(false),
        });
        debug!(period_ms = timing.period().as_millis() as u64, "blink cycle started");
        arm(&inner, timing.period(), BlinkStep::Close);
        Self { inner }
    }

    /// Cancels the pending timeout. Idempotent.
    pub fn stop(&self) {
        if self.inner.stopped.replace(true) {
            return;
        }
        if let Some(handle) = self.inner.pending.borrow_mut().take() {
            self.inner.host.cancel(handle);
        }
        debug!("blink cycle stopped");
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.inner.stopped.get()
    }
}

impl<H: TimerHost> Drop for BlinkDriver<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Schedules `step`. A refused timeout ends the cycle; returns whether it was armed.
fn arm<H: TimerHost>(inner: &Rc<Inner<H>>, delay: Duration, step: BlinkStep) -> bool {
    if inner.stopped.get() {
        return false;
    }
    let weak = Rc::downgrade(inner);
    let Some(handle) = inner
        .host
        .schedule(delay, Box::new(move || fire(&weak, step)))
    else {
        inner.stopped.set(true);
        warn!(?step, "timer host refused blink timeout; cycle ended");
        return false;
    };
    *inner.pending.borrow_mut() = Some(handle);
    true
}

fn fire<H: TimerHost>(weak: &Weak<Inner<H>>, step: BlinkStep) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    // The handle being fired is spent.
    inner.pending.borrow_mut().take();
    if inner.stopped.get() {
        return;
    }
    if !(inner.apply)(step) {
        inner.stopped.set(true);
        debug!("blink target disposed; cycle ended");
        return;
    }
    match step {
        BlinkStep::Close => {
            let closed = {
                let mut rng = inner.rng.borrow_mut();
                inner.timing.sample_closed(&mut *rng)
            };
            trace!(closed_ms = closed.as_millis() as u64, "blink closed");
            if !arm(&inner, closed, BlinkStep::Open) {
                // Never leave the icon shut when the reopen cannot be scheduled.
                (inner.apply)(BlinkStep::Open);
            }
        }
        BlinkStep::Open => {
            arm(&inner, inner.timing.period(), BlinkStep::Close);
        }
    }
}

/// Browser timeouts through Leptos; the handle clears the JS timeout.
#[cfg(target_arch = "wasm32")]
pub struct BrowserTimers;

#[cfg(target_arch = "wasm32")]
impl TimerHost for BrowserTimers {
    type Handle = leptos::prelude::TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<Self::Handle> {
        leptos::prelude::set_timeout_with_handle(task, delay).ok()
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::eye::{
        blink::{BlinkTarget, EYELID_OPEN, LENS_BRIGHT},
        state::EyeState,
    };
    use rand::{rngs::StdRng, SeedableRng};

    type Task = (u64, Duration, Box<dyn FnOnce()>);

    /// Manual clock: tasks run only when the test advances time.
    #[derive(Clone, Default)]
    struct ManualTimers {
        queue: Rc<RefCell<Vec<Task>>>,
        next_id: Rc<Cell<u64>>,
        now: Rc<Cell<Duration>>,
        refuse: Rc<Cell<bool>>,
    }

    impl ManualTimers {
        fn pending(&self) -> Vec<Duration> {
            self.queue
                .borrow()
                .iter()
                .map(|(_, at, _)| *at - self.now.get())
                .collect()
        }

        /// Runs the earliest task, returning the delay it was scheduled with.
        fn fire_next(&self) -> Option<Duration> {
            let task = {
                let mut queue = self.queue.borrow_mut();
                let index = queue
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, (_, at, _))| *at)
                    .map(|(index, _)| index)?;
                queue.remove(index)
            };
            let (_, at, run) = task;
            let waited = at - self.now.get();
            self.now.set(at);
            run();
            Some(waited)
        }
    }

    impl TimerHost for ManualTimers {
        type Handle = u64;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<u64> {
            if self.refuse.get() {
                return None;
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue
                .borrow_mut()
                .push((id, self.now.get() + delay, task));
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            self.queue.borrow_mut().retain(|(id, _, _)| *id != handle);
        }
    }

    fn driver(
        timers: &ManualTimers,
        state: &Rc<RefCell<EyeState>>,
    ) -> BlinkDriver<ManualTimers> {
        let state = Rc::downgrade(state);
        BlinkDriver::start(
            timers.clone(),
            BlinkTiming::default(),
            Box::new(StdRng::seed_from_u64(42)),
            Box::new(move |step| {
                let Some(state) = state.upgrade() else {
                    return false;
                };
                let mut state = state.borrow_mut();
                match step {
                    BlinkStep::Close => {
                        state.begin_blink();
                    }
                    BlinkStep::Open => {
                        state.end_blink();
                    }
                }
                true
            }),
        )
    }

    #[test]
    fn first_blink_waits_one_period() {
        let timers = ManualTimers::default();
        let state = Rc::new(RefCell::new(EyeState::new()));
        let _driver = driver(&timers, &state);

        assert_eq!(timers.pending(), vec![Duration::from_millis(2_000)]);
        assert_eq!(state.borrow().blinking(), None);
    }

    #[test]
    fn cycle_closes_reopens_and_reschedules() {
        let timers = ManualTimers::default();
        let state = Rc::new(RefCell::new(EyeState::new()));
        let _driver = driver(&timers, &state);

        for _ in 0..20 {
            assert_eq!(timers.fire_next(), Some(Duration::from_millis(2_000)));
            assert_eq!(state.borrow().blinking(), Some(BlinkTarget::Eyelid));

            let pending = timers.pending();
            assert_eq!(pending.len(), 1);
            assert!(pending[0] >= Duration::from_millis(160));
            assert!(pending[0] < Duration::from_millis(220));

            timers.fire_next();
            assert_eq!(state.borrow().blinking(), None);
            assert_eq!(state.borrow().eyelid_opacity(), EYELID_OPEN);
            assert_eq!(timers.pending(), vec![Duration::from_millis(2_000)]);
        }
    }

    #[test]
    fn toggle_during_blink_only_affects_next_blink() {
        let timers = ManualTimers::default();
        let state = Rc::new(RefCell::new(EyeState::new()));
        let _driver = driver(&timers, &state);

        timers.fire_next();
        state.borrow_mut().toggle_visibility();
        assert_eq!(timers.pending().len(), 1, "toggle must not cancel the blink");

        timers.fire_next();
        assert_eq!(state.borrow().eyelid_opacity(), EYELID_OPEN);
        assert_eq!(state.borrow().lens_opacity(), LENS_BRIGHT);

        timers.fire_next();
        assert_eq!(state.borrow().blinking(), Some(BlinkTarget::Lenses));
    }

    #[test]
    fn toggle_between_blinks_keeps_schedule() {
        let timers = ManualTimers::default();
        let state = Rc::new(RefCell::new(EyeState::new()));
        let _driver = driver(&timers, &state);

        state.borrow_mut().toggle_visibility();
        assert_eq!(timers.pending(), vec![Duration::from_millis(2_000)]);
        timers.fire_next();
        assert_eq!(state.borrow().blinking(), Some(BlinkTarget::Lenses));
    }

    #[test]
    fn stop_cancels_pending_timeout() {
        let timers = ManualTimers::default();
        let state = Rc::new(RefCell::new(EyeState::new()));
        let driver = driver(&timers, &state);

        timers.fire_next();
        driver.stop();
        assert!(timers.pending().is_empty());
        assert!(!driver.is_running());
        // Stopping twice is harmless.
        driver.stop();
    }

    #[test]
    fn dropping_driver_cancels_pending_timeout() {
        let timers = ManualTimers::default();
        let state = Rc::new(RefCell::new(EyeState::new()));
        drop(driver(&timers, &state));

        assert!(timers.pending().is_empty());
        assert_eq!(timers.fire_next(), None);
    }

    #[test]
    fn disposed_state_ends_cycle() {
        let timers = ManualTimers::default();
        let state = Rc::new(RefCell::new(EyeState::new()));
        let driver = driver(&timers, &state);

        drop(state);
        timers.fire_next();
        assert!(timers.pending().is_empty());
        assert!(!driver.is_running());
    }

    #[test]
    fn refused_reopen_ends_cycle_with_icon_open() {
        let timers = ManualTimers::default();
        let state = Rc::new(RefCell::new(EyeState::new()));
        let driver = driver(&timers, &state);

        timers.refuse.set(true);
        timers.fire_next();

        assert!(timers.pending().is_empty());
        assert!(!driver.is_running());
        assert_eq!(state.borrow().blinking(), None);
        assert_eq!(state.borrow().eyelid_opacity(), EYELID_OPEN);
    }

    #[test]
    fn refused_first_timeout_never_runs() {
        let timers = ManualTimers::default();
        timers.refuse.set(true);
        let state = Rc::new(RefCell::new(EyeState::new()));
        let driver = driver(&timers, &state);

        assert!(timers.pending().is_empty());
        assert!(!driver.is_running());
    }
}
