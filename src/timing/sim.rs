//! Hand-driven scheduler for tests: nothing fires until the test moves the clock.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use chrono::{Duration, NaiveTime};

use super::scheduler::Scheduler;

type Repeating = Rc<RefCell<Box<dyn FnMut()>>>;

struct Timer {
    period: f64,
    next_due: f64,
    callback: Repeating,
}

#[derive(Default)]
struct State {
    now: f64,
    next_id: u64,
    frames: BTreeMap<u64, Box<dyn FnOnce(f64)>>,
    timers: BTreeMap<u64, Timer>,
}

impl State {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone)]
pub struct SimScheduler {
    state: Rc<RefCell<State>>,
    clock_origin: NaiveTime,
}

#[derive(Clone, Copy)]
enum Kind {
    Frame,
    Timer,
}

pub struct SimHandle {
    id: u64,
    kind: Kind,
    state: Weak<RefCell<State>>,
}

impl Drop for SimHandle {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let mut state = state.borrow_mut();
            match self.kind {
                Kind::Frame => {
                    state.frames.remove(&self.id);
                }
                Kind::Timer => {
                    state.timers.remove(&self.id);
                }
            }
        }
    }
}

impl SimScheduler {
    /// Starts at t=0 ms with the wall clock reading `clock_origin`.
    pub fn new(clock_origin: NaiveTime) -> Self {
        Self {
            state: Rc::default(),
            clock_origin,
        }
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Moves the clock to `at` and runs every frame requested so far. Frames
    /// requested from inside a callback wait for the next call.
    pub fn frame_at(&self, at: f64) -> usize {
        let frames = {
            let mut state = self.state.borrow_mut();
            state.now = at;
            std::mem::take(&mut state.frames)
        };
        let fired = frames.len();
        for (_, callback) in frames {
            callback(at);
        }
        fired
    }

    /// Moves the clock forward by `ms`, firing due timers in order.
    pub fn advance(&self, ms: f64) {
        let target = self.state.borrow().now + ms;
        loop {
            let due = {
                let state = self.state.borrow();
                state
                    .timers
                    .iter()
                    .filter(|(_, timer)| timer.next_due <= target)
                    .min_by(|a, b| a.1.next_due.total_cmp(&b.1.next_due))
                    .map(|(id, timer)| (*id, timer.next_due, timer.callback.clone()))
            };
            let Some((id, at, callback)) = due else {
                break;
            };
            {
                let mut state = self.state.borrow_mut();
                state.now = at;
                if let Some(timer) = state.timers.get_mut(&id) {
                    timer.next_due += timer.period;
                }
            }
            (callback.borrow_mut())();
        }
        self.state.borrow_mut().now = target;
    }

    fn handle(&self, id: u64, kind: Kind) -> SimHandle {
        SimHandle {
            id,
            kind,
            state: Rc::downgrade(&self.state),
        }
    }
}

impl Scheduler for SimScheduler {
    type Frame = SimHandle;
    type Interval = SimHandle;

    fn now(&self) -> f64 {
        self.state.borrow().now
    }

    fn wall_clock(&self) -> NaiveTime {
        let elapsed = Duration::milliseconds(self.now() as i64);
        self.clock_origin.overflowing_add_signed(elapsed).0
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> SimHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.allocate();
            state.frames.insert(id, callback);
            id
        };
        self.handle(id, Kind::Frame)
    }

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> SimHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.allocate();
            let period = f64::from(period_ms.max(1));
            let next_due = state.now + period;
            state.timers.insert(
                id,
                Timer {
                    period,
                    next_due,
                    callback: Rc::new(RefCell::new(callback)),
                },
            );
            id
        };
        self.handle(id, Kind::Timer)
    }
}
