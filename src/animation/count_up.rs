use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::timing::scheduler::Scheduler;

/// Parameters of one count-up run: reach `end` after `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    end: u32,
    duration_ms: f64,
}

/// Value to display for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Running(u32),
    Finished(u32),
}

impl Step {
    pub fn value(self) -> u32 {
        match self {
            Step::Running(value) | Step::Finished(value) => value,
        }
    }
}

impl CountUp {
    pub fn new(end: u32, duration_ms: f64) -> Self {
        Self { end, duration_ms }
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Zero, negative and NaN durations skip the animation.
    pub fn is_instant(&self) -> bool {
        !(self.duration_ms > 0.0)
    }

    pub fn step_at(&self, elapsed_ms: f64) -> Step {
        if self.is_instant() {
            return Step::Finished(self.end);
        }
        let progress = (elapsed_ms.max(0.0) / self.duration_ms).min(1.0);
        if progress >= 1.0 {
            Step::Finished(self.end)
        } else {
            Step::Running((progress * f64::from(self.end)).floor() as u32)
        }
    }
}

struct Run<S: Scheduler> {
    scheduler: S,
    animator: CountUp,
    started_at: f64,
    pending: Option<S::Frame>,
    on_value: Rc<dyn Fn(u32)>,
}

/// A running count-up. Dropping it cancels the pending frame, after which
/// `on_value` is never called again.
pub struct CountUpTask<S: Scheduler> {
    _run: Rc<RefCell<Run<S>>>,
}

impl<S: Scheduler> CountUpTask<S> {
    /// Emits the first value right away: `end` for an instant animation, 0 otherwise.
    pub fn start(scheduler: S, animator: CountUp, on_value: impl Fn(u32) + 'static) -> Self {
        let on_value: Rc<dyn Fn(u32)> = Rc::new(on_value);
        let instant = animator.is_instant();
        let run = Rc::new(RefCell::new(Run {
            started_at: scheduler.now(),
            scheduler,
            animator,
            pending: None,
            on_value: on_value.clone(),
        }));

        if instant {
            on_value(animator.end());
        } else {
            on_value(0);
            schedule_frame(&run);
        }

        Self { _run: run }
    }
}

fn schedule_frame<S: Scheduler>(run: &Rc<RefCell<Run<S>>>) {
    let weak: Weak<RefCell<Run<S>>> = Rc::downgrade(run);
    let scheduler = run.borrow().scheduler.clone();
    let frame = scheduler.request_frame(Box::new(move |now: f64| {
        if let Some(run) = weak.upgrade() {
            on_frame(&run, now);
        }
    }));
    run.borrow_mut().pending = Some(frame);
}

fn on_frame<S: Scheduler>(run: &Rc<RefCell<Run<S>>>, now: f64) {
    let (step, on_value) = {
        let mut run = run.borrow_mut();
        run.pending = None;
        (run.animator.step_at(now - run.started_at), run.on_value.clone())
    };
    on_value(step.value());
    if let Step::Running(_) = step {
        schedule_frame(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::sim::SimScheduler;
    use chrono::NaiveTime;
    use proptest::prelude::*;

    fn sim() -> SimScheduler {
        SimScheduler::new(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
    }

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn reaches_documented_checkpoints() {
        let animator = CountUp::new(500, 2000.0);
        assert_eq!(animator.step_at(0.0), Step::Running(0));
        assert_eq!(animator.step_at(1000.0), Step::Running(250));
        assert_eq!(animator.step_at(2000.0), Step::Finished(500));
        assert_eq!(animator.step_at(9000.0), Step::Finished(500));
    }

    #[test]
    fn non_positive_duration_is_instant() {
        for duration in [0.0, -250.0, f64::NAN] {
            let animator = CountUp::new(42, duration);
            assert!(animator.is_instant());
            assert_eq!(animator.step_at(0.0), Step::Finished(42));
        }
    }

    #[test]
    fn clock_skew_before_start_counts_as_zero() {
        assert_eq!(CountUp::new(10, 100.0).step_at(-30.0), Step::Running(0));
    }

    #[test]
    fn task_runs_frames_until_finished() {
        let scheduler = sim();
        let (seen, sink) = recorder();
        let _task = CountUpTask::start(scheduler.clone(), CountUp::new(500, 2000.0), sink);

        assert_eq!(*seen.borrow(), vec![0]);
        assert_eq!(scheduler.pending_frames(), 1);

        for at in [500.0, 1000.0, 1500.0, 2000.0] {
            scheduler.frame_at(at);
        }

        assert_eq!(*seen.borrow(), vec![0, 125, 250, 375, 500]);
        assert_eq!(scheduler.pending_frames(), 0);
        assert_eq!(scheduler.frame_at(2500.0), 0);
    }

    #[test]
    fn instant_task_schedules_nothing() {
        let scheduler = sim();
        let (seen, sink) = recorder();
        let _task = CountUpTask::start(scheduler.clone(), CountUp::new(150, 0.0), sink);

        assert_eq!(*seen.borrow(), vec![150]);
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn dropping_task_cancels_pending_frame() {
        let scheduler = sim();
        let (seen, sink) = recorder();
        let task = CountUpTask::start(scheduler.clone(), CountUp::new(50, 2000.0), sink);
        scheduler.frame_at(400.0);
        drop(task);

        assert_eq!(scheduler.pending_frames(), 0);
        assert_eq!(scheduler.frame_at(3000.0), 0);
        assert_eq!(*seen.borrow(), vec![0, 10]);
    }

    #[test]
    fn restart_begins_from_zero() {
        let scheduler = sim();
        let (seen, sink) = recorder();
        let sink = Rc::new(sink);

        let first = {
            let sink = sink.clone();
            CountUpTask::start(scheduler.clone(), CountUp::new(100, 1000.0), move |v| sink(v))
        };
        scheduler.frame_at(500.0);
        drop(first);
        let _second = {
            let sink = sink.clone();
            CountUpTask::start(scheduler.clone(), CountUp::new(300, 1000.0), move |v| sink(v))
        };
        scheduler.frame_at(1000.0);
        scheduler.frame_at(1500.0);

        assert_eq!(*seen.borrow(), vec![0, 50, 0, 150, 300]);
    }

    #[test]
    fn same_parameters_replay_identically() {
        let run = || {
            let scheduler = sim();
            let (seen, sink) = recorder();
            let _task = CountUpTask::start(scheduler.clone(), CountUp::new(777, 1200.0), sink);
            let mut at = 0.0;
            while scheduler.pending_frames() > 0 {
                at += 16.7;
                scheduler.frame_at(at);
            }
            let values = seen.borrow().clone();
            values
        };
        assert_eq!(run(), run());
    }

    proptest! {
        #[test]
        fn display_is_monotonic_and_lands_on_end(
            end in 0u32..100_000,
            duration in 1u32..10_000,
            mut samples in proptest::collection::vec(0.0f64..20_000.0, 1..40)
        ) {
            let animator = CountUp::new(end, f64::from(duration));
            samples.sort_by(f64::total_cmp);

            prop_assert_eq!(animator.step_at(0.0).value(), 0);
            let mut last = 0;
            for elapsed in samples {
                let value = animator.step_at(elapsed).value();
                prop_assert!(value >= last);
                prop_assert!(value <= end);
                last = value;
            }
            prop_assert_eq!(animator.step_at(f64::from(duration)), Step::Finished(end));
        }
    }
}
