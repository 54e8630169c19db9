use yew::prelude::*;

use crate::animation::count_up::{CountUp, CountUpTask};
use crate::config;
use crate::timing::browser::BrowserScheduler;
use crate::timing::scheduler::Scheduler;

/// Effect body of [`use_count_up`]: starts the animation on `scheduler` and
/// returns the teardown. Without a scheduler `end` is shown at once.
pub fn start_count_up<S: Scheduler>(
    scheduler: Option<S>,
    end: u32,
    duration_ms: i32,
    set: impl Fn(u32) + 'static,
) -> impl FnOnce() + 'static {
    let animator = CountUp::new(end, f64::from(duration_ms));
    let task = match scheduler {
        Some(scheduler) => Some(CountUpTask::start(scheduler, animator, set)),
        None => {
            log::warn!("no window, showing {} without animation", end);
            set(end);
            None
        }
    };

    move || drop(task)
}

/// Current value of a count-up towards `end`. Restarts from 0 whenever
/// `end` or `duration_ms` change; unmounting cancels the pending frame.
#[hook]
pub fn use_count_up(end: u32, duration_ms: i32) -> u32 {
    let value = use_state(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(end, duration_ms)| {
                start_count_up(BrowserScheduler::new(), end, duration_ms, move |v| {
                    value.set(v)
                })
            },
            (end, duration_ms),
        );
    }

    *value
}

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub end: u32,
    #[prop_or(config::COUNT_UP_DURATION_MS)]
    pub duration: i32,
}

#[function_component(CountUpAnimation)]
pub fn count_up_animation(props: &CountUpProps) -> Html {
    let count = use_count_up(props.end, props.duration);

    html! {
        <span class="count-up gradient-text">{ format!("{}+", count) }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::sim::SimScheduler;
    use chrono::NaiveTime;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sim() -> SimScheduler {
        SimScheduler::new(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
    }

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn unmount_stops_updates() {
        let scheduler = sim();
        let (seen, sink) = recorder();
        let teardown = start_count_up(Some(scheduler.clone()), 500, 2000, sink);
        scheduler.frame_at(1000.0);

        teardown();
        scheduler.advance(5000.0);

        assert_eq!(scheduler.frame_at(5000.0), 0);
        assert_eq!(scheduler.pending_frames(), 0);
        assert_eq!(scheduler.pending_timers(), 0);
        assert_eq!(*seen.borrow(), vec![0, 250]);
    }

    #[test]
    fn non_positive_duration_shows_end_without_frames() {
        let scheduler = sim();
        let (seen, sink) = recorder();
        let _teardown = start_count_up(Some(scheduler.clone()), 150, -1, sink);

        assert_eq!(*seen.borrow(), vec![150]);
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn missing_window_shows_end() {
        let (seen, sink) = recorder();
        let teardown = start_count_up::<SimScheduler>(None, 500, 2000, sink);
        teardown();

        assert_eq!(*seen.borrow(), vec![500]);
    }
}
