use std::num::NonZeroUsize;

use chrono::NaiveTime;

use crate::timing::scheduler::Scheduler;

/// Cursor cycling over `len` items, starting at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: NonZeroUsize,
}

/// How a single item renders for the current cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Active,
    Inactive,
}

impl Slot {
    pub fn of(item: usize, active: usize) -> Slot {
        if item == active {
            Slot::Active
        } else {
            Slot::Inactive
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Slot::Active => "notification-card active",
            Slot::Inactive => "notification-card inactive",
        }
    }

    pub fn z_index(self) -> u8 {
        match self {
            Slot::Active => 10,
            Slot::Inactive => 1,
        }
    }
}

impl Rotation {
    /// `None` for an empty list, which has no valid cursor.
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

/// What the preview shows after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub index: usize,
    pub clock: NaiveTime,
}

/// Timer driving a [`Rotation`]. The rotation state lives inside the timer
/// callback; dropping the task clears the timer.
pub struct RotationTask<S: Scheduler> {
    _timer: S::Interval,
}

impl<S: Scheduler> RotationTask<S> {
    pub fn start(
        scheduler: S,
        mut rotation: Rotation,
        period_ms: u32,
        on_tick: impl Fn(Tick) + 'static,
    ) -> Self {
        let clock = scheduler.clone();
        let timer = scheduler.every(
            period_ms,
            Box::new(move || {
                let index = rotation.advance();
                on_tick(Tick {
                    index,
                    clock: clock.wall_clock(),
                });
            }),
        );
        Self { _timer: timer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::scheduler::format_clock;
    use crate::timing::sim::SimScheduler;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sim() -> SimScheduler {
        SimScheduler::new(NaiveTime::from_hms_opt(14, 59, 56).unwrap())
    }

    #[test]
    fn empty_list_has_no_rotation() {
        assert!(Rotation::new(0).is_none());
    }

    #[test]
    fn three_items_five_ticks_lands_on_two() {
        let mut rotation = Rotation::new(3).unwrap();
        for _ in 0..5 {
            rotation.advance();
        }
        assert_eq!(rotation.index(), 2);
    }

    #[test]
    fn single_item_stays_active() {
        let mut rotation = Rotation::new(1).unwrap();
        assert_eq!(rotation.advance(), 0);
        assert_eq!(Slot::of(0, rotation.index()), Slot::Active);
    }

    #[test]
    fn exactly_one_slot_is_active() {
        let mut rotation = Rotation::new(4).unwrap();
        rotation.advance();
        let slots: Vec<Slot> = (0..4)
            .map(|item| Slot::of(item, rotation.index()))
            .collect();
        assert_eq!(
            slots,
            vec![Slot::Inactive, Slot::Active, Slot::Inactive, Slot::Inactive]
        );
        assert!(Slot::Active.z_index() > Slot::Inactive.z_index());
    }

    #[test]
    fn task_ticks_on_period_and_refreshes_clock() {
        let scheduler = sim();
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let sink = ticks.clone();
        let _task = RotationTask::start(
            scheduler.clone(),
            Rotation::new(3).unwrap(),
            3000,
            move |tick| sink.borrow_mut().push(tick),
        );

        scheduler.advance(2999.0);
        assert!(ticks.borrow().is_empty());

        scheduler.advance(1.0);
        scheduler.advance(3000.0);
        let ticks = ticks.borrow();
        let indices: Vec<usize> = ticks.iter().map(|tick| tick.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(format_clock(ticks[0].clock), "14:59");
        assert_eq!(format_clock(ticks[1].clock), "15:00");
    }

    #[test]
    fn dropping_task_stops_updates() {
        let scheduler = sim();
        let ticks = Rc::new(RefCell::new(0usize));
        let sink = ticks.clone();
        let task = RotationTask::start(
            scheduler.clone(),
            Rotation::new(3).unwrap(),
            3000,
            move |_| *sink.borrow_mut() += 1,
        );

        scheduler.advance(6000.0);
        drop(task);
        assert_eq!(scheduler.pending_timers(), 0);

        scheduler.advance(60_000.0);
        assert_eq!(*ticks.borrow(), 2);
    }

    proptest! {
        #[test]
        fn cursor_after_k_ticks_is_k_mod_n(len in 1usize..20, ticks in 0usize..200) {
            let mut rotation = Rotation::new(len).unwrap();
            for _ in 0..ticks {
                rotation.advance();
            }
            prop_assert_eq!(rotation.index(), ticks % len);
            let active = (0..len).filter(|item| Slot::of(*item, rotation.index()) == Slot::Active);
            prop_assert_eq!(active.count(), 1);
        }
    }
}
