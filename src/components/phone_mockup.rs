use chrono::NaiveTime;
use yew::prelude::*;

use crate::animation::rotation::{Rotation, RotationTask, Slot, Tick};
use crate::config;
use crate::content::{Notification, NOTIFICATIONS};
use crate::timing::browser::BrowserScheduler;
use crate::timing::scheduler::{format_clock, Scheduler};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Preview {
    index: usize,
    clock: NaiveTime,
}

impl From<Tick> for Preview {
    fn from(tick: Tick) -> Self {
        Self {
            index: tick.index,
            clock: tick.clock,
        }
    }
}

/// Effect body of [`use_rotating_preview`]. Shows the first record with the
/// current clock, then advances every `period_ms` until the teardown runs.
fn start_rotating_preview<S: Scheduler>(
    scheduler: Option<S>,
    len: usize,
    period_ms: u32,
    set: impl Fn(Preview) + 'static,
) -> impl FnOnce() + 'static {
    let task = match (scheduler, Rotation::new(len)) {
        (Some(scheduler), Some(rotation)) => {
            set(Preview {
                index: rotation.index(),
                clock: scheduler.wall_clock(),
            });
            Some(RotationTask::start(scheduler, rotation, period_ms, move |tick| {
                set(tick.into())
            }))
        }
        (_, None) => {
            log::debug!("no notifications to rotate");
            None
        }
        (None, _) => {
            log::warn!("no window, notification preview stays still");
            None
        }
    };

    move || drop(task)
}

#[hook]
fn use_rotating_preview(len: usize, period_ms: u32) -> Preview {
    let preview = use_state(|| Preview {
        index: 0,
        clock: BrowserScheduler::new()
            .map(|scheduler| scheduler.wall_clock())
            .unwrap_or_default(),
    });

    {
        let preview = preview.clone();
        use_effect_with_deps(
            move |&(len, period_ms)| {
                start_rotating_preview(BrowserScheduler::new(), len, period_ms, move |next| {
                    preview.set(next)
                })
            },
            (len, period_ms),
        );
    }

    *preview
}

fn notification_card(notification: &Notification, slot: Slot) -> Html {
    let progress = notification.progress.map(|percent| {
        html! {
            <div class="notification-progress">
                <div class="notification-progress-bar" style={format!("width: {}%;", percent.get())}></div>
                <span class="notification-progress-label">{ format!("{}%", percent.get()) }</span>
            </div>
        }
    });
    let image = notification.image.map(|src| {
        html! { <img class="notification-image" src={src} alt={notification.title} /> }
    });

    html! {
        <div
            key={notification.id}
            class={slot.class()}
            style={format!("z-index: {};", slot.z_index())}
            aria-hidden={if slot == Slot::Active { "false" } else { "true" }}
        >
            <h4 class="notification-title">{ notification.title }</h4>
            <p class="notification-message">{ notification.message }</p>
            { for image }
            { for progress }
            <span class="notification-time">{ notification.time }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PhoneMockupProps {
    #[prop_or(NOTIFICATIONS)]
    pub notifications: &'static [Notification],
    #[prop_or(config::NOTIFICATION_PERIOD_MS)]
    pub period_ms: u32,
}

#[function_component(PhoneMockup)]
pub fn phone_mockup(props: &PhoneMockupProps) -> Html {
    let preview = use_rotating_preview(props.notifications.len(), props.period_ms);

    html! {
        <div class="phone-mockup">
            <style>
                {r#"
                    .phone-mockup {
                        position: relative;
                        width: 300px;
                        height: 600px;
                        margin: 0 auto;
                        border-radius: 44px;
                        border: 12px solid var(--primary);
                        background: var(--surface);
                        overflow: hidden;
                        box-shadow: 0 30px 60px rgba(8, 31, 92, 0.25);
                    }
                    .phone-notch {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 120px;
                        height: 24px;
                        background: var(--primary);
                        border-radius: 0 0 16px 16px;
                        z-index: 20;
                    }
                    .phone-status-bar {
                        display: flex;
                        justify-content: space-between;
                        padding: 8px 20px 0 20px;
                        font-size: 0.8rem;
                        font-weight: 600;
                        color: var(--primary);
                    }
                    .phone-signal-icons span {
                        margin-left: 6px;
                    }
                    .phone-screen {
                        padding: 1.5rem;
                    }
                    .phone-screen-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 2rem;
                        color: var(--primary);
                    }
                    .notification-stack {
                        position: relative;
                        height: 240px;
                    }
                    .notification-card {
                        position: absolute;
                        inset: 0 0 auto 0;
                        padding: 1rem;
                        border-radius: 16px;
                        background: #ffffff;
                        box-shadow: 0 8px 24px rgba(51, 78, 172, 0.15);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .notification-card.active {
                        opacity: 1;
                        transform: translateY(0) scale(1);
                    }
                    .notification-card.inactive {
                        opacity: 0;
                        transform: translateY(20px) scale(0.95);
                        pointer-events: none;
                    }
                    .notification-title {
                        margin: 0 0 0.5rem 0;
                        color: var(--primary);
                    }
                    .notification-message {
                        margin: 0 0 0.75rem 0;
                        color: var(--primary-light);
                    }
                    .notification-image {
                        width: 100%;
                        height: 90px;
                        object-fit: cover;
                        border-radius: 10px;
                        margin-bottom: 0.75rem;
                    }
                    .notification-progress {
                        position: relative;
                        height: 6px;
                        border-radius: 3px;
                        background: var(--secondary-light);
                        margin-bottom: 1.25rem;
                    }
                    .notification-progress-bar {
                        height: 100%;
                        border-radius: 3px;
                        background: linear-gradient(90deg, var(--primary-light), var(--secondary));
                    }
                    .notification-progress-label {
                        position: absolute;
                        right: 0;
                        top: 8px;
                        font-size: 0.7rem;
                        color: var(--secondary);
                    }
                    .notification-time {
                        font-size: 0.75rem;
                        color: var(--secondary);
                    }
                "#}
            </style>
            <div class="phone-notch" />
            <div class="phone-status-bar">
                <span>{ format_clock(preview.clock) }</span>
                <div class="phone-signal-icons">
                    <span>{"▂▄▆"}</span>
                    <span>{"◠"}</span>
                    <span>{"▭"}</span>
                </div>
            </div>
            <div class="phone-screen">
                <div class="phone-screen-header">
                    <h3>{"Notifications"}</h3>
                    <span>{"🔔"}</span>
                </div>
                <div class="notification-stack">
                    { for props.notifications.iter().enumerate().map(|(item, notification)| {
                        notification_card(notification, Slot::of(item, preview.index))
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::sim::SimScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sim() -> SimScheduler {
        SimScheduler::new(NaiveTime::from_hms_opt(14, 59, 56).unwrap())
    }

    fn recorder() -> (Rc<RefCell<Vec<Preview>>>, impl Fn(Preview) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |preview| sink.borrow_mut().push(preview))
    }

    #[test]
    fn preview_rotates_and_refreshes_clock() {
        let scheduler = sim();
        let (seen, sink) = recorder();
        let _teardown = start_rotating_preview(Some(scheduler.clone()), 3, 3000, sink);
        scheduler.advance(6000.0);

        let seen = seen.borrow();
        let indices: Vec<usize> = seen.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(format_clock(seen[0].clock), "14:59");
        assert_eq!(format_clock(seen[1].clock), "14:59");
        assert_eq!(format_clock(seen[2].clock), "15:00");
    }

    #[test]
    fn unmount_clears_the_timer() {
        let scheduler = sim();
        let (seen, sink) = recorder();
        let teardown = start_rotating_preview(Some(scheduler.clone()), 3, 3000, sink);
        scheduler.advance(3000.0);

        teardown();
        scheduler.advance(30_000.0);

        assert_eq!(scheduler.pending_timers(), 0);
        assert_eq!(scheduler.pending_frames(), 0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn empty_list_starts_no_timer() {
        let scheduler = sim();
        let (seen, sink) = recorder();
        let _teardown = start_rotating_preview(Some(scheduler.clone()), 0, 3000, sink);

        assert_eq!(scheduler.pending_timers(), 0);
        assert!(seen.borrow().is_empty());
    }
}
