use chrono::{Local, NaiveTime};
use gloo_timers::callback::Interval;
use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Window};

use super::scheduler::Scheduler;

/// Scheduler backed by the page's `window`.
#[derive(Clone)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

/// A pending `requestAnimationFrame`. Dropping it cancels the frame and
/// releases the closure.
pub struct FrameHandle {
    window: Window,
    id: Option<i32>,
    _closure: Closure<dyn FnMut(f64)>,
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            // cancelling a frame that already ran is a no-op
            if let Err(err) = self.window.cancel_animation_frame(id) {
                warn!("cancelAnimationFrame({}) failed: {:?}", id, err);
            }
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Frame = FrameHandle;
    type Interval = Interval;

    fn now(&self) -> f64 {
        match self.window.performance() {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }

    fn wall_clock(&self) -> NaiveTime {
        Local::now().time()
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> FrameHandle {
        let mut callback = Some(callback);
        let clock = self.clone();
        // Timestamp comes from `now()` so frames and the start mark share a time base
        // even when `performance` is missing.
        let closure = Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(callback) = callback.take() {
                callback(clock.now());
            }
        }) as Box<dyn FnMut(f64)>);

        let id = match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(err) => {
                error!("requestAnimationFrame failed: {:?}", err);
                None
            }
        };

        FrameHandle {
            window: self.window.clone(),
            id,
            _closure: closure,
        }
    }

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }
}
