use chrono::NaiveTime;

/// Source of time, animation frames and repeating timers for the animated
/// widgets.
///
/// Both request methods hand back an owned guard. Dropping the guard cancels
/// the request, so whoever holds the guard decides how long the callback may
/// still fire.
pub trait Scheduler: Clone + 'static {
    type Frame: 'static;
    type Interval: 'static;

    /// Monotonic milliseconds, same time base as the frame callback argument.
    fn now(&self) -> f64;

    /// Local wall-clock time shown in the phone status bar.
    fn wall_clock(&self) -> NaiveTime;

    /// Run `callback` once before the next repaint with the frame timestamp.
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Frame;

    /// Run `callback` every `period_ms` milliseconds until the guard drops.
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Interval;
}

/// Formats a clock reading the way the fr-FR locale shows `2-digit` hours and minutes.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_zero_padded_24_hour() {
        let morning = NaiveTime::from_hms_opt(7, 5, 59).unwrap();
        let evening = NaiveTime::from_hms_opt(21, 40, 0).unwrap();
        assert_eq!(format_clock(morning), "07:05");
        assert_eq!(format_clock(evening), "21:40");
    }
}
