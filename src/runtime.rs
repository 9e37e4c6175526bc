//! Tokio driver for display links
//!
//! Hosts without a render loop of their own (CLIs, servers pushing counter
//! updates, tests) can tick a [`DisplayLink`] from a tokio interval. The
//! display link and its subscribers are `!Send`, so the future must be
//! awaited on the thread that owns them (a current-thread runtime or a
//! `LocalSet`).

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::clock::{DisplayLink, TimeSource};
use crate::config::FrameTimingConfig;

/// Tick `link` every `frame_interval` until nothing is subscribed to it.
///
/// Returns the number of frames delivered. Late frames are skipped rather
/// than delivered in a burst; subscribers measure real elapsed time anyway.
pub async fn drive_until_idle<T: TimeSource>(link: &DisplayLink<T>, frame_interval: Duration) -> u64 {
    let mut timer = interval(frame_interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frames = 0;
    while link.has_subscribers() {
        timer.tick().await;
        link.tick();
        frames += 1;
    }

    log::debug!("display link idle after {} frames", frames);
    frames
}

/// [`drive_until_idle`] at the cadence described by `timing`
pub async fn drive_with_timing<T: TimeSource>(link: &DisplayLink<T>, timing: &FrameTimingConfig) -> u64 {
    drive_until_idle(link, timing.frame_interval()).await
}
