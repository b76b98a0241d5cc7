pub mod display;
pub mod interaction;

use std::time::{Duration, Instant};

use display::{Display, FeedHealth, FeedKind, Level, Notice, RemoteView, UiMode};
use interaction::Control;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    config::{behaviourconfig::BehaviourConfig, remoteconfig::RemoteConfig},
    feed::snapshot::{PlayerSnapshot, PlayerStatus},
    vlcclient::intent::{ControlIntent, SeekTarget},
};

/// The adjustable controls. Each has its own [`Control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slider {
    Seek,
    Volume,
    SystemVolume,
}

impl Slider {
    const ALL: [Slider; 3] = [Slider::Seek, Slider::Volume, Slider::SystemVolume];
}

/// Player volume in percent of `max`.
pub fn volume_percent(raw: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    (f64::from(raw) * 100.0 / f64::from(max))
        .round()
        .clamp(0.0, 100.0) as u8
}

/// Inverse of [`volume_percent`].
pub fn volume_raw(percent: u8, max: u32) -> u32 {
    ((f64::from(max) * f64::from(percent.min(100)) / 100.0).round() as u32).min(max)
}

pub fn seek_percent(position: f64) -> u8 {
    (position * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn seek_seconds(length: u32, percent: u8) -> u32 {
    (f64::from(length) * f64::from(percent.min(100)) / 100.0).round() as u32
}

/// Merges the player status stream with the user's gestures.
///
/// Every slider is either driven by the feed, held by the user, or settling after a release.
/// Only the first kind is overwritten by incoming snapshots. All methods take the current time
/// so that nothing in here reads the clock.
pub struct Reconciler<V: RemoteView> {
    remote: RemoteConfig,
    seek: Control,
    volume: Control,
    system_volume: Control,
    /// Survives snapshots of the same media that do not report a length
    length: Option<u32>,
    release_after: Duration,
    display: Display,
    view: V,
}

impl<V: RemoteView> Reconciler<V> {
    pub fn new(remote: RemoteConfig, behaviour: &BehaviourConfig, view: V) -> Self {
        let settle = behaviour.settle();
        Self {
            remote,
            seek: Control::new(settle, behaviour.seek_tolerance),
            volume: Control::new(settle, behaviour.volume_tolerance),
            system_volume: Control::new(settle, behaviour.volume_tolerance),
            length: None,
            release_after: behaviour.release_after(),
            display: Display::default(),
            view,
        }
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn control(&self, slider: Slider) -> &Control {
        match slider {
            Slider::Seek => &self.seek,
            Slider::Volume => &self.volume,
            Slider::SystemVolume => &self.system_volume,
        }
    }

    fn control_mut(&mut self, slider: Slider) -> &mut Control {
        match slider {
            Slider::Seek => &mut self.seek,
            Slider::Volume => &mut self.volume,
            Slider::SystemVolume => &mut self.system_volume,
        }
    }

    /// Percent currently on screen for `slider`, if anything is known yet.
    fn shown(&self, slider: Slider) -> Option<u8> {
        match slider {
            Slider::Seek => Some(self.display.seek.percent),
            Slider::Volume => Some(self.display.volume.percent),
            Slider::SystemVolume => self.display.system_volume.map(|l| l.percent),
        }
    }

    fn show(&mut self, slider: Slider, percent: u8) {
        let level = Level {
            percent,
            pinned: !self.control(slider).is_idle(),
        };
        match slider {
            Slider::Seek => self.display.seek = level,
            Slider::Volume => self.display.volume = level,
            Slider::SystemVolume => self.display.system_volume = Some(level),
        }
    }

    /// Brings the `pinned` flags in line with the controls.
    fn sync_pins(&mut self) {
        self.display.seek.pinned = !self.seek.is_idle();
        self.display.volume.pinned = !self.volume.is_idle();
        if let Some(l) = self.display.system_volume.as_mut() {
            l.pinned = !self.system_volume.is_idle();
        }
    }

    fn publish(&mut self, before: &Display) {
        self.sync_pins();
        if *before != self.display {
            self.view.render(&self.display);
        }
    }

    /// Puts the last value the feed reported for `slider` back on screen. Nothing changes if the
    /// feed has not reported one yet.
    fn restore(&mut self, slider: Slider) {
        if let Some(percent) = self.control(slider).observed() {
            self.show(slider, percent);
        }
    }

    /// Offers a value from the feed to `slider`. It only lands if the control lets it.
    fn observe(&mut self, slider: Slider, percent: u8, now: Instant) {
        if self.control_mut(slider).accepts(percent, now) {
            self.show(slider, percent);
        }
    }

    pub fn apply_status(&mut self, status: PlayerStatus, now: Instant) {
        let before = self.display.clone();
        match status {
            PlayerStatus::Idle => {
                self.display.mode = UiMode::Browser;
                self.display.title.clear();
                self.length = None;
                self.display.length = None;
            }
            PlayerStatus::Active(snapshot) => self.apply_snapshot(snapshot, now),
        }
        self.publish(&before);
    }

    fn apply_snapshot(&mut self, s: PlayerSnapshot, now: Instant) {
        if self.display.title != s.title {
            self.view.notify(Notice::NowPlaying(s.title.clone()));
            self.display.title = s.title;
            self.length = None;
        }
        self.display.mode = UiMode::Remote;
        if s.length.is_some() {
            self.length = s.length;
        }
        self.display.length = self.length;
        self.observe(Slider::Seek, seek_percent(s.position), now);
        self.observe(
            Slider::Volume,
            volume_percent(s.volume, self.remote.max_volume),
            now,
        );
        self.display.playing = s.playing;
        self.display.fullscreen = s.fullscreen;
    }

    pub fn apply_system_volume(&mut self, percent: u8, now: Instant) {
        let before = self.display.clone();
        self.observe(Slider::SystemVolume, percent.min(100), now);
        self.publish(&before);
    }

    fn health_mut(&mut self, feed: FeedKind) -> &mut FeedHealth {
        match feed {
            FeedKind::Status => &mut self.display.status_feed,
            FeedKind::SystemVolume => &mut self.display.system_feed,
        }
    }

    pub fn feed_connecting(&mut self, feed: FeedKind) {
        let before = self.display.clone();
        *self.health_mut(feed) = FeedHealth::Connecting;
        self.publish(&before);
    }

    pub fn feed_opened(&mut self, feed: FeedKind) {
        let before = self.display.clone();
        *self.health_mut(feed) = FeedHealth::Live;
        self.publish(&before);
    }

    /// The feed is gone. Displayed values stay as they were.
    pub fn feed_closed(&mut self, feed: FeedKind, reason: String) {
        let before = self.display.clone();
        *self.health_mut(feed) = FeedHealth::Unavailable(reason.clone());
        self.view.notify(Notice::FeedUnavailable { feed, reason });
        self.publish(&before);
    }

    /// Starts or continues a gesture on `slider`, moving it by `by` percent.
    pub fn nudge(&mut self, slider: Slider, by: i16, now: Instant) {
        let Some(from) = self.shown(slider) else {
            self.view
                .notify(Notice::InputUnavailable("System volume is unknown".to_string()));
            return;
        };
        let before = self.display.clone();
        let value = self.control_mut(slider).nudge(from, by, now);
        self.show(slider, value);
        self.publish(&before);
    }

    /// Starts or continues a gesture on `slider` at an absolute percent.
    pub fn hold(&mut self, slider: Slider, percent: u8, now: Instant) {
        let before = self.display.clone();
        let value = self.control_mut(slider).hold(percent, now);
        self.show(slider, value);
        self.publish(&before);
    }

    /// Ends the gesture on `slider`. Returns the intent to send, if any.
    pub fn end(&mut self, slider: Slider, now: Instant) -> Option<ControlIntent> {
        let before = self.display.clone();
        let intent = self.end_gesture(slider, now);
        self.publish(&before);
        intent
    }

    fn end_gesture(&mut self, slider: Slider, now: Instant) -> Option<ControlIntent> {
        let percent = self.control(slider).held()?;
        let intent = match slider {
            Slider::Seek => {
                let Some(length) = self.length else {
                    self.seek.drop_hold();
                    self.restore(Slider::Seek);
                    self.view.notify(Notice::InputUnavailable(
                        "Media length is unknown, cannot seek".to_string(),
                    ));
                    return None;
                };
                ControlIntent::Seek(SeekTarget::Absolute(seek_seconds(length, percent)))
            }
            Slider::Volume => ControlIntent::SetVolume(volume_raw(percent, self.remote.max_volume)),
            Slider::SystemVolume => ControlIntent::SetSystemVolume(percent),
        };
        self.control_mut(slider).release(now);
        debug!("Gesture on {:?} ended: {}", slider, intent);
        Some(intent)
    }

    /// Ends every active gesture.
    pub fn commit_all(&mut self, now: Instant) -> Vec<ControlIntent> {
        let before = self.display.clone();
        let intents = Slider::ALL
            .into_iter()
            .filter_map(|s| self.end_gesture(s, now))
            .collect();
        self.publish(&before);
        intents
    }

    /// Abandons every active gesture without sending anything. The display goes back to what
    /// the feed last reported.
    pub fn cancel(&mut self) {
        let before = self.display.clone();
        for slider in Slider::ALL {
            if self.control_mut(slider).drop_hold().is_some() {
                self.restore(slider);
            }
        }
        self.publish(&before);
    }

    /// Releases gestures that were left alone for too long and ends finished settle windows.
    pub fn tick(&mut self, now: Instant) -> Vec<ControlIntent> {
        let before = self.display.clone();
        let mut intents = vec![];
        for slider in Slider::ALL {
            if self.control(slider).is_stale(now, self.release_after) {
                intents.extend(self.end_gesture(slider, now));
            }
            self.control_mut(slider).expire(now);
        }
        self.publish(&before);
        intents
    }

    pub fn toggle_play(&self) -> ControlIntent {
        ControlIntent::TogglePlay
    }

    pub fn toggle_fullscreen(&self) -> ControlIntent {
        ControlIntent::ToggleFullscreen
    }

    pub fn jump(&self, secs: i32) -> ControlIntent {
        ControlIntent::Seek(SeekTarget::Relative(secs))
    }

    pub fn jump_to(&self, percent: u8) -> ControlIntent {
        ControlIntent::Seek(SeekTarget::Percent(percent.min(100)))
    }

    pub fn play(&self, file: String) -> ControlIntent {
        ControlIntent::PlayMedia(file)
    }

    /// Outcome of a sent intent. Success changes nothing; the feed reports the effect.
    pub fn command_finished(&mut self, intent: &ControlIntent, result: Result<(), String>) {
        let reason = match result {
            Ok(()) => {
                debug!("Backend accepted `{}`", intent);
                return;
            }
            Err(reason) => reason,
        };
        warn!("Backend refused `{}`: {}", intent, reason);
        let before = self.display.clone();
        // Nothing will confirm a value that never arrived
        let slider = match intent {
            ControlIntent::Seek(SeekTarget::Absolute(_)) => Some(Slider::Seek),
            ControlIntent::SetVolume(_) => Some(Slider::Volume),
            ControlIntent::SetSystemVolume(_) => Some(Slider::SystemVolume),
            _ => None,
        };
        if let Some(slider) = slider {
            if self.control_mut(slider).unsettle() {
                self.restore(slider);
            }
        }
        self.view.notify(Notice::CommandFailed {
            command: intent.to_string(),
            reason,
        });
        self.publish(&before);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reconciler::interaction::Interaction;

    #[derive(Default)]
    struct RecordingView {
        frames: Vec<Display>,
        notices: Vec<Notice>,
    }

    impl RemoteView for RecordingView {
        fn render(&mut self, display: &Display) {
            self.frames.push(display.clone());
        }
        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    const SETTLE: Duration = Duration::from_millis(500);

    fn reconciler() -> Reconciler<RecordingView> {
        let remote = RemoteConfig {
            max_volume: 512,
            service_host: String::new(),
        };
        Reconciler::new(remote, &BehaviourConfig::default(), RecordingView::default())
    }

    fn snapshot(position: f64, volume: u32) -> PlayerStatus {
        PlayerStatus::Active(PlayerSnapshot {
            title: "movie.mkv".to_string(),
            position,
            length: Some(120),
            volume,
            playing: true,
            fullscreen: false,
        })
    }

    fn ms(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn test_last_snapshot_wins_when_idle() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.1, 100), t0);
        r.apply_status(snapshot(0.2, 200), ms(t0, 10));
        r.apply_status(snapshot(0.3, 300), ms(t0, 20));
        assert_eq!(r.display().seek.percent, 30);
        assert_eq!(r.display().volume.percent, volume_percent(300, 512));
        assert_eq!(r.view().frames.len(), 3);
    }

    #[test]
    fn test_held_control_ignores_snapshots() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.nudge(Slider::Volume, 10, t0);
        assert_eq!(
            r.display().volume,
            Level {
                percent: 60,
                pinned: true
            }
        );
        for (i, raw) in [0, 100, 512, 300].into_iter().enumerate() {
            r.apply_status(snapshot(0.6, raw), ms(t0, 100 * i as u64));
            assert_eq!(r.display().volume.percent, 60);
        }
        // The other sliders keep following the feed
        assert_eq!(r.display().seek.percent, 60);
    }

    #[test]
    fn test_gesture_end_emits_once_and_settles() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.hold(Slider::Volume, 75, t0);
        assert_eq!(
            r.end(Slider::Volume, ms(t0, 50)),
            Some(ControlIntent::SetVolume(384))
        );
        assert_eq!(
            r.volume.state(),
            Interaction::Settling {
                sent: 75,
                until: ms(t0, 50) + SETTLE
            }
        );
        assert_eq!(r.end(Slider::Volume, ms(t0, 60)), None);
        assert_eq!(r.commit_all(ms(t0, 70)), vec![]);
    }

    #[test]
    fn test_settling_released_by_window() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.hold(Slider::Volume, 75, t0);
        r.end(Slider::Volume, t0);
        // Stale value from before the command took effect
        r.apply_status(snapshot(0.5, 256), ms(t0, 200));
        assert_eq!(r.display().volume.percent, 75);
        assert!(r.display().volume.pinned);
        r.apply_status(snapshot(0.5, 256), ms(t0, 500));
        assert_eq!(
            r.display().volume,
            Level {
                percent: 50,
                pinned: false
            }
        );
    }

    #[test]
    fn test_settling_released_by_confirmation() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.hold(Slider::Volume, 75, t0);
        r.end(Slider::Volume, t0);
        r.apply_status(snapshot(0.5, 380), ms(t0, 100));
        assert_eq!(
            r.display().volume,
            Level {
                percent: 74,
                pinned: false
            }
        );
        assert!(r.volume.is_idle());
        r.apply_status(snapshot(0.5, 100), ms(t0, 150));
        assert_eq!(r.display().volume.percent, 20);
    }

    #[test]
    fn test_tick_expires_settling() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.hold(Slider::Volume, 75, t0);
        r.end(Slider::Volume, t0);
        assert_eq!(r.tick(ms(t0, 499)), vec![]);
        assert!(r.display().volume.pinned);
        r.tick(ms(t0, 500));
        assert!(!r.display().volume.pinned);
        assert_eq!(r.display().volume.percent, 75);
    }

    #[test]
    fn test_volume_round_trip() {
        for p in [0u8, 25, 50, 75, 100] {
            let back = volume_percent(volume_raw(p, 512), 512);
            assert!(back.abs_diff(p) <= 1, "{} came back as {}", p, back);
        }
        assert_eq!(volume_raw(100, 512), 512);
        assert_eq!(volume_percent(1024, 512), 100);
    }

    #[test]
    fn test_browser_then_remote() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(PlayerStatus::Idle, t0);
        assert_eq!(r.display().mode, UiMode::Browser);

        r.apply_status(snapshot(0.5, 256), ms(t0, 10));
        let d = r.display();
        assert_eq!(d.mode, UiMode::Remote);
        assert_eq!(d.seek.percent, 50);
        assert_eq!(d.volume.percent, 50);
        assert_eq!(d.play_label(), "pause");
        assert_eq!(d.fullscreen_label(), "enter fullscreen");
        assert_eq!(
            r.view().notices,
            vec![Notice::NowPlaying("movie.mkv".to_string())]
        );

        r.apply_status(PlayerStatus::Idle, ms(t0, 20));
        assert_eq!(r.display().mode, UiMode::Browser);
        assert_eq!(r.display().title, "");
    }

    #[test]
    fn test_seek_commit_uses_length() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.hold(Slider::Seek, 80, t0);
        assert_eq!(
            r.end(Slider::Seek, t0),
            Some(ControlIntent::Seek(SeekTarget::Absolute(96)))
        );
    }

    #[test]
    fn test_seek_commit_unknown_length() {
        let t0 = Instant::now();
        let mut r = reconciler();
        let PlayerStatus::Active(mut s) = snapshot(0.5, 256) else {
            unreachable!()
        };
        s.length = None;
        r.apply_status(PlayerStatus::Active(s), t0);
        r.hold(Slider::Seek, 80, t0);
        let frames = r.view().frames.len();
        assert_eq!(r.end(Slider::Seek, t0), None);
        assert!(r.seek.is_idle());
        // Back to where the feed left it, no longer pinned
        assert_eq!(
            r.display().seek,
            Level {
                percent: 50,
                pinned: false
            }
        );
        assert_eq!(r.view().frames.len(), frames + 1);
        assert_eq!(
            r.view().notices.last(),
            Some(&Notice::InputUnavailable(
                "Media length is unknown, cannot seek".to_string()
            ))
        );
    }

    #[test]
    fn test_length_survives_unknown_snapshots() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        let PlayerStatus::Active(mut s) = snapshot(0.5, 256) else {
            unreachable!()
        };
        s.length = None;
        r.apply_status(PlayerStatus::Active(s), ms(t0, 10));
        assert_eq!(r.display().length, Some(120));
        r.hold(Slider::Seek, 25, ms(t0, 20));
        assert_eq!(
            r.end(Slider::Seek, ms(t0, 20)),
            Some(ControlIntent::Seek(SeekTarget::Absolute(30)))
        );
    }

    #[test]
    fn test_failed_toggle_keeps_label() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        let intent = r.toggle_play();
        let frames = r.view().frames.len();
        r.command_finished(&intent, Err("VLC is down".to_string()));
        assert_eq!(r.display().play_label(), "pause");
        assert_eq!(r.view().frames.len(), frames);
        assert_eq!(
            r.view().notices.last(),
            Some(&Notice::CommandFailed {
                command: "play/pause".to_string(),
                reason: "VLC is down".to_string()
            })
        );
    }

    #[test]
    fn test_failed_volume_stops_settling() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.hold(Slider::Volume, 90, t0);
        let intent = r.end(Slider::Volume, t0).unwrap();
        r.command_finished(&intent, Err("timeout".to_string()));
        assert!(r.volume.is_idle());
        assert_eq!(
            r.display().volume,
            Level {
                percent: 50,
                pinned: false
            }
        );
    }

    #[test]
    fn test_failed_volume_shows_latest_feed_value() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.hold(Slider::Volume, 90, t0);
        let intent = r.end(Slider::Volume, t0).unwrap();
        // Arrives while settling, so it is not shown yet
        r.apply_status(snapshot(0.5, 128), ms(t0, 100));
        assert_eq!(r.display().volume.percent, 90);
        r.command_finished(&intent, Err("timeout".to_string()));
        assert_eq!(r.display().volume.percent, 25);
    }

    #[test]
    fn test_new_media_forgets_length() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.apply_status(
            PlayerStatus::Active(PlayerSnapshot {
                title: "stream.m3u".to_string(),
                position: 0.1,
                length: None,
                volume: 256,
                playing: true,
                fullscreen: false,
            }),
            ms(t0, 10),
        );
        assert_eq!(r.display().length, None);
        r.hold(Slider::Seek, 40, ms(t0, 20));
        assert_eq!(r.end(Slider::Seek, ms(t0, 20)), None);
        assert_eq!(
            r.view().notices.last(),
            Some(&Notice::InputUnavailable(
                "Media length is unknown, cannot seek".to_string()
            ))
        );

        r.apply_status(snapshot(0.5, 256), ms(t0, 30));
        assert_eq!(r.display().length, Some(120));
        r.apply_status(PlayerStatus::Idle, ms(t0, 40));
        assert_eq!(r.display().length, None);
    }

    #[test]
    fn test_stale_gesture_released_on_tick() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.nudge(Slider::Seek, 2, t0);
        r.nudge(Slider::Seek, 2, ms(t0, 300));
        assert_eq!(r.tick(ms(t0, 900)), vec![]);
        assert_eq!(
            r.tick(ms(t0, 1100)),
            vec![ControlIntent::Seek(SeekTarget::Absolute(65))]
        );
        assert!(!r.seek.is_idle());
    }

    #[test]
    fn test_cancel_drops_holds() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.apply_status(snapshot(0.5, 256), t0);
        r.apply_system_volume(40, t0);
        r.nudge(Slider::Volume, -10, t0);
        r.nudge(Slider::SystemVolume, 5, t0);
        assert_eq!(r.display().volume.percent, 40);
        r.cancel();
        assert_eq!(r.commit_all(t0), vec![]);
        assert_eq!(
            r.display().volume,
            Level {
                percent: 50,
                pinned: false
            }
        );
        assert_eq!(
            r.display().system_volume,
            Some(Level {
                percent: 40,
                pinned: false
            })
        );
    }

    #[test]
    fn test_system_volume_is_independent() {
        let t0 = Instant::now();
        let mut r = reconciler();
        r.nudge(Slider::SystemVolume, 5, t0);
        assert_eq!(
            r.view().notices,
            vec![Notice::InputUnavailable("System volume is unknown".to_string())]
        );
        r.apply_system_volume(40, t0);
        r.nudge(Slider::SystemVolume, 5, t0);
        r.apply_status(snapshot(0.5, 100), t0);
        assert_eq!(
            r.commit_all(t0),
            vec![ControlIntent::SetSystemVolume(45)]
        );
        r.apply_system_volume(30, ms(t0, 100));
        assert_eq!(r.display().system_volume.map(|l| l.percent), Some(45));
        r.apply_system_volume(45, ms(t0, 200));
        assert!(r.system_volume.is_idle());
    }

    #[test]
    fn test_feed_health() {
        let mut r = reconciler();
        let t0 = Instant::now();
        r.apply_status(snapshot(0.5, 256), t0);
        r.feed_opened(FeedKind::Status);
        assert_eq!(r.display().status_feed, FeedHealth::Live);
        r.feed_closed(FeedKind::Status, "Server closed the stream".to_string());
        assert_eq!(
            r.display().status_feed,
            FeedHealth::Unavailable("Server closed the stream".to_string())
        );
        // Unavailable is not idle
        assert_eq!(r.display().mode, UiMode::Remote);
        assert_eq!(r.display().volume.percent, 50);
        r.feed_connecting(FeedKind::Status);
        assert_eq!(r.display().status_feed, FeedHealth::Connecting);
    }

    #[test]
    fn test_discrete_intents() {
        let r = reconciler();
        assert_eq!(
            r.jump(-10),
            ControlIntent::Seek(SeekTarget::Relative(-10))
        );
        assert_eq!(r.jump_to(150), ControlIntent::Seek(SeekTarget::Percent(100)));
        assert_eq!(r.toggle_fullscreen(), ControlIntent::ToggleFullscreen);
        assert_eq!(
            r.play("a.mkv".to_string()),
            ControlIntent::PlayMedia("a.mkv".to_string())
        );
    }
}
