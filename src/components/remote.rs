pub mod browser;
pub mod notices;
pub mod screen;

use std::time::Instant;

use browser::Browser;
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    widgets::Clear,
    Frame,
};
use screen::{Hints, Screen};
use tracing::debug;

use crate::{
    action::{useraction::UserAction, Action, Mode},
    commandworker::request::{CommandResponse, FromCommandWorker, ToCommandWorker},
    components::traits::{component::Component, renderable::Renderable},
    config::{keybindings::KeyBindings, remoteconfig::RemoteConfig, Config},
    feedworker::message::{FromFeedWorker, ToFeedWorker},
    reconciler::{display::UiMode, Reconciler, Slider},
    vlcclient::intent::ControlIntent,
};

const REMOTE_HELP: [UserAction; 7] = [
    UserAction::SeekForward,
    UserAction::VolumeUp,
    UserAction::SystemVolumeUp,
    UserAction::Commit,
    UserAction::Cancel,
    UserAction::ToggleBrowser,
    UserAction::Quit,
];

const BROWSER_HELP: [UserAction; 5] = [
    UserAction::Down,
    UserAction::Confirm,
    UserAction::Refresh,
    UserAction::Reconnect,
    UserAction::Quit,
];

/// `<key> Description` for every action in `actions` that has a binding.
fn key_help(bindings: Option<&KeyBindings<UserAction>>, actions: &[UserAction]) -> String {
    let Some(bindings) = bindings else {
        return String::new();
    };
    actions
        .iter()
        .filter_map(|a| Some(format!("{} {}", bindings.find_action_str(a)?, a)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn send(intent: ControlIntent) -> Action {
    Action::ToCommandWorker(ToCommandWorker::from(intent))
}

/// Root component. Feeds everything it hears into the reconciler and shows either the remote or
/// the file browser.
pub struct Remote {
    reconciler: Reconciler<Screen>,
    browser: Browser,
    /// File browser opened on top of something that is playing
    overlay: bool,
    mode: Mode,
    seek_step: i16,
    volume_step: i16,
}

impl Remote {
    pub fn new(config: &Config, remote: RemoteConfig, system_volume: Option<u8>) -> Self {
        let behaviour = &config.behaviour;
        let remote_keys = config.keybindings.get(&Mode::Remote);
        let hints = Hints {
            play: remote_keys.and_then(|k| k.find_action_str(&UserAction::TogglePlay)),
            fullscreen: remote_keys.and_then(|k| k.find_action_str(&UserAction::ToggleFullscreen)),
            footer: key_help(remote_keys, &REMOTE_HELP),
        };
        let browser = Browser::new(key_help(
            config.keybindings.get(&Mode::Browser),
            &BROWSER_HELP,
        ));
        let mut reconciler = Reconciler::new(
            remote,
            behaviour,
            Screen::new(behaviour.notice_ticks, hints),
        );
        if let Some(v) = system_volume {
            reconciler.apply_system_volume(v, Instant::now());
        }
        Self {
            reconciler,
            browser,
            overlay: false,
            mode: Mode::Browser,
            seek_step: i16::from(behaviour.seek_step),
            volume_step: i16::from(behaviour.volume_step),
        }
    }

    fn wanted_mode(&self) -> Mode {
        match self.reconciler.display().mode {
            UiMode::Browser => Mode::Browser,
            UiMode::Remote if self.overlay => Mode::Browser,
            UiMode::Remote => Mode::Remote,
        }
    }

    fn nudge(&mut self, slider: Slider, by: i16, now: Instant) -> Vec<Action> {
        self.reconciler.nudge(slider, by, now);
        vec![]
    }

    fn handle_user(&mut self, action: UserAction, now: Instant) -> Vec<Action> {
        match action {
            UserAction::TogglePlay => vec![send(self.reconciler.toggle_play())],
            UserAction::ToggleFullscreen => vec![send(self.reconciler.toggle_fullscreen())],
            UserAction::Jump(secs) => vec![send(self.reconciler.jump(secs))],
            UserAction::JumpTo(percent) => vec![send(self.reconciler.jump_to(percent))],
            UserAction::SeekForward => self.nudge(Slider::Seek, self.seek_step, now),
            UserAction::SeekBackward => self.nudge(Slider::Seek, -self.seek_step, now),
            UserAction::VolumeUp => self.nudge(Slider::Volume, self.volume_step, now),
            UserAction::VolumeDown => self.nudge(Slider::Volume, -self.volume_step, now),
            UserAction::SystemVolumeUp => self.nudge(Slider::SystemVolume, self.volume_step, now),
            UserAction::SystemVolumeDown => {
                self.nudge(Slider::SystemVolume, -self.volume_step, now)
            }
            UserAction::Commit => self.reconciler.commit_all(now).into_iter().map(send).collect(),
            UserAction::Cancel => {
                self.reconciler.cancel();
                vec![]
            }
            UserAction::Reconnect => vec![Action::ToFeedWorker(ToFeedWorker::Reconnect)],
            UserAction::ToggleBrowser => {
                if self.reconciler.display().mode == UiMode::Remote {
                    self.overlay = !self.overlay;
                }
                vec![]
            }
            UserAction::Up | UserAction::Down | UserAction::Top | UserAction::Bottom => {
                self.browser.navigate(&action);
                vec![]
            }
            UserAction::Confirm => match self.browser.selected() {
                Some(file) => {
                    self.overlay = false;
                    vec![send(self.reconciler.play(file))]
                }
                None => vec![],
            },
            UserAction::Refresh => vec![self.browser.request()],
            // Handled by the app
            UserAction::Quit | UserAction::Suspend | UserAction::EndKeySeq => vec![],
        }
    }

    fn handle_feed(&mut self, msg: FromFeedWorker, now: Instant) {
        match msg {
            FromFeedWorker::Connecting(kind) => self.reconciler.feed_connecting(kind),
            FromFeedWorker::Opened(kind) => self.reconciler.feed_opened(kind),
            FromFeedWorker::Status(status) => self.reconciler.apply_status(status, now),
            FromFeedWorker::SystemVolume(v) => self.reconciler.apply_system_volume(v, now),
            FromFeedWorker::Closed { feed, reason } => self.reconciler.feed_closed(feed, reason),
        }
    }

    /// Appends whatever the new state calls for and packs the lot into one action.
    fn finish(&mut self, mut out: Vec<Action>) -> Option<Action> {
        let mode = self.wanted_mode();
        if mode == Mode::Browser && self.browser.is_unrequested() {
            out.push(self.browser.request());
        }
        if mode != self.mode {
            debug!("Switching to {} mode", mode);
            self.mode = mode;
            out.push(Action::ChangeMode(mode));
        }
        match out.len() {
            0 => None,
            1 => out.pop(),
            _ => Some(Action::Multiple(out)),
        }
    }
}

impl Component for Remote {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let now = Instant::now();
        let out = match action {
            Action::Tick => {
                self.reconciler.view_mut().on_tick();
                self.reconciler.tick(now).into_iter().map(send).collect()
            }
            Action::User(ua) => self.handle_user(ua, now),
            Action::FromFeedWorker(msg) => {
                self.handle_feed(msg, now);
                vec![]
            }
            Action::FromCommandWorker(FromCommandWorker { ticket, response }) => {
                match response {
                    CommandResponse::Intent { intent, result } => {
                        self.reconciler.command_finished(&intent, result)
                    }
                    CommandResponse::Media(files) => {
                        if !self.browser.receive(ticket, files) {
                            debug!("Dropped outdated media listing #{}", ticket);
                        }
                    }
                }
                vec![]
            }
            _ => vec![],
        };
        Ok(self.finish(out))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.reconciler.display().mode {
            UiMode::Browser => self.browser.draw(frame, area),
            UiMode::Remote => {
                self.reconciler.view_mut().draw(frame, area);
                if self.overlay {
                    let [area] = Layout::vertical([Constraint::Percentage(80)])
                        .flex(Flex::Center)
                        .areas(area);
                    let [area] = Layout::horizontal([Constraint::Percentage(80)])
                        .flex(Flex::Center)
                        .areas(area);
                    frame.render_widget(Clear, area);
                    self.browser.draw(frame, area);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        commandworker::request::CommandRequest,
        feed::snapshot::{PlayerSnapshot, PlayerStatus},
        reconciler::display::FeedKind,
        vlcclient::intent::SeekTarget,
    };

    fn remote() -> Remote {
        let config = Config::new(
            crate::config::pathconfig::PathConfig::new(None, None, true),
            None,
        )
        .unwrap();
        Remote::new(
            &config,
            RemoteConfig {
                max_volume: 512,
                service_host: "localhost:8080".to_string(),
            },
            Some(40),
        )
    }

    fn playing() -> Action {
        Action::FromFeedWorker(FromFeedWorker::Status(PlayerStatus::Active(PlayerSnapshot {
            title: "movie.mkv".to_string(),
            position: 0.5,
            length: Some(120),
            volume: 256,
            playing: true,
            fullscreen: false,
        })))
    }

    fn requests(action: Option<Action>) -> Vec<CommandRequest> {
        let actions = match action {
            Some(Action::Multiple(v)) => v,
            Some(a) => vec![a],
            None => vec![],
        };
        actions
            .into_iter()
            .filter_map(|a| match a {
                Action::ToCommandWorker(req) => Some(req.request),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_starts_by_listing_media() {
        let mut r = remote();
        assert_eq!(
            r.reconciler.display().system_volume.map(|l| l.percent),
            Some(40)
        );
        assert_eq!(
            requests(r.update(Action::Tick).unwrap()),
            vec![CommandRequest::ListMedia]
        );
        // Only once
        assert_eq!(r.update(Action::Tick).unwrap(), None);
    }

    #[test]
    fn test_switches_to_remote_mode() {
        let mut r = remote();
        r.update(Action::Tick).unwrap();
        assert_eq!(
            r.update(playing()).unwrap(),
            Some(Action::ChangeMode(Mode::Remote))
        );
        assert_eq!(
            requests(r.update(Action::User(UserAction::TogglePlay)).unwrap()),
            vec![CommandRequest::Intent(ControlIntent::TogglePlay)]
        );
        assert_eq!(
            requests(r.update(Action::User(UserAction::Jump(-10))).unwrap()),
            vec![CommandRequest::Intent(ControlIntent::Seek(
                SeekTarget::Relative(-10)
            ))]
        );
    }

    #[test]
    fn test_nudge_then_commit() {
        let mut r = remote();
        r.update(Action::Tick).unwrap();
        r.update(playing()).unwrap();
        assert_eq!(r.update(Action::User(UserAction::VolumeUp)).unwrap(), None);
        assert_eq!(r.reconciler.display().volume.percent, 55);
        assert_eq!(
            requests(r.update(Action::User(UserAction::Commit)).unwrap()),
            vec![CommandRequest::Intent(ControlIntent::SetVolume(282))]
        );
    }

    #[test]
    fn test_overlay_browser_plays_selection() {
        let mut r = remote();
        let ticket = match r.update(Action::Tick).unwrap() {
            Some(Action::ToCommandWorker(req)) => req.ticket,
            other => panic!("expected a media request, got {:?}", other),
        };
        r.update(Action::FromCommandWorker(FromCommandWorker {
            ticket,
            response: CommandResponse::Media(Ok(vec!["a.mkv".to_string(), "b.mkv".to_string()])),
        }))
        .unwrap();
        r.update(playing()).unwrap();

        assert_eq!(
            r.update(Action::User(UserAction::ToggleBrowser)).unwrap(),
            Some(Action::ChangeMode(Mode::Browser))
        );
        r.update(Action::User(UserAction::Down)).unwrap();
        let res = r.update(Action::User(UserAction::Confirm)).unwrap();
        let Some(Action::Multiple(actions)) = res else {
            panic!("expected a play request and a mode change");
        };
        assert_eq!(
            requests(Some(Action::Multiple(actions.clone()))),
            vec![CommandRequest::Intent(ControlIntent::PlayMedia(
                "b.mkv".to_string()
            ))]
        );
        assert!(actions.contains(&Action::ChangeMode(Mode::Remote)));
    }

    #[test]
    fn test_feed_messages_reach_display() {
        let mut r = remote();
        r.update(Action::FromFeedWorker(FromFeedWorker::Opened(FeedKind::Status)))
            .unwrap();
        r.update(Action::FromFeedWorker(FromFeedWorker::Closed {
            feed: FeedKind::Status,
            reason: "connection reset".to_string(),
        }))
        .unwrap();
        assert_eq!(
            r.reconciler.display().status_feed,
            crate::reconciler::display::FeedHealth::Unavailable("connection reset".to_string())
        );
        assert_eq!(
            r.update(Action::User(UserAction::Reconnect)).unwrap(),
            Some(Action::ToFeedWorker(ToFeedWorker::Reconnect))
        );
    }
}
