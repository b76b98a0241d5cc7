use std::time::{Duration, Instant};

/// Who currently owns the displayed value of an adjustable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The status feed drives the display
    Idle,
    /// The user is dragging the control; `touched` is the last adjustment
    UserHeld { value: u8, touched: Instant },
    /// The gesture ended and `sent` went out; feed values are ignored until `until` passes or
    /// the feed confirms `sent`
    Settling { sent: u8, until: Instant },
}

/// Interaction state of one slider.
///
/// The feed side only ever calls [`Control::accepts`], which can end a `Settling` phase but never
/// starts or extends one.
#[derive(Debug, Clone)]
pub struct Control {
    state: Interaction,
    /// Last value the feed reported, whether or not it was shown
    observed: Option<u8>,
    settle: Duration,
    tolerance: u8,
}

impl Control {
    pub fn new(settle: Duration, tolerance: u8) -> Self {
        Self {
            state: Interaction::Idle,
            observed: None,
            settle,
            tolerance,
        }
    }

    pub fn state(&self) -> Interaction {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == Interaction::Idle
    }

    pub fn observed(&self) -> Option<u8> {
        self.observed
    }

    pub fn held(&self) -> Option<u8> {
        match self.state {
            Interaction::UserHeld { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Starts a gesture at `value`, or moves an ongoing one there.
    pub fn hold(&mut self, value: u8, now: Instant) -> u8 {
        let value = value.min(100);
        self.state = Interaction::UserHeld {
            value,
            touched: now,
        };
        value
    }

    /// Moves the held value by `by`. A new gesture starts from `from`, the currently displayed
    /// value.
    pub fn nudge(&mut self, from: u8, by: i16, now: Instant) -> u8 {
        let base = self.held().unwrap_or(from);
        let value = (i16::from(base) + by).clamp(0, 100) as u8;
        self.hold(value, now)
    }

    /// Ends the gesture and starts settling on the released value, which the caller must send.
    pub fn release(&mut self, now: Instant) -> Option<u8> {
        let value = self.held()?;
        self.state = Interaction::Settling {
            sent: value,
            until: now + self.settle,
        };
        Some(value)
    }

    /// Ends the gesture without anything being sent.
    pub fn drop_hold(&mut self) -> Option<u8> {
        let value = self.held()?;
        self.state = Interaction::Idle;
        Some(value)
    }

    /// Gives up waiting for confirmation of the last sent value. Returns false if nothing was
    /// settling.
    pub fn unsettle(&mut self) -> bool {
        if let Interaction::Settling { .. } = self.state {
            self.state = Interaction::Idle;
            return true;
        }
        false
    }

    /// Whether a gesture has been left untouched for at least `after`.
    pub fn is_stale(&self, now: Instant, after: Duration) -> bool {
        match self.state {
            Interaction::UserHeld { touched, .. } => now.saturating_duration_since(touched) >= after,
            _ => false,
        }
    }

    /// Ends `Settling` once its window is over.
    pub fn expire(&mut self, now: Instant) {
        if let Interaction::Settling { until, .. } = self.state {
            if now >= until {
                self.state = Interaction::Idle;
            }
        }
    }

    /// Decides whether a value observed from the feed may overwrite the display.
    pub fn accepts(&mut self, observed: u8, now: Instant) -> bool {
        self.observed = Some(observed);
        match self.state {
            Interaction::Idle => true,
            Interaction::UserHeld { .. } => false,
            Interaction::Settling { sent, until } => {
                if now >= until || observed.abs_diff(sent) <= self.tolerance {
                    self.state = Interaction::Idle;
                    true
                } else {
                    false
                }
            }
        }
    }
}
