use crate::config::{ConfigError, ConfigStore};
use crate::rating::{RatingControl, RatingObserver};
use crate::ui::confirm::{ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::feed::RatingFeed;
use crate::ui::mvi::Reducer;
use std::rc::{Rc, Weak};

/// How long a status message stays on screen.
const STATUS_DURATION_MS: u64 = 3_000;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    ticks_left: u32,
}

/// Host screen state: one rating control plus the dialog it triggers.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    control: RatingControl,
    /// Observer registered on `control`. The control only holds a `Weak`.
    feed: Rc<RatingFeed>,
    /// Keyboard cursor over the star row.
    cursor: usize,
    /// State of the confirmation dialog (MVI pattern).
    confirm_dialog: ConfirmDialogState,
    config: ConfigStore,
    status: Option<StatusMessage>,
    /// Ticks covering `STATUS_DURATION_MS` at the configured tick rate.
    status_ticks: u32,
}

/// Number of ticks that cover the status duration, at least one.
fn status_ticks_for(tick_rate_ms: u64) -> u32 {
    let ticks = STATUS_DURATION_MS.div_ceil(tick_rate_ms.max(1)).max(1);
    u32::try_from(ticks).unwrap_or(u32::MAX)
}

impl App {
    /// Build the control described by the config: construct, preset the
    /// rating, then apply the optional reconfiguration.
    pub fn new(config: ConfigStore) -> Result<Self, ConfigError> {
        let settings = config.get();
        let bounds = settings.unit_bounds()?;

        let mut control = RatingControl::with_bounds(bounds, settings.rating.stars);
        control.set_rating(settings.rating.initial_rating);
        if let Some(count) = settings.rating.reconfigure_to {
            control.reconfigure(count);
        }

        let feed = Rc::new(RatingFeed::default());
        control.set_observer(Rc::downgrade(&feed) as Weak<dyn RatingObserver>);

        tracing::info!(
            stars = control.unit_count(),
            rating = control.rating(),
            "Rating control ready"
        );

        Ok(Self {
            should_quit: false,
            size: None,
            cursor: control.rating().saturating_sub(1),
            control,
            feed,
            confirm_dialog: ConfirmDialogState::default(),
            config,
            status: None,
            status_ticks: status_ticks_for(settings.ui.tick_rate_ms),
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn control(&self) -> &RatingControl {
        &self.control
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
            }
        }
    }

    /// Move the keyboard cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, direction: i32) {
        let len = self.control.unit_count();
        if len == 0 {
            self.cursor = 0;
            return;
        }

        let current = self.cursor.min(len - 1);
        self.cursor = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn activate_cursor(&mut self) {
        self.activate(self.cursor);
    }

    /// User selected the star at `index`. Ignored while the dialog is open.
    pub fn activate(&mut self, index: usize) {
        if self.confirm_dialog.is_visible() {
            return;
        }
        if self.control.activate_unit(index) {
            self.cursor = index;
        }
        self.drain_feed();
    }

    /// Grow or shrink the row by one star. Requests outside the bounds
    /// are refused with a status message instead of being clamped.
    pub fn resize_row(&mut self, delta: i32) {
        let current = self.control.unit_count();
        let requested = if delta.is_negative() {
            current.saturating_sub(1)
        } else {
            current + 1
        };

        match self.control.try_reconfigure(requested) {
            Ok(()) => {
                self.clamp_cursor();
                self.set_status(StatusKind::Info, format!("{} stars", requested));
            }
            Err(err) => {
                tracing::debug!("Resize refused: {}", err);
                self.set_status(StatusKind::Error, err.to_string());
            }
        }
    }

    /// Re-read the config file and apply its star count.
    ///
    /// The control keeps the bounds it was built with; changed
    /// `min_stars`/`max_stars` only take effect on the next start.
    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => {
                let settings = self.config.get();
                let path = self.config.path().display().to_string();
                let bounds_changed = settings
                    .unit_bounds()
                    .is_ok_and(|bounds| bounds != self.control.bounds());

                self.control.reconfigure(settings.rating.stars);
                self.clamp_cursor();

                let text = if bounds_changed {
                    let current = self.control.bounds();
                    tracing::warn!(
                        min = current.min(),
                        max = current.max(),
                        "Reloaded star bounds ignored until restart"
                    );
                    format!(
                        "Reloaded {} (star bounds unchanged: {}..={})",
                        path,
                        current.min(),
                        current.max()
                    )
                } else {
                    format!("Reloaded {}", path)
                };
                tracing::info!(stars = self.control.unit_count(), config = %path, "Config reloaded");
                self.set_status(StatusKind::Info, text);
            }
            Err(err) => {
                tracing::warn!("Config reload failed: {}", err);
                self.set_status(StatusKind::Error, err.to_string());
            }
        }
    }

    /// Get the current confirmation dialog state.
    pub fn confirm_dialog(&self) -> &ConfirmDialogState {
        &self.confirm_dialog
    }

    /// Dispatch an intent to the confirmation dialog reducer.
    pub fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm_dialog, ConfirmReducer, intent);
    }

    pub fn dismiss_confirm(&mut self) {
        self.dispatch_confirm(ConfirmIntent::Dismiss);
    }

    /// Turn queued observer notifications into dialog intents.
    fn drain_feed(&mut self) {
        while let Some(change) = self.feed.take() {
            self.dispatch_confirm(ConfirmIntent::Show {
                rating: change.rating,
                unit_count: change.unit_count,
            });
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self
            .cursor
            .min(self.control.unit_count().saturating_sub(1));
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(StatusMessage {
            kind,
            text,
            ticks_left: self.status_ticks,
        });
    }
}
