use crate::components::common::Msg;
use crate::components::state::ComponentState;
use crate::config;
use crate::theme::Palette;
use std::time::{Duration, Instant};
use tui_realm_stdlib::Label;
use tuirealm::{
    Component, Event, MockComponent,
    event::NoUserEvent,
    props::{Alignment, AttrValue, Attribute},
};

// Simple animation frames for loading indicator
pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Spinner row drawn at the arrival edge while a page is loading
#[derive(MockComponent)]
pub struct LoadingIndicator {
    component: Label,
    message: String,
    frame_index: usize,
    frame_duration: Duration,
    last_frame_time: Instant,
}

impl LoadingIndicator {
    pub fn new(message: &str) -> Self {
        let frame_duration = Duration::from_millis(
            config::get_config_or_panic()
                .ui()
                .loading_frame_duration_ms(),
        );
        Self::with_frame_duration(message, frame_duration)
    }

    pub fn with_frame_duration(message: &str, frame_duration: Duration) -> Self {
        let mut component = Label::default();
        component.attr(
            Attribute::Text,
            AttrValue::String(Self::frame_text(0, message)),
        );
        component.attr(
            Attribute::Foreground,
            AttrValue::Color(Palette::status_loading()),
        );
        component.attr(
            Attribute::Alignment,
            AttrValue::Alignment(Alignment::Center),
        );

        Self {
            component,
            message: message.to_string(),
            frame_index: 0,
            frame_duration,
            last_frame_time: Instant::now(),
        }
    }

    fn frame_text(frame_index: usize, message: &str) -> String {
        format!("{} {}", SPINNER_FRAMES[frame_index], message)
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Advance to the next frame once the frame duration has elapsed.
    /// Returns true when the text changed.
    fn update_animation(&mut self) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last_frame_time) < self.frame_duration {
            return false;
        }

        self.frame_index = (self.frame_index + 1) % SPINNER_FRAMES.len();
        self.last_frame_time = now;
        self.component.attr(
            Attribute::Text,
            AttrValue::String(Self::frame_text(self.frame_index, &self.message)),
        );
        true
    }
}

impl Component<Msg, NoUserEvent> for LoadingIndicator {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Tick => self.update_animation().then_some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for LoadingIndicator {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!("Mounting LoadingIndicator: {}", self.message);

        self.frame_index = 0;
        self.last_frame_time = Instant::now();
        self.component.attr(
            Attribute::Text,
            AttrValue::String(Self::frame_text(0, &self.message)),
        );
        Ok(())
    }
}
