use crate::components::common::Msg;
use crate::config::pagination::AffordanceLabels;
use crate::theme::Palette;
use paging::LoadMoreControl;
use tui_realm_stdlib::Label;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    props::{Alignment, TextModifiers},
};

/// Presentational "load more" control.
///
/// Activation arrives through the focused history view, so this component
/// only reflects the control's busy and enabled flags.
#[derive(MockComponent)]
pub struct LoadMoreButton {
    component: Label,
    control: LoadMoreControl,
}

impl LoadMoreButton {
    pub fn new(control: LoadMoreControl, labels: &AffordanceLabels) -> Self {
        let (color, modifiers) = if control.busy {
            (Palette::text_muted(), TextModifiers::ITALIC)
        } else {
            (Palette::primary_accent(), TextModifiers::BOLD)
        };
        let component = Label::default()
            .text(Self::label(&control, labels))
            .foreground(color)
            .modifiers(modifiers)
            .alignment(Alignment::Center);

        Self { component, control }
    }

    pub fn control(&self) -> LoadMoreControl {
        self.control
    }

    pub fn label<'a>(control: &LoadMoreControl, labels: &'a AffordanceLabels) -> &'a str {
        if control.busy {
            &labels.load_more_busy
        } else {
            &labels.load_more
        }
    }
}

impl Component<Msg, NoUserEvent> for LoadMoreButton {
    fn on(&mut self, _: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paging::Edge;

    #[test]
    fn test_label_reflects_busy_state() {
        let idle = LoadMoreControl {
            edge: Edge::Top,
            busy: false,
            enabled: true,
        };
        let busy = LoadMoreControl {
            busy: true,
            enabled: false,
            ..idle
        };

        let labels = AffordanceLabels::default();

        assert_eq!(LoadMoreButton::label(&idle, &labels), labels.load_more);
        assert_eq!(LoadMoreButton::label(&busy, &labels), labels.load_more_busy);
        assert!(LoadMoreButton::new(busy, &labels).control().busy);
    }

    #[test]
    fn test_configured_labels_are_used() {
        let control = LoadMoreControl {
            edge: Edge::Bottom,
            busy: false,
            enabled: true,
        };
        let labels = AffordanceLabels {
            load_more: "[ Older ]".to_string(),
            ..AffordanceLabels::default()
        };

        assert_eq!(LoadMoreButton::label(&control, &labels), "[ Older ]");
    }
}
