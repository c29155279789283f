use crate::components::common::{ComponentId, Msg};
use crate::error::{AppError, AppResult};
use tuirealm::{Application, Component, MockComponent, NoUserEvent, Sub};

/// Components that reset internal state right before being mounted
pub trait ComponentState {
    fn mount(&mut self) -> AppResult<()>;
}

/// Mount helpers that run [`ComponentState::mount`] first
pub trait ComponentStateMount {
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;
}

impl ComponentStateMount for Application<ComponentId, Msg, NoUserEvent> {
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;

        self.mount(id, Box::new(component), subs)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }
}
