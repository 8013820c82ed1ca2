use std::sync::{Arc, Mutex};

use crate::component::{mount_into, Component, MountHandle, Scope};
use crate::host::HostError;

type Step = Arc<dyn Component<Props = ()>>;

/// The currently rendered step of one wizard mount.
struct Live {
    index: usize,
    handle: MountHandle,
}

/// Walks an ordered sequence of step components.
///
/// The wizard renders the first step at mount; each activation issues
/// the "advance" command, unmounting the current step and mounting the
/// next one, until the last step is showing. Step position is per-mount
/// state, so remounting starts over at the first step.
pub struct Wizard {
    steps: Vec<Step>,
}

impl Wizard {
    /// Create a wizard with no steps. A stepless wizard renders nothing.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn step<C: Component<Props = ()>>(mut self, step: C) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the wizard has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Wizard {
    type Props = ();

    fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
        if self.steps.is_empty() {
            return Ok(());
        }

        let document = scope.document();
        let container = scope.container();
        let first = mount_into(&document, container, &*self.steps[0], ())?;
        let live = Arc::new(Mutex::new(Some(Live {
            index: 0,
            handle: first,
        })));

        // Advance command
        {
            let live = Arc::clone(&live);
            let document = document.clone();
            let steps = self.steps.clone();
            scope.on_activate(move || {
                let mut slot = live.lock().unwrap();
                let Some(current) = slot.take() else {
                    return;
                };
                let next = current.index + 1;
                if next >= steps.len() {
                    // Already on the last step
                    *slot = Some(current);
                    return;
                }
                if let Err(err) = current.handle.unmount() {
                    log::warn!("Wizard step teardown failed: {}", err);
                }
                match mount_into(&document, container, &*steps[next], ()) {
                    Ok(handle) => {
                        *slot = Some(Live {
                            index: next,
                            handle,
                        })
                    }
                    Err(err) => log::warn!("Wizard step mount failed: {}", err),
                }
            });
        }

        // The live step goes down with the wizard
        {
            let live = Arc::clone(&live);
            scope.on_cleanup(move || {
                if let Some(current) = live.lock().unwrap().take() {
                    if let Err(err) = current.handle.unmount() {
                        log::warn!("Wizard teardown failed: {}", err);
                    }
                }
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::mount_in;
    use crate::host::Document;

    struct Label(&'static str);

    impl Component for Label {
        type Props = ();

        fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
            scope.text(self.0)?;
            Ok(())
        }
    }

    fn three_steps() -> Wizard {
        Wizard::new()
            .step(Label("Step1"))
            .step(Label("Step2"))
            .step(Label("Step3"))
    }

    #[test]
    fn renders_first_step_at_mount() {
        let document = Document::new();
        let handle = mount_in(&document, &three_steps(), ()).unwrap();
        assert_eq!(document.body_text(), "Step1");
        handle.unmount().unwrap();
    }

    #[test]
    fn activation_advances_and_stops_at_last_step() {
        let document = Document::new();
        let handle = mount_in(&document, &three_steps(), ()).unwrap();

        handle.activate();
        assert_eq!(document.body_text(), "Step2");
        handle.activate();
        assert_eq!(document.body_text(), "Step3");

        // Further commands are ignored on the last step
        handle.activate();
        assert_eq!(document.body_text(), "Step3");

        handle.unmount().unwrap();
        assert_eq!(document.body_text(), "");
    }

    #[test]
    fn remounting_starts_over() {
        let document = Document::new();
        let wizard = three_steps();

        let handle = mount_in(&document, &wizard, ()).unwrap();
        handle.activate();
        handle.unmount().unwrap();

        let handle = mount_in(&document, &wizard, ()).unwrap();
        assert_eq!(document.body_text(), "Step1");
        handle.unmount().unwrap();
    }

    #[test]
    fn empty_wizard_renders_nothing() {
        let document = Document::new();
        let handle = mount_in(&document, &Wizard::new(), ()).unwrap();
        assert_eq!(document.body_text(), "");
        handle.activate();
        handle.unmount().unwrap();
    }
}
