use std::sync::Arc;

use crate::component::{Component, Scope};
use crate::host::HostError;

type Opener = Arc<dyn Fn(&str) + Send + Sync>;

/// A navigation abstraction bridged onto an interchangeable UI component.
///
/// The link holds the behavior (open a URL on activation) and delegates
/// all rendering to the component it is constructed with; that
/// component's props pass through unchanged, so the same link works with
/// any visual treatment.
///
/// The default opener only logs the navigation; headless tests and demos
/// inject their own with [`Link::with_opener`].
pub struct Link<U: Component> {
    url: String,
    ui: U,
    opener: Opener,
}

impl<U: Component> Link<U> {
    /// Bridge `ui` to a navigation target.
    pub fn new(url: impl Into<String>, ui: U) -> Self {
        Self {
            url: url.into(),
            ui,
            opener: Arc::new(|url: &str| {
                log::info!("Opening {} in a new tab.", url);
            }),
        }
    }

    /// Replace the opener invoked on activation.
    pub fn with_opener(mut self, opener: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.opener = Arc::new(opener);
        self
    }

    /// The navigation target.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<U: Component> Component for Link<U> {
    type Props = U::Props;

    fn view(&self, scope: &mut Scope, props: Self::Props) -> Result<(), HostError> {
        self.ui.view(scope, props)?;

        let url = self.url.clone();
        let opener = Arc::clone(&self.opener);
        scope.on_activate(move || opener(&url));
        Ok(())
    }
}
