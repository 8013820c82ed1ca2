//! Command demo: stepping a wizard with advance commands.

use motif::runtime::UiRuntime;
use motif::{mount, Component, HostError, Scope, Wizard};

struct Step(&'static str);

impl Component for Step {
    type Props = ();

    fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
        scope.text(self.0)?;
        Ok(())
    }
}

fn main() {
    env_logger::init();

    println!("=== Command ===\n");

    let document = UiRuntime::current().document();
    let wizard = Wizard::new()
        .step(Step("Step1"))
        .step(Step("Step2"))
        .step(Step("Step3"));

    println!("1. Mounting a {}-step wizard", wizard.len());
    let handle = mount(&wizard, ()).expect("mount");
    println!("   rendered: {:?}", document.body_text());

    println!("\n2. Issuing 'go to next step' until the end");
    handle.activate();
    println!("   rendered: {:?}", document.body_text());
    handle.activate();
    println!("   rendered: {:?}", document.body_text());
    handle.activate();
    println!("   rendered: {:?} (last step holds)", document.body_text());

    handle.unmount().expect("unmount");

    println!("\n✓ Command demo complete!");
}
