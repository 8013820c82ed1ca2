//! Mediator demo: three counters that increment together.

use motif::runtime::UiRuntime;
use motif::{mount, Component, HostError, Mediator, Scope, Signal};

struct Counter {
    mediator: Mediator,
}

impl Component for Counter {
    type Props = ();

    fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
        let count = Signal::new(0);
        {
            let count = count.clone();
            self.mediator.register(move || count.update(|n| *n += 1));
        }
        scope.bind(&count, |n| n.to_string())?;
        let mediator = self.mediator.clone();
        scope.on_activate(move || mediator.broadcast());
        Ok(())
    }
}

fn main() {
    env_logger::init();

    println!("=== Mediator ===\n");

    let document = UiRuntime::current().document();
    let mediator = Mediator::new();

    println!("1. Mounting three mediated counters");
    let handles: Vec<_> = (0..3)
        .map(|_| {
            mount(
                &Counter {
                    mediator: mediator.clone(),
                },
                (),
            )
            .expect("mount")
        })
        .collect();
    println!("   rendered: {:?}", document.body_text());

    println!("\n2. Clicking the second counter");
    handles[1].activate();
    println!("   rendered: {:?}", document.body_text());

    println!("\n3. Clicking the first, then the third");
    handles[0].activate();
    handles[2].activate();
    println!("   rendered: {:?}", document.body_text());

    for handle in handles {
        handle.unmount().expect("unmount");
    }

    println!("\n✓ Mediator demo complete!");
}
