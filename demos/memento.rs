//! Memento demo: snapshot a counter, keep clicking, restore.

use motif::runtime::UiRuntime;
use motif::{mount, Component, HostError, Originator, Scope, Signal};

struct Counter {
    count: Signal<i32>,
}

impl Component for Counter {
    type Props = ();

    fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
        scope.bind(&self.count, |n| n.to_string())?;
        let count = self.count.clone();
        scope.on_activate(move || count.update(|n| *n += 1));
        Ok(())
    }
}

fn main() {
    env_logger::init();

    println!("=== Memento ===\n");

    let document = UiRuntime::current().document();
    let mut count = Signal::new(0);

    let handle = mount(
        &Counter {
            count: count.clone(),
        },
        (),
    )
    .expect("mount");

    println!("1. Clicking three times");
    handle.activate();
    handle.activate();
    handle.activate();
    println!("   rendered: {:?}", document.body_text());

    println!("\n2. Creating a memento");
    let memento = count.save();
    println!("   saved count {}", memento);

    println!("\n3. Clicking twice more");
    handle.activate();
    handle.activate();
    println!("   rendered: {:?}", document.body_text());

    println!("\n4. Restoring the memento");
    count.restore(&memento);
    println!("   rendered: {:?}", document.body_text());

    handle.unmount().expect("unmount");

    println!("\n✓ Memento demo complete!");
}
