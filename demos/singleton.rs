//! Singleton demo: three call sites, one backing counter instance.
//!
//! Run with `RUST_LOG=info` to see the ref-count diagnostics.

use motif::runtime::UiRuntime;
use motif::{mount, shared, Component, HostError, Scope, Signal};

struct Counter;

impl Component for Counter {
    type Props = i32;

    fn view(&self, scope: &mut Scope, start: i32) -> Result<(), HostError> {
        let count = Signal::new(start);
        scope.bind(&count, |n| n.to_string())?;
        scope.on_activate(move || count.update(|n| *n += 1));
        Ok(())
    }
}

fn main() {
    env_logger::init();

    println!("=== Singleton ===\n");

    let document = UiRuntime::current().document();
    let counter = shared(Counter);

    println!("1. Mounting three call sites");
    let first = mount(&counter, 0).expect("mount");
    let second = mount(&counter, 100).expect("mount");
    let third = mount(&counter, 200).expect("mount");
    println!("   ref count: {}", counter.ref_count());
    println!("   rendered:  {:?}", document.body_text());

    println!("\n2. Clicking the shared counter");
    first.activate();
    first.activate();
    println!("   rendered:  {:?}", document.body_text());

    println!("\n3. Unmounting two call sites (state survives)");
    second.unmount().expect("unmount");
    third.unmount().expect("unmount");
    println!("   ref count: {}", counter.ref_count());
    println!("   rendered:  {:?}", document.body_text());

    println!("\n4. Unmounting the last call site");
    first.unmount().expect("unmount");
    println!("   ref count: {}", counter.ref_count());
    println!("   rendered:  {:?}", document.body_text());

    println!("\n5. Mounting again starts a fresh instance");
    let fresh = mount(&counter, 0).expect("mount");
    println!("   rendered:  {:?}", document.body_text());
    fresh.unmount().expect("unmount");

    println!("\n✓ Singleton demo complete!");
}
