//! Top-level switcher: shows one pattern example at a time, the way a
//! toolbar of buttons would swap them in and out.

use motif::runtime::UiRuntime;
use motif::{
    mount, shared, Component, HostError, Link, Mediator, MountHandle, Scope, Signal, Wizard,
};

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

struct Button;

impl Component for Button {
    type Props = &'static str;

    fn view(&self, scope: &mut Scope, label: &'static str) -> Result<(), HostError> {
        scope.text(format!("[{}]", label))?;
        Ok(())
    }
}

struct MediatedCounter {
    mediator: Mediator,
}

impl Component for MediatedCounter {
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

struct Display {
    count: Signal<i32>,
}

impl Component for Display {
    type Props = ();

    fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
        scope.bind(&self.count, |n| n.to_string())?;
        Ok(())
    }
}

struct Step(&'static str);

impl Component for Step {
    type Props = ();

    fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
        scope.text(self.0)?;
        Ok(())
    }
}

fn show(name: &str, handle: &MountHandle) {
    let document = UiRuntime::current().document();
    handle.activate();
    println!("{:<10} {:?}", name, document.body_text());
}

fn main() {
    env_logger::init();

    println!("=== Pattern switcher (one example mounted at a time) ===\n");

    // Singleton: two call sites, one instance
    {
        let counter = shared(Counter);
        let first = mount(&counter, 0).expect("mount");
        let _second = mount(&counter, 100).expect("mount");
        show("singleton", &first);
    }

    // Mediator: one click increments every counter
    {
        let mediator = Mediator::new();
        let first = mount(
            &MediatedCounter {
                mediator: mediator.clone(),
            },
            (),
        )
        .expect("mount");
        let _second = mount(
            &MediatedCounter {
                mediator: mediator.clone(),
            },
            (),
        )
        .expect("mount");
        show("mediator", &first);
    }

    // Bridge: navigation split from its look
    {
        let link = Link::new("https://github.com/SerRat44/motif", Button)
            .with_opener(|url| println!("{:<10} opening {}", "", url));
        let handle = mount(&link, "See other patterns").expect("mount");
        show("bridge", &handle);
    }

    // Memento: snapshot, mutate, restore
    {
        use motif::Originator;

        let mut count = Signal::new(3);
        let display = Display {
            count: count.clone(),
        };
        let handle = mount(&display, ()).expect("mount");
        let memento = count.save();
        count.set(9);
        count.restore(&memento);
        show("memento", &handle);
    }

    // Command: a wizard advanced by one command
    {
        let wizard = Wizard::new().step(Step("Step1")).step(Step("Step2"));
        let handle = mount(&wizard, ()).expect("mount");
        show("command", &handle);
    }

    println!("\n✓ All examples unmounted cleanly.");
}
