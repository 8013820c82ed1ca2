//! Integration tests for Motif
//!
//! Each test wires a pattern into the component runtime the way the
//! demos do, against an explicit document so tests stay isolated.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use motif::{
    mount_in, mount_into, shared, Component, Document, HostError, Link, Mediator, Originator,
    Scope, Shared, Signal, Wizard,
};

/// A self-incrementing counter, the workhorse of the demos.
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

/// A counter that increments through a mediator instead of locally.
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

#[test]
fn singleton_counter_keeps_state_across_call_site_churn() {
    let document = Document::new();
    let counter = shared(Counter);

    let first = mount_in(&document, &counter, 0).unwrap();
    let second = mount_in(&document, &counter, 100).unwrap();

    // Only the backing instance renders, configured by the first mounter
    assert_eq!(document.body_text(), "0");

    // The backing instance keeps its state while any call site remains
    first.unmount().unwrap();
    assert_eq!(counter.ref_count(), 1);
    assert_eq!(document.body_text(), "0");

    let third = mount_in(&document, &counter, 7).unwrap();
    assert_eq!(counter.ref_count(), 2);
    assert_eq!(document.body_text(), "0");

    second.unmount().unwrap();
    third.unmount().unwrap();
    assert_eq!(counter.ref_count(), 0);
    assert_eq!(document.body_text(), "");

    // A fresh run starts from the new first mounter's props
    let again = mount_in(&document, &counter, 7).unwrap();
    assert_eq!(document.body_text(), "7");
    again.unmount().unwrap();
}

#[test]
fn mediated_counters_increment_together() {
    let document = Document::new();
    let mediator = Mediator::new();

    let counters = [
        MediatedCounter {
            mediator: mediator.clone(),
        },
        MediatedCounter {
            mediator: mediator.clone(),
        },
        MediatedCounter {
            mediator: mediator.clone(),
        },
    ];
    let handles: Vec<_> = counters
        .iter()
        .map(|counter| mount_in(&document, counter, ()).unwrap())
        .collect();

    assert_eq!(document.body_text(), "0\n0\n0");

    // Clicking any one counter increments all of them
    handles[1].activate();
    assert_eq!(document.body_text(), "1\n1\n1");
    handles[0].activate();
    handles[2].activate();
    assert_eq!(document.body_text(), "3\n3\n3");

    for handle in handles {
        handle.unmount().unwrap();
    }
    assert_eq!(mediator.len(), 3);
}

#[test]
fn bridged_link_renders_ui_and_navigates() {
    struct PlainButton;

    impl Component for PlainButton {
        type Props = &'static str;

        fn view(&self, scope: &mut Scope, label: &'static str) -> Result<(), HostError> {
            scope.text(format!("[{}]", label))?;
            Ok(())
        }
    }

    let opened = Arc::new(Mutex::new(Vec::new()));
    let opened_clone = Arc::clone(&opened);
    let link = Link::new("https://github.com/SerRat44/motif", PlainButton)
        .with_opener(move |url| opened_clone.lock().unwrap().push(url.to_string()));

    let document = Document::new();
    let handle = mount_in(&document, &link, "See other patterns").unwrap();

    assert_eq!(document.body_text(), "[See other patterns]");
    handle.activate();
    assert_eq!(
        *opened.lock().unwrap(),
        vec!["https://github.com/SerRat44/motif"]
    );

    handle.unmount().unwrap();
}

#[test]
fn memento_restores_a_counter_signal() {
    let document = Document::new();

    let mut count = Signal::new(0);
    let bound = Signal::clone(&count);

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

    let handle = mount_in(&document, &Display { count: bound }, ()).unwrap();

    count.set(3);
    let memento = count.save();
    count.set(9);
    assert_eq!(document.body_text(), "9");

    count.restore(&memento);
    assert_eq!(document.body_text(), "3");

    handle.unmount().unwrap();
}

#[test]
fn wizard_walks_steps_alongside_other_mounts() {
    struct Step(&'static str);

    impl Component for Step {
        type Props = ();

        fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
            scope.text(self.0)?;
            Ok(())
        }
    }

    let document = Document::new();
    let wizard = Wizard::new()
        .step(Step("Step1"))
        .step(Step("Step2"))
        .step(Step("Step3"));

    let counter = mount_in(&document, &Counter, 0).unwrap();
    let steps = mount_in(&document, &wizard, ()).unwrap();

    assert_eq!(document.body_text(), "0\nStep1");
    steps.activate();
    steps.activate();
    assert_eq!(document.body_text(), "0\nStep3");

    steps.unmount().unwrap();
    assert_eq!(document.body_text(), "0");
    counter.unmount().unwrap();
}

#[test]
fn failed_mount_unwinds_a_nested_shared_child() {
    struct FailsAfterChild {
        child: Shared<Counter>,
    }

    impl Component for FailsAfterChild {
        type Props = ();

        fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
            let document = scope.document();
            let child = mount_into(&document, scope.container(), &self.child, 0)?;
            scope.on_cleanup(move || child.unmount().unwrap());

            // Fail after the child is mounted
            let gone = document.create_container();
            document.remove_container(gone)?;
            document.remove_container(gone)?;
            Ok(())
        }
    }

    let document = Document::new();
    let child = shared(Counter);
    let outer = FailsAfterChild {
        child: child.clone(),
    };

    assert!(mount_in(&document, &outer, ()).is_err());

    // The failed mount released its shared ref and the backing came down
    assert_eq!(child.ref_count(), 0);
    assert_eq!(document.container_count(), 0);
    assert_eq!(document.body_text(), "");
}

#[test]
fn singleton_mount_unmount_storm_balances_out() {
    struct Tracked {
        created: Arc<AtomicUsize>,
        destroyed: Arc<AtomicUsize>,
    }

    impl Component for Tracked {
        type Props = ();

        fn view(&self, scope: &mut Scope, _props: ()) -> Result<(), HostError> {
            self.created.fetch_add(1, Ordering::SeqCst);
            let destroyed = Arc::clone(&self.destroyed);
            scope.on_cleanup(move || {
                destroyed.fetch_add(1, Ordering::SeqCst);
            });
            Ok(())
        }
    }

    let created = Arc::new(AtomicUsize::new(0));
    let destroyed = Arc::new(AtomicUsize::new(0));
    let wrapped = shared(Tracked {
        created: Arc::clone(&created),
        destroyed: Arc::clone(&destroyed),
    });
    let document = Document::new();

    // Interleave mounts and unmounts so the count crosses zero repeatedly
    let mut active = Vec::new();
    let mut mounts = 0usize;
    let mut unmounts = 0usize;
    for width in [1usize, 3, 2, 5] {
        for _ in 0..width {
            active.push(mount_in(&document, &wrapped, ()).unwrap());
            mounts += 1;
            assert_eq!(wrapped.ref_count(), mounts - unmounts);
        }
        while let Some(handle) = active.pop() {
            handle.unmount().unwrap();
            unmounts += 1;
            assert_eq!(wrapped.ref_count(), mounts - unmounts);
        }
    }

    assert_eq!(wrapped.ref_count(), 0);
    // One backing instance per contiguous active run
    assert_eq!(created.load(Ordering::SeqCst), 4);
    assert_eq!(destroyed.load(Ordering::SeqCst), 4);
}
