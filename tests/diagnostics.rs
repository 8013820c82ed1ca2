//! Pins the ref-count diagnostics emitted on singleton transitions.
//!
//! Lives in its own test binary because the capturing logger can only be
//! installed once per process.

use std::sync::{Arc, Mutex};

use log::{Level, Log, Metadata, Record};
use motif::{mount_in, shared, Component, Document, HostError, Scope};

struct CapturingLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() == Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

struct Silent;

impl Component for Silent {
    type Props = ();

    fn view(&self, _scope: &mut Scope, _props: ()) -> Result<(), HostError> {
        Ok(())
    }
}

#[test]
fn ref_count_transitions_log_the_documented_lines() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    log::set_boxed_logger(Box::new(CapturingLogger {
        lines: Arc::clone(&lines),
    }))
    .unwrap();
    log::set_max_level(log::LevelFilter::Info);

    let wrapped = shared(Silent);
    let document = Document::new();

    let first = mount_in(&document, &wrapped, ()).unwrap();
    let second = mount_in(&document, &wrapped, ()).unwrap();
    second.unmount().unwrap();
    first.unmount().unwrap();

    assert_eq!(
        *lines.lock().unwrap(),
        vec![
            "Mounted singleton instance, ref count is 1.",
            "Mounted singleton instance, ref count is 2.",
            "Unmounted singleton instance, ref count is 1.",
            "Unmounted singleton instance, ref count is 0.",
        ]
    );
}
