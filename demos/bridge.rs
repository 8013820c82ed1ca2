//! Bridge demo: a link rendered through an interchangeable themed button.

use motif::runtime::UiRuntime;
use motif::{mount, Component, HostError, Link, Scope};

struct ThemedButton;

#[derive(Clone)]
struct ButtonProps {
    label: &'static str,
    background: &'static str,
    color: &'static str,
}

impl Component for ThemedButton {
    type Props = ButtonProps;

    fn view(&self, scope: &mut Scope, props: ButtonProps) -> Result<(), HostError> {
        scope.text(format!(
            "[{} {}/{}]",
            props.label, props.background, props.color
        ))?;
        Ok(())
    }
}

fn main() {
    env_logger::init();

    println!("=== Bridge ===\n");

    let document = UiRuntime::current().document();

    let link = Link::new("https://github.com/SerRat44/motif", ThemedButton)
        .with_opener(|url| println!("   -> opening {}", url));

    println!("1. Mounting the link with a blue theme");
    let handle = mount(
        &link,
        ButtonProps {
            label: "See other patterns",
            background: "blue",
            color: "white",
        },
    )
    .expect("mount");
    println!("   rendered: {:?}", document.body_text());

    println!("\n2. Clicking the link");
    handle.activate();

    handle.unmount().expect("unmount");

    println!("\n✓ Bridge demo complete!");
}
