//! Drives the controller against an in-memory page and prints what a
//! visitor would see while scrolling through it.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use pagenav::{
    Config, Controller, Event, Extent, Host, Icon, Key, Node, ScrollBehavior, StyleGroup,
    StyleTarget,
};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

#[derive(Debug)]
struct Element {
    id: String,
    top: f64,
    height: f64,
    fixed: bool,
    classes: RefCell<BTreeSet<String>>,
    attributes: RefCell<Vec<(String, String)>>,
    scroll: Rc<Cell<f64>>,
}

#[derive(Debug, Clone)]
struct Handle(Rc<Element>);

impl StyleTarget for Handle {
    fn add_group(&self, group: &StyleGroup) {
        self.0.classes.borrow_mut().extend(group.classes().iter().cloned());
    }

    fn remove_group(&self, group: &StyleGroup) {
        let mut classes = self.0.classes.borrow_mut();
        for class in group.classes() {
            classes.remove(class);
        }
    }

    fn has_group(&self, group: &StyleGroup) -> bool {
        let classes = self.0.classes.borrow();
        group.classes().iter().all(|class| classes.contains(class))
    }
}

impl Node for Handle {
    fn bounds(&self) -> Extent {
        Extent::from_document(self.0.top, self.0.height, self.0.scroll.get())
    }

    fn contains(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let attributes = self.0.attributes.borrow();
        attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut attributes = self.0.attributes.borrow_mut();
        attributes.retain(|(key, _)| key != name);
        attributes.push((name.to_string(), value.to_string()));
    }

    fn is_fixed(&self) -> bool {
        self.0.fixed
    }

    fn rendered_height(&self) -> f64 {
        self.0.height
    }
}

struct Page {
    scroll: Rc<Cell<f64>>,
    nav: Handle,
    panel: Handle,
    toggle: Handle,
    sections: Vec<Handle>,
    links: Vec<Handle>,
}

impl Page {
    fn new(sections: &[(&str, f64)]) -> Self {
        let scroll = Rc::new(Cell::new(0.0));
        let element = |id: &str, top: f64, height: f64, fixed: bool| {
            Handle(Rc::new(Element {
                id: id.to_string(),
                top,
                height,
                fixed,
                classes: RefCell::default(),
                attributes: RefCell::default(),
                scroll: Rc::clone(&scroll),
            }))
        };

        let mut top = 0.0;
        let mut handles = Vec::new();
        let mut links = Vec::new();
        for (id, height) in sections {
            handles.push(element(id, top, *height, false));
            let link = element(&format!("link-{id}"), 0.0, 0.0, false);
            link.set_attribute("data-scroll-to", id);
            links.push(link);
            top += height;
        }

        Self {
            nav: element("nav", 0.0, 64.0, true),
            panel: element("drawer", 0.0, 0.0, false),
            toggle: element("toggle", 0.0, 0.0, false),
            sections: handles,
            links,
            scroll,
        }
    }
}

impl Host for Page {
    type Node = Handle;

    fn primary_nav(&self) -> Option<Handle> {
        Some(self.nav.clone())
    }

    fn drawer_panel(&self) -> Option<Handle> {
        Some(self.panel.clone())
    }

    fn drawer_toggle(&self) -> Option<Handle> {
        Some(self.toggle.clone())
    }

    fn drawer_icon(&self, _toggle: &Handle, _icon: Icon) -> Option<Handle> {
        None
    }

    fn nav_controls(&self) -> Vec<Handle> {
        self.links.clone()
    }

    fn section(&self, id: &str) -> Option<Handle> {
        self.sections.iter().find(|section| section.0.id == id).cloned()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll.get()
    }

    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        println!("  -> scroll to {top} ({behavior:?})");
        self.scroll.set(top);
    }

    fn request_animation_frame(&self) {}
}

fn highlighted(links: &[Handle], group: &StyleGroup) -> Vec<String> {
    links
        .iter()
        .filter(|link| link.has_group(group))
        .map(|link| link.0.id.clone())
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Debug,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let page = Page::new(&[
        ("hero", 800.0),
        ("about", 600.0),
        ("work", 1200.0),
        ("contact", 500.0),
    ]);
    let scroll = Rc::clone(&page.scroll);
    let links = page.links.clone();
    let toggle = page.toggle.clone();

    let config = Config::default().sections(["hero", "about", "work", "contact"]);
    let highlight = config.highlight_group();
    let mut controller = Controller::new(page, config)?;

    for y in [0.0, 40.0, 720.0, 1350.0, 2500.0, 3000.0] {
        scroll.set(y);
        controller.handle(Event::Scroll);
        controller.handle(Event::AnimationFrame);
        println!(
            "scroll {y:>6}: active {:?}, highlighted {:?}",
            controller.active_section(),
            highlighted(&links, &highlight)
        );
    }

    println!("open the drawer and pick a link");
    controller.handle(Event::Click {
        target: Some(toggle),
    });
    println!("  drawer {:?}", controller.drawer_state());
    controller.handle(Event::Click {
        target: links.get(1).cloned(),
    });
    println!("  drawer {:?}", controller.drawer_state());

    controller.handle(Event::Resize);
    println!("after jump: active {:?}", controller.active_section());

    controller.handle(Event::Key { key: Key::Escape });
    Ok(())
}
