//! In-memory page used by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use pagenav::{
    Config, Controller, Extent, Host, Icon, Node, ScrollBehavior, StyleGroup, StyleTarget,
};

#[derive(Debug)]
struct NodeData {
    name: String,
    classes: RefCell<BTreeSet<String>>,
    attributes: RefCell<HashMap<String, String>>,
    children: RefCell<Vec<FakeNode>>,
    document_top: Cell<f64>,
    height: Cell<f64>,
    fixed: Cell<bool>,
    scroll: Rc<Cell<f64>>,
    bounds_reads: Cell<usize>,
    class_changes: Cell<usize>,
}

/// Shared handle to a fake element.
#[derive(Debug, Clone)]
pub struct FakeNode(Rc<NodeData>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeNode {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    pub fn add_class(&self, class: &str) {
        self.0.classes.borrow_mut().insert(class.to_string());
    }

    pub fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().remove(class);
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn append(&self, child: &FakeNode) {
        self.0.children.borrow_mut().push(child.clone());
    }

    pub fn place(&self, document_top: f64, height: f64) {
        self.0.document_top.set(document_top);
        self.0.height.set(height);
    }

    pub fn set_fixed(&self, fixed: bool) {
        self.0.fixed.set(fixed);
    }

    pub fn bounds_reads(&self) -> usize {
        self.0.bounds_reads.get()
    }

    /// Number of class insertions or removals that actually changed the set.
    pub fn class_changes(&self) -> usize {
        self.0.class_changes.get()
    }

    fn children(&self) -> Vec<FakeNode> {
        self.0.children.borrow().clone()
    }
}

impl StyleTarget for FakeNode {
    fn add_group(&self, group: &StyleGroup) {
        let mut classes = self.0.classes.borrow_mut();
        for class in group.classes() {
            if classes.insert(class.clone()) {
                self.0.class_changes.set(self.0.class_changes.get() + 1);
            }
        }
    }

    fn remove_group(&self, group: &StyleGroup) {
        let mut classes = self.0.classes.borrow_mut();
        for class in group.classes() {
            if classes.remove(class) {
                self.0.class_changes.set(self.0.class_changes.get() + 1);
            }
        }
    }

    fn has_group(&self, group: &StyleGroup) -> bool {
        let classes = self.0.classes.borrow();
        group.classes().iter().all(|class| classes.contains(class))
    }
}

impl Node for FakeNode {
    fn bounds(&self) -> Extent {
        self.0.bounds_reads.set(self.0.bounds_reads.get() + 1);
        Extent::from_document(
            self.0.document_top.get(),
            self.0.height.get(),
            self.0.scroll.get(),
        )
    }

    fn contains(&self, other: &Self) -> bool {
        self == other || self.children().iter().any(|child| child.contains(other))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn is_fixed(&self) -> bool {
        self.0.fixed.get()
    }

    fn rendered_height(&self) -> f64 {
        self.0.height.get()
    }
}

#[derive(Debug, Default)]
struct PageData {
    scroll: Rc<Cell<f64>>,
    reduced_motion: Cell<bool>,
    nav: RefCell<Option<FakeNode>>,
    panel: RefCell<Option<FakeNode>>,
    toggle: RefCell<Option<FakeNode>>,
    controls: RefCell<Vec<FakeNode>>,
    sections: RefCell<Vec<FakeNode>>,
    scrolls: RefCell<Vec<(f64, ScrollBehavior)>>,
    frame_requests: Cell<usize>,
    scroll_reads: Cell<usize>,
}

/// A fake document implementing [`Host`].
#[derive(Debug, Clone, Default)]
pub struct FakePage(Rc<PageData>);

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A detached element sharing this page's scroll position.
    pub fn node(&self, name: &str) -> FakeNode {
        FakeNode(Rc::new(NodeData {
            name: name.to_string(),
            classes: RefCell::default(),
            attributes: RefCell::default(),
            children: RefCell::default(),
            document_top: Cell::new(0.0),
            height: Cell::new(0.0),
            fixed: Cell::new(false),
            scroll: Rc::clone(&self.0.scroll),
            bounds_reads: Cell::new(0),
            class_changes: Cell::new(0),
        }))
    }

    pub fn add_section(&self, id: &str, document_top: f64, height: f64) -> FakeNode {
        let node = self.node(id).with_attr("id", id);
        node.place(document_top, height);
        self.0.sections.borrow_mut().push(node.clone());
        node
    }

    pub fn add_nav(&self, height: f64, fixed: bool) -> FakeNode {
        let node = self.node("nav");
        node.place(0.0, height);
        node.set_fixed(fixed);
        *self.0.nav.borrow_mut() = Some(node.clone());
        node
    }

    pub fn add_control(&self, name: &str, target: &str) -> FakeNode {
        let node = self.node(name).with_attr("data-scroll-to", target);
        self.0.controls.borrow_mut().push(node.clone());
        node
    }

    pub fn set_panel(&self, panel: &FakeNode) {
        *self.0.panel.borrow_mut() = Some(panel.clone());
    }

    pub fn set_toggle(&self, toggle: &FakeNode) {
        *self.0.toggle.borrow_mut() = Some(toggle.clone());
    }

    /// Panel, toggle and both icons, wired the way the markup nests them.
    pub fn add_drawer(&self) -> DrawerNodes {
        let panel = self.node("panel").with_attr("data-mobile-nav", "");
        let toggle = self
            .node("toggle")
            .with_attr("data-menu-toggle", "")
            .with_attr("aria-expanded", "false");
        let open = self.node("icon-open").with_attr("data-icon", "open");
        let close = self.node("icon-close").with_attr("data-icon", "close");
        close.add_class("hidden");
        panel.add_class("hidden");
        toggle.append(&open);
        toggle.append(&close);
        self.set_panel(&panel);
        self.set_toggle(&toggle);
        DrawerNodes {
            panel,
            toggle,
            open,
            close,
        }
    }

    pub fn set_scroll(&self, y: f64) {
        self.0.scroll.set(y);
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.0.reduced_motion.set(reduced);
    }

    pub fn scrolls(&self) -> Vec<(f64, ScrollBehavior)> {
        self.0.scrolls.borrow().clone()
    }

    pub fn frame_requests(&self) -> usize {
        self.0.frame_requests.get()
    }

    pub fn scroll_reads(&self) -> usize {
        self.0.scroll_reads.get()
    }
}

impl Host for FakePage {
    type Node = FakeNode;

    fn primary_nav(&self) -> Option<FakeNode> {
        self.0.nav.borrow().clone()
    }

    fn drawer_panel(&self) -> Option<FakeNode> {
        self.0.panel.borrow().clone()
    }

    fn drawer_toggle(&self) -> Option<FakeNode> {
        self.0.toggle.borrow().clone()
    }

    fn drawer_icon(&self, toggle: &FakeNode, icon: Icon) -> Option<FakeNode> {
        toggle
            .children()
            .into_iter()
            .find(|child| child.attr("data-icon").as_deref() == Some(icon.marker()))
    }

    fn nav_controls(&self) -> Vec<FakeNode> {
        self.0.controls.borrow().clone()
    }

    fn section(&self, id: &str) -> Option<FakeNode> {
        self.0
            .sections
            .borrow()
            .iter()
            .find(|node| node.attr("id").as_deref() == Some(id))
            .cloned()
    }

    fn scroll_y(&self) -> f64 {
        self.0.scroll_reads.set(self.0.scroll_reads.get() + 1);
        self.0.scroll.get()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.0.reduced_motion.get()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.0.scrolls.borrow_mut().push((top, behavior));
    }

    fn request_animation_frame(&self) {
        self.0.frame_requests.set(self.0.frame_requests.get() + 1);
    }
}

pub struct DrawerNodes {
    pub panel: FakeNode,
    pub toggle: FakeNode,
    pub open: FakeNode,
    pub close: FakeNode,
}

/// Every node of the standard test page.
pub struct Portfolio {
    pub page: FakePage,
    pub nav: FakeNode,
    pub hero: FakeNode,
    pub about: FakeNode,
    pub contact: FakeNode,
    pub nav_about: FakeNode,
    pub nav_contact: FakeNode,
    pub mobile_about: FakeNode,
    pub cta_contact: FakeNode,
    pub drawer: DrawerNodes,
    pub outside: FakeNode,
}

/// Three stacked 800px sections under a fixed 64px nav, desktop and mobile
/// controls, and a drawer whose panel holds the mobile controls.
pub fn portfolio() -> Portfolio {
    let page = FakePage::new();
    let nav = page.add_nav(64.0, true);
    let hero = page.add_section("hero", 0.0, 800.0);
    let about = page.add_section("about", 800.0, 800.0);
    let contact = page.add_section("contact", 1600.0, 800.0);

    let nav_about = page.add_control("nav-about", "about");
    let nav_contact = page.add_control("nav-contact", "contact");
    let mobile_about = page.add_control("mobile-about", "about");
    let cta_contact = page.add_control("cta-contact", "contact");

    let drawer = page.add_drawer();
    drawer.panel.append(&mobile_about);
    nav.append(&nav_about);
    nav.append(&nav_contact);
    nav.append(&drawer.toggle);

    let outside = page.node("paragraph");
    hero.append(&cta_contact);
    hero.append(&outside);

    Portfolio {
        page,
        nav,
        hero,
        about,
        contact,
        nav_about,
        nav_contact,
        mobile_about,
        cta_contact,
        drawer,
        outside,
    }
}

pub fn sections_config() -> Config {
    Config::default().sections(["hero", "about", "contact"])
}

pub fn controller(page: &FakePage) -> Controller<FakePage> {
    Controller::new(page.clone(), sections_config()).expect("valid config")
}

pub fn highlight() -> StyleGroup {
    Config::default().highlight_group()
}

pub fn scrolled() -> StyleGroup {
    Config::default().scrolled_group()
}
