//! The interaction controller.
//!
//! Wires host notifications to the section tracker, the nav chrome switch,
//! the drawer state machine and the scroll dispatcher. All collaborators
//! are resolved once at construction; any of them may be missing, which
//! only disables the behavior that depends on it.

use crate::chrome::update_nav_chrome;
use crate::config::Config;
use crate::drawer::{Drawer, DrawerIcons, DrawerInput, DrawerState};
use crate::error::ConfigError;
use crate::event::{Event, Key};
use crate::host::{Host, Icon, Node};
use crate::nav::NavControls;
use crate::scroll::{dispatch_scroll, ScrollRequest};
use crate::section::{Section, SectionTracker};
use crate::style::StyleGroup;
use crate::throttle::FrameThrottle;

pub struct Controller<H: Host> {
    host: H,
    config: Config,
    nav: Option<H::Node>,
    controls: NavControls<H::Node>,
    tracker: SectionTracker<H::Node>,
    toggle: Option<H::Node>,
    drawer: Option<Drawer<H::Node>>,
    throttle: FrameThrottle,
    scrolled: StyleGroup,
}

impl<H: Host> Controller<H> {
    /// Resolve collaborators through `host` and run the initial refresh.
    pub fn new(host: H, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let nav = host.primary_nav();
        if nav.is_none() {
            log::debug!("no primary nav, chrome updates disabled");
        }

        let sections = config
            .sections
            .iter()
            .filter_map(|id| match host.section(id) {
                Some(node) => Some(Section {
                    id: id.clone(),
                    node,
                }),
                None => {
                    log::debug!("section {id:?} not found, skipping");
                    None
                }
            })
            .collect();
        let tracker = SectionTracker::new(sections, config.activation_threshold, config.fallback);

        let controls = NavControls::new(
            host.nav_controls(),
            config.highlight_group(),
            config.markup.target_attr.clone(),
        );

        let toggle = host.drawer_toggle();
        let drawer = match host.drawer_panel() {
            Some(panel) => {
                let icons = toggle.as_ref().and_then(|toggle| {
                    Some(DrawerIcons {
                        open: host.drawer_icon(toggle, Icon::Open)?,
                        close: host.drawer_icon(toggle, Icon::Close)?,
                    })
                });
                Some(Drawer::new(
                    panel,
                    toggle.clone(),
                    icons,
                    config.hidden_group(),
                    config.markup.expanded_attr.clone(),
                ))
            }
            None => {
                log::debug!("no drawer panel, drawer disabled");
                None
            }
        };

        log::debug!(
            "controller ready: {} sections, {} nav controls",
            tracker.sections().len(),
            controls.len()
        );

        let scrolled = config.scrolled_group();
        let mut controller = Self {
            host,
            config,
            nav,
            controls,
            tracker,
            toggle,
            drawer,
            throttle: FrameThrottle::new(),
            scrolled,
        };
        controller.refresh();
        Ok(controller)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.tracker.active()
    }

    /// Drawer state, or `None` when the page has no drawer panel.
    pub fn drawer_state(&self) -> Option<DrawerState> {
        self.drawer.as_ref().map(Drawer::state)
    }

    pub fn is_frame_pending(&self) -> bool {
        self.throttle.is_pending()
    }

    /// Process a host notification.
    /// Returns true if the host should suppress the platform default action.
    pub fn handle(&mut self, event: Event<H::Node>) -> bool {
        match event {
            Event::Scroll => {
                if self.throttle.request() {
                    self.host.request_animation_frame();
                }
                false
            }
            Event::AnimationFrame => {
                self.throttle.complete();
                self.refresh();
                false
            }
            Event::Resize => {
                self.refresh();
                false
            }
            Event::Click { target } => self.click(target.as_ref()),
            Event::Key { key } => {
                if key == Key::Escape {
                    self.escape();
                }
                false
            }
        }
    }

    /// Recompute nav chrome and the active section from current geometry.
    pub fn refresh(&mut self) {
        let scroll_y = self.host.scroll_y();
        update_nav_chrome(
            self.nav.as_ref(),
            scroll_y,
            self.config.scroll_threshold,
            &self.scrolled,
        );

        if let Some(id) = self.tracker.update() {
            self.controls.highlight(&id);
        }
    }

    /// Route a pointer activation.
    /// Returns true if it hit the toggle or a nav control.
    pub fn click(&mut self, target: Option<&H::Node>) -> bool {
        let mut consumed = false;

        if let Some(target) = target {
            if self
                .toggle
                .as_ref()
                .is_some_and(|toggle| toggle.contains(target))
            {
                self.toggle_drawer();
                consumed = true;
            } else if let Some(id) = self
                .controls
                .control_at(target)
                .map(|control| control.target(self.controls.target_attr()))
            {
                consumed = true;
                match id {
                    Some(id) => self.activate(&id),
                    None => log::debug!("nav control without a target id"),
                }
            }
        }

        if let Some(drawer) = &mut self.drawer {
            drawer.dismiss_outside(target);
        }

        consumed
    }

    /// Activate navigation to `id`: scroll there, then close the drawer.
    pub fn activate(&mut self, id: &str) {
        self.scroll_to_section(id);
        if let Some(drawer) = &mut self.drawer {
            drawer.dispatch(DrawerInput::NavActivated);
        }
    }

    /// Scroll to a registered section. Unknown ids are ignored.
    pub fn scroll_to_section(&self, id: &str) -> Option<ScrollRequest> {
        let Some(section) = self.tracker.section(id) else {
            log::debug!("no registered section {id:?}");
            return None;
        };
        Some(dispatch_scroll(
            &self.host,
            &section.node,
            self.nav.as_ref(),
        ))
    }

    /// Invert the drawer. `None` when the page has no drawer panel.
    pub fn toggle_drawer(&mut self) -> Option<DrawerState> {
        self.drawer.as_mut().map(Drawer::toggle)
    }

    /// Close the drawer if open. Returns true if it was open.
    pub fn escape(&mut self) -> bool {
        self.drawer.as_mut().is_some_and(Drawer::escape)
    }
}
