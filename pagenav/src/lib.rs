pub mod chrome;
pub mod config;
pub mod controller;
pub mod drawer;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod nav;
pub mod scroll;
pub mod section;
pub mod style;
pub mod throttle;

pub use chrome::{is_scrolled, update_nav_chrome};
pub use config::{Config, Markup};
pub use controller::Controller;
pub use drawer::{Drawer, DrawerIcons, DrawerInput, DrawerState};
pub use error::{ConfigError, Error, Result};
pub use event::{Event, Key};
pub use geometry::Extent;
pub use host::{Host, Icon, Node, ScrollBehavior};
pub use nav::{NavControl, NavControls};
pub use scroll::{nav_offset, scroll_target, ScrollRequest};
pub use section::{
    compute_active_section, resolve_active_section, Fallback, Section, SectionGeometry,
    SectionTracker,
};
pub use style::{StyleGroup, StyleTarget};
pub use throttle::FrameThrottle;
