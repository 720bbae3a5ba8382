//! Mobile navigation drawer.
//!
//! The panel visibility, the toggle's expanded indicator and the icon pair
//! are always written together from a single [`DrawerState`].

use crate::host::Node;
use crate::style::StyleGroup;

/// Open/closed state of the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Inputs driving the drawer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerInput {
    /// The toggle control was activated.
    Toggle,
    /// Pointer interaction outside both the panel and the toggle.
    OutsideInteraction,
    /// Escape key pressed anywhere.
    Escape,
    /// A scroll-to control was activated.
    NavActivated,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }

    /// Next state for `input`.
    pub fn transition(self, input: DrawerInput) -> DrawerState {
        match (self, input) {
            (DrawerState::Closed, DrawerInput::Toggle) => DrawerState::Open,
            (DrawerState::Open, DrawerInput::Toggle) => DrawerState::Closed,
            (_, DrawerInput::OutsideInteraction)
            | (_, DrawerInput::Escape)
            | (_, DrawerInput::NavActivated) => DrawerState::Closed,
        }
    }

    fn expanded(self) -> &'static str {
        match self {
            DrawerState::Open => "true",
            DrawerState::Closed => "false",
        }
    }
}

/// The open and close glyphs inside the toggle. Only swapped when both exist.
#[derive(Debug, Clone)]
pub struct DrawerIcons<N> {
    pub open: N,
    pub close: N,
}

/// The drawer panel with its optional toggle control.
#[derive(Debug)]
pub struct Drawer<N> {
    panel: N,
    toggle: Option<N>,
    icons: Option<DrawerIcons<N>>,
    hidden: StyleGroup,
    expanded_attr: String,
    state: DrawerState,
}

impl<N: Node> Drawer<N> {
    /// Create a closed drawer, writing the closed configuration to the page.
    pub fn new(
        panel: N,
        toggle: Option<N>,
        icons: Option<DrawerIcons<N>>,
        hidden: StyleGroup,
        expanded_attr: impl Into<String>,
    ) -> Self {
        let drawer = Self {
            panel,
            toggle,
            icons,
            hidden,
            expanded_attr: expanded_attr.into(),
            state: DrawerState::Closed,
        };
        drawer.apply(DrawerState::Closed);
        drawer
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Feed an input to the state machine.
    /// Returns true if the state changed.
    pub fn dispatch(&mut self, input: DrawerInput) -> bool {
        let next = self.state.transition(input);
        if next == self.state {
            return false;
        }
        log::debug!("drawer {:?} -> {:?} on {:?}", self.state, next, input);
        self.state = next;
        self.apply(next);
        true
    }

    pub fn toggle(&mut self) -> DrawerState {
        self.dispatch(DrawerInput::Toggle);
        self.state
    }

    pub fn open(&mut self) -> bool {
        !self.is_open() && self.dispatch(DrawerInput::Toggle)
    }

    pub fn close(&mut self) -> bool {
        self.dispatch(DrawerInput::NavActivated)
    }

    pub fn escape(&mut self) -> bool {
        self.dispatch(DrawerInput::Escape)
    }

    /// Close if `target` is outside both the panel and the toggle.
    /// A missing target counts as outside.
    pub fn dismiss_outside(&mut self, target: Option<&N>) -> bool {
        if !self.is_open() || target.is_some_and(|target| self.is_inside(target)) {
            return false;
        }
        self.dispatch(DrawerInput::OutsideInteraction)
    }

    fn is_inside(&self, target: &N) -> bool {
        self.panel.contains(target)
            || self
                .toggle
                .as_ref()
                .is_some_and(|toggle| toggle.contains(target))
    }

    fn apply(&self, state: DrawerState) {
        let open = state.is_open();
        self.panel.set_group(&self.hidden, !open);

        if let Some(toggle) = &self.toggle {
            toggle.set_attribute(&self.expanded_attr, state.expanded());
        }

        if let Some(icons) = &self.icons {
            icons.open.set_group(&self.hidden, open);
            icons.close.set_group(&self.hidden, !open);
        }
    }
}
