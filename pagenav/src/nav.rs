//! Navigation controls and their highlight.

use crate::host::Node;
use crate::style::StyleGroup;

/// A control that scrolls to a section when activated.
#[derive(Debug, Clone)]
pub struct NavControl<N> {
    pub node: N,
}

impl<N: Node> NavControl<N> {
    pub fn new(node: N) -> Self {
        Self { node }
    }

    /// Target section id, read from markup at call time.
    /// Empty values count as missing.
    pub fn target(&self, attr: &str) -> Option<String> {
        self.node.attribute(attr).filter(|id| !id.is_empty())
    }
}

/// The cached set of nav controls, sharing one highlight group.
#[derive(Debug)]
pub struct NavControls<N> {
    controls: Vec<NavControl<N>>,
    highlight: StyleGroup,
    target_attr: String,
}

impl<N: Node> NavControls<N> {
    pub fn new(nodes: Vec<N>, highlight: StyleGroup, target_attr: impl Into<String>) -> Self {
        Self {
            controls: nodes.into_iter().map(NavControl::new).collect(),
            highlight,
            target_attr: target_attr.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn target_attr(&self) -> &str {
        &self.target_attr
    }

    /// The control containing `target`, if any.
    pub fn control_at(&self, target: &N) -> Option<&NavControl<N>> {
        self.controls
            .iter()
            .find(|control| control.node.contains(target))
    }

    /// Move the highlight to every control targeting `id`.
    pub fn highlight(&self, id: &str) {
        for control in &self.controls {
            control.node.remove_group(&self.highlight);
        }
        for control in &self.controls {
            if control.target(&self.target_attr).as_deref() == Some(id) {
                control.node.add_group(&self.highlight);
            }
        }
    }
}
