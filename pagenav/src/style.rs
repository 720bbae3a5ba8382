//! Style groups and the capability to toggle them on an element.

/// A bundle of style classes added or removed as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGroup {
    classes: Vec<String>,
}

impl StyleGroup {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Something style groups can be applied to.
///
/// Methods take `&self`: the rendering tree is externally owned and
/// implementations mutate it through shared handles.
pub trait StyleTarget {
    fn add_group(&self, group: &StyleGroup);

    fn remove_group(&self, group: &StyleGroup);

    /// True only when every class of the group is present.
    fn has_group(&self, group: &StyleGroup) -> bool;

    /// Add or remove `group` depending on `present`.
    fn set_group(&self, group: &StyleGroup, present: bool) {
        if present {
            self.add_group(group);
        } else {
            self.remove_group(group);
        }
    }
}
