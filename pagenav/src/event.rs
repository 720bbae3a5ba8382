/// Notifications delivered by the host, targeted at page nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<N> {
    /// The document scrolled. Coalesced to one recomputation per frame.
    Scroll,
    /// The viewport resized. Recomputed immediately.
    Resize,
    /// A frame requested through the host is about to paint.
    AnimationFrame,
    /// Pointer activation anywhere in the document.
    Click { target: Option<N> },
    /// Key press anywhere in the document.
    Key { key: Key },
}

/// Simplified key representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Space,
    Other(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            " " | "Spacebar" => Key::Space,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_name(name)
    }
}
