//! Active section detection.

use serde::Deserialize;

use crate::geometry::Extent;
use crate::host::Node;

/// Policy used when no section straddles the activation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Fallback {
    /// Keep the current section, or the first one if none was recorded yet.
    #[default]
    LastKnown,
    /// Always fall back to the first registered section.
    First,
    /// Pick the section whose extent is closest to the activation line.
    Nearest,
}

/// A section id paired with its current viewport geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry<'a> {
    pub id: &'a str,
    pub extent: Extent,
}

impl<'a> SectionGeometry<'a> {
    pub fn new(id: &'a str, extent: Extent) -> Self {
        Self { id, extent }
    }
}

/// First section, in registration order, whose extent straddles `threshold`.
pub fn compute_active_section<'a>(
    sections: &[SectionGeometry<'a>],
    threshold: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .find(|section| section.extent.straddles(threshold))
        .map(|section| section.id)
}

/// Like [`compute_active_section`], applying `fallback` on a miss.
pub fn resolve_active_section<'a>(
    sections: &[SectionGeometry<'a>],
    threshold: f64,
    current: Option<&'a str>,
    fallback: Fallback,
) -> Option<&'a str> {
    if let Some(id) = compute_active_section(sections, threshold) {
        return Some(id);
    }

    let first = sections.first().map(|section| section.id);
    match fallback {
        Fallback::LastKnown => current.or(first),
        Fallback::First => first,
        Fallback::Nearest => {
            let mut nearest: Option<(&'a str, f64)> = None;
            for section in sections {
                let distance = section.extent.distance_to(threshold);
                if nearest.map_or(true, |(_, best)| distance < best) {
                    nearest = Some((section.id, distance));
                }
            }
            nearest.map(|(id, _)| id)
        }
    }
}

/// A registered section bound to its element.
#[derive(Debug, Clone)]
pub struct Section<N> {
    pub id: String,
    pub node: N,
}

/// Tracks which registered section is active.
#[derive(Debug)]
pub struct SectionTracker<N> {
    sections: Vec<Section<N>>,
    active: Option<String>,
    threshold: f64,
    fallback: Fallback,
}

impl<N: Node> SectionTracker<N> {
    pub fn new(sections: Vec<Section<N>>, threshold: f64, fallback: Fallback) -> Self {
        Self {
            sections,
            active: None,
            threshold,
            fallback,
        }
    }

    pub fn sections(&self) -> &[Section<N>] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section<N>> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Currently active section id.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute from current geometry.
    /// Returns the new id if the active section changed.
    pub fn update(&mut self) -> Option<String> {
        let geometry: Vec<SectionGeometry<'_>> = self
            .sections
            .iter()
            .map(|section| SectionGeometry::new(&section.id, section.node.bounds()))
            .collect();

        let resolved = resolve_active_section(
            &geometry,
            self.threshold,
            self.active.as_deref(),
            self.fallback,
        )?;

        if self.active.as_deref() == Some(resolved) {
            return None;
        }

        let resolved = resolved.to_string();
        log::debug!(
            "active section {:?} -> {:?}",
            self.active.as_deref(),
            resolved
        );
        self.active = Some(resolved.clone());
        Some(resolved)
    }
}
