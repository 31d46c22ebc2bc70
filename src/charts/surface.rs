//! Display Surface Registry
//! Named chart slots on the dashboard, resolved once and handed to adapters.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("no surface registered with id '{0}'")]
    NotFound(String),
}

/// Handle to a chart slot. Cheap to clone; identity is the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    id: String,
    title: String,
}

impl Surface {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Registry of the chart slots the dashboard exposes.
///
/// Adapters never look surfaces up themselves; the shell resolves a handle
/// here and passes it into the adapter constructor.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: Vec<Surface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slot. Re-registering an id replaces the previous entry.
    pub fn register(&mut self, id: impl Into<String>, title: impl Into<String>) {
        let surface = Surface::new(id, title);
        if let Some(existing) = self.surfaces.iter_mut().find(|s| s.id == surface.id) {
            *existing = surface;
        } else {
            self.surfaces.push(surface);
        }
    }

    /// Resolve a slot by id.
    pub fn resolve(&self, id: &str) -> Result<Surface, SurfaceError> {
        self.surfaces
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| SurfaceError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_registered_surface() {
        let mut registry = SurfaceRegistry::new();
        registry.register("individuals", "Individuals");

        let surface = registry.resolve("individuals").unwrap();
        assert_eq!(surface.id(), "individuals");
        assert_eq!(surface.title(), "Individuals");
    }

    #[test]
    fn resolve_unknown_id_is_not_found() {
        let registry = SurfaceRegistry::new();
        assert_eq!(
            registry.resolve("nope"),
            Err(SurfaceError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn register_same_id_replaces_title() {
        let mut registry = SurfaceRegistry::new();
        registry.register("topics", "Topics");
        registry.register("topics", "Trending Topics");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("topics").unwrap().title(), "Trending Topics");
    }
}
