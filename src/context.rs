use crate::catalog::{Family, Resource};

/// Process-wide immutable catalog and family table, built once at startup
/// from already-parsed ingestion output and passed explicitly to callers.
/// Read-only for the process lifetime, so it can be shared across threads
/// without coordination.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    global_resources: Vec<Resource>,
    families: Vec<Family>,
}

impl ResolutionContext {
    pub fn new(global_resources: Vec<Resource>, families: Vec<Family>) -> Self {
        tracing::info!(
            target: "context",
            resources = global_resources.len(),
            families = families.len(),
            "resolution_context_loaded"
        );
        Self {
            global_resources,
            families,
        }
    }

    pub fn global_resources(&self) -> &[Resource] {
        &self.global_resources
    }

    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// First family whose subjects and grade band cover the item. Misses are
    /// valid; the facade turns an absent family into an invalid-argument
    /// failure.
    pub fn family_for(&self, subject: &str, grade: u8) -> Option<&Family> {
        self.families
            .iter()
            .find(|family| family.subjects.contains(subject) && family.grades.contains(grade))
    }
}
