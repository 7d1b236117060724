//! Content resolver for the public capability listing.
//!
//! Serves whatever the store holds, falling back to a static default set when
//! no store is configured or reachable, and lazily seeding defaults into a
//! reachable-but-empty store.

use crate::models::Capability;
use crate::services::ContentStore;

/// Static fallback shown when no store is available. Never surfaced as an
/// error to the caller.
pub fn default_capabilities() -> Vec<Capability> {
    vec![
        Capability::new(
            "CNC Machining",
            "Precision milling and turning for metals and plastics",
            "settings",
        ),
        Capability::new(
            "Sheet Metal Fabrication",
            "Laser cutting, bending, and assembly for prototypes to production",
            "square",
        ),
        Capability::new(
            "Welding",
            "Certified MIG/TIG welding for structural and aesthetic parts",
            "hammer",
        ),
    ]
}

/// Default records seeded into an empty store on first read.
pub fn seed_capabilities() -> Vec<Capability> {
    let mut defaults = default_capabilities();
    defaults.push(Capability::new(
        "Powder Coating",
        "Durable finishes with a wide range of colors and textures",
        "paintbrush",
    ));
    defaults
}

/// Resolve the capability list for the public site.
///
/// Read-only from the caller's perspective, but may seed up to 4 default
/// records into an empty store as a side effect of the first request. The
/// seed-check-then-insert sequence is not locked: concurrent first requests
/// can both observe an empty store and seed twice. Duplicates are tolerated.
pub async fn resolve_capabilities(store: Option<&dyn ContentStore>) -> Vec<Capability> {
    let Some(store) = store else {
        return default_capabilities();
    };

    let items = match store.list_capabilities().await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "Capability query failed, serving static defaults");
            return default_capabilities();
        }
    };

    if !items.is_empty() {
        return items;
    }

    // Best-effort seeding: not atomic, no rollback. A partial seed is an
    // accepted outcome.
    for capability in seed_capabilities() {
        if let Err(e) = store.insert_capability(&capability).await {
            tracing::warn!(name = %capability.name, error = %e, "Failed to seed capability");
        }
    }

    match store.list_capabilities().await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "Re-read after seeding failed, serving static defaults");
            default_capabilities()
        }
    }
}
