//! Use-case services, one per entity.
//!
//! # Responsibility
//! - Expose repository operations under presentation-facing verbs
//!   (`fetch_all_*`, `create_*`, `modify_*`, `remove_*`, `find_*_by_id`).
//! - Emit one structured log event per call.
//!
//! # Invariants
//! - Services add no business rules; results pass through unchanged.
//! - Services remain storage-agnostic (generic over repository traits).

pub mod brand_service;
pub mod owner_service;
pub mod ownership_service;
pub mod vehicle_model_service;
pub mod vehicle_service;

use crate::repo::error::RepoResult;
use log::{debug, error, warn};

/// Logs the outcome of one use-case call and hands the result back.
///
/// Rule rejections (duplicate, dependents, not found) log at `warn`;
/// storage failures log at `error`.
pub(crate) fn logged<T>(event: &'static str, result: RepoResult<T>) -> RepoResult<T> {
    match &result {
        Ok(_) => debug!("event={event} module=service status=ok"),
        Err(err) if !err.is_constraint_violation() && !err.is_not_found() => error!(
            "event={event} module=service status=error error_code={} error={err}",
            err.error_code()
        ),
        Err(err) => warn!(
            "event={event} module=service status=rejected error_code={} error={err}",
            err.error_code()
        ),
    }
    result
}
