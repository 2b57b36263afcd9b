use crate::canonical::{asymmetric_entries, canonicalize, self_loops};
use crate::config::CompareConfig;
use crate::error::ReconError;
use crate::evidence::{compute_summary, side_summary};
use crate::model::{ReconInput, ReconMeta, ReconResult, Source};
use crate::params::ensure_same_params;
use crate::reconcile::{reconcile, vertex_differences};

/// Run a comparison per config. Returns classified links + summary.
///
/// Fails before any pair is built when the two sides disagree on `N`, `L`
/// or `M`, or when `require_symmetric` is set and a side has one-sided entries.
pub fn run(config: &CompareConfig, input: &ReconInput) -> Result<ReconResult, ReconError> {
    let ReconInput { left, right } = input;

    ensure_same_params(&left.params, &right.params)?;

    for source in [left, right] {
        check_source(source, config.checks.require_symmetric)?;
    }

    let left_pairs = canonicalize(&left.relation);
    let right_pairs = canonicalize(&right.relation);
    log::debug!(
        "canonical pairs: {} '{}', {} '{}'",
        left_pairs.len(),
        left.label,
        right_pairs.len(),
        right.label
    );

    let links = reconcile(&left_pairs, &right_pairs);
    let vertex_diffs = vertex_differences(&links);

    let summary = compute_summary(
        side_summary(left, &left_pairs),
        side_summary(right, &right_pairs),
        &links,
        &vertex_diffs,
    );

    Ok(ReconResult {
        meta: ReconMeta {
            config_name: config.name.clone(),
            left_label: left.label.clone(),
            right_label: right.label.clone(),
            params: left.params,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        links,
        vertex_diffs,
    })
}

fn check_source(source: &Source, require_symmetric: bool) -> Result<(), ReconError> {
    let loops = self_loops(&source.relation);
    if !loops.is_empty() {
        log::warn!(
            "'{}': {} vertex(es) list themselves as neighbor; ignored",
            source.label,
            loops.len()
        );
    }

    let asymmetric = asymmetric_entries(&source.relation);
    if let Some(&first) = asymmetric.first() {
        if require_symmetric {
            return Err(ReconError::AsymmetricRelation {
                label: source.label.clone(),
                count: asymmetric.len(),
                first,
            });
        }
        log::info!(
            "'{}': {} one-sided neighbor entr(ies), each still counted as a link",
            source.label,
            asymmetric.len()
        );
    }

    Ok(())
}
