//! Collision resolution through mass- and momentum-conserving mergers
//!
//! Collided bodies are grouped by locale bucket and every group is replaced by
//! one successor that conserves:
//! - total mass
//! - total momentum
//! - mass-weighted density (and so density-weighted volume)

use crate::simulation::locale::Locale;
use crate::simulation::params::SimulationConfig;
use crate::simulation::states::{Body, BodyId, BodyInit, IdAllocator, NVec2};

/// Identity changes produced by one merge pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
    pub removed: Vec<BodyId>, // consumed bodies
    pub created: Vec<BodyId>, // successors
}

/// Replace every collision group in `bodies` with its successor.
///
/// Survivors keep their order and successors are appended in order of the
/// group's first member.
pub fn resolve_merges(
    bodies: &mut Vec<Body>,
    collided: &[bool],
    cfg: &SimulationConfig,
    ids: &mut IdAllocator,
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    if !collided.iter().any(|&c| c) {
        return outcome;
    }

    let mut survivors = Vec::with_capacity(bodies.len());
    let mut groups: Vec<(Locale, Vec<Body>)> = Vec::new();

    for (b, &hit) in std::mem::take(bodies).into_iter().zip(collided) {
        if !hit {
            survivors.push(b);
            continue;
        }
        outcome.removed.push(b.id);
        match groups.iter_mut().find(|(locale, _)| *locale == b.locale) {
            Some((_, members)) => members.push(b),
            None => groups.push((b.locale, vec![b])),
        }
    }

    for (locale, members) in &groups {
        let id = successor_id(members, cfg, ids);
        let successor = merge_cluster(members, id, cfg);
        log::debug!(
            "merged {} bodies in locale {} into {} (m = {:e} kg)",
            members.len(),
            locale,
            id,
            successor.m
        );
        outcome.created.push(id);
        survivors.push(successor);
    }

    *bodies = survivors;
    outcome
}

/// The tracked id is inherited by its group's successor; otherwise a fresh id.
fn successor_id(members: &[Body], cfg: &SimulationConfig, ids: &mut IdAllocator) -> BodyId {
    match cfg.tracked_id {
        Some(tracked) if members.iter().any(|b| b.id == tracked) => tracked,
        _ => ids.next_id(),
    }
}

/// Merge `members` into one body with id `id`.
///
/// Position is the center of mass, velocity is total momentum over total
/// mass, density is mass-weighted and the color is the heaviest member's
/// (first one on ties). The successor starts with zero acceleration.
pub fn merge_cluster(members: &[Body], id: BodyId, cfg: &SimulationConfig) -> Body {
    let m_total: f64 = members.iter().map(|b| b.m).sum();

    let com = members.iter().fold(NVec2::zeros(), |acc, b| acc + b.x * b.m) / m_total;
    let p_total = members.iter().fold(NVec2::zeros(), |acc, b| acc + b.momentum());
    let density = members.iter().map(|b| b.density * b.m).sum::<f64>() / m_total;

    let mut heaviest = &members[0];
    for b in &members[1..] {
        if b.m > heaviest.m {
            heaviest = b;
        }
    }

    let init = BodyInit {
        m: m_total,
        x: com,
        v: p_total / m_total,
        color: heaviest.color,
        density,
    };
    Body::derived(id, init, cfg)
}
