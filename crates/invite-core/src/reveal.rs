//! Scroll reveal bookkeeping.
//!
//! Targets are registered up front; observations report the fraction of a
//! target inside the viewport. Crossing the threshold flips the target to
//! visible for good, and the light wall section is additionally activated.

use crate::constants::REVEAL_THRESHOLD;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Card,
    FadeIn,
    LightWall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    Visible(TargetId),
    /// The light wall section came into view; the sequencer should start.
    LightWallActive(TargetId),
}

#[derive(Clone, Debug)]
struct Target {
    kind: TargetKind,
    visible: bool,
    active: bool,
}

pub struct RevealObserver {
    targets: Vec<Target>,
    threshold: f64,
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            targets: Vec::new(),
            threshold,
        }
    }

    pub fn register(&mut self, kind: TargetKind) -> TargetId {
        self.targets.push(Target {
            kind,
            visible: false,
            active: false,
        });
        TargetId(self.targets.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn kind(&self, id: TargetId) -> Option<TargetKind> {
        self.targets.get(id.0).map(|t| t.kind)
    }

    pub fn is_visible(&self, id: TargetId) -> bool {
        self.targets.get(id.0).map_or(false, |t| t.visible)
    }

    pub fn is_active(&self, id: TargetId) -> bool {
        self.targets.get(id.0).map_or(false, |t| t.active)
    }

    /// Record an observation. Events are produced only on the first crossing.
    pub fn observe(&mut self, id: TargetId, ratio: f64) -> SmallVec<[RevealEvent; 2]> {
        let mut out = SmallVec::new();
        let Some(t) = self.targets.get_mut(id.0) else {
            log::warn!("[reveal] observation for unknown target {}", id.0);
            return out;
        };
        if t.visible || ratio < self.threshold {
            return out;
        }
        t.visible = true;
        out.push(RevealEvent::Visible(id));
        if t.kind == TargetKind::LightWall {
            t.active = true;
            out.push(RevealEvent::LightWallActive(id));
        }
        out
    }
}
