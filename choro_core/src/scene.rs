// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark storage and diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Point;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// A change to apply to a rendered surface.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark appeared.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Paint order.
        z_index: i32,
        /// New payload.
        new: Box<MarkPayload>,
    },
    /// A mark changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// Mark kind after the change.
        kind: MarkKind,
        /// Paint order before the change.
        old_z_index: i32,
        /// Paint order after the change.
        new_z_index: i32,
        /// Payload before the change.
        old: Box<MarkPayload>,
        /// Payload after the change.
        new: Box<MarkPayload>,
    },
    /// A mark disappeared.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Payload at removal.
        old: Box<MarkPayload>,
    },
}

impl MarkDiff {
    /// Returns the id this diff applies to.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The marks currently shown on one surface.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene has no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns a mark by id.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Replaces the whole scene with `marks`.
    ///
    /// Marks missing from `marks` exit. Unchanged marks produce no diff.
    pub fn tick(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut seen = HashSet::new();
        let mut diffs = Vec::new();
        for mark in marks {
            seen.insert(mark.id);
            if let Some(diff) = self.upsert(mark) {
                diffs.push(diff);
            }
        }

        let mut gone: Vec<MarkId> = self
            .marks
            .keys()
            .copied()
            .filter(|id| !seen.contains(id))
            .collect();
        gone.sort_unstable();
        diffs.extend(gone.into_iter().filter_map(|id| self.remove(id)));
        diffs
    }

    /// Removes one mark.
    pub fn remove(&mut self, id: MarkId) -> Option<MarkDiff> {
        self.marks.remove(&id).map(|old| MarkDiff::Exit {
            id,
            kind: old.kind(),
            old: Box::new(old.payload),
        })
    }

    /// Returns marks in paint order, `(z_index, id)`.
    pub fn sorted(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Returns the topmost mark whose fill area contains `pt`, if any accepted by `filter`.
    pub fn hit(&self, pt: Point, filter: impl Fn(&Mark) -> bool) -> Option<&Mark> {
        self.sorted()
            .into_iter()
            .rev()
            .find(|m| filter(m) && m.payload.contains(pt))
    }

    fn upsert(&mut self, mark: Mark) -> Option<MarkDiff> {
        match self.marks.get_mut(&mark.id) {
            Some(existing) => {
                if *existing == mark {
                    return None;
                }
                let old = core::mem::replace(existing, mark);
                Some(MarkDiff::Update {
                    id: old.id,
                    kind: existing.kind(),
                    old_z_index: old.z_index,
                    new_z_index: existing.z_index,
                    old: Box::new(old.payload),
                    new: Box::new(existing.payload.clone()),
                })
            }
            None => {
                let diff = MarkDiff::Enter {
                    id: mark.id,
                    kind: mark.kind(),
                    z_index: mark.z_index,
                    new: Box::new(mark.payload.clone()),
                };
                self.marks.insert(mark.id, mark);
                Some(diff)
            }
        }
    }
}
