//! Visualization geometry-group flags.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const GROUP_COUNT: usize = 6;

const DEFAULT_GROUPS: [bool; GROUP_COUNT] = [true, true, true, false, false, false];

/// Geometry group id in `0..GROUP_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(u8);

impl GroupId {
    pub fn new(id: u8) -> Option<Self> {
        if (id as usize) < GROUP_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = GroupId> {
        (0..GROUP_COUNT as u8).map(GroupId)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {}", self.0)
    }
}

/// Per-group render toggles. The key set is fixed to the six group ids, so a
/// value can never gain or lose a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationFlags {
    groups: [bool; GROUP_COUNT],
}

impl Default for VisualizationFlags {
    fn default() -> Self {
        Self {
            groups: DEFAULT_GROUPS,
        }
    }
}

impl VisualizationFlags {
    pub fn from_groups(groups: [bool; GROUP_COUNT]) -> Self {
        Self { groups }
    }

    pub fn is_visible(&self, group: GroupId) -> bool {
        self.groups[group.index()]
    }

    /// Copy of `self` with `group` negated and every other group untouched.
    #[must_use]
    pub fn toggled(&self, group: GroupId) -> Self {
        let mut groups = self.groups;
        groups[group.index()] = !groups[group.index()];
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupId, bool)> + '_ {
        GroupId::all().map(move |group| (group, self.is_visible(group)))
    }

    pub fn visible_groups(&self) -> Vec<GroupId> {
        self.iter()
            .filter(|(_, visible)| *visible)
            .map(|(group, _)| group)
            .collect()
    }

    pub fn groups(&self) -> [bool; GROUP_COUNT] {
        self.groups
    }
}
