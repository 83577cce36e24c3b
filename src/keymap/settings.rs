//! Decoding of the ACT and SCR settings bitmask

use serde::Serialize;

const CONSOLIDATE_UNDO_POINTS: i64 = 1 << 0;
const SHOW_IN_ACTIONS_MENU: i64 = 1 << 1;
const SHOW_AS_ACTIVE_IF_ALL: i64 = 1 << 4;
const ACTIVE_OR_INDETERMINATE: i64 = 1 << 5;

/// Flags of a custom action (ACT) entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ActionSettings {
    pub consolidate_undo_points: bool,
    pub show_in_actions_menu: bool,
    pub show_as_active_if_all_component_actions_are: bool,
    pub active_or_indeterminate: bool,
}

impl ActionSettings {
    pub const fn from_bits(settings: i64) -> Self {
        Self {
            consolidate_undo_points: settings & CONSOLIDATE_UNDO_POINTS != 0,
            show_in_actions_menu: settings & SHOW_IN_ACTIONS_MENU != 0,
            show_as_active_if_all_component_actions_are: settings & SHOW_AS_ACTIVE_IF_ALL != 0,
            active_or_indeterminate: settings & ACTIVE_OR_INDETERMINATE != 0,
        }
    }
}

/// What REAPER does when a script is started while already running
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InstanceBehavior {
    #[serde(rename = "Show dialog (Terminate, New Instance, Abort)")]
    ShowDialog,
    #[serde(rename = "Always terminate all instances")]
    TerminateAll,
    #[serde(rename = "Always start a new instance")]
    StartNewInstance,
}

impl InstanceBehavior {
    /// Matched on the whole settings value, not individual bits
    pub const fn from_settings(settings: i64) -> Option<Self> {
        match settings {
            4 => Some(InstanceBehavior::ShowDialog),
            260 => Some(InstanceBehavior::TerminateAll),
            516 => Some(InstanceBehavior::StartNewInstance),
            _ => None,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            InstanceBehavior::ShowDialog => "Show dialog (Terminate, New Instance, Abort)",
            InstanceBehavior::TerminateAll => "Always terminate all instances",
            InstanceBehavior::StartNewInstance => "Always start a new instance",
        }
    }
}

/// Flags of a script (SCR) entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScriptSettings {
    pub consolidate_undo_points: bool,
    pub show_in_actions_menu: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_behavior: Option<InstanceBehavior>,
}

impl ScriptSettings {
    pub const fn from_bits(settings: i64) -> Self {
        Self {
            consolidate_undo_points: settings & CONSOLIDATE_UNDO_POINTS != 0,
            show_in_actions_menu: settings & SHOW_IN_ACTIONS_MENU != 0,
            instance_behavior: InstanceBehavior::from_settings(settings),
        }
    }
}
