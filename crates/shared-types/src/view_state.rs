/// One-shot entrance animation state shared by both views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrancePhase {
    #[default]
    NotLoaded,
    Loaded,
}

impl EntrancePhase {
    /// Mount transition. `Loaded` is terminal.
    pub fn mounted(self) -> Self {
        EntrancePhase::Loaded
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, EntrancePhase::Loaded)
    }
}

/// Visibility of the profile dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        matches!(self, DropdownState::Open)
    }

    /// Transition for a click on the profile trigger.
    pub fn toggled(self) -> Self {
        match self {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        }
    }

    /// Transition for a document-wide pointer-down.
    ///
    /// Only a press outside both the trigger and the panel closes an open
    /// dropdown. Presses on the trigger are left to its click handler.
    pub fn on_pointer_down(self, inside_trigger: bool, inside_panel: bool) -> Self {
        match self {
            DropdownState::Open if !inside_trigger && !inside_panel => DropdownState::Closed,
            other => other,
        }
    }
}
