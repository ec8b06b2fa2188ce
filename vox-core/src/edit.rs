use vox_dto::{AudioId, FolderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditTarget {
    Folder(FolderId),
    Audio(AudioId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRename {
    pub target: EditTarget,
    pub name: String,
    pub original: String,
}

/// Double-click-to-rename. Blur and Enter commit, Escape reverts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Display,
    Editing {
        target: EditTarget,
        original: String,
        value: String,
    },
}

impl EditState {
    pub fn begin(&mut self, target: EditTarget, current: impl Into<String>) {
        let original = current.into();
        *self = Self::Editing {
            target,
            value: original.clone(),
            original,
        };
    }

    pub fn input(&mut self, new_value: impl Into<String>) {
        if let Self::Editing { value, .. } = self {
            *value = new_value.into();
        }
    }

    /// Leaves edit mode. Yields the rename once; a blur that follows an
    /// Enter finds the state already in `Display` and yields nothing.
    pub fn commit(&mut self) -> Option<PendingRename> {
        match std::mem::take(self) {
            Self::Display => None,
            Self::Editing {
                target,
                original,
                value,
            } => Some(PendingRename {
                target,
                name: value,
                original,
            }),
        }
    }

    /// Leaves edit mode without a rename, returning the text to show again.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Display => None,
            Self::Editing { original, .. } => Some(original),
        }
    }

    /// The in-progress value if `target` is the one being edited.
    pub fn value_for(&self, target: EditTarget) -> Option<&str> {
        match self {
            Self::Editing { target: t, value, .. } if *t == target => Some(value),
            _ => None,
        }
    }
}
