use vox_dto::{AudioId, FolderId, MoveAudio};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Drag {
    #[default]
    Idle,
    Dragging { audio: AudioId, from: FolderId },
}

/// Data the view must put on the browser drag in `dragstart`. Firefox
/// refuses to start a drag whose `dataTransfer` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub format: &'static str,
    pub data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub audio: AudioId,
    pub from: FolderId,
    pub to: FolderId,
}

impl MoveRequest {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    pub fn body(&self) -> MoveAudio {
        MoveAudio {
            audio_id: self.audio,
            target_folder_id: self.to,
        }
    }
}

/// Drag-and-drop of audio items between folder cards.
///
/// Only one item can be in flight. The dragged item stays dimmed until
/// [`DragState::end`], which the view fires after every drag whether or not
/// a drop happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    drag: Drag,
    highlighted: Option<FolderId>,
}

impl DragState {
    pub fn start(&mut self, audio: AudioId, from: FolderId) -> DragPayload {
        self.drag = Drag::Dragging { audio, from };
        DragPayload {
            format: "text/plain",
            data: audio.to_string(),
        }
    }

    pub fn over(&mut self, folder: FolderId) {
        self.highlighted = Some(folder);
    }

    pub fn leave(&mut self, folder: FolderId) {
        if self.highlighted == Some(folder) {
            self.highlighted = None;
        }
    }

    /// Returns the move to perform, if any. Dropping onto the source folder
    /// yields nothing.
    pub fn drop_on(&mut self, target: FolderId) -> Option<MoveRequest> {
        self.highlighted = None;

        let Drag::Dragging { audio, from } = self.drag else {
            return None;
        };

        let req = MoveRequest {
            audio,
            from,
            to: target,
        };

        (!req.is_noop()).then_some(req)
    }

    pub fn end(&mut self) {
        self.drag = Drag::Idle;
    }

    pub fn is_dimmed(&self, audio: AudioId) -> bool {
        matches!(self.drag, Drag::Dragging { audio: a, .. } if a == audio)
    }

    pub fn is_highlighted(&self, folder: FolderId) -> bool {
        self.highlighted == Some(folder)
    }
}
