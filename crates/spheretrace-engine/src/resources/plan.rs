use crate::layout::{BindingSlot, EncodedScene};

/// Action for one slot buffer this frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SlotUpload {
    /// No buffer of this byte length exists; create one and rebind.
    Allocate,
    /// A buffer of the same byte length exists; overwrite its contents.
    Write,
}

/// Per-frame upload plan for all slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FramePlan {
    pub uploads: [SlotUpload; 6],
    pub rebuild_bind_group: bool,
}

impl FramePlan {
    pub fn upload(&self, slot: BindingSlot) -> SlotUpload {
        self.uploads[slot.index() as usize]
    }
}

/// Decides allocation vs. partial write from the cached byte length of a slot.
///
/// A buffer is reused only for an identical length; any change (e.g. the
/// sphere count) forces a fresh allocation.
#[inline]
pub fn plan_upload(cached_len: Option<u64>, len: u64) -> SlotUpload {
    match cached_len {
        Some(cached) if cached == len => SlotUpload::Write,
        _ => SlotUpload::Allocate,
    }
}

/// Plans every slot against the lengths currently held by the cache.
pub fn plan_frame(cached: &[Option<u64>; 6], encoded: &EncodedScene) -> FramePlan {
    let mut uploads = [SlotUpload::Write; 6];
    for (slot, bytes) in encoded.iter() {
        let i = slot.index() as usize;
        uploads[i] = plan_upload(cached[i], bytes.len() as u64);
    }
    let rebuild_bind_group = uploads.contains(&SlotUpload::Allocate);
    FramePlan { uploads, rebuild_bind_group }
}
