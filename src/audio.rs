//! Audio collaborator seam.
//!
//! The playback engine lives outside this crate; the theme only asks it to
//! load a resource once and replay it by handle afterwards.

use std::path::Path;

/// Opaque id for a loaded audio resource, minted by the [`SoundBank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u64);

/// The audio engine the theme triggers playback through.
pub trait SoundBank {
    /// Loads the resource at `path`, or `None` if it cannot be loaded.
    fn load(&mut self, path: &Path) -> Option<SoundHandle>;

    /// Triggers playback of a previously loaded resource.
    fn play(&mut self, handle: SoundHandle);
}
