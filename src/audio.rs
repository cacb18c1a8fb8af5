//! Sound-cue capability interface
//!
//! The simulation fires cues without knowing how (or whether) they get
//! played. Sinks are best-effort: they own the enable/volume policy and a
//! failed playback must never reach back into the core.

use crate::settings::Settings;

/// One-shot effects the simulation can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player re-target (manual clicks and forced respawns)
    Click,
    /// Life lost
    Alert,
}

/// Playback capability handed to the simulation each frame.
///
/// The core calls these unconditionally and ignores the outcome;
/// implementations decide whether anything is audible.
pub trait AudioSink {
    /// Play a one-shot cue
    fn play(&mut self, cue: SoundCue);
    /// Start the looping ambient track
    fn start_music(&mut self);
    /// Stop the looping ambient track
    fn stop_music(&mut self);
}

/// Sink that discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
    fn start_music(&mut self) {}
    fn stop_music(&mut self) {}
}

/// Sink that logs cues instead of playing them, honoring the settings
/// toggles. Used by the headless demo and handy under any frontend while
/// debugging cue timing.
#[derive(Debug, Clone)]
pub struct LogAudio {
    pub sfx_enabled: bool,
    pub music_enabled: bool,
    music_playing: bool,
}

impl LogAudio {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sfx_enabled: settings.sfx_enabled,
            music_enabled: settings.music_enabled,
            music_playing: false,
        }
    }

    #[inline]
    pub fn music_playing(&self) -> bool {
        self.music_playing
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        if self.sfx_enabled {
            log::debug!("sfx: {cue:?}");
        }
    }

    fn start_music(&mut self) {
        if self.music_enabled && !self.music_playing {
            self.music_playing = true;
            log::debug!("ambient track started");
        }
    }

    fn stop_music(&mut self) {
        if self.music_playing {
            self.music_playing = false;
            log::debug!("ambient track stopped");
        }
    }
}
