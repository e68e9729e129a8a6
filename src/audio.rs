//! Sound cue routing
//!
//! The simulation raises `GameEvent`s; this module turns them into named
//! cues and hands them to a backend. Any backend failure switches audio off
//! for the rest of the process and the game carries on silently.

use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::sim::{GameEvent, PowerUpKind};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Lane change started
    Move,
    /// Coin picked up
    Coin,
    /// Any power-up picked up
    PowerUp,
    /// Shield raised
    Shield,
    /// Magnet auto-collected a coin
    MagnetTick,
    /// Run ended
    Crash,
}

/// A simple beep: enough for a backend to synthesize the cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    /// Seconds
    pub duration: f32,
}

impl SoundCue {
    pub fn tone(&self) -> Tone {
        let (frequency, duration) = match self {
            SoundCue::Move => (350.0, 0.05),
            SoundCue::Coin => (800.0, 0.1),
            SoundCue::PowerUp => (600.0, 0.2),
            SoundCue::Shield => (500.0, 0.25),
            SoundCue::MagnetTick => (450.0, 0.05),
            SoundCue::Crash => (200.0, 0.3),
        };
        Tone {
            frequency,
            duration,
        }
    }

    /// Cues triggered by a simulation event
    pub fn for_event(event: &GameEvent) -> &'static [SoundCue] {
        match event {
            GameEvent::LaneChange { .. } => &[SoundCue::Move],
            GameEvent::CoinCollected { .. } => &[SoundCue::Coin],
            GameEvent::MagnetTick => &[SoundCue::MagnetTick],
            GameEvent::PowerUpCollected {
                kind: PowerUpKind::Shield,
            } => &[SoundCue::Shield, SoundCue::PowerUp],
            GameEvent::PowerUpCollected { .. } => &[SoundCue::PowerUp],
            GameEvent::Crash { .. } => &[SoundCue::Crash],
            _ => &[],
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, cue: SoundCue, tone: Tone, volume: f32) -> Result<()>;
}

/// Backend that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, cue: SoundCue, tone: Tone, volume: f32) -> Result<()> {
        log::debug!(
            "cue {:?}: {} Hz for {}s at {:.2}",
            cue,
            tone.frequency,
            tone.duration,
            volume
        );
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    /// Final cue volume, already folded from master, sfx and mute
    volume: f32,
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend: Some(backend),
            volume: Settings::default().effective_volume(),
        }
    }

    /// A manager with no backend (audio unavailable)
    pub fn silent() -> Self {
        Self {
            backend: None,
            volume: 0.0,
        }
    }

    /// Try to open a backend; fall back to silence if it fails
    pub fn open<F>(open: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn AudioBackend>>,
    {
        match open() {
            Ok(backend) => Self::new(backend),
            Err(e) => {
                log::warn!("Running without sound: {}", e);
                Self::silent()
            }
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Play a sound effect
    pub fn play(&mut self, cue: SoundCue) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        if let Err(e) = backend.play(cue, cue.tone(), vol) {
            log::warn!("Sound playback failed, disabling audio: {}", e);
            self.backend = None;
        }
    }

    /// Play every cue the frame's events call for
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            for &cue in SoundCue::for_event(event) {
                self.play(cue);
            }
        }
    }
}

/// Backend error helper for implementations
pub fn unavailable(reason: impl Into<String>) -> Error {
    Error::AudioUnavailable(reason.into())
}
