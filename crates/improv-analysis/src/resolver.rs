//! Chord and scale resolution with per-run memoization.

use std::collections::HashMap;

use crate::pitch::PitchClassSet;
use crate::theory;
use crate::voicings;

/// Resolves chord names and the active key/modality to pitch-class sets.
///
/// Owns a chord-name cache scoped to one analysis run. The cache must
/// not outlive the run: it is keyed by chord name only, so sharing it
/// across different key/modality contexts would be wrong. Create a fresh
/// resolver per call.
pub struct Resolver {
    scale: PitchClassSet,
    chord_cache: HashMap<String, PitchClassSet>,
}

impl Resolver {
    pub fn new(key: &str, modality: &str) -> Self {
        Resolver {
            scale: theory::scale_pitch_classes(key, modality),
            chord_cache: HashMap::new(),
        }
    }

    /// The active scale's pitch classes. Empty means "no scale
    /// constraint", not an error.
    pub fn scale_tones(&self) -> PitchClassSet {
        self.scale
    }

    /// Chord tones for a symbol: the union of the theory lookup and the
    /// voicing database. Memoized per chord name for this run.
    pub fn chord_tones(&mut self, symbol: &str) -> PitchClassSet {
        if let Some(&cached) = self.chord_cache.get(symbol) {
            return cached;
        }

        let tones = theory::chord_pitch_classes(symbol).union(voicings::lookup(symbol));
        self.chord_cache.insert(symbol.to_string(), tones);
        tones
    }

    /// Number of distinct chord names resolved so far.
    pub fn cached_chords(&self) -> usize {
        self.chord_cache.len()
    }
}
