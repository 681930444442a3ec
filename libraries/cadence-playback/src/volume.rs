//! Volume control

/// Output volume (0-100) with a mute flag that preserves the level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    level: u8,
    muted: bool,
}

impl Volume {
    /// Create new volume controller; levels above 100 are clamped
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_level() {
        let mut volume = Volume::new(150);
        assert_eq!(volume.level(), 100);
        volume.set_level(255);
        assert_eq!(volume.level(), 100);
    }

    #[test]
    fn mute_preserves_level() {
        let mut volume = Volume::new(70);
        volume.toggle_mute();
        assert!(volume.is_muted());
        assert_eq!(volume.level(), 70);

        volume.toggle_mute();
        assert!(!volume.is_muted());
        assert_eq!(volume.level(), 70);
    }
}
