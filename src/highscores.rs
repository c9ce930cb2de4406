//! Best score tracking
//!
//! A single integer, persisted as a decimal string under one storage key.
//! Anything unreadable in storage counts as no score at all.

use serde::{Deserialize, Serialize};

use crate::platform::storage::{KeyValueStore, StorageError};

/// Best score ever achieved on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// Storage key (LocalStorage on web)
    pub const STORAGE_KEY: &'static str = "flappybird-highscore";

    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Offer a finished round's score; returns true if it is a new best
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Parse a stored value; non-numeric or negative input yields `None`
    pub fn parse(raw: &str) -> Option<u32> {
        raw.trim().parse::<u32>().ok()
    }

    /// Load from storage, falling back to 0
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Some(raw) => match Self::parse(&raw) {
                Some(best) => {
                    log::info!("Loaded high score {}", best);
                    Self::new(best)
                }
                None => {
                    log::warn!("Ignoring invalid stored high score {:?}", raw);
                    Self::default()
                }
            },
            None => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        store.set(Self::STORAGE_KEY, &self.best.to_string())?;
        log::info!("High score saved ({})", self.best);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;

    #[test]
    fn test_submit_only_increases() {
        let mut hs = HighScore::new(5);
        assert!(!hs.submit(3));
        assert!(!hs.submit(5));
        assert_eq!(hs.best(), 5);
        assert!(hs.submit(6));
        assert_eq!(hs.best(), 6);
    }

    #[test]
    fn test_zero_never_a_new_best() {
        let mut hs = HighScore::default();
        assert!(!hs.submit(0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(HighScore::parse("42"), Some(42));
        assert_eq!(HighScore::parse(" 7\n"), Some(7));
        assert_eq!(HighScore::parse("-3"), None);
        assert_eq!(HighScore::parse("abc"), None);
        assert_eq!(HighScore::parse("12abc"), None);
        assert_eq!(HighScore::parse(""), None);
        assert_eq!(HighScore::parse("99999999999"), None);
    }

    #[test]
    fn test_load_missing_or_invalid_is_zero() {
        let mut store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best(), 0);

        store
            .set(HighScore::STORAGE_KEY, "not a number")
            .expect("memory writes succeed");
        assert_eq!(HighScore::load(&store).best(), 0);

        store
            .set(HighScore::STORAGE_KEY, "-10")
            .expect("memory writes succeed");
        assert_eq!(HighScore::load(&store).best(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        HighScore::new(31).save(&mut store).expect("save succeeds");
        assert_eq!(store.get(HighScore::STORAGE_KEY).as_deref(), Some("31"));
        assert_eq!(HighScore::load(&store), HighScore::new(31));
    }
}
