//! Ringpuffer der zuletzt ausgeführten App-Commands (Diagnose, Tests).

use super::AppCommand;
use std::collections::VecDeque;

/// Anzahl Commands, die höchstens vorgehalten werden.
const CAPACITY: usize = 512;

/// Zuletzt ausgeführte Commands, ältester zuerst.
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
}

impl CommandLog {
    /// Erstellt ein leeres Log.
    pub fn new() -> Self {
        Self {
            recent: VecDeque::with_capacity(CAPACITY),
        }
    }

    /// Hängt einen Command an; bei vollem Puffer fällt der älteste heraus.
    pub fn record(&mut self, command: AppCommand) {
        if self.recent.len() == CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }

    /// Alle vorgehaltenen Commands, ältester zuerst
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.recent.iter()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}
