//! Mutable state shared by every command during one run

use chrono::{Local, NaiveDateTime};

use crate::config::Settings;
use crate::storage::Storage;

/// Storage, settings and the "keep running" flag for the command loop
#[derive(Debug)]
pub struct Session {
    pub storage: Storage,
    pub settings: Settings,
    running: bool,
}

impl Session {
    /// Start a session with empty storage
    pub fn new(settings: Settings) -> Self {
        Self {
            storage: Storage::new(),
            settings,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the command loop to stop after the current command
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Timestamp used when a transaction is added without `d/`
    pub fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
