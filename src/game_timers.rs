// Copyright (C) 2020-2026 Andy Kurnia.

// milliseconds since the clock was started, for feeding drag-drop games.
pub struct GameClock {
    instant: std::time::Instant,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            instant: std::time::Instant::now(),
        }
    }

    pub fn reset(&mut self) {
        self.instant = std::time::Instant::now();
    }

    #[inline(always)]
    pub fn now_ms(&self) -> u64 {
        self.now_ms_as_at(std::time::Instant::now())
    }

    pub fn now_ms_as_at(&self, instant: std::time::Instant) -> u64 {
        instant.saturating_duration_since(self.instant).as_millis() as u64
    }
}
