// Copyright (C) 2020-2026 Andy Kurnia.

use super::{drag_drop, error, fash, mode_config};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

pub const STORAGE_KEY: &str = "vega-drag-drop-progress";
pub const CURRENT_VERSION: u32 = 1;

pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleModeProgress {
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModeTable {
    pub easy: PuzzleModeProgress,
    pub medium: PuzzleModeProgress,
    pub hard: PuzzleModeProgress,
    pub extreme: PuzzleModeProgress,
}

impl ModeTable {
    #[inline(always)]
    pub fn get(&self, mode: mode_config::Mode) -> &PuzzleModeProgress {
        match mode {
            mode_config::Mode::Easy => &self.easy,
            mode_config::Mode::Medium => &self.medium,
            mode_config::Mode::Hard => &self.hard,
            mode_config::Mode::Extreme => &self.extreme,
        }
    }

    #[inline(always)]
    pub fn get_mut(&mut self, mode: mode_config::Mode) -> &mut PuzzleModeProgress {
        match mode {
            mode_config::Mode::Easy => &mut self.easy,
            mode_config::Mode::Medium => &mut self.medium,
            mode_config::Mode::Hard => &mut self.hard,
            mode_config::Mode::Extreme => &mut self.extreme,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleProgress {
    pub puzzle_id: String,
    pub modes: ModeTable,
}

impl PuzzleProgress {
    pub fn new(puzzle_id: impl Into<String>) -> Self {
        Self {
            puzzle_id: puzzle_id.into(),
            modes: ModeTable::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_puzzles_completed: u32,
    pub total_score: u64,
    pub easy_completed: u32,
    pub medium_completed: u32,
    pub hard_completed: u32,
    pub extreme_completed: u32,
}

impl ProgressStats {
    #[inline(always)]
    pub fn completed(&self, mode: mode_config::Mode) -> u32 {
        match mode {
            mode_config::Mode::Easy => self.easy_completed,
            mode_config::Mode::Medium => self.medium_completed,
            mode_config::Mode::Hard => self.hard_completed,
            mode_config::Mode::Extreme => self.extreme_completed,
        }
    }

    #[inline(always)]
    fn completed_mut(&mut self, mode: mode_config::Mode) -> &mut u32 {
        match mode {
            mode_config::Mode::Easy => &mut self.easy_completed,
            mode_config::Mode::Medium => &mut self.medium_completed,
            mode_config::Mode::Hard => &mut self.hard_completed,
            mode_config::Mode::Extreme => &mut self.extreme_completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgress {
    pub version: u32,
    pub puzzles: BTreeMap<String, PuzzleProgress>,
    pub stats: ProgressStats,
    pub last_updated: String,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            puzzles: BTreeMap::new(),
            stats: ProgressStats::default(),
            last_updated: now_rfc3339(),
        }
    }
}

impl PlayerProgress {
    // shape is already enforced by serde. this checks what it cannot.
    pub fn validate(&self) -> error::Returns<()> {
        if self.version == 0 || self.version > CURRENT_VERSION {
            return_error!(format!("unsupported progress version {}", self.version));
        }
        for (key, puzzle) in &self.puzzles {
            if *key != puzzle.puzzle_id {
                return_error!(format!(
                    "progress entry {:?} holds puzzle {:?}",
                    key, puzzle.puzzle_id
                ));
            }
        }
        Ok(())
    }
}

// raw blobs by key.
pub trait ProgressStorage {
    fn read(&self, key: &str) -> error::Returns<Option<String>>;
    fn write(&mut self, key: &str, blob: &str) -> error::Returns<()>;
    fn remove(&mut self, key: &str) -> error::Returns<()>;
}

impl<T: ProgressStorage + ?Sized> ProgressStorage for Box<T> {
    fn read(&self, key: &str) -> error::Returns<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, blob: &str) -> error::Returns<()> {
        (**self).write(key, blob)
    }

    fn remove(&mut self, key: &str) -> error::Returns<()> {
        (**self).remove(key)
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: fash::MyHashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStorage for MemoryStorage {
    fn read(&self, key: &str) -> error::Returns<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> error::Returns<()> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> error::Returns<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// one <key>.json per key.
pub struct FileStorage {
    dir: std::path::PathBuf,
}

impl FileStorage {
    pub fn open(dir: impl Into<std::path::PathBuf>) -> error::Returns<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[inline(always)]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> error::Returns<std::path::PathBuf> {
        if key.is_empty()
            || !key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return_error!(format!("invalid storage key {:?}", key));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl ProgressStorage for FileStorage {
    fn read(&self, key: &str) -> error::Returns<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)?) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // write then rename, so a crash never leaves half a blob behind.
    fn write(&mut self, key: &str, blob: &str) -> error::Returns<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, blob)?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> error::Returns<()> {
        match std::fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

pub struct ProgressStore<S: ProgressStorage> {
    storage: S,
    key: String,
}

pub type SharedProgressStore<S> = Arc<Mutex<ProgressStore<S>>>;

impl<S: ProgressStorage> ProgressStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn into_shared(self) -> SharedProgressStore<S> {
        Arc::new(Mutex::new(self))
    }

    #[inline(always)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // anything unusable in storage reads as a fresh default.
    pub fn get_progress(&self) -> PlayerProgress {
        let blob = match self.storage.read(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return PlayerProgress::default(),
            Err(e) => {
                tracing::warn!(key = %self.key, "cannot read progress, starting fresh: {}", e);
                return PlayerProgress::default();
            }
        };
        let progress = match serde_json::from_str::<PlayerProgress>(&blob) {
            Ok(progress) => progress,
            Err(e) => {
                tracing::warn!(key = %self.key, "invalid progress data, resetting: {}", e);
                return PlayerProgress::default();
            }
        };
        if let Err(e) = progress.validate() {
            tracing::warn!(key = %self.key, "invalid progress data, resetting: {}", e);
            return PlayerProgress::default();
        }
        progress
    }

    pub fn save_progress(&mut self, progress: &mut PlayerProgress) -> error::Returns<()> {
        progress.last_updated = now_rfc3339();
        let blob = serde_json::to_string(progress)?;
        self.storage.write(&self.key, &blob)
    }

    pub fn get_puzzle_progress(&self, puzzle_id: &str) -> Option<PuzzleProgress> {
        self.get_progress().puzzles.remove(puzzle_id)
    }

    // counters and total move only on the first completion of a mode.
    // incorrect attempts just create the entry.
    pub fn save_puzzle_result(
        &mut self,
        result: &drag_drop::DragDropGameResult,
    ) -> error::Returns<PuzzleProgress> {
        let mut progress = self.get_progress();
        let puzzle_progress = progress
            .puzzles
            .entry(result.puzzle_id.clone())
            .or_insert_with(|| PuzzleProgress::new(result.puzzle_id.clone()));
        let mode_progress = puzzle_progress.modes.get_mut(result.mode);
        let was_completed = mode_progress.completed;
        if result.is_correct {
            mode_progress.completed = true;
            mode_progress.completed_at = Some(now_rfc3339());
            if mode_progress
                .best_score
                .is_none_or(|best| result.final_score > best)
            {
                mode_progress.best_score = Some(result.final_score);
            }
            if mode_progress
                .best_time
                .is_none_or(|best| result.time_seconds < best)
            {
                mode_progress.best_time = Some(result.time_seconds);
            }
            if !was_completed {
                progress.stats.total_puzzles_completed += 1;
                *progress.stats.completed_mut(result.mode) += 1;
                progress.stats.total_score += result.final_score as u64;
            }
        }
        let updated = puzzle_progress.clone();
        self.save_progress(&mut progress)?;
        tracing::debug!(
            puzzle_id = %result.puzzle_id,
            mode = %result.mode,
            is_correct = result.is_correct,
            first_completion = result.is_correct && !was_completed,
            "saved puzzle result"
        );
        Ok(updated)
    }

    pub fn clear_progress(&mut self) -> error::Returns<()> {
        self.storage.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mode_config::Mode;

    fn result(puzzle_id: &str, mode: Mode, is_correct: bool, score: u32, time: u64) -> drag_drop::DragDropGameResult {
        drag_drop::DragDropGameResult {
            puzzle_id: puzzle_id.to_string(),
            mode,
            is_correct,
            time_seconds: time,
            accuracy: 1.0,
            hints_used: 0,
            final_score: if is_correct { score } else { 0 },
            is_new_best: false,
            unlocked_next_mode: false,
        }
    }

    #[test]
    fn empty_storage_reads_default() {
        let store = ProgressStore::new(MemoryStorage::new());
        let progress = store.get_progress();
        assert_eq!(progress.version, CURRENT_VERSION);
        assert!(progress.puzzles.is_empty());
        assert_eq!(progress.stats, ProgressStats::default());
        assert!(store.get_puzzle_progress("dd-001").is_none());
    }

    #[test]
    fn first_completion_counts_once() {
        let mut store = ProgressStore::new(MemoryStorage::new());
        let p = store
            .save_puzzle_result(&result("dd-001", Mode::Easy, true, 550, 20))
            .unwrap();
        assert!(p.modes.easy.completed);
        assert_eq!(p.modes.easy.best_score, Some(550));
        assert_eq!(p.modes.easy.best_time, Some(20));
        assert!(p.modes.easy.completed_at.is_some());
        assert!(!p.modes.medium.completed);

        // worse score, better time.
        let p = store
            .save_puzzle_result(&result("dd-001", Mode::Easy, true, 500, 15))
            .unwrap();
        assert_eq!(p.modes.easy.best_score, Some(550));
        assert_eq!(p.modes.easy.best_time, Some(15));

        // better score, worse time.
        let p = store
            .save_puzzle_result(&result("dd-001", Mode::Easy, true, 600, 40))
            .unwrap();
        assert_eq!(p.modes.easy.best_score, Some(600));
        assert_eq!(p.modes.easy.best_time, Some(15));

        let stats = store.get_progress().stats;
        assert_eq!(stats.total_puzzles_completed, 1);
        assert_eq!(stats.easy_completed, 1);
        assert_eq!(stats.total_score, 550);
        assert_eq!(stats.completed(Mode::Medium), 0);
    }

    #[test]
    fn incorrect_result_creates_entry_only() {
        let mut store = ProgressStore::new(MemoryStorage::new());
        let p = store
            .save_puzzle_result(&result("dd-002", Mode::Hard, false, 0, 90))
            .unwrap();
        assert_eq!(p, PuzzleProgress::new("dd-002"));
        let progress = store.get_progress();
        assert!(progress.puzzles.contains_key("dd-002"));
        assert_eq!(progress.stats, ProgressStats::default());
    }

    #[test]
    fn modes_and_puzzles_accumulate() {
        let mut store = ProgressStore::new(MemoryStorage::new());
        store
            .save_puzzle_result(&result("dd-001", Mode::Easy, true, 550, 20))
            .unwrap();
        store
            .save_puzzle_result(&result("dd-001", Mode::Medium, true, 800, 30))
            .unwrap();
        store
            .save_puzzle_result(&result("dd-003", Mode::Easy, true, 500, 31))
            .unwrap();
        let stats = store.get_progress().stats;
        assert_eq!(stats.total_puzzles_completed, 3);
        assert_eq!(stats.easy_completed, 2);
        assert_eq!(stats.medium_completed, 1);
        assert_eq!(stats.total_score, 1850);
    }

    #[test]
    fn json_shape_is_camel_case() {
        let mut store = ProgressStore::new(MemoryStorage::new());
        store
            .save_puzzle_result(&result("dd-001", Mode::Easy, true, 550, 20))
            .unwrap();
        let blob = store.storage().read(STORAGE_KEY).unwrap().unwrap();
        let v: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(v["version"], 1);
        assert_eq!(v["stats"]["totalPuzzlesCompleted"], 1);
        assert_eq!(v["stats"]["easyCompleted"], 1);
        assert_eq!(v["puzzles"]["dd-001"]["puzzleId"], "dd-001");
        assert_eq!(v["puzzles"]["dd-001"]["modes"]["easy"]["bestScore"], 550);
        assert_eq!(v["puzzles"]["dd-001"]["modes"]["hard"]["completed"], false);
        assert!(v["puzzles"]["dd-001"]["modes"]["hard"].get("bestScore").is_none());
        assert!(v["lastUpdated"].is_string());
    }

    #[test]
    fn corrupt_blobs_read_as_default_and_get_overwritten() {
        for blob in [
            "not json",
            "{}",
            r#"{"version":1,"puzzles":{},"stats":{},"lastUpdated":"x"}"#,
            r#"{"version":2,"puzzles":{},"stats":{"totalPuzzlesCompleted":0,"totalScore":0,"easyCompleted":0,"mediumCompleted":0,"hardCompleted":0,"extremeCompleted":0},"lastUpdated":"x"}"#,
            r#"{"version":1,"puzzles":{"a":{"puzzleId":"b","modes":{"easy":{"completed":true},"medium":{"completed":false},"hard":{"completed":false},"extreme":{"completed":false}}}},"stats":{"totalPuzzlesCompleted":1,"totalScore":0,"easyCompleted":1,"mediumCompleted":0,"hardCompleted":0,"extremeCompleted":0},"lastUpdated":"x"}"#,
        ] {
            let mut storage = MemoryStorage::new();
            storage.write(STORAGE_KEY, blob).unwrap();
            let mut store = ProgressStore::new(storage);
            let progress = store.get_progress();
            assert!(progress.puzzles.is_empty(), "{}", blob);
            assert_eq!(progress.stats, ProgressStats::default(), "{}", blob);
            store
                .save_puzzle_result(&result("dd-001", Mode::Easy, true, 550, 20))
                .unwrap();
            assert_eq!(store.get_progress().stats.total_score, 550, "{}", blob);
        }
    }

    #[test]
    fn valid_blob_survives_round_trip() {
        let blob = r#"{"version":1,"puzzles":{"dd-009":{"puzzleId":"dd-009","modes":{"easy":{"completed":true,"bestScore":600,"bestTime":12},"medium":{"completed":false},"hard":{"completed":false},"extreme":{"completed":false}}}},"stats":{"totalPuzzlesCompleted":1,"totalScore":600,"easyCompleted":1,"mediumCompleted":0,"hardCompleted":0,"extremeCompleted":0},"lastUpdated":"2026-01-01T00:00:00.000Z"}"#;
        let mut storage = MemoryStorage::new();
        storage.write(STORAGE_KEY, blob).unwrap();
        let store = ProgressStore::new(storage);
        let p = store.get_puzzle_progress("dd-009").unwrap();
        assert_eq!(p.modes.easy.best_score, Some(600));
        assert_eq!(p.modes.easy.best_time, Some(12));
        assert_eq!(store.get_progress().stats.total_score, 600);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut store = ProgressStore::new(MemoryStorage::new());
        store
            .save_puzzle_result(&result("dd-001", Mode::Easy, true, 550, 20))
            .unwrap();
        store.clear_progress().unwrap();
        assert!(store.get_puzzle_progress("dd-001").is_none());
        store.clear_progress().unwrap();
    }

    #[test]
    fn boxed_storage_works() {
        let storage: Box<dyn ProgressStorage> = Box::new(MemoryStorage::new());
        let mut store = ProgressStore::new(storage);
        store
            .save_puzzle_result(&result("dd-001", Mode::Easy, true, 550, 20))
            .unwrap();
        assert!(store.get_puzzle_progress("dd-001").is_some());
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = ProgressStore::new(FileStorage::open(dir.path()).unwrap());
            store
                .save_puzzle_result(&result("dd-001", Mode::Easy, true, 550, 20))
                .unwrap();
        }
        assert!(dir.path().join(format!("{}.json", STORAGE_KEY)).exists());
        let mut store = ProgressStore::new(FileStorage::open(dir.path()).unwrap());
        assert_eq!(store.get_progress().stats.total_score, 550);
        store.clear_progress().unwrap();
        assert!(!dir.path().join(format!("{}.json", STORAGE_KEY)).exists());
        assert!(store.get_puzzle_progress("dd-001").is_none());
    }

    #[test]
    fn file_storage_rejects_odd_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path().join("nested")).unwrap();
        assert!(storage.write("../escape", "{}").is_err());
        assert!(storage.read("").is_err());
        assert_eq!(storage.read("absent").unwrap(), None);
    }

    #[test]
    fn shared_store_serializes_updates() {
        let shared = ProgressStore::new(MemoryStorage::new()).into_shared();
        let handles = (0..8)
            .map(|i| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    for mode in Mode::ALL {
                        let r = result(&format!("dd-{:03}", i), mode, true, 100, 10);
                        shared.lock().unwrap().save_puzzle_result(&r).unwrap();
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }
        let progress = shared.lock().unwrap().get_progress();
        assert_eq!(progress.puzzles.len(), 8);
        assert_eq!(progress.stats.total_puzzles_completed, 32);
        assert_eq!(progress.stats.extreme_completed, 8);
        assert_eq!(progress.stats.total_score, 3200);
    }
}
