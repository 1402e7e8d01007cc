// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, mode_config, template};
use chrono::Datelike;
use rand::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePuzzle {
    pub id: String,
    // the answer, e.g. "John 3:16".
    pub reference: String,
    pub full_text: String,
    pub hint: String,
    pub image_clues: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub difficulty: mode_config::Difficulty,
    pub puzzle_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPack {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub difficulty: mode_config::Difficulty,
    pub puzzles: Vec<ImagePuzzle>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParTimes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easy: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extreme: Option<u32>,
}

impl ParTimes {
    #[inline(always)]
    pub fn get(&self, mode: mode_config::Mode) -> Option<u32> {
        match mode {
            mode_config::Mode::Easy => self.easy,
            mode_config::Mode::Medium => self.medium,
            mode_config::Mode::Hard => self.hard,
            mode_config::Mode::Extreme => self.extreme,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPuzzle {
    pub id: String,
    pub reference: String,
    pub full_text: String,
    // contains one blank marker per missing word.
    pub blanked_text: String,
    pub missing_words: Vec<String>,
    #[serde(default)]
    pub distractor_words: Vec<String>,
    pub difficulty: mode_config::Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default)]
    pub par_times: ParTimes,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPack {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub difficulty: mode_config::Difficulty,
    pub puzzle_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDragPack {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub difficulty: mode_config::Difficulty,
    pub puzzles: Vec<DragPuzzle>,
}

pub trait Record: serde::de::DeserializeOwned {
    const DIR: &'static str;

    fn id(&self) -> &str;

    // what serde cannot check by shape alone.
    fn validate(&self) -> error::Returns<()>;
}

fn check_id(id: &str) -> error::Returns<()> {
    if id.trim().is_empty() {
        return_error!("empty id".into());
    }
    Ok(())
}

impl Record for ImagePuzzle {
    const DIR: &'static str = "puzzles";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> error::Returns<()> {
        check_id(&self.id)?;
        if self.image_clues.is_empty() {
            return_error!(format!("puzzle {} has no image clues", self.id));
        }
        Ok(())
    }
}

impl Record for Pack {
    const DIR: &'static str = "packs";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> error::Returns<()> {
        check_id(&self.id)?;
        if self.puzzle_ids.is_empty() {
            return_error!(format!("pack {} has no puzzles", self.id));
        }
        if self.difficulty == mode_config::Difficulty::Extreme {
            return_error!(format!("pack {} cannot be {}", self.id, self.difficulty));
        }
        Ok(())
    }
}

impl Record for DragPuzzle {
    const DIR: &'static str = "drag-puzzles";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> error::Returns<()> {
        check_id(&self.id)?;
        if self.missing_words.is_empty() {
            return_error!(format!("drag puzzle {} has no missing words", self.id));
        }
        let blanks = template::blank_count(&self.blanked_text);
        if blanks != self.missing_words.len() {
            return_error!(format!(
                "drag puzzle {} has {} blanks but {} missing words",
                self.id,
                blanks,
                self.missing_words.len()
            ));
        }
        // extreme mode blanks every word of the verse.
        if template::extract_all_words(&self.full_text).is_empty() {
            return_error!(format!("drag puzzle {} has no words in its text", self.id));
        }
        Ok(())
    }
}

impl Record for DragPack {
    const DIR: &'static str = "drag-packs";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> error::Returns<()> {
        check_id(&self.id)?;
        if self.puzzle_ids.is_empty() {
            return_error!(format!("drag pack {} has no puzzles", self.id));
        }
        Ok(())
    }
}

// "dd-2" < "dd-10". digit runs compare by value, the rest case-insensitively.
pub fn natural_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    fn chunks(s: &str) -> Vec<(bool, &str)> {
        let mut ret = Vec::new();
        let mut start = 0;
        let mut prev_digit = None;
        for (i, c) in s.char_indices() {
            let is_digit = c.is_ascii_digit();
            if prev_digit.is_some_and(|p| p != is_digit) {
                ret.push((prev_digit == Some(true), &s[start..i]));
                start = i;
            }
            prev_digit = Some(is_digit);
        }
        if start < s.len() {
            ret.push((prev_digit == Some(true), &s[start..]));
        }
        ret
    }
    let ca = chunks(a);
    let cb = chunks(b);
    for (&(da, xa), &(db, xb)) in ca.iter().zip(cb.iter()) {
        let ord = if da && db {
            let ta = xa.trim_start_matches('0');
            let tb = xb.trim_start_matches('0');
            ta.len().cmp(&tb.len()).then_with(|| ta.cmp(tb))
        } else {
            xa.to_lowercase().cmp(&xb.to_lowercase())
        };
        if ord.is_ne() {
            return ord;
        }
    }
    ca.len().cmp(&cb.len()).then_with(|| a.cmp(b))
}

#[inline(always)]
pub fn days_since_epoch(date: chrono::NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - 719_163
}

// the same record for everyone on the same day.
pub fn pick_daily<T>(mut records: Vec<T>, date: chrono::NaiveDate) -> Option<T> {
    if records.is_empty() {
        return None;
    }
    let idx = days_since_epoch(date).rem_euclid(records.len() as i64) as usize;
    Some(records.swap_remove(idx))
}

// falls back to the first record if excluding leaves nothing.
pub fn pick_random<T: Record, G: Rng + ?Sized>(
    mut records: Vec<T>,
    rng: &mut G,
    exclude_id: Option<&str>,
) -> Option<T> {
    if records.is_empty() {
        return None;
    }
    let candidates = (0..records.len())
        .filter(|&i| Some(records[i].id()) != exclude_id)
        .collect::<Vec<_>>();
    let idx = candidates.choose(rng).copied().unwrap_or(0);
    Some(records.swap_remove(idx))
}

// <root>/{puzzles,packs,drag-puzzles,drag-packs}/*.json. missing means not found.
pub struct ContentDir {
    root: PathBuf,
}

impl ContentDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline(always)]
    pub fn root(&self) -> &Path {
        &self.root
    }

    // (file name, path) of every json file, sorted by name.
    fn json_files(&self, dir: &str) -> error::Returns<Vec<(String, PathBuf)>> {
        let entries = match std::fs::read_dir(self.root.join(dir)) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut ret = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".json") && entry.file_type()?.is_file() {
                ret.push((name, entry.path()));
            }
        }
        ret.sort();
        Ok(ret)
    }

    fn load<T: Record>(path: &Path) -> error::Returns<T> {
        let record = serde_json::from_str::<T>(&std::fs::read_to_string(path)?)?;
        record.validate()?;
        Ok(record)
    }

    fn load_or_warn<T: Record>(path: &Path) -> Option<T> {
        match Self::load(path) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping malformed {}: {}", T::DIR, e);
                None
            }
        }
    }

    // <id>.json, or failing that the first <id>_*.json.
    pub fn get<T: Record>(&self, id: &str) -> error::Returns<Option<T>> {
        if id.is_empty() {
            return Ok(None);
        }
        let exact = format!("{}.json", id);
        let prefix = format!("{}_", id);
        let files = self.json_files(T::DIR)?;
        let found = files
            .iter()
            .find(|(name, _)| *name == exact)
            .or_else(|| files.iter().find(|(name, _)| name.starts_with(&prefix)));
        Ok(found.and_then(|(_, path)| Self::load_or_warn(path)))
    }

    pub fn all<T: Record>(&self) -> error::Returns<Vec<T>> {
        let mut ret = self
            .json_files(T::DIR)?
            .iter()
            .filter_map(|(_, path)| Self::load_or_warn::<T>(path))
            .collect::<Vec<_>>();
        ret.sort_by(|a, b| natural_cmp(a.id(), b.id()));
        Ok(ret)
    }

    fn resolve<T: Record>(&self, pack_id: &str, puzzle_ids: &[String]) -> error::Returns<Vec<T>> {
        let mut ret = Vec::with_capacity(puzzle_ids.len());
        for puzzle_id in puzzle_ids {
            match self.get::<T>(puzzle_id)? {
                Some(puzzle) => ret.push(puzzle),
                None => tracing::warn!(pack_id, puzzle_id = %puzzle_id, "puzzle not found for pack"),
            }
        }
        if ret.is_empty() {
            tracing::warn!(pack_id, "pack has no valid puzzles");
        }
        Ok(ret)
    }

    pub fn get_puzzle(&self, id: &str) -> error::Returns<Option<ImagePuzzle>> {
        self.get(id)
    }

    pub fn all_puzzles(&self) -> error::Returns<Vec<ImagePuzzle>> {
        self.all()
    }

    pub fn get_drag_puzzle(&self, id: &str) -> error::Returns<Option<DragPuzzle>> {
        self.get(id)
    }

    pub fn all_drag_puzzles(&self) -> error::Returns<Vec<DragPuzzle>> {
        self.all()
    }

    pub fn resolved_pack(&self, id: &str) -> error::Returns<Option<ResolvedPack>> {
        let Some(pack) = self.get::<Pack>(id)? else {
            return Ok(None);
        };
        let puzzles = self.resolve::<ImagePuzzle>(&pack.id, &pack.puzzle_ids)?;
        if puzzles.is_empty() {
            return Ok(None);
        }
        Ok(Some(ResolvedPack {
            id: pack.id,
            title: pack.title,
            description: pack.description,
            cover_image: pack.cover_image,
            difficulty: pack.difficulty,
            puzzles,
        }))
    }

    pub fn all_resolved_packs(&self) -> error::Returns<Vec<ResolvedPack>> {
        let mut ret = Vec::new();
        for pack in self.all::<Pack>()? {
            if let Some(resolved) = self.resolved_pack(&pack.id)? {
                ret.push(resolved);
            }
        }
        Ok(ret)
    }

    pub fn resolved_drag_pack(&self, id: &str) -> error::Returns<Option<ResolvedDragPack>> {
        let Some(pack) = self.get::<DragPack>(id)? else {
            return Ok(None);
        };
        let puzzles = self.resolve::<DragPuzzle>(&pack.id, &pack.puzzle_ids)?;
        if puzzles.is_empty() {
            return Ok(None);
        }
        Ok(Some(ResolvedDragPack {
            id: pack.id,
            title: pack.title,
            description: pack.description,
            cover_image: pack.cover_image,
            difficulty: pack.difficulty,
            puzzles,
        }))
    }

    pub fn all_resolved_drag_packs(&self) -> error::Returns<Vec<ResolvedDragPack>> {
        let mut ret = Vec::new();
        for pack in self.all::<DragPack>()? {
            if let Some(resolved) = self.resolved_drag_pack(&pack.id)? {
                ret.push(resolved);
            }
        }
        Ok(ret)
    }

    pub fn daily_puzzle(&self, date: chrono::NaiveDate) -> error::Returns<Option<ImagePuzzle>> {
        Ok(pick_daily(self.all_puzzles()?, date))
    }

    pub fn daily_drag_puzzle(&self, date: chrono::NaiveDate) -> error::Returns<Option<DragPuzzle>> {
        Ok(pick_daily(self.all_drag_puzzles()?, date))
    }

    pub fn random_puzzle<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
        exclude_id: Option<&str>,
    ) -> error::Returns<Option<ImagePuzzle>> {
        Ok(pick_random(self.all_puzzles()?, rng, exclude_id))
    }

    pub fn random_drag_puzzle<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
        exclude_id: Option<&str>,
    ) -> error::Returns<Option<DragPuzzle>> {
        Ok(pick_random(self.all_drag_puzzles()?, rng, exclude_id))
    }
}
