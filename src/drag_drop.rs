// Copyright (C) 2020-2026 Andy Kurnia.

use super::{content, error, mode_config, progress, scoring, template};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotFeedback {
    Correct,
    Wrong,
    Pending,
    Hidden,
}

// what happened to one placement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    // locked, no such slot, or the word is not in the bank.
    Ignored,
    // kept in the slot without grading.
    Placed,
    Correct,
    // graded wrong at once and sent back to the bank.
    Bounced,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragDropGameState {
    pub placements: Vec<Option<String>>,
    pub available_words: Vec<String>,
    pub slot_feedback: Vec<SlotFeedback>,
    pub has_submitted: bool,
    pub is_complete: bool,
    pub is_correct: bool,
    // milliseconds, on the caller's clock.
    pub start_time: u64,
    // whole seconds.
    pub elapsed_time: u64,
    pub total_drops: u32,
    pub correct_drops: u32,
    pub hints_used: u32,
    pub hints_remaining: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragDropGameResult {
    pub puzzle_id: String,
    pub mode: mode_config::Mode,
    pub is_correct: bool,
    pub time_seconds: u64,
    pub accuracy: f64,
    pub hints_used: u32,
    pub final_score: u32,
    pub is_new_best: bool,
    pub unlocked_next_mode: bool,
}

// elapsed_time only moves on tick, and stops once complete.
pub struct DragDropGame<'a> {
    puzzle: &'a content::DragPuzzle,
    mode: mode_config::Mode,
    expected_words: Vec<String>,
    word_pool: Vec<String>,
    state: DragDropGameState,
}

impl<'a> DragDropGame<'a> {
    pub fn new(
        puzzle: &'a content::DragPuzzle,
        mode: mode_config::Mode,
        rng: &mut dyn RngCore,
        now_ms: u64,
    ) -> Self {
        let (expected_words, word_pool, blank_count) = if mode.config().blanks_whole_verse() {
            let words = template::extract_all_words(&puzzle.full_text);
            let len = words.len();
            (words.clone(), words, len)
        } else {
            let mut pool = puzzle.missing_words.clone();
            pool.extend_from_slice(&puzzle.distractor_words);
            (
                puzzle.missing_words.clone(),
                pool,
                template::blank_count(&puzzle.blanked_text),
            )
        };
        let state = Self::initial_state(mode, &word_pool, blank_count, rng, now_ms);
        tracing::debug!(puzzle_id = %puzzle.id, %mode, blank_count, "new drag-drop game");
        Self {
            puzzle,
            mode,
            expected_words,
            word_pool,
            state,
        }
    }

    fn initial_state(
        mode: mode_config::Mode,
        word_pool: &[String],
        blank_count: usize,
        rng: &mut dyn RngCore,
        now_ms: u64,
    ) -> DragDropGameState {
        DragDropGameState {
            placements: vec![None; blank_count],
            available_words: template::shuffled(word_pool, rng),
            slot_feedback: vec![SlotFeedback::Pending; blank_count],
            has_submitted: false,
            is_complete: false,
            is_correct: false,
            start_time: now_ms,
            elapsed_time: 0,
            total_drops: 0,
            correct_drops: 0,
            hints_used: 0,
            hints_remaining: scoring::hint_allowance(mode),
        }
    }

    #[inline(always)]
    pub fn puzzle(&self) -> &'a content::DragPuzzle {
        self.puzzle
    }

    #[inline(always)]
    pub fn mode(&self) -> mode_config::Mode {
        self.mode
    }

    #[inline(always)]
    pub fn state(&self) -> &DragDropGameState {
        &self.state
    }

    #[inline(always)]
    pub fn expected_words(&self) -> &[String] {
        &self.expected_words
    }

    #[inline(always)]
    pub fn blank_count(&self) -> usize {
        self.state.placements.len()
    }

    #[inline(always)]
    fn is_locked(&self) -> bool {
        self.state.is_complete || self.state.has_submitted
    }

    #[inline(always)]
    fn is_expected(&self, slot: usize, word: &str) -> bool {
        self.expected_words.get(slot).is_some_and(|w| w == word)
    }

    fn all_correct(&self) -> bool {
        self.state
            .placements
            .iter()
            .enumerate()
            .all(|(slot, p)| p.as_deref().is_some_and(|word| self.is_expected(slot, word)))
    }

    // takes one instance out of the bank.
    fn take_from_bank(&mut self, word: &str) -> bool {
        match self.state.available_words.iter().position(|w| w == word) {
            Some(idx) => {
                self.state.available_words.remove(idx);
                true
            }
            None => false,
        }
    }

    fn complete_if_all_correct(&mut self) {
        if self.all_correct() {
            self.state.is_complete = true;
            self.state.is_correct = true;
            tracing::debug!(puzzle_id = %self.puzzle.id, mode = %self.mode, "all slots correct");
        }
    }

    pub fn is_all_filled(&self) -> bool {
        self.state.placements.iter().all(Option::is_some)
    }

    pub fn can_submit(&self) -> bool {
        !self.mode.config().has_instant_feedback()
            && self.blank_count() > 0
            && self.is_all_filled()
            && !self.state.has_submitted
    }

    // hints count as correct drops without counting as drops, hence the clamp.
    pub fn accuracy(&self) -> f64 {
        if self.state.total_drops == 0 {
            0.0
        } else {
            (self.state.correct_drops as f64 / self.state.total_drops as f64).min(1.0)
        }
    }

    pub fn place_word(&mut self, slot: usize, word: &str) -> Placement {
        if self.is_locked() || slot >= self.blank_count() || !self.take_from_bank(word) {
            return Placement::Ignored;
        }
        if let Some(existing) = self.state.placements[slot].take() {
            self.state.available_words.push(existing);
        }
        self.state.total_drops += 1;
        let is_correct = self.is_expected(slot, word);
        if is_correct {
            self.state.correct_drops += 1;
        }
        if !self.mode.config().has_instant_feedback() {
            self.state.placements[slot] = Some(word.to_string());
            self.state.slot_feedback[slot] = SlotFeedback::Hidden;
            return Placement::Placed;
        }
        if is_correct {
            self.state.placements[slot] = Some(word.to_string());
            self.state.slot_feedback[slot] = SlotFeedback::Correct;
            self.complete_if_all_correct();
            Placement::Correct
        } else {
            self.state.available_words.push(word.to_string());
            self.state.slot_feedback[slot] = SlotFeedback::Pending;
            Placement::Bounced
        }
    }

    // returns the word sent back to the bank.
    pub fn remove_word(&mut self, slot: usize) -> Option<String> {
        if self.is_locked() {
            return None;
        }
        let word = self.state.placements.get_mut(slot)?.take()?;
        self.state.available_words.push(word.clone());
        self.state.slot_feedback[slot] = SlotFeedback::Pending;
        Some(word)
    }

    // deferred modes only. ends the game, right or wrong.
    pub fn submit_answer(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        for slot in 0..self.blank_count() {
            let is_correct = self.state.placements[slot]
                .as_deref()
                .is_some_and(|word| self.is_expected(slot, word));
            self.state.slot_feedback[slot] = if is_correct {
                SlotFeedback::Correct
            } else {
                SlotFeedback::Wrong
            };
        }
        self.state.is_correct = self
            .state
            .slot_feedback
            .iter()
            .all(|&f| f == SlotFeedback::Correct);
        self.state.has_submitted = true;
        self.state.is_complete = true;
        tracing::debug!(
            puzzle_id = %self.puzzle.id,
            mode = %self.mode,
            is_correct = self.state.is_correct,
            "answer submitted"
        );
        true
    }

    // fills the first empty or wrong slot. returns that slot.
    pub fn use_hint(&mut self) -> Option<usize> {
        if self.state.hints_remaining == 0 || self.is_locked() {
            return None;
        }
        let slot = (0..self.blank_count()).find(|&slot| {
            self.state.placements[slot].is_none()
                || self.state.slot_feedback[slot] == SlotFeedback::Wrong
        })?;
        let word = self.expected_words.get(slot)?.clone();
        self.take_from_bank(&word);
        if let Some(existing) = self.state.placements[slot].replace(word) {
            self.state.available_words.push(existing);
        }
        self.state.slot_feedback[slot] = SlotFeedback::Correct;
        self.state.hints_remaining -= 1;
        self.state.hints_used += 1;
        self.state.correct_drops += 1;
        if self.mode.config().has_instant_feedback() {
            self.complete_if_all_correct();
        }
        Some(slot)
    }

    // discards everything, including the clock.
    pub fn reset(&mut self, rng: &mut dyn RngCore, now_ms: u64) {
        self.state = Self::initial_state(
            self.mode,
            &self.word_pool,
            self.state.placements.len(),
            rng,
            now_ms,
        );
    }

    pub fn tick(&mut self, now_ms: u64) -> u64 {
        if !self.state.is_complete {
            self.state.elapsed_time = now_ms.saturating_sub(self.state.start_time) / 1000;
        }
        self.state.elapsed_time
    }

    // the template with current placements. whole-verse mode has no template.
    pub fn render(&self) -> String {
        if self.mode.config().blanks_whole_verse() {
            let words = self
                .state
                .placements
                .iter()
                .enumerate()
                .map(|(idx, p)| match p {
                    Some(word) => format!("[{}]", word),
                    None => format!("[{}:____]", idx + 1),
                })
                .collect::<Vec<_>>();
            words.join(" ")
        } else {
            template::render(&self.puzzle.blanked_text, &self.state.placements)
        }
    }

    // only correct games are saved.
    pub fn finish<S: progress::ProgressStorage>(
        &self,
        store: &mut progress::ProgressStore<S>,
    ) -> error::Returns<DragDropGameResult> {
        if !self.state.is_complete {
            return_error!(format!("puzzle {} is not complete", self.puzzle.id));
        }
        let accuracy = self.accuracy();
        let score = scoring::calculate_score(
            self.mode,
            self.state.elapsed_time,
            accuracy,
            self.state.hints_used,
            self.puzzle.par_times.get(self.mode),
        );
        let mut result = DragDropGameResult {
            puzzle_id: self.puzzle.id.clone(),
            mode: self.mode,
            is_correct: self.state.is_correct,
            time_seconds: self.state.elapsed_time,
            accuracy,
            hints_used: self.state.hints_used,
            final_score: if self.state.is_correct { score } else { 0 },
            is_new_best: false,
            unlocked_next_mode: false,
        };
        if result.is_correct {
            let before = store.get_puzzle_progress(&self.puzzle.id);
            let previous_best = before
                .as_ref()
                .and_then(|p| p.modes.get(self.mode).best_score);
            let updated = store.save_puzzle_result(&result)?;
            result.is_new_best = previous_best.is_none_or(|best| result.final_score > best);
            result.unlocked_next_mode = scoring::next_mode(self.mode).is_some_and(|next| {
                !scoring::is_mode_unlocked(before.as_ref(), next)
                    && scoring::is_mode_unlocked(Some(&updated), next)
            });
        }
        tracing::debug!(
            puzzle_id = %result.puzzle_id,
            mode = %result.mode,
            final_score = result.final_score,
            is_new_best = result.is_new_best,
            unlocked_next_mode = result.unlocked_next_mode,
            "game finished"
        );
        Ok(result)
    }
}
