// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bible, comparison, content};

pub const MIN_ATTEMPTS: usize = 7;
pub const EXTRA_ATTEMPTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Playing,
    Solved,
    Failed,
}

// every wrong guess reveals the next clue, if any.
pub struct GuessSession<'a> {
    puzzle: content::ImagePuzzle,
    stage: usize,
    attempts: usize,
    outcome: Outcome,
    // oldest first.
    history: Vec<comparison::ComparisonResult<'a>>,
}

impl<'a> GuessSession<'a> {
    pub fn new(puzzle: content::ImagePuzzle) -> Self {
        Self {
            puzzle,
            stage: 0,
            attempts: 0,
            outcome: Outcome::Playing,
            history: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn puzzle(&self) -> &content::ImagePuzzle {
        &self.puzzle
    }

    #[inline(always)]
    pub fn stage(&self) -> usize {
        self.stage
    }

    #[inline(always)]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    #[inline(always)]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline(always)]
    pub fn total_stages(&self) -> usize {
        self.puzzle.image_clues.len()
    }

    #[inline(always)]
    pub fn max_attempts(&self) -> usize {
        (self.total_stages() + EXTRA_ATTEMPTS).max(MIN_ATTEMPTS)
    }

    #[inline(always)]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts().saturating_sub(self.attempts)
    }

    pub fn current_clue(&self) -> Option<&str> {
        let clues = &self.puzzle.image_clues;
        clues
            .get(self.stage.min(clues.len().saturating_sub(1)))
            .map(String::as_str)
    }

    // the text hint shows from the halfway stage on.
    #[inline(always)]
    pub fn hint_visible(&self) -> bool {
        self.stage >= self.total_stages() / 2
    }

    pub fn history(&self) -> &[comparison::ComparisonResult<'a>] {
        &self.history
    }

    pub fn history_recent_first(&self) -> impl Iterator<Item = &comparison::ComparisonResult<'a>> {
        self.history.iter().rev()
    }

    pub fn last_guess(&self) -> Option<&comparison::ComparisonResult<'a>> {
        self.history.last()
    }

    // None once over.
    pub fn guess(
        &mut self,
        bible: &bible::Bible<'a>,
        text: &str,
    ) -> Option<&comparison::ComparisonResult<'a>> {
        if self.outcome != Outcome::Playing {
            return None;
        }
        self.attempts += 1;
        let result = comparison::compare(bible, text, &self.puzzle.reference);
        if result.is_correct() {
            self.outcome = Outcome::Solved;
        } else {
            if self.stage + 1 < self.total_stages() {
                self.stage += 1;
            }
            if self.attempts >= self.max_attempts() {
                self.outcome = Outcome::Failed;
            }
        }
        tracing::debug!(
            puzzle_id = %self.puzzle.id,
            attempts = self.attempts,
            stage = self.stage,
            outcome = ?self.outcome,
            "guess graded"
        );
        self.history.push(result);
        self.history.last()
    }

    pub fn reset(&mut self) {
        self.stage = 0;
        self.attempts = 0;
        self.outcome = Outcome::Playing;
        self.history.clear();
    }
}

// a resolved pack played in order. score counts solved puzzles.
pub struct PackSession<'a> {
    pack: content::ResolvedPack,
    index: usize,
    current: GuessSession<'a>,
    score: usize,
    // attempts on puzzles already left behind.
    past_attempts: usize,
    solved_ids: Vec<String>,
    skipped: usize,
    finished: bool,
}

impl<'a> PackSession<'a> {
    // starts at start_id when the pack has it, else at the first puzzle.
    // None for a pack with no puzzles.
    pub fn new(pack: content::ResolvedPack, start_id: Option<&str>) -> Option<Self> {
        let index = start_id
            .and_then(|id| pack.puzzles.iter().position(|p| p.id == id))
            .unwrap_or(0);
        let current = GuessSession::new(pack.puzzles.get(index)?.clone());
        Some(Self {
            pack,
            index,
            current,
            score: 0,
            past_attempts: 0,
            solved_ids: Vec::new(),
            skipped: 0,
            finished: false,
        })
    }

    #[inline(always)]
    pub fn pack(&self) -> &content::ResolvedPack {
        &self.pack
    }

    #[inline(always)]
    pub fn current(&self) -> &GuessSession<'a> {
        &self.current
    }

    // zero-based.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn total_puzzles(&self) -> usize {
        self.pack.puzzles.len()
    }

    #[inline(always)]
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn attempts(&self) -> usize {
        self.past_attempts + self.current.attempts()
    }

    pub fn solved_ids(&self) -> &[String] {
        &self.solved_ids
    }

    #[inline(always)]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    // solved puzzles per attempt, 0 before any attempt.
    pub fn accuracy(&self) -> f64 {
        match self.attempts() {
            0 => 0.0,
            attempts => self.score as f64 / attempts as f64,
        }
    }

    #[inline(always)]
    fn is_last(&self) -> bool {
        self.index + 1 >= self.total_puzzles()
    }

    pub fn is_game_over(&self) -> bool {
        self.finished || (self.is_last() && self.current.outcome() != Outcome::Playing)
    }

    pub fn guess(
        &mut self,
        bible: &bible::Bible<'a>,
        text: &str,
    ) -> Option<&comparison::ComparisonResult<'a>> {
        if self.finished {
            return None;
        }
        self.current.guess(bible, text)?;
        if self.current.outcome() == Outcome::Solved {
            self.score += 1;
            self.solved_ids.push(self.current.puzzle().id.clone());
        }
        self.current.last_guess()
    }

    fn advance(&mut self) -> bool {
        if self.is_last() {
            self.finished = true;
            return false;
        }
        self.past_attempts += self.current.attempts();
        self.index += 1;
        self.current = GuessSession::new(self.pack.puzzles[self.index].clone());
        true
    }

    // moves on once the current puzzle is over. false at the end of the pack.
    pub fn next(&mut self) -> bool {
        if self.finished || self.current.outcome() == Outcome::Playing {
            return false;
        }
        self.advance()
    }

    // gives up on the current puzzle. false at the end of the pack.
    pub fn skip(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if self.current.outcome() == Outcome::Playing {
            self.skipped += 1;
        }
        self.advance()
    }

    // back to the first puzzle with nothing scored.
    pub fn reset(&mut self) {
        self.index = 0;
        self.current = GuessSession::new(self.pack.puzzles[0].clone());
        self.score = 0;
        self.past_attempts = 0;
        self.solved_ids.clear();
        self.skipped = 0;
        self.finished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(clues: usize) -> content::ImagePuzzle {
        content::ImagePuzzle {
            id: "p-1".into(),
            reference: "Genesis 1:1".into(),
            full_text: "In the beginning God created the heaven and the earth.".into(),
            hint: "the very start".into(),
            image_clues: (1..=clues).map(|i| format!("clue{}.png", i)).collect(),
        }
    }

    #[test]
    fn attempt_budget() {
        assert_eq!(GuessSession::new(puzzle(1)).max_attempts(), 7);
        assert_eq!(GuessSession::new(puzzle(4)).max_attempts(), 7);
        assert_eq!(GuessSession::new(puzzle(6)).max_attempts(), 9);
    }

    #[test]
    fn wrong_guesses_reveal_clues_then_fail() {
        let bible = bible::Bible::standard();
        let mut s = GuessSession::new(puzzle(3));
        assert_eq!(s.current_clue(), Some("clue1.png"));
        assert!(!s.hint_visible());
        s.guess(&bible, "Exodus 1:1").unwrap();
        assert_eq!(s.current_clue(), Some("clue2.png"));
        assert!(s.hint_visible());
        for _ in 0..5 {
            assert!(s.guess(&bible, "not a verse").is_some());
            assert_eq!(s.outcome(), Outcome::Playing);
        }
        assert_eq!(s.stage(), 2);
        assert_eq!(s.current_clue(), Some("clue3.png"));
        assert_eq!(s.remaining_attempts(), 1);
        s.guess(&bible, "Genesis 1:2").unwrap();
        assert_eq!(s.outcome(), Outcome::Failed);
        assert!(s.guess(&bible, "Genesis 1:1").is_none());
        assert_eq!(s.history().len(), 7);
        assert_eq!(s.last_guess().unwrap().guess, "Genesis 1:2");
        assert_eq!(s.history_recent_first().last().unwrap().guess, "Exodus 1:1");
    }

    #[test]
    fn correct_guess_solves() {
        let bible = bible::Bible::standard();
        let mut s = GuessSession::new(puzzle(2));
        s.guess(&bible, "gen 2:1").unwrap();
        let r = s.guess(&bible, "gen 1:1").unwrap();
        assert!(r.is_correct());
        assert_eq!(s.outcome(), Outcome::Solved);
        assert_eq!(s.stage(), 1);
        assert!(s.guess(&bible, "gen 1:1").is_none());
        assert_eq!(s.attempts(), 2);

        s.reset();
        assert_eq!(s.outcome(), Outcome::Playing);
        assert_eq!(s.stage(), 0);
        assert!(s.history().is_empty());
        assert!(s.last_guess().is_none());
    }

    fn pack() -> content::ResolvedPack {
        let mut second = puzzle(2);
        second.id = "p-2".into();
        second.reference = "John 3:16".into();
        let mut third = puzzle(1);
        third.id = "p-3".into();
        third.reference = "Psalms 23:1".into();
        content::ResolvedPack {
            id: "starter".into(),
            title: "Starter".into(),
            description: "d".into(),
            cover_image: "c.png".into(),
            difficulty: crate::mode_config::Difficulty::Easy,
            puzzles: vec![puzzle(3), second, third],
        }
    }

    #[test]
    fn pack_plays_in_order() {
        let bible = bible::Bible::standard();
        let mut s = PackSession::new(pack(), None).unwrap();
        assert_eq!(s.total_puzzles(), 3);
        assert_eq!(s.current().puzzle().id, "p-1");
        assert_eq!(s.accuracy(), 0.0);
        // cannot move on mid-puzzle.
        assert!(!s.next());
        s.guess(&bible, "Exodus 1:1").unwrap();
        assert!(s.guess(&bible, "Genesis 1:1").unwrap().is_correct());
        assert_eq!(s.score(), 1);
        assert!(!s.is_game_over());
        assert!(s.next());
        assert_eq!(s.index(), 1);
        assert_eq!(s.current().puzzle().id, "p-2");
        assert_eq!(s.current().attempts(), 0);
        assert_eq!(s.attempts(), 2);

        s.guess(&bible, "jn 3:16").unwrap();
        assert_eq!(s.score(), 2);
        assert!(s.next());
        s.guess(&bible, "Psalms 23:2").unwrap();
        assert_eq!(s.attempts(), 4);
        assert!(!s.is_game_over());
        assert!(!s.skip());
        assert!(s.is_game_over());
        assert!(s.guess(&bible, "Psalms 23:1").is_none());
        assert_eq!(s.solved_ids(), ["p-1", "p-2"]);
        assert_eq!(s.skipped(), 1);
        assert_eq!(s.accuracy(), 0.5);
    }

    #[test]
    fn pack_ends_on_last_puzzle_result() {
        let bible = bible::Bible::standard();
        let mut s = PackSession::new(pack(), Some("p-3")).unwrap();
        assert_eq!(s.index(), 2);
        s.guess(&bible, "ps 23:1").unwrap();
        assert!(s.is_game_over());
        assert!(!s.next());
        assert!(!s.skip());
        assert_eq!(s.score(), 1);
        assert_eq!(s.accuracy(), 1.0);

        s.reset();
        assert_eq!(s.index(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.attempts(), 0);
        assert!(!s.is_game_over());
    }

    #[test]
    fn pack_start_falls_back_to_first() {
        let s = PackSession::new(pack(), Some("p-9")).unwrap();
        assert_eq!(s.current().puzzle().id, "p-1");
        let mut empty = pack();
        empty.puzzles.clear();
        assert!(PackSession::new(empty, None).is_none());
    }
}
