// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bible, reference};

// max chapter or verse distance still graded as close.
pub const CLOSE_THRESHOLD: u32 = 5;

// shown for testament and category when the guessed book is unknown.
pub const UNKNOWN_MARKER: &str = "?";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintStatus {
    Correct,
    Close,
    Wrong,
}

// where the answer lies relative to the guess.
// for testaments, down means the answer is later (old to new).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    None,
}

impl HintStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HintStatus::Correct => "correct",
            HintStatus::Close => "close",
            HintStatus::Wrong => "wrong",
        }
    }
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::None => "none",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "^",
            Direction::Down => "v",
            Direction::None => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Graded<T> {
    pub value: T,
    pub status: HintStatus,
    pub direction: Direction,
}

impl<T> Graded<T> {
    #[inline(always)]
    fn wrong(value: T) -> Self {
        Self {
            value,
            status: HintStatus::Wrong,
            direction: Direction::None,
        }
    }

    #[inline(always)]
    pub fn is_correct(&self) -> bool {
        self.status == HintStatus::Correct
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult<'a> {
    pub guess: String,
    pub parsed_guess: Option<reference::ParsedReference<'a>>,
    pub book: Graded<String>,
    pub testament: Graded<String>,
    pub category: Graded<String>,
    pub chapter: Graded<u32>,
    pub verse: Graded<u32>,
}

impl ComparisonResult<'_> {
    #[inline(always)]
    pub fn is_correct(&self) -> bool {
        is_guess_correct(self)
    }
}

fn grade_number(guess: u32, answer: u32) -> Graded<u32> {
    if guess == answer {
        return Graded {
            value: guess,
            status: HintStatus::Correct,
            direction: Direction::None,
        };
    }
    Graded {
        value: guess,
        status: if guess.abs_diff(answer) <= CLOSE_THRESHOLD {
            HintStatus::Close
        } else {
            HintStatus::Wrong
        },
        direction: if answer > guess {
            Direction::Up
        } else {
            Direction::Down
        },
    }
}

// anything that cannot be graded comes back wrong, echoing what was typed.
pub fn compare<'a>(bible: &bible::Bible<'a>, guess: &str, answer: &str) -> ComparisonResult<'a> {
    let parsed_guess = reference::parse(bible, guess);
    let parsed_answer = reference::parse(bible, answer);

    let (guess_ref, answer_ref) = match (&parsed_guess, &parsed_answer) {
        (Some(g), Some(a)) => (g, a),
        _ => {
            let (book, chapter, verse) = match &parsed_guess {
                Some(g) => (g.raw_book_text.clone(), g.chapter, g.verse),
                None => (guess.to_string(), 0, 0),
            };
            return ComparisonResult {
                guess: guess.to_string(),
                parsed_guess,
                book: Graded::wrong(book),
                testament: Graded::wrong(UNKNOWN_MARKER.into()),
                category: Graded::wrong(UNKNOWN_MARKER.into()),
                chapter: Graded::wrong(chapter),
                verse: Graded::wrong(verse),
            };
        }
    };

    let Some(guess_book) = guess_ref.book_info else {
        return ComparisonResult {
            guess: guess.to_string(),
            book: Graded::wrong(guess_ref.raw_book_text.clone()),
            testament: Graded::wrong(UNKNOWN_MARKER.into()),
            category: Graded::wrong(UNKNOWN_MARKER.into()),
            chapter: Graded::wrong(guess_ref.chapter),
            verse: Graded::wrong(guess_ref.verse),
            parsed_guess,
        };
    };

    let Some(answer_book) = answer_ref.book_info else {
        return ComparisonResult {
            guess: guess.to_string(),
            book: Graded::wrong(guess_book.name().into()),
            testament: Graded::wrong(guess_book.testament().as_str().into()),
            category: Graded::wrong(guess_book.category().as_str().into()),
            chapter: Graded::wrong(guess_ref.chapter),
            verse: Graded::wrong(guess_ref.verse),
            parsed_guess,
        };
    };

    let book_status = if guess_book.name().eq_ignore_ascii_case(answer_book.name()) {
        HintStatus::Correct
    } else if guess_book.category() == answer_book.category() {
        HintStatus::Close
    } else {
        HintStatus::Wrong
    };

    let guess_testament = guess_book.testament().order();
    let answer_testament = answer_book.testament().order();
    let testament = Graded {
        value: guess_book.testament().as_str().into(),
        status: if guess_testament == answer_testament {
            HintStatus::Correct
        } else {
            HintStatus::Wrong
        },
        direction: match answer_testament.cmp(&guess_testament) {
            std::cmp::Ordering::Greater => Direction::Down,
            std::cmp::Ordering::Less => Direction::Up,
            std::cmp::Ordering::Equal => Direction::None,
        },
    };

    let category = Graded {
        value: guess_book.category().as_str().into(),
        status: if guess_book.category() == answer_book.category() {
            HintStatus::Correct
        } else {
            HintStatus::Wrong
        },
        direction: Direction::None,
    };

    ComparisonResult {
        guess: guess.to_string(),
        book: Graded {
            value: guess_book.name().into(),
            status: book_status,
            direction: Direction::None,
        },
        testament,
        category,
        chapter: grade_number(guess_ref.chapter, answer_ref.chapter),
        verse: grade_number(guess_ref.verse, answer_ref.verse),
        parsed_guess,
    }
}

// testament and category follow from the book, so they are not checked.
#[inline(always)]
pub fn is_guess_correct(result: &ComparisonResult) -> bool {
    result.book.is_correct() && result.chapter.is_correct() && result.verse.is_correct()
}

pub fn is_book_correct(bible: &bible::Bible, guess: &str, answer: &str) -> bool {
    let guess_book = reference::parse(bible, guess).and_then(|r| r.book_info);
    let answer_book = reference::parse(bible, answer).and_then(|r| r.book_info);
    match (guess_book, answer_book) {
        (Some(g), Some(a)) => g.name().eq_ignore_ascii_case(a.name()),
        _ => false,
    }
}

pub fn is_chapter_correct(bible: &bible::Bible, guess: &str, answer: &str) -> bool {
    match (reference::parse(bible, guess), reference::parse(bible, answer)) {
        (Some(g), Some(a)) => g.chapter == a.chapter && is_book_correct(bible, guess, answer),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(guess: &str, answer: &str) -> ComparisonResult<'static> {
        // leaked so results can outlive the helper.
        let bible: &'static bible::Bible<'static> = Box::leak(Box::new(bible::Bible::standard()));
        compare(bible, guess, answer)
    }

    #[test]
    fn exact_match_is_all_correct() {
        for answer in ["John 3:16", "Genesis 1:1", "Revelation 22:21", "Psalms 119:105"] {
            let r = cmp(answer, answer);
            for status in [
                r.book.status,
                r.testament.status,
                r.category.status,
                r.chapter.status,
                r.verse.status,
            ] {
                assert_eq!(status, HintStatus::Correct, "{}", answer);
            }
            for direction in [r.testament.direction, r.chapter.direction, r.verse.direction] {
                assert_eq!(direction, Direction::None, "{}", answer);
            }
            assert!(is_guess_correct(&r));
        }
    }

    #[test]
    fn alias_guess_matches_canonical_answer() {
        let r = cmp("jn 3:16", "John 3:16");
        assert_eq!(r.book.value, "John");
        assert!(r.is_correct());
    }

    #[test]
    fn closeness_threshold() {
        let r = cmp("Genesis 10:10", "Genesis 15:15");
        assert_eq!(r.chapter.status, HintStatus::Close);
        assert_eq!(r.verse.status, HintStatus::Close);
        let r = cmp("Genesis 9:9", "Genesis 15:15");
        assert_eq!(r.chapter.status, HintStatus::Wrong);
        assert_eq!(r.verse.status, HintStatus::Wrong);
        let r = cmp("Genesis 20:20", "Genesis 15:15");
        assert_eq!(r.chapter.status, HintStatus::Close);
        assert_eq!(r.chapter.direction, Direction::Down);
    }

    #[test]
    fn chapter_direction() {
        let r = cmp("Genesis 1:1", "Genesis 5:1");
        assert_eq!(r.chapter.direction, Direction::Up);
        assert_eq!(r.chapter.status, HintStatus::Close);
        assert_eq!(r.verse.direction, Direction::None);
        let r = cmp("Genesis 5:1", "Genesis 1:1");
        assert_eq!(r.chapter.direction, Direction::Down);
    }

    #[test]
    fn oversized_chapter_keeps_the_book() {
        let r = cmp("John 99999999999:14", "John 3:16");
        assert_eq!(r.book.value, "John");
        assert_eq!(r.book.status, HintStatus::Correct);
        assert_eq!(r.testament.value, "New");
        assert_eq!(r.category.value, "Gospel");
        assert_eq!(r.chapter.value, u32::MAX);
        assert_eq!(r.chapter.status, HintStatus::Wrong);
        assert_eq!(r.chapter.direction, Direction::Down);
        assert_eq!(r.verse.status, HintStatus::Close);
        assert_eq!(r.verse.direction, Direction::Up);
        assert!(!r.is_correct());
    }

    #[test]
    fn verse_is_graded_independently() {
        let r = cmp("John 10:14", "John 3:16");
        assert_eq!(r.chapter.status, HintStatus::Wrong);
        assert_eq!(r.verse.status, HintStatus::Close);
        assert_eq!(r.verse.direction, Direction::Up);
        assert!(!r.is_correct());
    }

    #[test]
    fn book_closeness_by_category() {
        let r = cmp("Matthew 3:16", "John 3:16");
        assert_eq!(r.book.status, HintStatus::Close);
        assert_eq!(r.category.status, HintStatus::Correct);
        assert!(!r.is_correct());
        let r = cmp("Romans 3:16", "John 3:16");
        assert_eq!(r.book.status, HintStatus::Wrong);
        assert_eq!(r.category.status, HintStatus::Wrong);
        assert_eq!(r.category.value, "Epistle");
        assert_eq!(r.testament.status, HintStatus::Correct);
    }

    #[test]
    fn history_spans_testaments() {
        // acts shares a category with the old testament histories.
        let r = cmp("Acts 1:1", "Ruth 1:1");
        assert_eq!(r.book.status, HintStatus::Close);
        assert_eq!(r.testament.status, HintStatus::Wrong);
        assert_eq!(r.testament.direction, Direction::Up);
    }

    #[test]
    fn testament_direction() {
        let r = cmp("Genesis 1:1", "John 1:1");
        assert_eq!(r.testament.value, "Old");
        assert_eq!(r.testament.status, HintStatus::Wrong);
        assert_eq!(r.testament.direction, Direction::Down);
        let r = cmp("John 1:1", "Genesis 1:1");
        assert_eq!(r.testament.direction, Direction::Up);
    }

    #[test]
    fn unknown_guess_book_degrades() {
        let r = cmp("Not A Book 1:1", "John 3:16");
        assert_eq!(r.book.value, "Not A Book");
        assert_eq!(r.book.status, HintStatus::Wrong);
        assert_eq!(r.testament.value, UNKNOWN_MARKER);
        assert_eq!(r.testament.status, HintStatus::Wrong);
        assert_eq!(r.category.value, UNKNOWN_MARKER);
        assert_eq!(r.category.status, HintStatus::Wrong);
        assert_eq!(r.chapter.value, 1);
        assert_eq!(r.chapter.status, HintStatus::Wrong);
        assert_eq!(r.verse.value, 1);
        assert_eq!(r.verse.direction, Direction::None);
        assert!(r.parsed_guess.is_some());
    }

    #[test]
    fn unparsable_guess_degrades() {
        let r = cmp("what is love", "John 3:16");
        assert!(r.parsed_guess.is_none());
        assert_eq!(r.book.value, "what is love");
        assert_eq!(r.chapter.value, 0);
        assert_eq!(r.verse.value, 0);
        assert!(!r.is_correct());
    }

    #[test]
    fn unparsable_answer_keeps_guess_text() {
        let r = cmp("John 3:16", "");
        assert_eq!(r.book.value, "John");
        assert_eq!(r.testament.value, UNKNOWN_MARKER);
        assert_eq!(r.chapter.value, 3);
        assert_eq!(r.verse.value, 16);
        assert_eq!(r.verse.status, HintStatus::Wrong);
    }

    #[test]
    fn unknown_answer_book_shows_guess_info() {
        let r = cmp("jn 3:16", "Hezekiah 3:16");
        assert_eq!(r.book.value, "John");
        assert_eq!(r.testament.value, "New");
        assert_eq!(r.category.value, "Gospel");
        assert_eq!(r.chapter.status, HintStatus::Wrong);
        assert!(!r.is_correct());
    }

    #[test]
    fn book_only_guess_against_full_answer() {
        let r = cmp("John", "John 3:16");
        assert_eq!(r.book.status, HintStatus::Correct);
        assert_eq!(r.chapter.value, 0);
        assert_eq!(r.chapter.status, HintStatus::Close);
        assert_eq!(r.chapter.direction, Direction::Up);
        assert_eq!(r.verse.status, HintStatus::Wrong);
    }

    #[test]
    fn progressive_checks() {
        let bible = bible::Bible::standard();
        assert!(is_book_correct(&bible, "jn 1:1", "John 3:16"));
        assert!(!is_book_correct(&bible, "Foo 1:1", "John 3:16"));
        assert!(is_chapter_correct(&bible, "jn 3:1", "John 3:16"));
        assert!(!is_chapter_correct(&bible, "jn 4:16", "John 3:16"));
        assert!(!is_chapter_correct(&bible, "Foo 3:16", "Foo 3:16"));
    }

    #[test]
    fn serializes_in_wire_shape() {
        let r = cmp("Genesis 1:1", "Genesis 5:1");
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["chapter"]["status"], "close");
        assert_eq!(v["chapter"]["direction"], "up");
        assert_eq!(v["parsedGuess"]["book"], "Genesis");
        assert_eq!(v["parsedGuess"]["bookInfo"]["order"], 1);
        assert_eq!(v["category"]["value"], "Law");
    }
}
