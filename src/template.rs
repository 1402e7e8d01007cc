// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;

pub const BLANK_MARKER: &str = "{{blank}}";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    // index into the expected words.
    Blank(usize),
}

// empty text between adjacent markers is dropped.
pub fn parse_blank_text(blanked_text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut blank_index = 0;
    for (i, part) in blanked_text.split(BLANK_MARKER).enumerate() {
        if i > 0 {
            segments.push(Segment::Blank(blank_index));
            blank_index += 1;
        }
        if !part.is_empty() {
            segments.push(Segment::Text(part.to_string()));
        }
    }
    segments
}

#[inline(always)]
pub fn blank_count(blanked_text: &str) -> usize {
    blanked_text.matches(BLANK_MARKER).count()
}

#[inline(always)]
fn is_stripped_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'' | '(' | ')')
}

// "don't" becomes "dont".
pub fn extract_all_words(full_text: &str) -> Vec<String> {
    let stripped = full_text
        .chars()
        .filter(|&c| !is_stripped_punctuation(c))
        .collect::<String>();
    stripped.split_whitespace().map(String::from).collect()
}

// fisher-yates, leaves the input alone.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(words: &[T], rng: &mut R) -> Vec<T> {
    let mut ret = words.to_vec();
    ret.shuffle(rng);
    ret
}

// renders the template with the given placements, `____` for empty slots.
pub fn render(blanked_text: &str, placements: &[Option<String>]) -> String {
    let mut ret = String::new();
    for segment in parse_blank_text(blanked_text) {
        match segment {
            Segment::Text(text) => ret.push_str(&text),
            Segment::Blank(idx) => match placements.get(idx) {
                Some(Some(word)) => {
                    ret.push('[');
                    ret.push_str(word);
                    ret.push(']');
                }
                _ => ret.push_str(&format!("[{}:____]", idx + 1)),
            },
        }
    }
    ret
}
