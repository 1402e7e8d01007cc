// Copyright (C) 2020-2026 Andy Kurnia.

use super::bible;

// chapter and verse are 0 when absent.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReference<'a> {
    #[serde(rename = "book")]
    pub raw_book_text: String,
    pub chapter: u32,
    pub verse: u32,
    pub book_info: Option<&'a bible::BookInfo<'a>>,
}

impl<'a> ParsedReference<'a> {
    #[inline(always)]
    pub fn is_recognized(&self) -> bool {
        self.book_info.is_some()
    }

    // canonical name if recognized, else whatever was typed.
    pub fn book_name(&self) -> &str {
        match self.book_info {
            Some(book_info) => book_info.name(),
            None => &self.raw_book_text,
        }
    }

    // None if the book is unknown or the reference has no chapter.
    pub fn verses_in_chapter(&self) -> Option<u16> {
        self.book_info?.verse_count(self.chapter)
    }
}

impl std::fmt::Display for ParsedReference<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.book_name())?;
        if self.chapter != 0 {
            write!(f, " {}", self.chapter)?;
            if self.verse != 0 {
                write!(f, ":{}", self.verse)?;
            }
        }
        Ok(())
    }
}

// ascii digits only. too many digits saturates.
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        Some(s.parse().unwrap_or(u32::MAX))
    }
}

// splits "Song of Solomon 2:1" into ("Song of Solomon", "2:1").
// input must already be trimmed. the head must be non-empty.
fn split_last_token(s: &str) -> Option<(&str, &str)> {
    let pos = s.rfind(char::is_whitespace)?;
    let (head, tail) = s.split_at(pos);
    let head = head.trim_end();
    if head.is_empty() {
        None
    } else {
        Some((head, tail.trim_start()))
    }
}

// "Book C:V", then "Book C", then "Book". unknown books still parse if numbered.
pub fn parse<'a>(bible: &bible::Bible<'a>, text: &str) -> Option<ParsedReference<'a>> {
    let text = text.trim();
    if let Some((book, last)) = split_last_token(text) {
        let numbers = match last.split_once(':') {
            Some((chapter, verse)) => parse_number(chapter).zip(parse_number(verse)),
            None => parse_number(last).map(|chapter| (chapter, 0)),
        };
        if let Some((chapter, verse)) = numbers {
            return Some(ParsedReference {
                raw_book_text: book.to_string(),
                chapter,
                verse,
                book_info: bible.lookup_book(book),
            });
        }
    }
    bible
        .lookup_book(text)
        .map(|book_info| ParsedReference {
            raw_book_text: text.to_string(),
            chapter: 0,
            verse: 0,
            book_info: Some(book_info),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str, book: &str, chapter: u32, verse: u32, recognized: bool) {
        let bible = bible::Bible::standard();
        let parsed = parse(&bible, text).unwrap_or_else(|| panic!("{:?} did not parse", text));
        assert_eq!(parsed.raw_book_text, book, "{:?}", text);
        assert_eq!(parsed.chapter, chapter, "{:?}", text);
        assert_eq!(parsed.verse, verse, "{:?}", text);
        assert_eq!(parsed.is_recognized(), recognized, "{:?}", text);
    }

    #[test]
    fn full_references() {
        check("John 3:16", "John", 3, 16, true);
        check("  1 John 4:8  ", "1 John", 4, 8, true);
        check("Song of Solomon 2:1", "Song of Solomon", 2, 1, true);
        check("jn 3:16", "jn", 3, 16, true);
        check("Genesis   1:1", "Genesis", 1, 1, true);
    }

    #[test]
    fn chapter_only() {
        check("Psalm 23", "Psalm", 23, 0, true);
        check("1 Corinthians 13", "1 Corinthians", 13, 0, true);
    }

    #[test]
    fn book_only() {
        check("Revelation", "Revelation", 0, 0, true);
        check("1 John", "1 John", 0, 0, true);
        check("  song  ", "song", 0, 0, true);
    }

    #[test]
    fn unknown_book_keeps_numbers() {
        check("Not A Book 1:1", "Not A Book", 1, 1, false);
        check("Hezekiah 4", "Hezekiah", 4, 0, false);
        check("1 3", "1", 3, 0, false);
    }

    #[test]
    fn huge_numbers_saturate() {
        check("John 99999999999:1", "John", u32::MAX, 1, true);
        check("John 3:99999999999", "John", 3, u32::MAX, true);
        check("Hezekiah 4294967296", "Hezekiah", u32::MAX, 0, false);
        check("John 4294967295:1", "John", u32::MAX, 1, true);
    }

    #[test]
    fn nothing_matches() {
        let bible = bible::Bible::standard();
        for text in [
            "",
            "   ",
            "3:16",
            "Hezekiah",
            "John 3:",
            "John :16",
            "John 3:16:1",
            "John 3 :16",
            "John three",
            "John 3:16a",
        ] {
            assert!(parse(&bible, text).is_none(), "{:?}", text);
        }
    }

    #[test]
    fn every_verse_of_every_book_parses() {
        let bible = bible::Bible::standard();
        for book in bible.books() {
            for chapter in 1..=book.chapters() as u32 {
                let verses = book.verse_count(chapter).unwrap() as u32;
                for verse in [1, verses / 2 + 1, verses] {
                    let text = format!("{} {}:{}", book.name(), chapter, verse);
                    let parsed = parse(&bible, &text).unwrap();
                    assert_eq!(parsed.raw_book_text, book.name());
                    assert_eq!(parsed.chapter, chapter);
                    assert_eq!(parsed.verse, verse);
                    assert!(std::ptr::eq(parsed.book_info.unwrap(), book));
                }
            }
        }
    }

    #[test]
    fn display_is_canonical() {
        let bible = bible::Bible::standard();
        assert_eq!(parse(&bible, "jn 3:16").unwrap().to_string(), "John 3:16");
        assert_eq!(parse(&bible, "ps 23").unwrap().to_string(), "Psalms 23");
        assert_eq!(parse(&bible, "rev").unwrap().to_string(), "Revelation");
        assert_eq!(parse(&bible, "Foo 2:3").unwrap().to_string(), "Foo 2:3");
    }

    #[test]
    fn verses_in_chapter() {
        let bible = bible::Bible::standard();
        assert_eq!(parse(&bible, "John 3:16").unwrap().verses_in_chapter(), Some(36));
        assert_eq!(parse(&bible, "John").unwrap().verses_in_chapter(), None);
        assert_eq!(parse(&bible, "Foo 3").unwrap().verses_in_chapter(), None);
    }
}
