// Copyright (C) 2020-2026 Andy Kurnia.

use super::fash;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    // used for direction hints: the old testament comes first.
    #[inline(always)]
    pub fn order(self) -> u8 {
        match self {
            Testament::Old => 0,
            Testament::New => 1,
        }
    }

    #[inline(always)]
    pub fn as_str(self) -> &'static str {
        match self {
            Testament::Old => "Old",
            Testament::New => "New",
        }
    }
}

impl std::fmt::Display for Testament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum BookCategory {
    Law,
    History,
    Poetry,
    #[serde(rename = "Major Prophets")]
    MajorProphets,
    #[serde(rename = "Minor Prophets")]
    MinorProphets,
    Gospel,
    Epistle,
    Apocalyptic,
}

impl BookCategory {
    pub const ALL: [BookCategory; 8] = [
        BookCategory::Law,
        BookCategory::History,
        BookCategory::Poetry,
        BookCategory::MajorProphets,
        BookCategory::MinorProphets,
        BookCategory::Gospel,
        BookCategory::Epistle,
        BookCategory::Apocalyptic,
    ];

    #[inline(always)]
    pub fn as_str(self) -> &'static str {
        match self {
            BookCategory::Law => "Law",
            BookCategory::History => "History",
            BookCategory::Poetry => "Poetry",
            BookCategory::MajorProphets => "Major Prophets",
            BookCategory::MinorProphets => "Minor Prophets",
            BookCategory::Gospel => "Gospel",
            BookCategory::Epistle => "Epistle",
            BookCategory::Apocalyptic => "Apocalyptic",
        }
    }
}

impl std::fmt::Display for BookCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInfo<'a> {
    name: &'a str,
    testament: Testament,
    category: BookCategory,
    order: u8, // 1-based canonical position
    chapters: u16,
    verses_per_chapter: &'a [u16], // index 0 is chapter 1, may be empty
}

impl<'a> BookInfo<'a> {
    pub const fn new(
        name: &'a str,
        testament: Testament,
        category: BookCategory,
        order: u8,
        chapters: u16,
        verses_per_chapter: &'a [u16],
    ) -> Self {
        Self {
            name,
            testament,
            category,
            order,
            chapters,
            verses_per_chapter,
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[inline(always)]
    pub fn testament(&self) -> Testament {
        self.testament
    }

    #[inline(always)]
    pub fn category(&self) -> BookCategory {
        self.category
    }

    #[inline(always)]
    pub fn order(&self) -> u8 {
        self.order
    }

    #[inline(always)]
    pub fn chapters(&self) -> u16 {
        self.chapters
    }

    #[inline(always)]
    pub fn verses_per_chapter(&self) -> &'a [u16] {
        self.verses_per_chapter
    }

    // None if chapter is out of range or verse counts are not tracked.
    #[inline(always)]
    pub fn verse_count(&self, chapter: u32) -> Option<u16> {
        if chapter < 1 || chapter > self.chapters as u32 {
            None
        } else {
            self.verses_per_chapter.get(chapter as usize - 1).copied()
        }
    }
}

// canonical names win over colliding aliases. aliases to unknown books are dropped.
pub struct Bible<'a> {
    books: &'a [BookInfo<'a>],
    aliases: &'a [(&'a str, &'a str)],
    index: fash::MyHashMap<String, usize>,
}

impl<'a> Bible<'a> {
    pub fn new(books: &'a [BookInfo<'a>], aliases: &'a [(&'a str, &'a str)]) -> Self {
        let mut index = fash::MyHashMap::default();
        index.reserve(books.len() + aliases.len());
        for (idx, book) in books.iter().enumerate() {
            index.entry(book.name.to_lowercase()).or_insert(idx);
        }
        for &(alias, target) in aliases {
            if let Some(&idx) = index.get(&target.to_lowercase()) {
                index.entry(alias.to_lowercase()).or_insert(idx);
            }
        }
        Self {
            books,
            aliases,
            index,
        }
    }

    pub fn standard() -> Bible<'static> {
        Bible::new(STANDARD_BOOKS, STANDARD_ALIASES)
    }

    #[inline(always)]
    pub fn books(&self) -> &'a [BookInfo<'a>] {
        self.books
    }

    #[inline(always)]
    pub fn aliases(&self) -> &'a [(&'a str, &'a str)] {
        self.aliases
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn lookup_book(&self, name: &str) -> Option<&'a BookInfo<'a>> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        self.index.get(&normalized).map(|&idx| &self.books[idx])
    }

    pub fn verse_count(&self, name: &str, chapter: u32) -> Option<u16> {
        self.lookup_book(name)?.verse_count(chapter)
    }

    pub fn all_book_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.books.iter().map(|book| book.name)
    }

    #[inline(always)]
    pub fn categories(&self) -> &'static [BookCategory] {
        &BookCategory::ALL
    }

    pub fn books_in_category(
        &self,
        category: BookCategory,
    ) -> impl Iterator<Item = &'a BookInfo<'a>> + '_ {
        self.books
            .iter()
            .filter(move |book| book.category == category)
    }
}

pub static STANDARD_ALIASES: &[(&str, &str)] = &[
    ("gen", "genesis"),
    ("ex", "exodus"),
    ("lev", "leviticus"),
    ("num", "numbers"),
    ("deut", "deuteronomy"),
    ("josh", "joshua"),
    ("judg", "judges"),
    ("1sam", "1 samuel"),
    ("2sam", "2 samuel"),
    ("1kgs", "1 kings"),
    ("2kgs", "2 kings"),
    ("1chr", "1 chronicles"),
    ("2chr", "2 chronicles"),
    ("neh", "nehemiah"),
    ("est", "esther"),
    ("ps", "psalms"),
    ("psalm", "psalms"),
    ("prov", "proverbs"),
    ("eccl", "ecclesiastes"),
    ("song", "song of solomon"),
    ("sos", "song of solomon"),
    ("isa", "isaiah"),
    ("jer", "jeremiah"),
    ("lam", "lamentations"),
    ("ezek", "ezekiel"),
    ("dan", "daniel"),
    ("hos", "hosea"),
    ("obad", "obadiah"),
    ("mic", "micah"),
    ("nah", "nahum"),
    ("hab", "habakkuk"),
    ("zeph", "zephaniah"),
    ("hag", "haggai"),
    ("zech", "zechariah"),
    ("mal", "malachi"),
    ("matt", "matthew"),
    ("mt", "matthew"),
    ("mk", "mark"),
    ("lk", "luke"),
    ("jn", "john"),
    ("rom", "romans"),
    ("1cor", "1 corinthians"),
    ("2cor", "2 corinthians"),
    ("gal", "galatians"),
    ("eph", "ephesians"),
    ("phil", "philippians"),
    ("col", "colossians"),
    ("1thess", "1 thessalonians"),
    ("2thess", "2 thessalonians"),
    ("1tim", "1 timothy"),
    ("2tim", "2 timothy"),
    ("phm", "philemon"),
    ("heb", "hebrews"),
    ("jas", "james"),
    ("1pet", "1 peter"),
    ("2pet", "2 peter"),
    ("1jn", "1 john"),
    ("2jn", "2 john"),
    ("3jn", "3 john"),
    ("rev", "revelation"),
];

pub static STANDARD_BOOKS: &[BookInfo] = &[
    BookInfo {
        name: "Genesis",
        testament: Testament::Old,
        category: BookCategory::Law,
        order: 1,
        chapters: 50,
        verses_per_chapter: &[
            31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34,
            24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38,
            34, 34, 28, 34, 31, 22, 33, 26,
        ],
    },
    BookInfo {
        name: "Exodus",
        testament: Testament::Old,
        category: BookCategory::Law,
        order: 2,
        chapters: 40,
        verses_per_chapter: &[
            22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36,
            31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38,
        ],
    },
    BookInfo {
        name: "Leviticus",
        testament: Testament::Old,
        category: BookCategory::Law,
        order: 3,
        chapters: 27,
        verses_per_chapter: &[
            17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24,
            33, 44, 23, 55, 46, 34,
        ],
    },
    BookInfo {
        name: "Numbers",
        testament: Testament::Old,
        category: BookCategory::Law,
        order: 4,
        chapters: 36,
        verses_per_chapter: &[
            54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35,
            41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13,
        ],
    },
    BookInfo {
        name: "Deuteronomy",
        testament: Testament::Old,
        category: BookCategory::Law,
        order: 5,
        chapters: 34,
        verses_per_chapter: &[
            46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23,
            30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12,
        ],
    },
    BookInfo {
        name: "Joshua",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 6,
        chapters: 24,
        verses_per_chapter: &[
            18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45,
            34, 16, 33,
        ],
    },
    BookInfo {
        name: "Judges",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 7,
        chapters: 21,
        verses_per_chapter: &[
            36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25,
        ],
    },
    BookInfo {
        name: "Ruth",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 8,
        chapters: 4,
        verses_per_chapter: &[
            22, 23, 17, 22,
        ],
    },
    BookInfo {
        name: "1 Samuel",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 9,
        chapters: 31,
        verses_per_chapter: &[
            28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 15,
            23, 29, 22, 44, 25, 12, 25, 11, 31, 13,
        ],
    },
    BookInfo {
        name: "2 Samuel",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 10,
        chapters: 24,
        verses_per_chapter: &[
            27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22,
            51, 39, 25,
        ],
    },
    BookInfo {
        name: "1 Kings",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 11,
        chapters: 22,
        verses_per_chapter: &[
            53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29,
            53,
        ],
    },
    BookInfo {
        name: "2 Kings",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 12,
        chapters: 25,
        verses_per_chapter: &[
            18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26,
            20, 37, 20, 30,
        ],
    },
    BookInfo {
        name: "1 Chronicles",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 13,
        chapters: 29,
        verses_per_chapter: &[
            54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8, 30,
            19, 32, 31, 31, 32, 34, 21, 30,
        ],
    },
    BookInfo {
        name: "2 Chronicles",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 14,
        chapters: 36,
        verses_per_chapter: &[
            17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37, 20,
            12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23,
        ],
    },
    BookInfo {
        name: "Ezra",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 15,
        chapters: 10,
        verses_per_chapter: &[
            11, 70, 13, 24, 17, 22, 28, 36, 15, 44,
        ],
    },
    BookInfo {
        name: "Nehemiah",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 16,
        chapters: 13,
        verses_per_chapter: &[
            11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31,
        ],
    },
    BookInfo {
        name: "Esther",
        testament: Testament::Old,
        category: BookCategory::History,
        order: 17,
        chapters: 10,
        verses_per_chapter: &[
            22, 23, 15, 17, 14, 14, 10, 17, 32, 3,
        ],
    },
    BookInfo {
        name: "Job",
        testament: Testament::Old,
        category: BookCategory::Poetry,
        order: 18,
        chapters: 42,
        verses_per_chapter: &[
            22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34,
            30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34, 17,
        ],
    },
    BookInfo {
        name: "Psalms",
        testament: Testament::Old,
        category: BookCategory::Poetry,
        order: 19,
        chapters: 150,
        verses_per_chapter: &[
            6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6,
            10, 22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26,
            17, 11, 9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20,
            7, 35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18,
            52, 17, 16, 15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7,
            10, 10, 9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21,
            26, 9, 8, 24, 13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6,
        ],
    },
    BookInfo {
        name: "Proverbs",
        testament: Testament::Old,
        category: BookCategory::Poetry,
        order: 20,
        chapters: 31,
        verses_per_chapter: &[
            33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31,
            29, 35, 34, 28, 28, 27, 28, 27, 33, 31,
        ],
    },
    BookInfo {
        name: "Ecclesiastes",
        testament: Testament::Old,
        category: BookCategory::Poetry,
        order: 21,
        chapters: 12,
        verses_per_chapter: &[
            18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14,
        ],
    },
    BookInfo {
        name: "Song of Solomon",
        testament: Testament::Old,
        category: BookCategory::Poetry,
        order: 22,
        chapters: 8,
        verses_per_chapter: &[
            17, 17, 11, 16, 16, 13, 13, 14,
        ],
    },
    BookInfo {
        name: "Isaiah",
        testament: Testament::Old,
        category: BookCategory::MajorProphets,
        order: 23,
        chapters: 66,
        verses_per_chapter: &[
            31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25,
            18, 23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28,
            28, 25, 13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12,
            25, 24,
        ],
    },
    BookInfo {
        name: "Jeremiah",
        testament: Testament::Old,
        category: BookCategory::MajorProphets,
        order: 24,
        chapters: 52,
        verses_per_chapter: &[
            19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14,
            30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22,
            13, 30, 5, 28, 7, 47, 39, 46, 64, 34,
        ],
    },
    BookInfo {
        name: "Lamentations",
        testament: Testament::Old,
        category: BookCategory::MajorProphets,
        order: 25,
        chapters: 5,
        verses_per_chapter: &[
            22, 22, 66, 22, 22,
        ],
    },
    BookInfo {
        name: "Ezekiel",
        testament: Testament::Old,
        category: BookCategory::MajorProphets,
        order: 26,
        chapters: 48,
        verses_per_chapter: &[
            28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32,
            31, 49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20,
            27, 31, 25, 24, 23, 35,
        ],
    },
    BookInfo {
        name: "Daniel",
        testament: Testament::Old,
        category: BookCategory::MajorProphets,
        order: 27,
        chapters: 12,
        verses_per_chapter: &[
            21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13,
        ],
    },
    BookInfo {
        name: "Hosea",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 28,
        chapters: 14,
        verses_per_chapter: &[
            11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9,
        ],
    },
    BookInfo {
        name: "Joel",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 29,
        chapters: 3,
        verses_per_chapter: &[
            20, 32, 21,
        ],
    },
    BookInfo {
        name: "Amos",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 30,
        chapters: 9,
        verses_per_chapter: &[
            15, 16, 15, 13, 27, 14, 17, 14, 15,
        ],
    },
    BookInfo {
        name: "Obadiah",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 31,
        chapters: 1,
        verses_per_chapter: &[
            21,
        ],
    },
    BookInfo {
        name: "Jonah",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 32,
        chapters: 4,
        verses_per_chapter: &[
            17, 10, 10, 11,
        ],
    },
    BookInfo {
        name: "Micah",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 33,
        chapters: 7,
        verses_per_chapter: &[
            16, 13, 12, 13, 15, 16, 20,
        ],
    },
    BookInfo {
        name: "Nahum",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 34,
        chapters: 3,
        verses_per_chapter: &[
            15, 13, 19,
        ],
    },
    BookInfo {
        name: "Habakkuk",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 35,
        chapters: 3,
        verses_per_chapter: &[
            17, 20, 19,
        ],
    },
    BookInfo {
        name: "Zephaniah",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 36,
        chapters: 3,
        verses_per_chapter: &[
            18, 15, 20,
        ],
    },
    BookInfo {
        name: "Haggai",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 37,
        chapters: 2,
        verses_per_chapter: &[
            15, 23,
        ],
    },
    BookInfo {
        name: "Zechariah",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 38,
        chapters: 14,
        verses_per_chapter: &[
            21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21,
        ],
    },
    BookInfo {
        name: "Malachi",
        testament: Testament::Old,
        category: BookCategory::MinorProphets,
        order: 39,
        chapters: 4,
        verses_per_chapter: &[
            14, 17, 18, 6,
        ],
    },
    BookInfo {
        name: "Matthew",
        testament: Testament::New,
        category: BookCategory::Gospel,
        order: 40,
        chapters: 28,
        verses_per_chapter: &[
            25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46,
            46, 39, 51, 46, 75, 66, 20,
        ],
    },
    BookInfo {
        name: "Mark",
        testament: Testament::New,
        category: BookCategory::Gospel,
        order: 41,
        chapters: 16,
        verses_per_chapter: &[
            45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20,
        ],
    },
    BookInfo {
        name: "Luke",
        testament: Testament::New,
        category: BookCategory::Gospel,
        order: 42,
        chapters: 24,
        verses_per_chapter: &[
            80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38,
            71, 56, 53,
        ],
    },
    BookInfo {
        name: "John",
        testament: Testament::New,
        category: BookCategory::Gospel,
        order: 43,
        chapters: 21,
        verses_per_chapter: &[
            51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25,
        ],
    },
    BookInfo {
        name: "Acts",
        testament: Testament::New,
        category: BookCategory::History,
        order: 44,
        chapters: 28,
        verses_per_chapter: &[
            26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40,
            30, 35, 27, 27, 32, 44, 31,
        ],
    },
    BookInfo {
        name: "Romans",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 45,
        chapters: 16,
        verses_per_chapter: &[
            32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27,
        ],
    },
    BookInfo {
        name: "1 Corinthians",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 46,
        chapters: 16,
        verses_per_chapter: &[
            31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24,
        ],
    },
    BookInfo {
        name: "2 Corinthians",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 47,
        chapters: 13,
        verses_per_chapter: &[
            24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14,
        ],
    },
    BookInfo {
        name: "Galatians",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 48,
        chapters: 6,
        verses_per_chapter: &[
            24, 21, 29, 31, 26, 18,
        ],
    },
    BookInfo {
        name: "Ephesians",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 49,
        chapters: 6,
        verses_per_chapter: &[
            23, 22, 21, 32, 33, 24,
        ],
    },
    BookInfo {
        name: "Philippians",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 50,
        chapters: 4,
        verses_per_chapter: &[
            30, 30, 21, 23,
        ],
    },
    BookInfo {
        name: "Colossians",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 51,
        chapters: 4,
        verses_per_chapter: &[
            29, 23, 25, 18,
        ],
    },
    BookInfo {
        name: "1 Thessalonians",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 52,
        chapters: 5,
        verses_per_chapter: &[
            10, 20, 13, 18, 28,
        ],
    },
    BookInfo {
        name: "2 Thessalonians",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 53,
        chapters: 3,
        verses_per_chapter: &[
            12, 17, 18,
        ],
    },
    BookInfo {
        name: "1 Timothy",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 54,
        chapters: 6,
        verses_per_chapter: &[
            20, 15, 16, 16, 25, 21,
        ],
    },
    BookInfo {
        name: "2 Timothy",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 55,
        chapters: 4,
        verses_per_chapter: &[
            18, 26, 17, 22,
        ],
    },
    BookInfo {
        name: "Titus",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 56,
        chapters: 3,
        verses_per_chapter: &[
            16, 15, 15,
        ],
    },
    BookInfo {
        name: "Philemon",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 57,
        chapters: 1,
        verses_per_chapter: &[
            25,
        ],
    },
    BookInfo {
        name: "Hebrews",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 58,
        chapters: 13,
        verses_per_chapter: &[
            14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25,
        ],
    },
    BookInfo {
        name: "James",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 59,
        chapters: 5,
        verses_per_chapter: &[
            27, 26, 18, 17, 20,
        ],
    },
    BookInfo {
        name: "1 Peter",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 60,
        chapters: 5,
        verses_per_chapter: &[
            25, 25, 22, 19, 14,
        ],
    },
    BookInfo {
        name: "2 Peter",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 61,
        chapters: 3,
        verses_per_chapter: &[
            21, 22, 18,
        ],
    },
    BookInfo {
        name: "1 John",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 62,
        chapters: 5,
        verses_per_chapter: &[
            10, 29, 24, 21, 21,
        ],
    },
    BookInfo {
        name: "2 John",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 63,
        chapters: 1,
        verses_per_chapter: &[
            13,
        ],
    },
    BookInfo {
        name: "3 John",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 64,
        chapters: 1,
        verses_per_chapter: &[
            14,
        ],
    },
    BookInfo {
        name: "Jude",
        testament: Testament::New,
        category: BookCategory::Epistle,
        order: 65,
        chapters: 1,
        verses_per_chapter: &[
            25,
        ],
    },
    BookInfo {
        name: "Revelation",
        testament: Testament::New,
        category: BookCategory::Apocalyptic,
        order: 66,
        chapters: 22,
        verses_per_chapter: &[
            20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15, 27,
            21,
        ],
    },
];
