// Copyright (C) 2020-2026 Andy Kurnia.

use super::{comparison, error};

// one row per guess, oldest first.
pub fn write_history<W: std::io::Write>(
    w: W,
    history: &[comparison::ComparisonResult],
) -> error::Returns<()> {
    let mut csv_out = csv::Writer::from_writer(w);
    csv_out.serialize((
        "attempt",
        "guess",
        "book",
        "book_status",
        "testament",
        "testament_status",
        "testament_direction",
        "category",
        "category_status",
        "chapter",
        "chapter_status",
        "chapter_direction",
        "verse",
        "verse_status",
        "verse_direction",
        "correct",
    ))?;
    for (attempt, r) in (1..).zip(history) {
        csv_out.serialize((
            attempt,
            &r.guess,
            &r.book.value,
            r.book.status.as_str(),
            &r.testament.value,
            r.testament.status.as_str(),
            r.testament.direction.as_str(),
            &r.category.value,
            r.category.status.as_str(),
            r.chapter.value,
            r.chapter.status.as_str(),
            r.chapter.direction.as_str(),
            r.verse.value,
            r.verse.status.as_str(),
            r.verse.direction.as_str(),
            comparison::is_guess_correct(r),
        ))?;
    }
    csv_out.flush()?;
    Ok(())
}

pub fn write_history_to_path(
    path: impl AsRef<std::path::Path>,
    history: &[comparison::ComparisonResult],
) -> error::Returns<()> {
    write_history(std::fs::File::create(path)?, history)
}
