// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

use super::bible;

#[derive(rustyline_derive::Helper)]
pub struct MyHelper {
    commands: Vec<String>,
    book_names: Vec<String>,
    hinter: rustyline::hint::HistoryHinter,
    colored_prompt: String,
}

impl MyHelper {
    pub fn new(commands: &[&str], bible: &bible::Bible) -> Self {
        Self {
            commands: commands.iter().map(|&c| c.to_string()).collect(),
            book_names: bible.all_book_names().map(String::from).collect(),
            hinter: rustyline::hint::HistoryHinter::new(),
            colored_prompt: "\x1b[1;32m>> \x1b[m".to_owned(),
        }
    }

    // first word completes commands, the rest of the line completes a book.
    pub fn candidates(&self, line: &str) -> (usize, Vec<&str>) {
        let (start, words) = match line.find(char::is_whitespace) {
            None => (0, &self.commands),
            Some(cmd_end) => {
                let rest = &line[cmd_end..];
                (cmd_end + rest.len() - rest.trim_start().len(), &self.book_names)
            }
        };
        let prefix = line[start..].to_lowercase();
        let matches = words
            .iter()
            .filter(|w| w.to_lowercase().starts_with(&prefix))
            .map(String::as_str)
            .collect();
        (start, matches)
    }
}

impl rustyline::completion::Completer for MyHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> Result<(usize, Vec<rustyline::completion::Pair>), rustyline::error::ReadlineError> {
        let (start, matches) = self.candidates(&line[..pos]);
        Ok((
            start,
            matches
                .into_iter()
                .map(|w| rustyline::completion::Pair {
                    display: w.to_string(),
                    replacement: w.to_string(),
                })
                .collect(),
        ))
    }
}

impl rustyline::hint::Hinter for MyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl rustyline::highlight::Highlighter for MyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> std::borrow::Cow<'b, str> {
        if default {
            std::borrow::Cow::Borrowed(&self.colored_prompt)
        } else {
            std::borrow::Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned("\x1b[1m".to_owned() + hint + "\x1b[m")
    }
}

impl rustyline::validate::Validator for MyHelper {}

pub fn new_rl_editor(
    commands: &[&str],
    bible: &bible::Bible,
) -> rustyline::Result<rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>> {
    let mut rl = rustyline::Editor::new()?;
    rl.set_helper(Some(MyHelper::new(commands, bible)));
    Ok(rl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_commands_then_books() {
        let bible = bible::Bible::standard();
        let h = MyHelper::new(&["guess", "give-up", "help"], &bible);
        assert_eq!(h.candidates("g"), (0, vec!["guess", "give-up"]));
        assert_eq!(h.candidates("guess  1 c"), (7, vec!["1 Chronicles", "1 Corinthians"]));
        assert_eq!(h.candidates("guess song"), (6, vec!["Song of Solomon"]));
        assert_eq!(h.candidates("guess xyz"), (6, vec![]));
        assert_eq!(h.candidates("").1.len(), 3);
    }
}
