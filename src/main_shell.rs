// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use vega::{
    bible, comparison, content, drag_drop, error, game_timers, guess_game, history_csv,
    mode_config, progress, reference, rlhelper, scoring,
};

static COMMANDS: &[&str] = &[
    "help", "exit", "source", "books", "lookup", "parse", "compare", "play", "guess", "history",
    "next", "skip", "drag", "place", "remove", "hint", "submit", "restart", "board", "progress",
    "clear-progress",
];

const HELP: &str = "commands:
  books [category]            list books, optionally one category
  lookup name...              show one book
  parse text...               parse a reference
  compare \"guess\" \"answer\"    grade a guess against an answer
  play [id|daily|random]      start an image puzzle
  play pack id [puzzle-id]    play a pack in order, optionally from one puzzle
  guess reference...          guess the current image puzzle
  next                        go on to the next puzzle of the pack
  skip                        give up on this puzzle of the pack
  history [file.csv]          show guesses, newest first, or save them
  drag [id|daily|random] [easy|medium|hard|extreme]
                              start a drag puzzle
  place slot word             put a word in a slot (slots count from 1)
  remove slot                 send a word back to the bank
  hint                        reveal one word (easy and medium)
  submit                      grade the answer (hard and extreme)
  restart                     start the drag puzzle over
  board                       show the drag puzzle
  progress [puzzle-id]        show saved progress
  clear-progress              forget all saved progress
  source file                 run commands from a file
  exit";

fn print_comparison(r: &comparison::ComparisonResult) {
    fn field<T: std::fmt::Display>(name: &str, g: &comparison::Graded<T>) -> String {
        format!("{}: {} ({}{})", name, g.value, g.status.as_str(), g.direction.arrow())
    }
    println!(
        "{}  =>  {} | {} | {} | {} | {}{}",
        r.guess,
        field("book", &r.book),
        field("testament", &r.testament),
        field("category", &r.category),
        field("chapter", &r.chapter),
        field("verse", &r.verse),
        if r.is_correct() { "  CORRECT" } else { "" },
    );
}

fn current_guess_session<'s, 'a>(
    pack_session: &'s Option<guess_game::PackSession<'a>>,
    guess_session: &'s Option<guess_game::GuessSession<'a>>,
) -> Option<&'s guess_game::GuessSession<'a>> {
    match pack_session {
        Some(pack) => Some(pack.current()),
        None => guess_session.as_ref(),
    }
}

fn print_puzzle_start(session: &guess_game::GuessSession, pack: Option<&guess_game::PackSession>) {
    if let Some(pack) = pack {
        print!("{}/{} ", pack.index() + 1, pack.total_puzzles());
    }
    println!(
        "puzzle {}: clue {}, {} guesses",
        session.puzzle().id,
        session.current_clue().unwrap_or("-"),
        session.max_attempts()
    );
}

fn print_guess_outcome(session: &guess_game::GuessSession) {
    match session.outcome() {
        guess_game::Outcome::Solved => println!(
            "solved in {}: {}",
            session.attempts(),
            session.puzzle().full_text
        ),
        guess_game::Outcome::Failed => println!(
            "out of guesses, it was {}: {}",
            session.puzzle().reference,
            session.puzzle().full_text
        ),
        guess_game::Outcome::Playing => {
            println!(
                "clue {}, {} guesses left",
                session.current_clue().unwrap_or("-"),
                session.remaining_attempts()
            );
            if session.hint_visible() {
                println!("hint: {}", session.puzzle().hint);
            }
        }
    }
}

fn print_pack_summary(pack: &guess_game::PackSession) {
    println!(
        "pack over: {} of {} solved, {} skipped, {} attempts, accuracy {:.0}%",
        pack.score(),
        pack.total_puzzles(),
        pack.skipped(),
        pack.attempts(),
        pack.accuracy() * 100.0
    );
}

fn print_board(game: &drag_drop::DragDropGame) {
    let state = game.state();
    println!("{}", game.render());
    let mut bank = state.available_words.clone();
    bank.sort_unstable_by_key(|w| w.to_lowercase());
    println!("bank: {}", bank.join(" "));
    let feedback = state
        .slot_feedback
        .iter()
        .map(|f| match f {
            drag_drop::SlotFeedback::Correct => "+",
            drag_drop::SlotFeedback::Wrong => "x",
            drag_drop::SlotFeedback::Pending => ".",
            drag_drop::SlotFeedback::Hidden => "?",
        })
        .collect::<String>();
    println!(
        "mode {}, slots [{}], {}s, drops {}/{}, hints left {}{}",
        game.mode(),
        feedback,
        state.elapsed_time,
        state.correct_drops,
        state.total_drops,
        state.hints_remaining,
        if game.can_submit() { ", ready to submit" } else { "" },
    );
}

fn print_progress(p: &progress::PuzzleProgress) {
    for mode in mode_config::Mode::ALL {
        let m = p.modes.get(mode);
        println!(
            "  {:<8} {:<8} best score {:<6} best time {:<6} {}",
            mode.as_str(),
            if m.completed {
                "done"
            } else if scoring::is_mode_unlocked(Some(p), mode) {
                "open"
            } else {
                "locked"
            },
            m.best_score.map_or("-".into(), |s| s.to_string()),
            m.best_time.map_or("-".into(), |t| format!("{}s", t)),
            m.completed_at.as_deref().unwrap_or(""),
        );
    }
}

fn parse_slot(s: &str, blank_count: usize) -> Option<usize> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 && n <= blank_count => Some(n - 1),
        _ => None,
    }
}

pub fn main() -> error::Returns<()> {
    vega::init_logging();
    let args = std::env::args().collect::<Vec<_>>();
    let content_dir = content::ContentDir::new(args.get(1).map_or("content", String::as_str));
    let storage: Box<dyn progress::ProgressStorage> = match args.get(2) {
        Some(dir) => Box::new(progress::FileStorage::open(dir)?),
        None => Box::new(progress::MemoryStorage::new()),
    };
    let mut store = progress::ProgressStore::new(storage);
    let bible = bible::Bible::standard();
    let drag_puzzles = content_dir.all_drag_puzzles()?;
    let mut rng = rand_chacha::ChaCha20Rng::from_os_rng();
    let clock = game_timers::GameClock::new();

    let mut guess_session = None::<guess_game::GuessSession>;
    let mut pack_session = None::<guess_game::PackSession>;
    let mut drag_game = None::<drag_drop::DragDropGame>;
    // set once the finished drag game has been scored.
    let mut drag_scored = false;

    println!(
        "{} drag puzzles loaded from {}, help for help",
        drag_puzzles.len(),
        content_dir.root().display()
    );
    let mut rl = rlhelper::new_rl_editor(COMMANDS, &bible)?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            let strings = match shell_words::split(&line) {
                Ok(strings) => strings,
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                    continue;
                }
            };
            if strings.is_empty() {
                continue;
            }
            let rest = strings[1..].join(" ");
            if let Some(game) = &mut drag_game {
                game.tick(clock.now_ms());
            }
            match strings[0].as_str() {
                "help" => {
                    println!("{}", HELP);
                }
                "exit" => {
                    break;
                }
                "source" => {
                    if strings.len() > 1 {
                        match std::fs::read_to_string(&strings[1]) {
                            Ok(whole_file) => {
                                let v = cmd_stack.len();
                                for (line_num, line) in whole_file.lines().enumerate() {
                                    cmd_stack.push((
                                        line.to_string(),
                                        Some((strings[1].clone(), line_num + 1)),
                                    ));
                                }
                                cmd_stack[v..].reverse();
                            }
                            Err(err) => {
                                println!("cannot open file: {:?}", err);
                            }
                        }
                    } else {
                        println!("need another arg");
                    }
                }
                "books" => {
                    let category = bible
                        .categories()
                        .iter()
                        .find(|c| c.as_str().eq_ignore_ascii_case(&rest));
                    for book in bible.books() {
                        if rest.is_empty() || Some(&book.category()) == category {
                            println!(
                                "{:>2} {:<16} {:<4} {:<15} {} chapters",
                                book.order(),
                                book.name(),
                                book.testament().as_str(),
                                book.category().as_str(),
                                book.chapters()
                            );
                        }
                    }
                }
                "lookup" => match bible.lookup_book(&rest) {
                    Some(book) => println!("{}", serde_json::to_string(book)?),
                    None => println!("no such book {:?}", rest),
                },
                "parse" => match reference::parse(&bible, &rest) {
                    Some(r) => println!(
                        "{} (book {:?}, chapter {}, verse {}{})",
                        r,
                        r.raw_book_text,
                        r.chapter,
                        r.verse,
                        if r.is_recognized() { "" } else { ", unknown book" }
                    ),
                    None => println!("not a reference"),
                },
                "compare" => {
                    if strings.len() == 3 {
                        print_comparison(&comparison::compare(&bible, &strings[1], &strings[2]));
                    } else {
                        println!("need 2 quoted args");
                    }
                }
                "play" if strings.get(1).is_some_and(|s| s == "pack") => {
                    let Some(pack_id) = strings.get(2) else {
                        println!("need a pack id");
                        continue;
                    };
                    let session = content_dir.resolved_pack(pack_id)?.and_then(|pack| {
                        guess_game::PackSession::new(pack, strings.get(3).map(String::as_str))
                    });
                    match session {
                        Some(session) => {
                            let session = pack_session.insert(session);
                            guess_session = None;
                            println!(
                                "pack {}: {} puzzles",
                                session.pack().title,
                                session.total_puzzles()
                            );
                            print_puzzle_start(session.current(), Some(&*session));
                        }
                        None => println!("pack {} not found", pack_id),
                    }
                }
                "play" => {
                    let puzzle = match rest.as_str() {
                        "" | "random" => {
                            let exclude_id = current_guess_session(&pack_session, &guess_session)
                                .map(|s| s.puzzle().id.clone());
                            content_dir.random_puzzle(&mut rng, exclude_id.as_deref())?
                        }
                        "daily" => content_dir.daily_puzzle(chrono::Utc::now().date_naive())?,
                        id => content_dir.get_puzzle(id)?,
                    };
                    match puzzle {
                        Some(puzzle) => {
                            let session = guess_session.insert(guess_game::GuessSession::new(puzzle));
                            pack_session = None;
                            print_puzzle_start(session, None);
                        }
                        None => println!("puzzle not found"),
                    }
                }
                "guess" => {
                    let accepted = match (&mut pack_session, &mut guess_session) {
                        (Some(pack), _) => pack.guess(&bible, &rest).is_some(),
                        (None, Some(session)) => session.guess(&bible, &rest).is_some(),
                        (None, None) => {
                            println!("no puzzle, try play");
                            continue;
                        }
                    };
                    let Some(session) = current_guess_session(&pack_session, &guess_session) else {
                        continue;
                    };
                    if !accepted {
                        let try_next = if pack_session.is_some() { "next" } else { "play" };
                        println!("puzzle is over, try {}", try_next);
                        continue;
                    }
                    if let Some(r) = session.last_guess() {
                        print_comparison(r);
                    }
                    print_guess_outcome(session);
                    if let Some(pack) = &pack_session {
                        if pack.is_game_over() {
                            print_pack_summary(pack);
                        } else if session.outcome() != guess_game::Outcome::Playing {
                            println!("score {}, next for the next puzzle", pack.score());
                        }
                    }
                }
                "next" | "skip" => {
                    let Some(pack) = &mut pack_session else {
                        println!("no pack, try play pack id");
                        continue;
                    };
                    let moved = if strings[0] == "next" { pack.next() } else { pack.skip() };
                    if moved {
                        print_puzzle_start(pack.current(), Some(&*pack));
                    } else if pack.is_game_over() {
                        print_pack_summary(pack);
                    } else {
                        println!("finish or skip this puzzle first");
                    }
                }
                "history" => match current_guess_session(&pack_session, &guess_session) {
                    None => println!("no puzzle, try play"),
                    Some(session) => {
                        if rest.is_empty() {
                            for r in session.history_recent_first() {
                                print_comparison(r);
                            }
                        } else {
                            history_csv::write_history_to_path(&rest, session.history())?;
                            println!("wrote {} guesses to {}", session.history().len(), rest);
                        }
                    }
                },
                "drag" => {
                    let which = strings.get(1).map_or("random", String::as_str);
                    let mode = match strings.get(2) {
                        Some(s) => match s.parse::<mode_config::Mode>() {
                            Ok(mode) => mode,
                            Err(err) => {
                                println!("{}", err);
                                continue;
                            }
                        },
                        None => mode_config::Mode::Easy,
                    };
                    let picked = match which {
                        "random" => {
                            let exclude_id = drag_game.as_ref().map(|g| g.puzzle().id.clone());
                            content_dir.random_drag_puzzle(&mut rng, exclude_id.as_deref())?
                        }
                        "daily" => content_dir.daily_drag_puzzle(chrono::Utc::now().date_naive())?,
                        id => content_dir.get_drag_puzzle(id)?,
                    };
                    let Some(puzzle) = picked
                        .and_then(|picked| drag_puzzles.iter().find(|p| p.id == picked.id))
                    else {
                        println!("drag puzzle {} not found", which);
                        continue;
                    };
                    let puzzle_progress = store.get_puzzle_progress(&puzzle.id);
                    if !scoring::is_mode_unlocked(puzzle_progress.as_ref(), mode) {
                        println!(
                            "{} is locked for {}, finish {} first",
                            mode,
                            puzzle.id,
                            mode.prerequisite().map_or("", |m| m.as_str())
                        );
                        continue;
                    }
                    let game = drag_game.insert(drag_drop::DragDropGame::new(
                        puzzle,
                        mode,
                        &mut rng,
                        clock.now_ms(),
                    ));
                    drag_scored = false;
                    println!("{} ({})", puzzle.id, puzzle.difficulty);
                    print_board(game);
                }
                "place" | "remove" | "hint" | "submit" | "restart" | "board" => {
                    let Some(game) = &mut drag_game else {
                        println!("no drag puzzle, try drag");
                        continue;
                    };
                    match strings[0].as_str() {
                        "place" => {
                            let slot = strings.get(1).and_then(|s| parse_slot(s, game.blank_count()));
                            match (slot, strings.get(2)) {
                                (Some(slot), Some(word)) => match game.place_word(slot, word) {
                                    drag_drop::Placement::Ignored => println!("cannot place {}", word),
                                    drag_drop::Placement::Bounced => println!("{} is wrong there", word),
                                    _ => {}
                                },
                                _ => println!("need a slot from 1 to {} and a word", game.blank_count()),
                            }
                        }
                        "remove" => {
                            match strings.get(1).and_then(|s| parse_slot(s, game.blank_count())) {
                                Some(slot) => {
                                    if game.remove_word(slot).is_none() {
                                        println!("nothing to remove");
                                    }
                                }
                                None => println!("need a slot from 1 to {}", game.blank_count()),
                            }
                        }
                        "hint" => match game.use_hint() {
                            Some(slot) => println!("revealed slot {}", slot + 1),
                            None => println!("no hint available"),
                        },
                        "submit" => {
                            if !game.submit_answer() {
                                println!("fill every slot first (hard and extreme only)");
                            }
                        }
                        "restart" => {
                            game.reset(&mut rng, clock.now_ms());
                            drag_scored = false;
                        }
                        _ => {}
                    }
                    print_board(game);
                    if game.state().is_complete && !drag_scored {
                        drag_scored = true;
                        let result = game.finish(&mut store)?;
                        if result.is_correct {
                            println!(
                                "correct in {}s, accuracy {:.0}%, score {}{}",
                                result.time_seconds,
                                result.accuracy * 100.0,
                                result.final_score,
                                if result.is_new_best { ", new best" } else { "" }
                            );
                            if result.unlocked_next_mode {
                                if let Some(next) = scoring::next_mode(result.mode) {
                                    println!("{} unlocked", next);
                                }
                            }
                        } else {
                            println!("not quite, the answer was: {}", game.expected_words().join(" "));
                        }
                    }
                }
                "progress" => {
                    if rest.is_empty() {
                        let p = store.get_progress();
                        println!("{}", serde_json::to_string_pretty(&p.stats)?);
                        for puzzle_progress in p.puzzles.values() {
                            println!("{}", puzzle_progress.puzzle_id);
                            print_progress(puzzle_progress);
                        }
                    } else {
                        match store.get_puzzle_progress(&rest) {
                            Some(p) => print_progress(&p),
                            None => println!("no progress for {}", rest),
                        }
                    }
                }
                "clear-progress" => {
                    store.clear_progress()?;
                    println!("progress cleared");
                }
                _ => {
                    println!("invalid input, help for help");
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
