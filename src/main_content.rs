// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use vega::{bible, content, error, reference};

// references that do not resolve are playable but can never be solved.
fn check_reference(bible: &bible::Bible<'_>, id: &str, text: &str) -> bool {
    match reference::parse(bible, text) {
        Some(r) if r.is_recognized() && r.verse != 0 => {
            if r.verses_in_chapter().is_some_and(|n| r.verse <= n as u32) {
                true
            } else {
                println!("{}: {:?} is out of range", id, text);
                false
            }
        }
        _ => {
            println!("{}: {:?} is not a full reference", id, text);
            false
        }
    }
}

fn check(content_dir: &content::ContentDir) -> error::Returns<()> {
    let bible = bible::Bible::standard();
    let puzzles = content_dir.all_puzzles()?;
    let drag_puzzles = content_dir.all_drag_puzzles()?;
    let packs = content_dir.all::<content::Pack>()?;
    let drag_packs = content_dir.all::<content::DragPack>()?;
    let mut bad = 0usize;
    for p in &puzzles {
        bad += !check_reference(&bible, &p.id, &p.reference) as usize;
    }
    for p in &drag_puzzles {
        bad += !check_reference(&bible, &p.id, &p.reference) as usize;
    }
    let resolved = content_dir.all_resolved_packs()?.len();
    let resolved_drag = content_dir.all_resolved_drag_packs()?.len();
    println!(
        "{} puzzles, {} packs ({} playable), {} drag puzzles, {} drag packs ({} playable), {} bad references",
        puzzles.len(),
        packs.len(),
        resolved,
        drag_puzzles.len(),
        drag_packs.len(),
        resolved_drag,
        bad,
    );
    Ok(())
}

fn main() -> error::Returns<()> {
    vega::init_logging();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 2 {
        println!(
            "args:
  content-dir check
    load everything, report malformed records and bad references
  content-dir daily [YYYY-MM-DD]
    show the daily image and drag puzzles (default today, utc)
  content-dir random [exclude-id]
    pick a random image and drag puzzle
  content-dir pack id
  content-dir drag-pack id
    show a pack with its puzzles resolved"
        );
        return Ok(());
    }
    let content_dir = content::ContentDir::new(&args[1]);
    match args[2].as_str() {
        "check" => check(&content_dir)?,
        "daily" => {
            let date = match args.get(3) {
                Some(s) => s.parse::<chrono::NaiveDate>()?,
                None => chrono::Utc::now().date_naive(),
            };
            println!("{}", date);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "puzzle": content_dir.daily_puzzle(date)?,
                    "dragPuzzle": content_dir.daily_drag_puzzle(date)?,
                }))?
            );
        }
        "random" => {
            let mut rng = rand_chacha::ChaCha20Rng::from_os_rng();
            let exclude_id = args.get(3).map(String::as_str);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "puzzle": content_dir.random_puzzle(&mut rng, exclude_id)?,
                    "dragPuzzle": content_dir.random_drag_puzzle(&mut rng, exclude_id)?,
                }))?
            );
        }
        "pack" if args.len() > 3 => match content_dir.resolved_pack(&args[3])? {
            Some(pack) => println!("{}", serde_json::to_string_pretty(&pack)?),
            None => println!("pack {} not found", args[3]),
        },
        "drag-pack" if args.len() > 3 => match content_dir.resolved_drag_pack(&args[3])? {
            Some(pack) => println!("{}", serde_json::to_string_pretty(&pack)?),
            None => println!("drag pack {} not found", args[3]),
        },
        _ => return Err("invalid argument".into()),
    }
    Ok(())
}
