// Copyright (C) 2020-2026 Andy Kurnia.

use vega::{bible, comparison, error, mode_config, reference, scoring};

// answer: the reference being guessed, e.g. "John 3:16".
// guesses: graded in order against the answer.
// parse: references to parse on their own.
// score: one drag-drop score computation.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Question {
    answer: Option<String>,
    #[serde(default)]
    guesses: Vec<String>,
    #[serde(default)]
    parse: Vec<String>,
    score: Option<ScoreQuestion>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreQuestion {
    mode: mode_config::Mode,
    time_seconds: u64,
    accuracy: f64,
    #[serde(default)]
    hints_used: u32,
    par_time: Option<u32>,
}

fn read_question(arg: &str) -> error::Returns<String> {
    if arg == "-" {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else if arg.trim_start().starts_with('{') {
        Ok(arg.to_string())
    } else {
        Ok(std::fs::read_to_string(arg)?)
    }
}

fn answer(bible: &bible::Bible<'_>, question: &Question) -> error::Returns<serde_json::Value> {
    let mut ret = serde_json::Map::new();
    if !question.guesses.is_empty() {
        let Some(answer) = &question.answer else {
            vega::return_error!("guesses need an answer".into());
        };
        let mut comparisons = Vec::with_capacity(question.guesses.len());
        for guess in &question.guesses {
            let result = comparison::compare(bible, guess, answer);
            let mut v = serde_json::to_value(&result)?;
            v["isCorrect"] = serde_json::json!(result.is_correct());
            comparisons.push(v);
        }
        ret.insert("comparisons".into(), serde_json::Value::Array(comparisons));
    }
    if !question.parse.is_empty() {
        let parsed = question
            .parse
            .iter()
            .map(|text| match reference::parse(bible, text) {
                Some(r) => serde_json::json!({
                    "text": text,
                    "book": r.book_name(),
                    "chapter": r.chapter,
                    "verse": r.verse,
                    "recognized": r.is_recognized(),
                    "canonical": r.to_string(),
                }),
                None => serde_json::json!({ "text": text, "book": null }),
            })
            .collect::<Vec<_>>();
        ret.insert("parsed".into(), serde_json::Value::Array(parsed));
    }
    if let Some(score) = &question.score {
        if !(0.0..=1.0).contains(&score.accuracy) {
            vega::return_error!(format!("accuracy {} is not within 0 to 1", score.accuracy));
        }
        ret.insert(
            "score".into(),
            serde_json::json!({
                "mode": score.mode,
                "finalScore": scoring::calculate_score(
                    score.mode,
                    score.time_seconds,
                    score.accuracy,
                    score.hints_used,
                    score.par_time,
                ),
                "nextMode": scoring::next_mode(score.mode),
            }),
        );
    }
    if ret.is_empty() {
        vega::return_error!("nothing to do: give guesses, parse, or score".into());
    }
    Ok(serde_json::Value::Object(ret))
}

fn main() -> error::Returns<()> {
    vega::init_logging();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        println!(
            "args:
  question.json
    answer the question in the file
  -
    read the question from stdin
  '{{\"answer\":\"John 3:16\",\"guesses\":[\"jn 3:14\",\"Luke 3:16\"]}}'
    answer the question given inline
  question keys:
    answer, guesses, parse, score {{mode, timeSeconds, accuracy, hintsUsed, parTime}}"
        );
        return Ok(());
    }
    let question = serde_json::from_str::<Question>(&read_question(&args[1])?)?;
    let bible = bible::Bible::standard();
    let ret = answer(&bible, &question)?;
    println!("{}", serde_json::to_string_pretty(&ret)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(json: &str) -> error::Returns<serde_json::Value> {
        answer(&bible::Bible::standard(), &serde_json::from_str(json)?)
    }

    #[test]
    fn grades_guesses() {
        let v = ask(r#"{"answer":"John 3:16","guesses":["jn 3:16","Luke 3:16"]}"#).unwrap();
        assert_eq!(v["comparisons"][0]["isCorrect"], true);
        assert_eq!(v["comparisons"][1]["book"]["status"], "close");
        assert_eq!(v["comparisons"][1]["testament"]["value"], "New");
        assert_eq!(v["comparisons"][1]["isCorrect"], false);
    }

    #[test]
    fn scores_and_parses() {
        let v = ask(r#"{"score":{"mode":"easy","timeSeconds":20,"accuracy":1.0},"parse":["ps 23","zzz"]}"#)
            .unwrap();
        assert_eq!(v["score"]["finalScore"], 550);
        assert_eq!(v["score"]["nextMode"], "medium");
        assert_eq!(v["parsed"][0]["canonical"], "Psalms 23");
        assert!(v["parsed"][1]["book"].is_null());
    }

    #[test]
    fn rejects_empty_or_inconsistent_questions() {
        assert!(ask("{}").is_err());
        assert!(ask(r#"{"guesses":["John 3:16"]}"#).is_err());
        assert!(ask(r#"{"score":{"mode":"hard","timeSeconds":1,"accuracy":2}}"#).is_err());
        assert!(ask(r#"{"score":{"mode":"brutal","timeSeconds":1,"accuracy":1}}"#).is_err());
    }
}
