extern crate clap;
use std::fs::File;

use clap::{App, Arg};
use tracing::Level;
use wordsearch::{score_words, Board, Lexicon, PathSearch, DEFAULT_MIN_WORD_LENGTH};

fn main() -> Result<(), String> {
    let matches = App::new("wordsearch")
        .arg(
            Arg::with_name("lexicon")
                .short("l")
                .long("lexicon")
                .value_name("FILE")
                .help("Word list, whitespace separated")
                .required(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .help("Read the word list as a JSON array and print the board as JSON"),
        )
        .arg(
            Arg::with_name("board")
                .short("b")
                .long("board")
                .value_name("TILES")
                .help("Row-major tiles separated by whitespace, e.g. \"E E C A A L E P ...\""),
        )
        .arg(
            Arg::with_name("min-length")
                .short("m")
                .long("min-length")
                .value_name("N")
                .help("Minimum word length"),
        )
        .arg(
            Arg::with_name("word")
                .short("w")
                .long("word")
                .value_name("WORD")
                .help("Only look up this word"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .takes_value(false),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let json = matches.is_present("json");

    let lexicon = matches.value_of("lexicon").expect("lexicon is required");
    let lexicon = if json {
        let file = File::open(lexicon).map_err(|e| e.to_string())?;
        Lexicon::from_json_reader(file)
    } else {
        Lexicon::load(lexicon)
    }
    .map_err(|e| e.to_string())?;

    let board = match matches.value_of("board") {
        Some(tiles) => Board::parse(tiles).map_err(|e| e.to_string())?,
        None => Board::default(),
    };

    let min_length = match matches.value_of("min-length") {
        Some(min_length) => min_length
            .parse()
            .map_err(|_| format!("Failed to parse minimum length '{}'", min_length))?,
        None => DEFAULT_MIN_WORD_LENGTH,
    };

    if json {
        println!("{}", serde_json::to_string(&board).map_err(|e| e.to_string())?);
    } else {
        println!("{}", board);
    }

    let search = PathSearch::new(&board, &lexicon);

    if let Some(word) = matches.value_of("word") {
        let path = search.find_path(word).map_err(|e| e.to_string())?;
        if path.is_empty() {
            println!("{} is not on the board", word);
        } else {
            println!("{}: {:?}", word, path);
        }
        return Ok(());
    }

    let found = search.find_all_words(min_length).map_err(|e| e.to_string())?;
    for (word, path) in &found {
        println!("{}: {:?}", word, path);
    }

    let score = score_words(&search, found.keys(), min_length).map_err(|e| e.to_string())?;
    println!("Found {} words, score {}", found.len(), score);

    Ok(())
}
