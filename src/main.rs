use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use log::info;
use simple_lexer::{display_error, lexer::lexer::Lexer};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file | ->", args[0]);
        return ExitCode::from(2);
    }

    let file_path = PathBuf::from(&args[1]);
    let reader: Box<dyn BufRead> = if args[1] == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        match File::open(&file_path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Failed to read {}: {}", file_path.display(), e);
                return ExitCode::from(2);
            }
        }
    };

    let start = Instant::now();

    let mut lexer = match Lexer::from_reader(reader) {
        Ok(lexer) => lexer,
        Err(error) => {
            display_error(&error, &file_path);
            return ExitCode::FAILURE;
        }
    };

    let mut count = 0;
    while !lexer.is_eof() {
        println!("{}", lexer.token());
        count += 1;

        if let Err(error) = lexer.next_token() {
            display_error(&error, &file_path);
            return ExitCode::FAILURE;
        }
    }

    info!("Tokenized {} tokens in {:?}", count, start.elapsed());
    ExitCode::SUCCESS
}
