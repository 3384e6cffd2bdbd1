use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clex::{
    display_error, errors::errors::DriverError, init_tracing, lexer::lexer::tokenize, read_source,
    render_token_list, render_tokens, scan_errors,
};
use tracing::info;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 => repl(),
        2 => run_file(PathBuf::from(&args[1])),
        _ => Err(DriverError::Usage),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn repl() -> Result<(), DriverError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        if line.trim_end_matches(&['\r', '\n'][..]) == "exit()" {
            return Ok(());
        }

        write!(stdout, "{}", render_tokens(&line))?;
    }
}

fn run_file(path: PathBuf) -> Result<(), DriverError> {
    let source = read_source(&path)?;
    info!(path = %path.display(), bytes = source.len(), "loaded source file");

    let tokens = tokenize(&source);
    print!("{}", render_token_list(&tokens));

    let errors = scan_errors(&tokens);
    info!(tokens = tokens.len(), errors = errors.len(), "scan finished");

    if errors.is_empty() {
        return Ok(());
    }

    let file = path.as_os_str().to_string_lossy();
    for error in &errors {
        display_error(error, &source, &file);
    }

    Err(DriverError::ScanFailed {
        count: errors.len(),
    })
}
