use std::io::{BufRead, IsTerminal, Write};

use clap::Parser;
use hacksim::{CommandResult, Session};

#[derive(Parser)]
#[command(name = "hacksim")]
#[command(about = "A simulated Unix terminal for a hacking game")]
#[command(version)]
struct Cli {
    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Output results as JSON (success, output, error)
    #[arg(long = "json")]
    json: bool,

    /// Script file with one command per line
    #[arg()]
    script_file: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let mut session = Session::new();

    if let Some(line) = cli.command {
        let result = session.execute(&line);
        emit(&result, cli.json);
        return;
    }

    if let Some(ref file) = cli.script_file {
        let script = match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        };
        for line in script.lines() {
            if !session.is_active() {
                break;
            }
            let result = session.execute(line);
            emit(&result, cli.json);
        }
        return;
    }

    // Interactive loop over stdin. A failed command never ends the loop;
    // only 'exit' or end of input does.
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    loop {
        if interactive {
            let prompt = format!(
                "{}@hacksim:{}$ ",
                session.filesystem().current_user,
                session.filesystem().current_dir
            );
            print!("{}", prompt);
            let _ = std::io::stdout().flush();
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let result = session.execute(line.trim_end_matches(['\r', '\n']));
        emit(&result, cli.json);

        if !session.is_active() {
            break;
        }
    }

    if session.is_won() {
        println!(
            "All puzzles completed. Final score: {} points",
            session.total_score()
        );
    }
}

fn emit(result: &CommandResult, json: bool) {
    if json {
        match serde_json::to_string(result) {
            Ok(encoded) => println!("{}", encoded),
            Err(e) => eprintln!("Error: cannot encode result: {}", e),
        }
        return;
    }
    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    if !result.error.is_empty() {
        eprintln!("{}", result.error);
    }
}
