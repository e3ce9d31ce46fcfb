use dotenv::dotenv;
use rogerian::runner::{config::Config, runner::ConversationRunner};
use std::{env, error::Error, io::{stdin, stdout, Write}};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const GREETING: &str = "Hello. I am a Rogerian responder. Tell me what is on your mind.";

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let mut runner = ConversationRunner::from_config(&config)?;
    println!("{}", GREETING);

    loop {
        print!("> ");
        let Some(line) = read_line()? else {
            break;
        };
        match runner.run(&line) {
            Ok(turn) => {
                println!("{}", turn.text());
                if turn.finished {
                    break;
                }
            },
            Err(error) => {
                warn!(%error, "could not answer line");
                println!("{}", error);
            },
        }
    }

    Ok(())
}

// Logging stays off unless RUST_LOG is set
fn init_tracing() {
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Reads one line from stdin without its line ending. `None` at end of input.
fn read_line() -> Result<Option<String>, Box<dyn Error>> {
    let mut s = String::new();
    stdout().flush()?;
    if stdin().read_line(&mut s)? == 0 {
        return Ok(None);
    }
    if let Some('\n') = s.chars().next_back() {
        s.pop();
    }
    if let Some('\r') = s.chars().next_back() {
        s.pop();
    }
    Ok(Some(s))
}
