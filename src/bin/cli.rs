//! This is the command line tool that runs an interactive prediction session.
//! Each line of input is either an observed multiplier or a command.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{Arg, ArgAction, Command};
use crashpredict::utils::limits::{DEFAULT_THRESHOLD, DEFAULT_WINDOW};
use crashpredict::{ModelConfig, ModelKind, PredictorError, Session};

use std::fs;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Enter a multiplier (e.g. 1.87) to add it to the history, or a command:
  model <frequency|moving-average|markov>   choose the prediction model
  window <3..15>                            set the moving average window
  history                                   show the recent history
  stats                                     show the prediction accuracy
  reset                                     clear the history and stats
  help                                      show this message
  quit                                      leave the session";

/// Print everything the user is shown after a change.
fn render(session: &mut Session) {
    println!("Model: {}", session.config().kind());
    println!("Recent History (last 10): {}", session.history());
    println!("{}", session.predict());
    println!("{}", session.tracker());
}

/// Handle a single line of user input. Returns false when the session ends.
fn handle_line(session: &mut Session, line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return true;
    };
    let arg = words.next();

    match (head.to_ascii_lowercase().as_str(), arg) {
        ("quit" | "exit" | "q", _) => return false,
        ("help" | "?", _) => println!("{}", HELP),
        ("history", _) => println!("{}", session.history()),
        ("stats", _) => println!("{}", session.tracker()),
        ("reset", _) => {
            session.reset();
            println!("History and stats reset.");
            render(session);
        }
        ("model", Some(name)) => match name.parse::<ModelKind>() {
            Ok(kind) => {
                let cfg = *session.config();
                match ModelConfig::new(kind, cfg.window(), cfg.threshold()) {
                    Ok(cfg) => {
                        session.select_model(cfg);
                        render(session);
                    }
                    Err(err) => println!("{}", err),
                }
            }
            Err(err) => println!("{}", err),
        },
        ("window", Some(size)) => {
            let cfg = *session.config();
            let parsed = size
                .parse::<usize>()
                .map_err(|_| PredictorError::InvalidInput(size.to_string()))
                .and_then(|w| ModelConfig::new(cfg.kind(), w, cfg.threshold()));
            match parsed {
                Ok(cfg) => {
                    session.select_model(cfg);
                    render(session);
                }
                Err(err) => println!("{}", err),
            }
        }
        ("model" | "window", None) => println!("{}", HELP),
        _ => match session.add_observation(line) {
            Ok(_) => {
                if let Some(value) = session.history().recent(1).first() {
                    println!("Added {} to history", value);
                }
                render(session);
            }
            Err(_) => println!("Invalid number format."),
        },
    }
    true
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The model used for prediction.")
                .value_parser(["frequency", "moving-average", "markov"])
                .num_args(1),
        )
        .arg(
            Arg::new("window")
                .short('w')
                .long("window")
                .value_name("N")
                .help("The moving average window (3 to 15)")
                .value_parser(clap::value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .value_name("X")
                .help("The multiplier that separates Under from Above")
                .value_parser(clap::value_parser!(f64))
                .num_args(1),
        )
        .arg(
            Arg::new("replay")
                .long("replay")
                .value_name("FILE")
                .help("Load observations from a file before the session starts")
                .num_args(1),
        )
        .arg(
            Arg::new("simulate")
                .long("simulate")
                .value_name("ROUNDS")
                .help("Run the model over synthetic rounds and report the accuracy")
                .value_parser(clap::value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("The seed of the simulation")
                .value_parser(clap::value_parser!(u64))
                .num_args(1),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .help("Exit after replay or simulation instead of reading input")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let kind = matches
        .get_one::<String>("model")
        .map(|name| name.parse::<ModelKind>())
        .unwrap_or(Ok(ModelKind::Frequency));
    let window = matches
        .get_one::<usize>("window")
        .copied()
        .unwrap_or(DEFAULT_WINDOW);
    let threshold = matches
        .get_one::<f64>("threshold")
        .copied()
        .unwrap_or(DEFAULT_THRESHOLD);

    let config = match kind.and_then(|kind| ModelConfig::new(kind, window, threshold)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    let mut session = Session::new(config);
    session.predict();

    if let Some(path) = matches.get_one::<String>("replay") {
        match fs::read_to_string(path) {
            Ok(text) => {
                let (accepted, skipped) = session.replay(&text);
                for err in skipped {
                    println!("Skipping: {}", err);
                }
                log::info!("Replayed {} observations from {}", accepted, path);
            }
            Err(err) => {
                eprintln!("Can't read {}: {}", path, err);
                std::process::exit(1);
            }
        }
    }

    if let Some(rounds) = matches.get_one::<usize>("simulate") {
        let seed = matches.get_one::<u64>("seed").copied().unwrap_or(0);
        if let Err(err) = session.simulate(*rounds, seed) {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }

    render(&mut session);
    if matches.get_flag("batch") {
        return;
    }

    println!("{}", HELP);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok(line)) => {
                if !handle_line(&mut session, &line) {
                    break;
                }
            }
            Some(Err(err)) => {
                log::error!("Can't read input: {}", err);
                break;
            }
            None => break,
        }
    }
}
