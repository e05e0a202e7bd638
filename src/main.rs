// Algotty: step-by-step algorithm player for the terminal

mod code;
mod input;
mod playback;
mod runner;
mod step;
mod ui;

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use input::validate::{self, DataType};
use input::{Dataset, ValidateError};
use playback::PlaybackController;
use runner::{Algorithm, FibMethod, SortDirection, SortKind};
use ui::App;

fn usage(program: &str) {
    eprintln!("Usage: {} <algorithm> <input> [options]", program);
    eprintln!();
    eprintln!("Algorithms:");
    eprintln!("  bubble|quick|merge|heap <values>    comma-separated, e.g. 5,3,8,1");
    eprintln!("      --desc                          sort descending");
    eprintln!("      --strings                       compare lexicographically");
    eprintln!("  bfs|dfs <nodes> <edges>             e.g. 4 0-1,1-2,2-3");
    eprintln!("      --start N                       start node (default 0)");
    eprintln!("      --directed                      treat edges as directed");
    eprintln!("  bst <keys> --op insert|search --key N");
    eprintln!("  knapsack <items> --capacity N       items as name:weight:value,...");
    eprintln!("  fib <n> [--method M]                iterative|recursive|memoized|dp");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --speed MS    playback interval in ms, 100-2000 (default 500)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} bubble 5,3,8,1", program);
    eprintln!("  {} bfs 4 0-1,1-2,2-3 --start 0", program);
    eprintln!("  {} knapsack gold:10:60,silver:20:100,bronze:30:120 --capacity 50", program);
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn parse_index(token: &str) -> Result<usize, ValidateError> {
    token.parse().map_err(|_| ValidateError::BadNumber {
        token: token.to_string(),
    })
}

/// Builds the validated dataset and algorithm selection from argv.
fn build(command: &str, args: &[String]) -> Result<(Dataset, Algorithm), ValidateError> {
    match command {
        "bubble" | "quick" | "merge" | "heap" => {
            let kind = match command {
                "bubble" => SortKind::Bubble,
                "quick" => SortKind::Quick,
                "merge" => SortKind::Merge,
                _ => SortKind::Heap,
            };
            let data_type = if has_flag(args, "--strings") {
                DataType::Text
            } else {
                DataType::Number
            };
            let direction = if has_flag(args, "--desc") {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            let values = validate::parse_sequence(&args[2], data_type)?;
            Ok((
                Dataset::Sequence(values),
                Algorithm::Sort { kind, direction },
            ))
        }
        "bfs" | "dfs" => {
            let nodes = parse_index(&args[2])?;
            let edges_raw = args
                .get(3)
                .map(|s| s.as_str())
                .filter(|s| !s.starts_with("--"))
                .unwrap_or("");
            let directed = has_flag(args, "--directed");
            let graph = validate::parse_graph(nodes, edges_raw, directed)?;
            let start = match flag_value(args, "--start") {
                Some(token) => parse_index(token)?,
                None => 0,
            };
            validate::validate_start(start, graph.nodes)?;
            let algorithm = if command == "bfs" {
                Algorithm::Bfs { start }
            } else {
                Algorithm::Dfs { start }
            };
            Ok((Dataset::Graph(graph), algorithm))
        }
        "bst" => {
            let keys = validate::parse_bst_keys(&args[2])?;
            let op_token = flag_value(args, "--op").unwrap_or("search");
            let key_token = flag_value(args, "--key").ok_or(ValidateError::EmptyInput {
                what: "target key (--key)",
            })?;
            let op = validate::parse_bst_op(op_token, key_token)?;
            Ok((Dataset::BstKeys(keys), Algorithm::Bst { op }))
        }
        "knapsack" => {
            let capacity = flag_value(args, "--capacity").ok_or(ValidateError::EmptyInput {
                what: "capacity (--capacity)",
            })?;
            let knapsack = validate::parse_knapsack(&args[2], capacity)?;
            Ok((Dataset::Knapsack(knapsack), Algorithm::Knapsack))
        }
        "fib" => {
            let n = validate::parse_fib_n(&args[2])?;
            let method = match flag_value(args, "--method") {
                Some(token) => validate::parse_fib_method(token)?,
                None => FibMethod::Iterative,
            };
            Ok((Dataset::Fib { n }, Algorithm::Fibonacci { method }))
        }
        other => Err(ValidateError::BadSelector {
            what: "algorithm",
            token: other.to_string(),
            allowed: "bubble, quick, merge, heap, bfs, dfs, bst, knapsack, fib",
        }),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("algotty")
        .to_string();

    if args.len() < 3 {
        eprintln!("Error: missing algorithm or input");
        eprintln!();
        usage(&program);
        process::exit(1);
    }

    let (dataset, algorithm) = match build(args[1].as_str(), &args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Input error: {}", e);
            eprintln!();
            usage(&program);
            process::exit(1);
        }
    };

    let speed = match flag_value(&args, "--speed") {
        Some(token) => match validate::parse_speed(token) {
            Ok(speed) => speed,
            Err(e) => {
                eprintln!("Input error: {}", e);
                process::exit(1);
            }
        },
        None => 500,
    };

    eprintln!("Generating steps for {}...", algorithm.name());
    let mut controller = PlaybackController::new(speed);
    if let Err(e) = controller.generate(&dataset, algorithm) {
        // A runner defect, not a user mistake; exits distinctly from
        // validation failures.
        eprintln!("Internal error: {}", e);
        process::exit(2);
    }
    let total = controller.sequence().map(|s| s.len()).unwrap_or(0);
    eprintln!("Generated {} steps.", total);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller, algorithm);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
