use clap::Parser;

use flames::app::{validate_names, App, ResultView};
use flames::engine::play_match;
use flames::ui::{plain_result_card, TuiManager};

#[derive(Parser, Debug)]
#[command(name = "flames")]
#[command(about = "Classic FLAMES compatibility game for the terminal")]
struct Args {
    /// First name (leave both names off to start the interactive UI)
    #[arg(requires = "name2")]
    name1: Option<String>,

    /// Second name
    name2: Option<String>,

    /// Print the breakdown and elimination steps
    #[arg(short, long)]
    steps: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match (&args.name1, &args.name2) {
        (Some(first), Some(second)) => run_once(first, second, args.steps),
        _ => run_tui(),
    }
}

fn run_once(first: &str, second: &str, steps: bool) -> Result<(), Box<dyn std::error::Error>> {
    validate_names(first, second)?;

    let report = play_match(first, second, steps);
    let view = ResultView::from_report(first, second, &report);
    println!("{}", plain_result_card(&view, steps));

    Ok(())
}

fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    let mut tui = TuiManager::new()?;

    // The TUI owns the terminal until the user quits
    tui.run_event_loop(&mut app)?;

    Ok(())
}
