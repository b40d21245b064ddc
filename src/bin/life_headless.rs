//! Console runner: prints successive generations as text

use life_editor::{AppError, options::Args};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let Some(args) = Args::from_env("life_headless")? else {
        return Ok(());
    };
    let config = args.settings()?;
    let generations = args.generations()?;

    let mut board = args.initial_board(&config)?;
    for generation in 0..=generations {
        if generation > 0 {
            board = board.next_board();
            println!();
        }
        println!("generation {generation} (population {})", board.population());
        println!("{board}");
    }
    Ok(())
}
