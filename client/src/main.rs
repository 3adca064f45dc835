use std::{env, process::exit, time::Duration};

use colored::Colorize;
use liblife::{
    grid::{Grid, DEFAULT_THRESHOLD},
    render::render,
    Simulation,
};
use ticker::FrameSleeper;

mod cli;
mod ticker;

const FRAME_INTERVAL: Duration = Duration::from_millis(750);

fn main() {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "life".to_owned());

    let simulation = match setup(args) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("{}", format!("! {e:#}").red());
            cli::print_usage(&program);
            exit(1);
        }
    };

    run(simulation);
}

fn setup<I>(args: I) -> anyhow::Result<Simulation>
where
    I: Iterator<Item = String>,
{
    let config = cli::parse_args(args)?;

    let grid = match config.bits {
        Some(bits) => Grid::from_bitstring(&bits, config.width, config.height)?,
        None => Grid::random(
            &mut rand::rng(),
            config.width,
            config.height,
            DEFAULT_THRESHOLD,
        )?,
    };

    Ok(Simulation::new(grid))
}

fn run(mut simulation: Simulation) -> ! {
    let mut sleeper = FrameSleeper::new(FRAME_INTERVAL);

    loop {
        sleeper.wait();
        clear_console();
        println!("{}", render(&simulation.grid));
        simulation.tick();
    }
}

/// CSI 2J clears the screen, CSI H homes the cursor.
fn clear_console() {
    print!("\x1b[2J\x1b[H");
}
