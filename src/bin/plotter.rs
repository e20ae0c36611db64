use std::process::ExitCode;

use particle_plot::plotter::{self, Command, PlotParams};

fn main() -> ExitCode {
    env_logger::init();

    let expression = match plotter::parse_args(std::env::args()) {
        Command::Plot(expression) => expression,
        Command::Usage(usage) => {
            println!("{usage}");
            return ExitCode::SUCCESS;
        }
    };

    match plotter::run(expression, PlotParams::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
