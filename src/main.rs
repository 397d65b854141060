use std::io::{self, BufWriter};
use std::process;

use job_sorter::config::build_cli_command;
use job_sorter::{open_input, read_jobs, simulation, write_report, Config, ExitStatus, SchedulingError};

fn run(config: &Config) -> Result<(), SchedulingError> {
    let input = open_input(config.job_file.as_deref())?;
    let job_set = read_jobs(input)?;
    let schedule = simulation(job_set, config.verbosity)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &schedule, config.full_timeline)?;
    Ok(())
}

fn main() {
    // cargo run [job_file] [-v...] [--full-timeline]
    // example : cargo run < jobs.csv
    let matches = build_cli_command().get_matches();
    let config = Config::from_matches(&matches);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_status() as i32);
    }
    process::exit(ExitStatus::Success as i32);
}
