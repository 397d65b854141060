use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::logging::verbosity_from_count;

/// Run options gathered from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub job_file: Option<PathBuf>,  // Read from stdin when absent
    pub verbosity: u8,              // Diagnostic level on stderr
    pub full_timeline: bool,        // Also print leading idle slots
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            job_file: matches.get_one::<PathBuf>("job_file").cloned(),
            verbosity: verbosity_from_count(matches.get_count("verbose")),
            full_timeline: matches.get_flag("full_timeline"),
        }
    }
}

pub fn build_cli_command() -> Command {
    Command::new("job-sorter")
        .version("0.1.0")
        .about("Schedules jobs shortest-remaining-time-first on a single timeline")

        .arg(Arg::new("job_file")
            .value_parser(clap::value_parser!(PathBuf))
            .help("Path to the job list (defaults to standard input)"))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Log scheduling decisions to standard error (repeat for more)"))

        .arg(Arg::new("full_timeline")
            .long("full-timeline")
            .action(ArgAction::SetTrue)
            .help("Print the schedule from time 0, including leading idle slots"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_reads_stdin() {
        let matches = build_cli_command().try_get_matches_from(vec!["job-sorter"]).unwrap();
        let config = Config::from_matches(&matches);

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_command_line_arguments() {
        let matches = build_cli_command()
            .try_get_matches_from(vec!["job-sorter", "jobs.csv", "-vv", "--full-timeline"])
            .unwrap();
        let config = Config::from_matches(&matches);

        assert_eq!(config.job_file, Some(PathBuf::from("jobs.csv")));
        assert_eq!(config.verbosity, 2);
        assert!(config.full_timeline);
    }

    #[test]
    fn test_verbosity_is_capped() {
        let matches = build_cli_command()
            .try_get_matches_from(vec!["job-sorter", "-vvvvv"])
            .unwrap();

        assert_eq!(Config::from_matches(&matches).verbosity, 3);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = build_cli_command().try_get_matches_from(vec!["job-sorter", "--workers", "4"]);
        assert!(result.is_err());
    }
}
