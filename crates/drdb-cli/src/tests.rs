use super::*;

#[test]
fn parses_run_with_defaults() {
    let cli = Cli::try_parse_from(["drdb-cli", "run"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Run {
            input: None,
            output: None,
            no_bom: false,
            top: None,
        }
    ));
}

#[test]
fn parses_run_with_input_only() {
    let cli = Cli::try_parse_from(["drdb-cli", "run", "crawl.jl"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Run {
            input: Some(ref p),
            output: None,
            ..
        } if p == &PathBuf::from("crawl.jl")
    ));
}

#[test]
fn parses_run_with_input_and_output() {
    let cli = Cli::try_parse_from(["drdb-cli", "run", "crawl.jl", "doctors.csv"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Run {
            input: Some(_),
            output: Some(ref p),
            ..
        } if p == &PathBuf::from("doctors.csv")
    ));
}

#[test]
fn parses_run_flags() {
    let cli = Cli::try_parse_from(["drdb-cli", "run", "--no-bom", "--top", "10"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Run {
            no_bom: true,
            top: Some(10),
            ..
        }
    ));
}

#[test]
fn rejects_non_numeric_top() {
    assert!(Cli::try_parse_from(["drdb-cli", "run", "--top", "many"]).is_err());
}

#[test]
fn rejects_extra_positional_args() {
    assert!(Cli::try_parse_from(["drdb-cli", "run", "a.jl", "b.csv", "c"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["drdb-cli"]).is_err());
}
