use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use dropcopy::commands::copy;
use dropcopy::config::Cli;
use dropcopy::{Config, ConfigLocator, DropCopyError};
use std::io::{self, Write};
use std::process;

/// Exit code for a malformed command line
const USAGE_EXIT_CODE: i32 = 1;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    // Best effort: a closed stdout must not turn into a panic.
    let _ = print_banner(&args);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            log::debug!("argument error: {err}");
            print_usage();
            process::exit(USAGE_EXIT_CODE);
        }
    };

    let code = match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            let code = err.exit_code().code();
            report(err);
            code
        }
    };

    let _ = io::stdout().flush();
    process::exit(code);
}

fn run(cli: Cli) -> Result<(), DropCopyError> {
    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    let locator = match &config.info_file {
        Some(info) => ConfigLocator::with_info_file(info),
        None => ConfigLocator::platform(),
    };

    copy::run(&config, &locator, io::stdout().lock())?;
    Ok(())
}

fn print_banner(args: &[String]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Beginning dropcopy v{}", dropcopy::VERSION)?;
    writeln!(out, "===============================")?;
    writeln!(out, "\tReceived: [{}]", args.join(", "))
}

fn print_usage() {
    eprintln!(
        "{}",
        style("Invalid number of arguments. Usage: dropcopy <Source> <Destination>")
            .red()
            .for_stderr()
    );
    eprintln!("\t<Source>: The full path of the directory to copy to Dropbox");
    eprintln!(
        "\t<Destination>: The relative path of the directory to copy to. (Relative to Dropbox)."
    );
}

fn report(err: DropCopyError) {
    if let DropCopyError::InvalidDropbox { searched } = &err {
        eprintln!("{}", style(&err).red().for_stderr());
        for path in searched {
            log::debug!("searched {}", path.display());
        }
        return;
    }

    // Full detail, including the chain of underlying causes.
    let detail = anyhow::Error::from(err);
    eprintln!("{}", style(format!("{detail:?}")).red().for_stderr());
}
