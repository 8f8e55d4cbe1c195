//! vue-compile - compile Vue template ASTs.

use clap::Parser;
use miette::Result;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vue_compiler_cli::output::OutputFormatter;
use vue_compiler_cli::{orchestrator, Args, Config};

fn main() -> ExitCode {
    let args = Args::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = Config::load(args)?;
    let formatter = OutputFormatter::new(args.output);

    let (reports, summary) = orchestrator::run(&config);
    for report in reports {
        for line in formatter.format_file(&report) {
            println!("{line}");
        }
        if let Err(e) = report.result {
            eprintln!("{:?}", miette::Report::new(e));
        }
    }
    println!("{}", formatter.format_summary(&summary));

    let failed = summary.error_count > 0 || (args.fail_on_warning && summary.warning_count > 0);
    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
