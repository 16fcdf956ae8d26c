use clap::Parser;
use fixgen_codegen::cli::Args;
use fixgen_codegen::error::{CliError, CliResult};
use fixgen_codegen::{emit, identifiers};
use fixgen_dictionary::Dictionary;
use slog::{crit, debug, info, o, Drain};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::process::ExitCode;

fn build_logger() -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    slog::Logger::root(drain, o!())
}

fn check_output_dir(path: &Path) -> CliResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(CliError::BadOutputDir(path.to_path_buf()))
    }
}

fn run(args: Args, log: &slog::Logger) -> CliResult<(std::path::PathBuf, std::path::PathBuf)> {
    check_output_dir(&args.header_dir)?;
    check_output_dir(&args.source_dir)?;

    let xml = fs::read_to_string(&args.input)?;
    let base_name = identifiers::base_name(&args.input);
    let prefix = identifiers::symbol_prefix(&base_name);

    let dict = Dictionary::from_quickfix_xml(&xml)?;
    debug!(log, "tags loaded"; "count" => dict.tags.len());
    debug!(log, "components and messages expanded"; "messages" => dict.messages.len());
    debug!(log, "groups pruned"; "count" => dict.groups.len());

    let header_text = emit::header::render(&dict, &prefix);
    let source_text = emit::source::render(&dict, &base_name, &prefix)?;

    let header_path = args.header_dir.join(format!("{base_name}.h"));
    let source_path = args.source_dir.join(format!("{base_name}.c"));

    {
        let mut f = fs::File::create(&header_path)?;
        f.write_all(header_text.as_bytes())?;
    }
    {
        let mut f = fs::File::create(&source_path)?;
        f.write_all(source_text.as_bytes())?;
    }

    info!(log, "wrote output"; "header" => %header_path.display(), "source" => %source_path.display());
    Ok((header_path, source_path))
}

fn main() -> ExitCode {
    let args = Args::parse();
    let log = build_logger();

    match run(args, &log) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            crit!(log, "fatal"; "error" => %err);
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
