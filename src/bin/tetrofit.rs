//! Print every tiling of the 4x7 board by the seven tetrominoes.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use tetrofit_engine::{ReportError, SearchConfig, SearchEngine, SearchStats, SolutionReporter};
use tracing::{error, info};

fn tile<W: io::Write>(
    engine: &SearchEngine,
    reporter: &mut SolutionReporter<W>,
) -> Result<SearchStats, ReportError> {
    let stats = engine.run(reporter)?;
    reporter.flush()?;
    Ok(stats)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = SearchConfig::standard();
    let engine = SearchEngine::new(&config);
    let stdout = io::stdout();
    let mut reporter = SolutionReporter::new(BufWriter::new(stdout.lock()), config.board);

    match tile(&engine, &mut reporter) {
        Ok(stats) => {
            info!(board = %config.board, solutions = stats.solutions, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = err.exit_code(), "search aborted");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
