// src/bin/dotrank.rs
use clap::error::ErrorKind;
use clap::Parser;

use dotrank_core::cli::{handlers, Cli};
use dotrank_core::exit::DotRankExit;

fn main() -> DotRankExit {
    // Exit-code contract: 0 on success and on -h/--version, 1 on any
    // validation or I/O failure (clap's default of 2 is remapped).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return DotRankExit::Success;
        }
        Err(err) => {
            let _ = err.print();
            return DotRankExit::Error;
        }
    };

    DotRankExit::from(handlers::run(&cli))
}
