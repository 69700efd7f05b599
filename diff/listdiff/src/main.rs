//! The executable for computing and applying list edit scripts.

use std::process::ExitCode;

use clap::Parser;
use listdiff_driver::Arguments;

fn main() -> ExitCode {
    env_logger::init();

    listdiff_driver::run(Arguments::parse())
}
