//! The `zkdeploy` CLI: validate, inspect and scaffold zkSync toolchain configuration.

#[macro_use]
extern crate tracing;

use yansi::Paint;

mod args;
mod cmd;
mod opts;
mod utils;

fn main() {
    if let Err(err) = args::run() {
        eprintln!("{} {err:?}", "Error:".red().bold());
        std::process::exit(1);
    }
}
