use std::io;

use model_unlocker::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    process_args(args)
}
