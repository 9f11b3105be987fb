use std::process;

fn main() {
    grocery_core::init();

    // An optional argument carries a share link (or bare encoded list) to
    // hydrate from instead of the saved file.
    let share_arg = std::env::args().nth(1);

    if let Err(err) = grocery_core::cli::run_cli(share_arg) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
