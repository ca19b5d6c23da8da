//! Entrypoint.

fn main() {
    if let Err(err) = contribot::initialize_command_line() {
        eprintln!("ERROR: {:?}", err);
        std::process::exit(1);
    }
}
