#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = theme_frankentui::run_from_env() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}
