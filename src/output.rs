use owo_colors::OwoColorize;

/// Small wrapper around stdout printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
///
/// Warnings go to stdout as well: unresolved-token warnings are part of the
/// scriptable output stream, not diagnostics. Fatal diagnostics reach stderr
/// through the error return path instead.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        println!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        println!("warn: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as listings and "Moving: X -> Y" which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
