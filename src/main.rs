use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = spit::cli::parse();
    app::run(args)
}
