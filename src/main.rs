mod cli;
mod date;
mod render;
mod store;
mod weekday;

fn main() -> anyhow::Result<()> {
    cli::run()
}
