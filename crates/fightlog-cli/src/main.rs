mod command;
mod plot;
mod report;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
