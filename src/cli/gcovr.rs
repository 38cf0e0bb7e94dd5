use anyhow::Result;
use clap::Args as ClapArgs;

use crate::probe::KnownTool;

#[derive(ClapArgs, Default)]
pub struct Args {}

pub fn run(_args: Args) -> Result<()> {
    let tool = KnownTool::Gcovr;
    println!("{}", tool.spec().run().render(tool.command()));
    Ok(())
}
