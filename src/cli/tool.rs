use anyhow::Result;
use clap::Args as ClapArgs;

use crate::probe::ProbeSpec;

#[derive(ClapArgs)]
pub struct Args {
    /// Executable name of the tool to probe
    pub name: String,

    /// Flag that makes the tool print version information [default: --version]
    #[arg(long, allow_hyphen_values = true)]
    pub arg: Option<String>,
}

pub fn run(args: Args) -> Result<()> {
    let spec = match args.arg {
        Some(arg) => ProbeSpec::with_arg(&args.name, arg),
        None => ProbeSpec::new(&args.name),
    };
    println!("{}", spec.run().render(&args.name));
    Ok(())
}
