use crate::bootstrap;
use crate::cli::{Commands, GlobalFlags};

pub mod dataset;
pub mod generate;

pub fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => {
            let config = bootstrap::load_config(flags)?;
            generate::handle(&args, config, flags)
        }
        Commands::Dataset(args) => dataset::handle(&args),
    }
}
