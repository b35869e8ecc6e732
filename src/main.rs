//! gdmodel - inspect GuardDuty API shapes and enumerations

use clap::{CommandFactory, Parser};

mod cli;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, CommandContext, Commands, ConfigCommands, EnumCommands, ShapeCommands};
use guardduty_model::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Initialize env_logger; `RUST_LOG` wins over the `--debug` default
fn init_logging(debug: bool) {
    let default_filter = if debug { "guardduty_model=debug,gdmodel=debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Version => {
            println!("gdmodel version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "gdmodel", &mut std::io::stdout());
            Ok(())
        }
        Commands::Status => {
            let ctx = CommandContext::new(&opts)?;
            cli::status::run(&ctx);
            Ok(())
        }
        Commands::Enum(enum_cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match enum_cmd {
                EnumCommands::List => cli::enums::list(&ctx),
                EnumCommands::Values { name } => cli::enums::values(&ctx, &name),
                EnumCommands::Parse { name, value } => cli::enums::parse(&ctx, &name, &value),
            }
        }
        Commands::Shape(shape_cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match shape_cmd {
                ShapeCommands::List => cli::shape::list(&ctx),
                ShapeCommands::Show { name, file } => {
                    cli::shape::show(&ctx, &name, file.as_deref())
                }
                ShapeCommands::Compare { name, left, right } => {
                    cli::shape::compare(&ctx, &name, &left, &right)
                }
            }
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cli::config::show(&CommandContext::new(&opts)?),
            ConfigCommands::SetFormat { format } => {
                cli::config::set_format(&CommandContext::for_update(&opts)?, format)
            }
        },
    }
}
