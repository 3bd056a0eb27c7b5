use clap::{Parser, Subcommand};
use hopwave::config;
use hopwave::events::{Action, ControlCommand, Target};
use hopwave::gui::app::AppModel;
use hopwave::sys::{runtime, server::SOCKET_PATH};
use relm4::prelude::*;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hopwave", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of the one in the user config directory
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Start an indicator in the running window
    Start {
        #[arg(short, long, value_enum, default_value_t)]
        target: Target,
    },
    /// Stop an indicator in the running window
    Stop {
        #[arg(short, long, value_enum, default_value_t)]
        target: Target,
    },
    /// Start a stopped indicator or stop a started one
    Toggle {
        #[arg(short, long, value_enum, default_value_t)]
        target: Target,
    },
    /// Write the default config file and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Start { target }) => send_command(ControlCommand::new(Action::Start, target)),
        Some(Commands::Stop { target }) => send_command(ControlCommand::new(Action::Stop, target)),
        Some(Commands::Toggle { target }) => {
            send_command(ControlCommand::new(Action::Toggle, target))
        }
        Some(Commands::InitConfig) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        None => run_gui(cli.config),
    }
}

fn run_gui(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = config::resolve_config_path(config_path)?;
    let config = config::load_or_default(&config_path);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, config_path.clone());

    // clap already consumed the arguments, keep GTK from parsing them again
    let app = RelmApp::new("org.hopwave.demo").with_args(Vec::new());

    app.run::<AppModel>((config, config_path, rx));
    Ok(())
}

fn send_command(command: ControlCommand) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to hopwave at {}: {}. Is hopwave running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}
