use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pluginctl::bump::{self, BumpOutcome};
use pluginctl::client::PluginClient;
use pluginctl::version::BumpMode;
use pluginctl::{lifecycle, manifest, ui};

#[derive(Parser)]
#[command(
    name = "pluginctl",
    about = "Manage a plugin's lifecycle against a remote server"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Deploy a plugin bundle and enable it
    #[command(arg_required_else_help = true)]
    Deploy {
        /// Path to the packaged bundle, e.g. dist/com.example.plugin-0.1.0.tar.gz
        bundle_path: PathBuf,
    },

    /// Disable the plugin
    Disable,

    /// Enable the plugin
    Enable,

    /// Disable and enable the plugin
    Reset,

    /// Bump the plugin version and open a release branch
    BumpVersion {
        /// Which version component to increment
        #[arg(value_enum)]
        mode: BumpMode,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = run(args.command) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Command) -> pluginctl::Result<()> {
    let cwd = std::env::current_dir()?;

    match command {
        Command::Deploy { bundle_path } => {
            let (manifest, _) = manifest::find_manifest(&cwd)?;
            let client = PluginClient::from_env()?;
            lifecycle::deploy(&client, &manifest.id, &bundle_path)
        }
        Command::Disable => {
            let (manifest, _) = manifest::find_manifest(&cwd)?;
            let client = PluginClient::from_env()?;
            lifecycle::disable(&client, &manifest.id)
        }
        Command::Enable => {
            let (manifest, _) = manifest::find_manifest(&cwd)?;
            let client = PluginClient::from_env()?;
            lifecycle::enable(&client, &manifest.id)
        }
        Command::Reset => {
            let (manifest, _) = manifest::find_manifest(&cwd)?;
            let client = PluginClient::from_env()?;
            lifecycle::reset(&client, &manifest.id)
        }
        Command::BumpVersion { mode } => {
            // Declining the diff is a soft exit, not an error
            let _outcome: BumpOutcome = bump::run_bump(&cwd, mode, &mut ui::confirm_action)?;
            Ok(())
        }
    }
}
