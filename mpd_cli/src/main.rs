use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;

mod config;
mod output;

use crate::config::{AppConfig, ConfigManager};
use mpd_client_core::MpdClient;

#[derive(Parser)]
#[command(name = "mpdc")]
#[command(author, version, about = "MPD client - control a music player daemon", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show player status and the current song
    Status,

    /// Start playback, optionally at a queue position
    Play {
        /// Queue position to start at
        pos: Option<u32>,
    },

    /// Pause playback
    Pause,

    /// Toggle between play and pause
    Toggle,

    /// Stop playback
    Stop,

    /// Play the next song
    Next,

    /// Play the previous song
    Prev,

    /// Set the volume (0-100)
    Volume {
        volume: u8,
    },

    /// Add a URI to the queue
    Add {
        uri: String,
    },

    /// Remove the song at a queue position
    Del {
        pos: u32,
    },

    /// Clear the queue
    Clear,

    /// Show the queue
    Queue,

    /// List a directory of the music database
    Ls {
        uri: Option<String>,
    },

    /// Search the database (case-insensitive)
    Search {
        /// Tag to match (artist, album, title, ...)
        tag: String,
        /// Value to search for
        needle: String,
    },

    /// List distinct values of a tag
    List {
        tag: String,
        artist: Option<String>,
    },

    /// Trigger a database update
    Update {
        uri: Option<String>,
    },

    /// Show database statistics
    Stats,

    /// Show the configured audio outputs
    Outputs,

    /// Enable an audio output
    Enable {
        id: u32,
    },

    /// Disable an audio output
    Disable {
        id: u32,
    },

    /// List stored playlists
    Playlists,

    /// Append a stored playlist to the queue
    Load {
        name: String,
    },

    /// Save the queue as a stored playlist
    Save {
        name: String,
    },

    /// Wait for a change in one of the given subsystems
    Idle {
        subsystems: Vec<String>,
    },

    /// Show the server protocol version
    Version,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write the effective configuration to the config file
    Init,
    /// Show the config file path
    Path,
    /// Read a configuration value (dot notation)
    Get { key: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.debug {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.init();

    match cli.command {
        Commands::Config { command } => run_config(command),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        command => {
            let app_config = ConfigManager::new().load()?;
            run_command(command, &app_config).await
        }
    }
}

fn run_config(command: ConfigCommand) -> Result<()> {
    let manager = ConfigManager::new();
    match command {
        ConfigCommand::Init => {
            manager.init()?;
            println!("Wrote {}", manager.get_config_path().display());
        }
        ConfigCommand::Path => println!("{}", manager.get_config_path().display()),
        ConfigCommand::Get { key } => println!("{}", manager.get(&key)?),
    }
    Ok(())
}

async fn run_command(command: Commands, app_config: &AppConfig) -> Result<()> {
    let color = app_config.output.color_enabled;
    let mut client = MpdClient::connect(&app_config.connection)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to MPD at {}:{}",
                app_config.connection.host, app_config.connection.port
            )
        })?;

    match command {
        Commands::Status => {
            let song = client.currentsong().await?;
            if !song.is_empty() {
                println!("{}", output::format_song(&song, color));
            }
            let status = client.status().await?;
            output::print_map(&status, color);
        }
        Commands::Play { pos } => client.play(pos).await?,
        Commands::Pause => client.pause(true).await?,
        Commands::Toggle => {
            let status = client.status().await?;
            match status.get("state").map(String::as_str) {
                Some("play") => client.pause(true).await?,
                Some("pause") => client.pause(false).await?,
                _ => client.play(None).await?,
            }
        }
        Commands::Stop => client.stop().await?,
        Commands::Next => client.next().await?,
        Commands::Prev => client.previous().await?,
        Commands::Volume { volume } => client.setvol(volume).await?,
        Commands::Add { uri } => client.add(&uri).await?,
        Commands::Del { pos } => client.delete(pos).await?,
        Commands::Clear => client.clear().await?,
        Commands::Queue => {
            let songs = client.playlistinfo(None).await?;
            output::print_songs(&songs, color);
        }
        Commands::Ls { uri } => {
            let entries = client.lsinfo(uri.as_deref()).await?;
            for entry in &entries {
                if let Some(dir) = entry.get("directory") {
                    if color {
                        println!("{}", dir.blue().bold());
                    } else {
                        println!("{dir}");
                    }
                } else if let Some(file) = entry.get("file") {
                    println!("{file}");
                } else if let Some(playlist) = entry.get("playlist") {
                    println!("{playlist}");
                }
            }
        }
        Commands::Search { tag, needle } => {
            let songs = client.search(&tag, &needle).await?;
            output::print_songs(&songs, color);
        }
        Commands::List { tag, artist } => {
            for value in client.list(&tag, artist.as_deref()).await? {
                println!("{value}");
            }
        }
        Commands::Update { uri } => {
            let reply = client.update(uri.as_deref()).await?;
            if let Some(job) = reply.get("updating_db") {
                println!("Update job {job} started");
            }
        }
        Commands::Stats => {
            let stats = client.stats().await?;
            output::print_map(&stats, color);
        }
        Commands::Outputs => {
            for out in client.outputs().await? {
                let id = out.get("outputid").map(String::as_str).unwrap_or("?");
                let name = out.get("outputname").map(String::as_str).unwrap_or("?");
                let enabled = out.get("outputenabled").map(String::as_str) == Some("1");
                let state = if enabled { "enabled" } else { "disabled" };
                println!("Output {id} ({name}) is {state}");
            }
        }
        Commands::Enable { id } => client.enableoutput(id).await?,
        Commands::Disable { id } => client.disableoutput(id).await?,
        Commands::Playlists => {
            for playlist in client.listplaylists().await? {
                if let Some(name) = playlist.get("playlist") {
                    println!("{name}");
                }
            }
        }
        Commands::Load { name } => client.load(&name).await?,
        Commands::Save { name } => client.save(&name).await?,
        Commands::Idle { subsystems } => {
            let subsystems: Vec<&str> = subsystems.iter().map(String::as_str).collect();
            for changed in client.idle(&subsystems).await? {
                println!("{changed}");
            }
        }
        Commands::Version => {
            println!("mpd {}", client.server_version().unwrap_or("unknown"));
        }
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!("handled in main"),
    }

    Ok(())
}
