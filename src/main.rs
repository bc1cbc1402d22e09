use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use bytes::Bytes;
use clap::{Parser, Subcommand, ValueEnum};
use tokio_util::sync::CancellationToken;

use vidcode::adapters::cloudinary::CloudinaryTransport;
use vidcode::application::admin::AdminService;
use vidcode::application::playback::{player_url, PlaybackService};
use vidcode::application::preferences::Preferences;
use vidcode::application::registry::VideoRegistry;
use vidcode::config::AppConfig;
use vidcode::domain::i18n::{translate, Language, MessageKey};
use vidcode::domain::theme::Theme;
use vidcode::ports::transport::UploadSource;
use vidcode::FileStorageArea;

/// Register short videos and mint scannable playback links.
#[derive(Parser)]
#[command(name = "vidcode", version, about, long_about = None)]
struct Cli {
    /// Language for user-facing messages (falls back to VIDCODE_LANG,
    /// then English)
    #[arg(long, value_enum)]
    lang: Option<Language>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all registered videos, newest first
    List,
    /// Register a video by URL or by uploading a file
    Add {
        #[arg(long)]
        name: String,
        /// Direct media URL; when omitted the configured placeholder
        /// is used
        #[arg(long)]
        url: Option<String>,
        /// Local video file to upload to the media host
        #[arg(long, conflicts_with = "url")]
        file: Option<PathBuf>,
    },
    /// Flip a video's active flag
    Toggle { id: String },
    /// Resolve an id the way the player does and print the video
    Show { id: String },
    /// Print the absolute player URL a code image would encode
    Link { id: String },
    /// Show or change the stored theme preference
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeCommand>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeCommand {
    Light,
    Dark,
    Toggle,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let language = cli
        .lang
        .or_else(|| {
            env::var("VIDCODE_LANG")
                .ok()
                .and_then(|tag| Language::from_tag(&tag))
        })
        .unwrap_or_default();

    match run(cli.command, &config, language).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Command,
    config: &AppConfig,
    language: Language,
) -> Result<ExitCode, Box<dyn Error + Send + Sync>> {
    let area = FileStorageArea::new(&config.storage_dir);
    let t = |key| translate(language, key);

    match command {
        Command::List => {
            let registry = VideoRegistry::open(area).await?;
            println!("{}", t(MessageKey::ManageVideos));
            for video in registry.list().await? {
                let status = if video.is_active {
                    t(MessageKey::Active)
                } else {
                    t(MessageKey::Inactive)
                };
                println!("{:<30} {:<32} {}", video.name, video.id, status);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Add { name, url, file } => {
            let registry = VideoRegistry::open(area).await?;
            let transport = CloudinaryTransport::new(
                &config.cloudinary_cloud_name,
                &config.cloudinary_upload_preset,
            );
            let admin = AdminService::new(registry, transport, config.placeholder_video_url.clone());

            let record = match file {
                Some(path) => {
                    let content = Bytes::from(tokio::fs::read(&path).await?);
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| String::from("video"));
                    let cancel = CancellationToken::new();
                    let ctrl_c_cancel = cancel.clone();
                    tokio::spawn(async move {
                        if tokio::signal::ctrl_c().await.is_ok() {
                            ctrl_c_cancel.cancel();
                        }
                    });
                    println!("{}", t(MessageKey::Uploading));
                    admin
                        .register_from_file(
                            &name,
                            UploadSource { file_name, content },
                            cancel,
                            |pct| println!("  {}%", pct),
                        )
                        .await?
                }
                None => admin.register_from_url(&name, url.as_deref()).await?,
            };

            println!("{} {}", record.name, record.id);
            println!(
                "{} {}",
                t(MessageKey::VideoLink),
                player_url(&config.public_base_url, &record.id)?
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Toggle { id } => {
            let registry = VideoRegistry::open(area).await?;
            let transport = CloudinaryTransport::new(
                &config.cloudinary_cloud_name,
                &config.cloudinary_upload_preset,
            );
            let admin = AdminService::new(registry, transport, config.placeholder_video_url.clone());
            match admin.toggle_active(&id).await? {
                Some(video) => {
                    let status = if video.is_active {
                        t(MessageKey::Active)
                    } else {
                        t(MessageKey::Inactive)
                    };
                    println!("{} {}", video.name, status);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("{}", t(MessageKey::PlayerNotFound));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Show { id } => {
            let playback = PlaybackService::new(VideoRegistry::open(area).await?);
            match playback.resolve(&id).await? {
                Some(video) => {
                    println!("{}", video.name);
                    println!("{}", video.url);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("{}", t(MessageKey::PlayerNotFound));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Link { id } => {
            let registry = VideoRegistry::open(area).await?;
            match registry.get(&id).await? {
                Some(video) => {
                    println!("{}", t(MessageKey::ScanQrCode));
                    println!(
                        "{} {}",
                        t(MessageKey::VideoLink),
                        player_url(&config.public_base_url, &video.id)?
                    );
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("{}", t(MessageKey::PlayerNotFound));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Theme { mode } => {
            let preferences = Preferences::new(area);
            let theme = match mode {
                None => preferences.theme().await?.unwrap_or_default(),
                Some(ThemeCommand::Light) => {
                    preferences.set_theme(Theme::Light).await?;
                    Theme::Light
                }
                Some(ThemeCommand::Dark) => {
                    preferences.set_theme(Theme::Dark).await?;
                    Theme::Dark
                }
                Some(ThemeCommand::Toggle) => preferences.toggle_theme(Theme::default()).await?,
            };
            println!("{}", theme);
            Ok(ExitCode::SUCCESS)
        }
    }
}
