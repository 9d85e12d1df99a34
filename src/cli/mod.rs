use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use crate::config::Config;
use crate::core::{
    format_language_list, format_transcript, select_transcript, Result, TranscriptSource,
    VideoId,
};
use crate::extractors::YouTubeTranscriptSource;
use crate::utils::write_output;

#[derive(Parser)]
#[command(name = "yt-transcript")]
#[command(about = "Download YouTube video transcripts with smart language fallback")]
#[command(version)]
#[command(after_help = "Examples:
  yt-transcript https://www.youtube.com/watch?v=dQw4w9WgXcQ
  yt-transcript dQw4w9WgXcQ --lang hu
  yt-transcript https://youtu.be/dQw4w9WgXcQ --output transcript.txt
  yt-transcript dQw4w9WgXcQ --list-languages")]
pub struct Cli {
    /// YouTube video URL or video ID
    #[arg(value_name = "URL")]
    pub url: String,

    /// Language code (e.g., en, hu, de, fr)
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// List available transcript languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Save transcript to file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML file with HTTP client settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        // Reject bad input before touching the network
        let video = VideoId::extract(&self.url)?;

        // Build the HTTP source from config
        let config = Config::load(self.config.as_deref())?;
        let source = YouTubeTranscriptSource::new(&config)?;

        self.run_with_source(&source, &video).await
    }

    pub async fn run_with_source(
        &self,
        source: &dyn TranscriptSource,
        video: &VideoId,
    ) -> Result<()> {
        // Listing mode prints to stdout only, --output does not apply
        if self.list_languages {
            let tracks = source.list(video).await?;
            return write_output(&format_language_list(video, &tracks), None).await;
        }

        info!("Fetching transcript for {} via {}", video, source.name());
        let selection = select_transcript(source, video, self.lang.as_deref()).await?;

        // Format fully before writing so errors never leave partial output
        let output = format_transcript(&selection);

        write_output(&output, self.output.as_deref()).await
    }
}
