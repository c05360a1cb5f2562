use super::*;

#[derive(Debug, Parser)]
#[command(about = "Terminal client for a pushed story feed", version)]
pub(crate) struct Arguments {
  /// Write tracing output to this file. Without it, logs are discarded so
  /// they never bleed into the alternate screen.
  #[arg(env = "ESLNEWS_LOG_FILE", long)]
  pub(crate) log_file: Option<PathBuf>,

  /// The http(s) URL of the site serving the feed, e.g. https://news.example.com/
  pub(crate) site: Url,

  /// Which rendering template to use for the story list.
  #[arg(default_value_t = ViewVariant::Cards, long, value_enum)]
  pub(crate) variant: ViewVariant,
}

impl Arguments {
  pub(crate) fn initialize_logging(&self) -> Result {
    let Some(path) = &self.log_file else {
      return Ok(());
    };

    let file = fs::File::create(path).with_context(|| {
      format!("could not create log file {}", path.display())
    })?;

    tracing_subscriber::fmt()
      .with_ansi(false)
      .with_env_filter(
        tracing_subscriber::EnvFilter::try_from_default_env()
          .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("eslnews=debug")),
      )
      .with_writer(Arc::new(file))
      .init();

    Ok(())
  }
}
