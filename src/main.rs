use clap::Parser;
use crumbfetch::base::enums::Endpoint;
use crumbfetch::base::structs::{FetchOptions, FetchReport};
use crumbfetch::base::traits::ResourceResolver;
use crumbfetch::resolvers::breadcrumbs::BreadcrumbsResolver;
use crumbfetch::resolvers::url::UrlResolver;
use crumbfetch::sinks::file::FileSink;
use crumbfetch::sinks::stdout::StdoutDisplay;
use crumbfetch::sinks::{Delivery, NullSink};
use crumbfetch::{config, logging, ApiFetchArgs, Fetcher, Result};
use std::sync::Arc;

/// Fetch breadcrumbs JSON for a course, lesson, task or other content URL.
#[derive(Debug, Parser)]
#[command(name = "crumbfetch", version)]
#[command(about = "Resolve a content URL to its breadcrumbs API endpoint and download the JSON", long_about = None)]
struct Cli {
    /// Content URL such as https://example.com/lesson/xyz-1/ (an API URL with --api-url).
    url: String,

    /// Filename for the downloaded JSON (default: download.json).
    #[arg(short, long)]
    output: Option<String>,

    /// Directory to save into (overrides CRUMBFETCH_DOWNLOAD_DIR).
    #[arg(short = 'd', long = "dir")]
    dir: Option<String>,

    /// Print the fetched JSON to stdout.
    #[arg(long)]
    display: bool,

    /// With --display, also print one line per breadcrumb level.
    #[arg(long)]
    summary: bool,

    /// Treat URL as a ready API URL and skip resolution.
    #[arg(long)]
    api_url: bool,

    /// Request the resource details endpoint instead of breadcrumbs.
    #[arg(long)]
    details: bool,

    /// Only print the resolved API URL.
    #[arg(long)]
    resolve_only: bool,

    /// Do not write a file.
    #[arg(long)]
    no_download: bool,

    /// API origin (overrides CRUMBFETCH_API_BASE).
    #[arg(long)]
    base: Option<String>,

    /// Keep ?query and #fragment when matching.
    #[arg(long)]
    keep_query: bool,

    /// Request timeout in seconds; 0 waits indefinitely (overrides CRUMBFETCH_TIMEOUT_SECS).
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the {"data"} / {"error"} result as JSON on stdout.
    #[arg(long)]
    report: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> Result<FetchOptions> {
        let mut options = config::from_env()?;
        if let Some(base) = &self.base {
            options = options.with_api_base(base.as_str());
        }
        if let Some(dir) = &self.dir {
            options = options.with_save_path(dir.as_str());
        }
        if self.display {
            options = options.with_display(true);
        }
        if self.details {
            options = options.with_endpoint(Endpoint::Details);
        }
        if self.keep_query {
            options = options.with_strip_query(false);
        }
        if let Some(secs) = self.timeout {
            options = options.with_timeout(secs);
        }
        Ok(options)
    }

    fn resolver(&self, options: &FetchOptions) -> Result<Box<dyn ResourceResolver>> {
        if self.api_url {
            Ok(Box::new(UrlResolver::with_headers(options.headers.clone())))
        } else {
            Ok(Box::new(BreadcrumbsResolver::new(options)?))
        }
    }

    fn delivery(&self, options: &FetchOptions) -> Delivery {
        let display = Arc::new(StdoutDisplay::new().with_summary(self.summary));
        if self.no_download {
            Delivery::new(Arc::new(NullSink), display.clone(), display)
        } else {
            let files = FileSink::new(&options.save_path).with_create_dirs(options.create_dirs);
            Delivery::new(Arc::new(files), display.clone(), display)
        }
    }

    async fn run(&self) -> Result<FetchReport> {
        let options = self.options()?;
        tracing::debug!(?options, "loaded options");

        let resolver = self.resolver(&options)?;
        if self.resolve_only {
            let resolved = resolver.resolve(&self.url)?;
            println!("{}", resolved.url);
            return Ok(FetchReport::Data(serde_json::Value::String(resolved.url)));
        }

        let delivery = self.delivery(&options);
        let display = options.display;
        let fetcher = Fetcher::new(options, resolver, Box::new(delivery))?;

        if self.api_url {
            let mut outcome = None;
            fetcher
                .fetch_api_url(ApiFetchArgs {
                    api_url: &self.url,
                    filename: self.output.as_deref(),
                    modify_document: display,
                    callback: |report| outcome = Some(report),
                })
                .await;
            Ok(outcome.unwrap_or_else(|| FetchReport::Error("no result delivered".into())))
        } else {
            Ok(fetcher.fetch_report(&self.url, self.output.as_deref()).await)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Before the subscriber, so RUST_LOG may come from .env.
    let dotenv = config::load_dotenv();
    logging::init_logging(cli.quiet);
    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let report = match cli.run().await {
        Ok(report) => report,
        Err(e) => FetchReport::Error(e.to_string()),
    };

    if cli.report {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("crumbfetch error: {}", e),
        }
    }

    if let FetchReport::Error(message) = &report {
        if !cli.report {
            eprintln!("crumbfetch error: {}", message);
        }
        std::process::exit(1);
    }
}
