mod api;
mod error;
mod retention;
mod types;

use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Slack API token used to authenticate every call
    #[arg(long)]
    api_token: String,

    /// Slack username whose old files will be deleted
    #[arg(long)]
    username: String,

    /// Comma-separated list of file types to delete, per the files.list API
    #[arg(long, default_value = "snippets,spaces,images,gdocs,zips,pdfs")]
    filter_types: String,

    /// Number of days from today that we will leave alone
    #[arg(long, default_value_t = 3)]
    cutoff_days: u32,

    /// Base URL of the Slack API
    #[arg(long, default_value = "https://slack.com")]
    api_base: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let api = match api::SlackApi::new(
        &args.api_base,
        &args.api_token,
        args.timeout_secs.map(Duration::from_secs),
    ) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = retention::run(&api, &args.username, &args.filter_types, args.cutoff_days).await
    {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
