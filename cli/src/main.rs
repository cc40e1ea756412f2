mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, files, shares};
use lanscout_common::config::ScanConfig;
use lanscout_core::discovery::DiscoveryService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    terminal::init_logging();

    let cli = CommandLine::parse_args();
    let service = DiscoveryService::new(ScanConfig::default());

    match cli.command {
        Commands::Discover { segment } => discover::run(&service, segment.as_deref()).await,
        Commands::Shares { computer } => shares::run(&service, &computer).await,
        Commands::Files { share, path } => files::list(&service, &share, &path).await,
        Commands::Fetch {
            share,
            path,
            output,
        } => files::fetch(&service, &share, &path, output.as_deref()).await,
        Commands::Upload { share, file, path } => {
            files::upload(&service, &share, &file, &path).await
        }
        Commands::Local { root, path } => files::local(&service, &root, &path).await,
    }
}
