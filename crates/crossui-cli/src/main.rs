use anyhow::Result;
use clap::Parser;
use crossui_codegen::RenderOptions;
use crossui_core::Platform;
use tracing::debug;

use crossui_cli::{
    cli::{Cli, Commands},
    commands,
    config::CrossUiConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(cli.level_filter().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!("crossui {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::New { name, platform } => {
            let platforms = platform.into_iter().map(Platform::from).collect();
            commands::new::execute(&std::env::current_dir()?, &name, platforms)?;
        }

        Commands::Render {
            file,
            platform,
            root,
            escape,
            app_name,
        } => {
            commands::render::execute(
                &file,
                platform.into(),
                root,
                RenderOptions { escape },
                &app_name,
            )?;
        }

        Commands::Build { platform } => {
            let loaded = CrossUiConfig::load(cli.config)?;
            let platforms = match platform {
                Some(p) => vec![p.into()],
                None => loaded.config.build.platforms.clone(),
            };
            commands::build::execute(&loaded, &platforms)?;
        }

        Commands::Compile { platform } => {
            let loaded = CrossUiConfig::load(cli.config)?;
            commands::compile::execute(&loaded, platform.into())?;
        }
    }

    Ok(())
}
