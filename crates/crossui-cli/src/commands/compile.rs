use anyhow::{Context, Result};
use crossui_codegen::BuildCommand;
use crossui_core::Platform;
use tracing::info;

use crate::config::LoadedConfig;

pub fn execute(loaded: &LoadedConfig, platform: Platform) -> Result<()> {
    let command = BuildCommand::for_platform(&loaded.config.project.name, platform);
    let project_root = loaded.output_dir();

    info!(%platform, tool = %command.tool_name(), "compiling");
    command
        .run(&project_root)
        .with_context(|| format!("Native build for {} failed", platform))?;

    println!("Built {} for {}", loaded.config.project.name, platform);
    Ok(())
}
