//! Per-platform project generation and native build invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use crossui_core::{Platform, View};
use serde_json::json;
use tracing::{debug, info};

use super::templates::TemplateEngine;
use super::{generator_for, GeneratedFile, GeneratedProject, RenderOptions};
use crate::error::{CodegenError, Result};

const MSBUILD_PATH: &str =
    "C:/Program Files/Microsoft Visual Studio/2022/BuildTools/MSBuild/Current/Bin/MSBuild.exe";

/// Renders a root view into the full file set for a platform.
pub struct ProjectGenerator<'a> {
    engine: TemplateEngine<'a>,
    options: RenderOptions,
}

impl<'a> ProjectGenerator<'a> {
    /// Create a new project generator.
    pub fn new(options: RenderOptions) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        Self::register_templates(&mut engine)?;
        Ok(Self { engine, options })
    }

    /// Register boilerplate templates.
    fn register_templates(engine: &mut TemplateEngine) -> Result<()> {
        engine.register_template(
            "pbxproj",
            "// Placeholder PBX project for {{app_name}}\n// Replace with a generated project.pbxproj before building\n",
        )?;

        engine.register_template(
            "info_plist",
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>{{xml app_name}}</string>
</dict>
</plist>
"#,
        )?;

        engine.register_template(
            "sln",
            r#"Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
Project("{9A19103F-16F7-4668-BE54-9A1E7A4F7556}") = "{{app_name}}", "{{app_name}}.csproj", "{00000000-0000-0000-0000-000000000000}"
EndProject
"#,
        )?;

        engine.register_template(
            "csproj",
            r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <OutputType>WinExe</OutputType>
    <TargetFramework>net6.0-windows</TargetFramework>
    <RootNamespace>{{type_name app_name}}</RootNamespace>
    <UseWinUI>true</UseWinUI>
  </PropertyGroup>
  <ItemGroup>
    <Page Include="MainPage.xaml">
      <Generator>MSBuild:Compile</Generator>
      <SubType>Designer</SubType>
    </Page>
  </ItemGroup>
</Project>
"#,
        )?;

        engine.register_template(
            "app_xaml",
            r#"<Application
    x:Class="{{type_name app_name}}.App"
    xmlns="http://schemas.microsoft.com/winfx/2006/xaml/presentation"
    xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
    >
    <Application.Resources>
    </Application.Resources>
</Application>
"#,
        )?;

        engine.register_template(
            "app_cs",
            r#"using Microsoft.UI.Xaml;

namespace {{type_name app_name}}
{
    public partial class App : Application
    {
        public App()
        {
            this.InitializeComponent();
        }

        protected override void OnLaunched(Microsoft.UI.Xaml.LaunchActivatedEventArgs args)
        {
            m_window = new MainWindow();
            m_window.Activate();
        }

        private Window m_window;
    }
}
"#,
        )?;

        engine.register_template(
            "makefile",
            "all:\n\tswiftc LinuxUI.swift -o {{snake_case app_name}}\n",
        )?;

        Ok(())
    }

    /// Generate every file for `platform`, rooted at `Build/<platform>/`.
    pub fn generate(&self, app_name: &str, root: &View, platform: Platform) -> Result<GeneratedProject> {
        let dir = format!("Build/{}", platform.build_dir());
        let data = json!({ "app_name": app_name });
        let ui = generator_for(platform, self.options).render_root(root, app_name);

        debug!(
            %platform,
            app = app_name,
            nodes = root.node_count(),
            "rendering project"
        );

        let mut files = Vec::new();
        match platform {
            Platform::MacOS => {
                files.push(ui_file(format!("{dir}/ContentView.swift"), ui));
                files.push(self.scaffold_file(
                    format!("{dir}/{app_name}.xcodeproj/project.pbxproj"),
                    "pbxproj",
                    &data,
                )?);
                files.push(self.scaffold_file(format!("{dir}/Info.plist"), "info_plist", &data)?);
            }
            Platform::Windows => {
                files.push(ui_file(format!("{dir}/MainPage.xaml"), ui));
                files.push(self.scaffold_file(format!("{dir}/{app_name}.sln"), "sln", &data)?);
                files.push(self.scaffold_file(format!("{dir}/{app_name}.csproj"), "csproj", &data)?);
                files.push(self.scaffold_file(format!("{dir}/App.xaml"), "app_xaml", &data)?);
                files.push(self.scaffold_file(format!("{dir}/App.xaml.cs"), "app_cs", &data)?);
            }
            Platform::Linux => {
                files.push(ui_file(format!("{dir}/LinuxUI.swift"), ui));
                files.push(self.scaffold_file(format!("{dir}/Makefile"), "makefile", &data)?);
            }
        }

        info!(%platform, files = files.len(), "generated project");
        Ok(GeneratedProject { files })
    }

    fn scaffold_file(
        &self,
        path: String,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            path,
            content: self.engine.render(template, data)?,
            is_scaffold: true,
        })
    }
}

fn ui_file(path: String, content: String) -> GeneratedFile {
    GeneratedFile {
        path,
        content,
        is_scaffold: false,
    }
}

/// A native build tool invocation for a generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments passed to the executable.
    pub args: Vec<String>,
    /// Working directory relative to the project root.
    pub working_dir: PathBuf,
}

impl BuildCommand {
    /// The build step for a project generated for `platform`.
    pub fn for_platform(app_name: &str, platform: Platform) -> Self {
        match platform {
            Platform::MacOS => Self {
                program: PathBuf::from("/usr/bin/xcodebuild"),
                args: vec![
                    "-project".to_string(),
                    format!("Build/macOS/{app_name}.xcodeproj"),
                    "-scheme".to_string(),
                    app_name.to_string(),
                    "build".to_string(),
                ],
                working_dir: PathBuf::from("."),
            },
            Platform::Windows => Self {
                program: PathBuf::from(MSBUILD_PATH),
                args: vec![
                    format!("Build/windows/{app_name}.sln"),
                    "/t:Rebuild".to_string(),
                    "/p:Configuration=Release".to_string(),
                ],
                working_dir: PathBuf::from("."),
            },
            Platform::Linux => Self {
                program: PathBuf::from("/usr/bin/make"),
                args: Vec::new(),
                working_dir: PathBuf::from("Build/linux"),
            },
        }
    }

    /// Name of the tool, for messages.
    pub fn tool_name(&self) -> String {
        self.program
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }

    /// Run the tool from `project_root`, blocking until it exits.
    pub fn run(&self, project_root: &Path) -> Result<()> {
        let tool = self.tool_name();
        let cwd = project_root.join(&self.working_dir);
        info!(tool = %tool, cwd = %cwd.display(), "running native build");

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&cwd)
            .status()
            .map_err(|source| CodegenError::ToolLaunch {
                tool: tool.clone(),
                source,
            })?;

        if status.success() {
            debug!(tool = %tool, "build finished");
            Ok(())
        } else {
            Err(CodegenError::BuildFailed {
                tool,
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossui_core::Binding;

    fn sample() -> View {
        View::vstack([
            View::text("Hello"),
            View::text_field(Binding::of("world".to_string()), "Name"),
        ])
    }

    fn paths(project: &GeneratedProject) -> Vec<&str> {
        project.files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_macos_project() {
        let gen = ProjectGenerator::new(RenderOptions::default()).unwrap();
        let project = gen.generate("Demo", &sample(), Platform::MacOS).unwrap();

        assert_eq!(
            paths(&project),
            [
                "Build/macOS/ContentView.swift",
                "Build/macOS/Demo.xcodeproj/project.pbxproj",
                "Build/macOS/Info.plist",
            ]
        );
        let ui = project.file("Build/macOS/ContentView.swift").unwrap();
        assert!(!ui.is_scaffold);
        assert!(ui.content.contains("Text(\"Hello\")"));
        assert!(ui.content.contains("struct DemoApp: App"));

        let plist = project.file("Build/macOS/Info.plist").unwrap();
        assert!(plist.content.contains("<string>Demo</string>"));
    }

    #[test]
    fn test_windows_project() {
        let gen = ProjectGenerator::new(RenderOptions::default()).unwrap();
        let project = gen.generate("Demo", &sample(), Platform::Windows).unwrap();

        assert_eq!(
            paths(&project),
            [
                "Build/windows/MainPage.xaml",
                "Build/windows/Demo.sln",
                "Build/windows/Demo.csproj",
                "Build/windows/App.xaml",
                "Build/windows/App.xaml.cs",
            ]
        );
        let page = project.file("Build/windows/MainPage.xaml").unwrap();
        assert!(page.content.contains("PlaceholderText=\"Name\""));
        let app_cs = project.file("Build/windows/App.xaml.cs").unwrap();
        assert!(app_cs.content.contains("namespace Demo\n{"));
        let app_xaml = project.file("Build/windows/App.xaml").unwrap();
        assert!(app_xaml.content.contains("x:Class=\"Demo.App\""));
    }

    #[test]
    fn test_app_name_is_cased_for_each_tool() {
        let gen = ProjectGenerator::new(RenderOptions::default()).unwrap();

        let windows = gen.generate("my app", &sample(), Platform::Windows).unwrap();
        let app_cs = windows.file("Build/windows/App.xaml.cs").unwrap();
        assert!(app_cs.content.contains("namespace MyApp\n{"));

        let linux = gen.generate("my app", &sample(), Platform::Linux).unwrap();
        let makefile = linux.file("Build/linux/Makefile").unwrap();
        assert!(makefile.content.ends_with("-o my_app\n"));
    }

    #[test]
    fn test_linux_project() {
        let gen = ProjectGenerator::new(RenderOptions::default()).unwrap();
        let project = gen.generate("Demo", &sample(), Platform::Linux).unwrap();

        assert_eq!(paths(&project), ["Build/linux/LinuxUI.swift", "Build/linux/Makefile"]);
        let makefile = project.file("Build/linux/Makefile").unwrap();
        assert_eq!(makefile.content, "all:\n\tswiftc LinuxUI.swift -o demo\n");
        let ui = project.file("Build/linux/LinuxUI.swift").unwrap();
        assert!(ui.content.contains("Label(\"Hello\"), Entry(text: \"world\""));
    }

    #[test]
    fn test_generated_project_writes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let gen = ProjectGenerator::new(RenderOptions::default()).unwrap();
        let project = gen.generate("Demo", &sample(), Platform::Linux).unwrap();

        project.write_to(dir.path()).unwrap();
        let makefile = std::fs::read_to_string(dir.path().join("Build/linux/Makefile")).unwrap();
        assert!(makefile.contains("-o demo"));
    }

    #[test]
    fn test_build_commands() {
        let mac = BuildCommand::for_platform("Demo", Platform::MacOS);
        assert_eq!(mac.tool_name(), "xcodebuild");
        assert_eq!(
            mac.args,
            ["-project", "Build/macOS/Demo.xcodeproj", "-scheme", "Demo", "build"]
        );

        let win = BuildCommand::for_platform("Demo", Platform::Windows);
        assert_eq!(win.tool_name(), "MSBuild");
        assert_eq!(win.args[0], "Build/windows/Demo.sln");

        let linux = BuildCommand::for_platform("Demo", Platform::Linux);
        assert_eq!(linux.tool_name(), "make");
        assert!(linux.args.is_empty());
        assert_eq!(linux.working_dir, PathBuf::from("Build/linux"));
    }

    #[test]
    fn test_missing_tool_is_launch_error() {
        let dir = tempfile::tempdir().unwrap();
        let command = BuildCommand {
            program: PathBuf::from("/nonexistent/crossui-build-tool"),
            args: Vec::new(),
            working_dir: PathBuf::from("."),
        };
        let err = command.run(dir.path()).unwrap_err();
        assert!(matches!(err, CodegenError::ToolLaunch { ref tool, .. } if tool == "crossui-build-tool"));
    }
}
