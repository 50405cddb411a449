use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{MultiSelect, theme::ColorfulTheme};
use eyre::{Context, Result};
use primelib_config::{CONFIG_FILE_NAME, Preset};
use primelib_core::File;

#[derive(Args)]
pub struct InitCommand {
    /// Project name (defaults to the current directory name)
    pub name: Option<String>,

    /// Directory to create primelib.yaml in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Language preset to enable, repeatable (prompts when omitted)
    #[arg(long = "preset", value_name = "LANG")]
    pub presets: Vec<Preset>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.output.join(CONFIG_FILE_NAME);
        if path.exists() {
            eyre::bail!("{} already exists", path.display());
        }

        let name = match &self.name {
            Some(name) => name.clone(),
            None => Self::directory_name(&self.output)?,
        };
        let presets = if self.presets.is_empty() {
            Self::prompt_presets()?
        } else {
            self.presets.clone()
        };

        File::new(&path, starter_config(&name, &presets))
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        println!("  put your specification at openapi.yaml");
        println!("  primelib generate");
        Ok(())
    }

    fn directory_name(dir: &Path) -> Result<String> {
        let dir = std::fs::canonicalize(dir).wrap_err("Failed to resolve output directory")?;
        dir.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| eyre::eyre!("Output directory has no valid name"))
    }

    fn prompt_presets() -> Result<Vec<Preset>> {
        let items: Vec<&str> = Preset::ALL.iter().map(|p| p.as_str()).collect();
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select the SDK languages")
            .items(&items)
            .interact()
            .wrap_err("Failed to get preset selection")?;

        Ok(selection.into_iter().map(|i| Preset::ALL[i]).collect())
    }
}

/// Starter configuration with the given presets enabled.
fn starter_config(name: &str, presets: &[Preset]) -> String {
    let mut out = format!(
        "name: {name}\n\
         summary: Client SDKs for the {name} API\n\
         output: sdk\n\
         \n\
         spec:\n  file: openapi.yaml\n\
         \n\
         presets:\n"
    );

    for preset in Preset::ALL {
        let enabled = presets.contains(&preset);
        out.push_str(&format!("  {}:\n    enabled: {}\n", preset, enabled));
        match preset {
            Preset::Go => out.push_str(&format!("    module: example.com/{name}/{name}-go\n")),
            Preset::Java => {
                out.push_str("    groupId: com.example\n");
                out.push_str(&format!("    artifactId: {name}-sdk\n"));
            }
            Preset::Python => out.push_str(&format!("    pypiPackageName: {name}-sdk\n")),
            Preset::CSharp => {}
            Preset::Typescript => out.push_str(&format!("    npmName: {name}-sdk\n")),
        }
    }
    out
}
