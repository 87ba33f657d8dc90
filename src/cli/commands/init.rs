//! `plm init` command - Initialize a new PLM workspace

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::Path;

use crate::cli::GlobalOpts;
use crate::core::loader;
use crate::core::project::{Project, ProjectError};
use crate::entities::defaults::sample_dossier;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: std::path::PathBuf,

    /// Force initialization even if .plm/ already exists
    #[arg(long)]
    pub force: bool,

    /// Seed the workspace with the sample style (SS25 Crew Tee)
    #[arg(long)]
    pub sample: bool,
}

pub fn run(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let path = if args.path.as_os_str() == "." {
        std::env::current_dir().into_diagnostic()?
    } else {
        args.path.clone()
    };

    if !path.exists() {
        std::fs::create_dir_all(&path).into_diagnostic()?;
        if !global.quiet {
            println!(
                "{} Created directory {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
    }

    let project = if args.force {
        Project::init_force(&path)
    } else {
        Project::init(&path)
    };

    let project = match project {
        Ok(project) => project,
        Err(ProjectError::AlreadyExists(path)) => {
            println!(
                "{} PLM workspace already exists at {}",
                style("!").yellow(),
                style(path.display()).cyan()
            );
            println!();
            println!("Use {} to reinitialize", style("plm init --force").yellow());
            return Ok(());
        }
        Err(e) => return Err(miette::miette!("{}", e)),
    };

    if args.sample {
        seed_sample(&project, args.force, global.quiet)?;
    }

    if global.quiet {
        return Ok(());
    }

    println!(
        "{} Initialized PLM workspace at {}",
        style("✓").green(),
        style(project.root().display()).cyan()
    );
    println!();
    println!("Created workspace structure:");
    print_structure(project.root());
    println!();
    println!("Next steps:");
    if args.sample {
        println!("  {} Show the sample cost breakdown", style("plm cost").yellow());
        println!("  {} Show the style dashboard", style("plm status").yellow());
    } else {
        println!(
            "  {} Create your first style",
            style("plm style new FW25-TEE-001 --title \"FW25 Tee\"").yellow()
        );
        println!("  {} Add a fabric line", style("plm bom add --type Fabric ...").yellow());
    }
    Ok(())
}

fn seed_sample(project: &Project, overwrite: bool, quiet: bool) -> Result<()> {
    let dossier = sample_dossier();
    let path = project.style_path(dossier.id());

    if path.exists() && !overwrite {
        if !quiet {
            println!(
                "{} Sample style already present, leaving it unchanged",
                style("!").yellow()
            );
        }
        return Ok(());
    }

    loader::save(project, &dossier)?;
    if !quiet {
        println!(
            "{} Added sample style {}",
            style("✓").green(),
            style(dossier.id()).cyan()
        );
    }
    Ok(())
}

fn print_structure(root: &Path) {
    let dirs = [
        (".plm/", "Workspace configuration"),
        (".plm/config.yaml", "Settings (author, default style, currency)"),
        ("styles/", "One <STYLE-ID>.plm.yaml file per style"),
    ];

    for (dir, desc) in dirs {
        let exists = root.join(dir.trim_end_matches('/')).exists();
        let marker = if exists {
            style("✓").green()
        } else {
            style("·").dim()
        };
        println!("  {} {:<20} {}", marker, dir, style(desc).dim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn quiet() -> GlobalOpts {
        GlobalOpts {
            format: OutputFormat::Auto,
            quiet: true,
            verbose: false,
            project: None,
            style: None,
        }
    }

    #[test]
    fn test_init_with_sample_writes_style() {
        let tmp = tempfile::tempdir().unwrap();
        let args = InitArgs {
            path: tmp.path().join("ws"),
            force: false,
            sample: true,
        };
        run(args, &quiet()).unwrap();

        let project = Project::discover_from(&tmp.path().join("ws")).unwrap();
        let styles = loader::load_all(&project);
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].style.title, "SS25 Crew Tee");
    }

    #[test]
    fn test_init_twice_keeps_existing_workspace() {
        let tmp = tempfile::tempdir().unwrap();
        let args = || InitArgs {
            path: tmp.path().to_path_buf(),
            force: false,
            sample: false,
        };
        run(args(), &quiet()).unwrap();
        assert!(run(args(), &quiet()).is_ok());
    }
}
