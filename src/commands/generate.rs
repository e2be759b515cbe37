//! `generate` subcommand.
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Write man pages for `cmd` and each of its subcommands (recursively) to
/// `output_dir`, or to the current directory when none is given.
///
/// Subcommand pages are named after their full invocation, e.g.
/// `jsonlex-generate-man.1`.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the output directory or a page file could
/// not be created or written.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };

    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    let mut written = Vec::new();
    let name = cmd.get_name().to_string();
    written.push(render_page(cmd.clone(), &output_dir, &name)?);
    render_subcommands(cmd, &output_dir, &name, &mut written)?;

    Ok(written)
}

fn render_subcommands(
    cmd: &clap::Command,
    output_dir: &Path,
    prefix: &str,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    for subcmd in cmd.get_subcommands() {
        let prefixed_name = format!("{}-{}", prefix, subcmd.get_name());

        // clap_mangen takes NAME and SYNOPSIS from the command name, which
        // must be 'static; page generation runs once per process.
        let leaked_name: &'static str =
            Box::leak(prefixed_name.clone().into_boxed_str());
        let renamed = subcmd
            .clone()
            .name(leaked_name)
            .disable_help_subcommand(true);

        written.push(render_page(renamed, output_dir, &prefixed_name)?);
        if subcmd.has_subcommands() {
            render_subcommands(subcmd, output_dir, &prefixed_name, written)?;
        }
    }

    Ok(())
}

/// Render one man page to `<output_dir>/<file_stem>.1`.
fn render_page(
    cmd: clap::Command,
    output_dir: &Path,
    file_stem: &str,
) -> Result<PathBuf> {
    let path = output_dir.join(format!("{file_stem}.1"));
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    clap_mangen::Man::new(cmd)
        .render(&mut file)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("generated man page {}", path.display());

    Ok(path)
}
