use std::io::Read;
use std::path::Path;

use snapdiff_core::compute_line_diff_with;
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::render::{render_summary, render_text};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output = execute(&cli)?;
    print!("{output}");
    Ok(())
}

/// Read both snapshots, diff them, and render the output.
pub fn execute(cli: &Cli) -> CliResult<String> {
    if is_stdin(&cli.old) && is_stdin(&cli.new) {
        return Err(CliError::InvalidArgument(
            "only one side can be read from stdin".into(),
        ));
    }

    let config = CliConfig::resolve(cli)?;
    debug!(?config, "resolved configuration");

    let old = read_input(&cli.old)?;
    let new = read_input(&cli.new)?;
    let result = compute_line_diff_with(&old, &new, &config.limits);
    info!(
        added = result.added_count,
        removed = result.removed_count,
        truncated = result.truncated,
        "compared {:?} with {:?}",
        cli.old,
        cli.new
    );

    Ok(match cli.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&result)?;
            json.push('\n');
            json
        }
        OutputFormat::Text if cli.summary_only => render_summary(&result, &config),
        OutputFormat::Text => render_text(&result, &config),
    })
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// File contents as text. Invalid UTF-8 is replaced rather than rejected.
fn read_input(path: &Path) -> CliResult<String> {
    let read_err = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(read_err)?;
        buf
    } else {
        std::fs::read(path).map_err(read_err)?
    };
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
