//! Chart rendering command

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::CommandContext;

/// Render the comparison dashboard and print the image path
#[cfg(feature = "charts")]
pub fn render(ctx: &CommandContext, output: Option<PathBuf>) -> Result<()> {
    use alloc_compare_benchmarks::chart::{render_chart, ChartOptions};
    use alloc_compare_benchmarks::io;
    use tracing::info;

    use crate::output::colors;

    let report = ctx.load_report()?;
    let path = io::output_path(output.as_deref(), &ctx.config.output.directory, io::CHART_FILE);
    let options = ChartOptions {
        width: ctx.config.output.chart_width,
        height: ctx.config.output.chart_height,
    };

    let path = render_chart(&report, &path, options)?;

    info!(path = %path.display(), "Chart rendered");
    println!("{} {}", colors::success("Wrote"), path.display());

    Ok(())
}

#[cfg(not(feature = "charts"))]
pub fn render(_ctx: &CommandContext, _output: Option<PathBuf>) -> Result<()> {
    anyhow::bail!("Chart support was not compiled in; rebuild with `--features charts`")
}
