//! triedot - CLI entry point

use std::fs;
use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use triedot::cli::Cli;
use triedot::dot::RenderOptions;
use triedot::theme::ThemeSet;
use triedot::trie::BuildOptions;
use triedot::{input, mark, samples, theme, trie};
use triedot::{dot, MarkMatcher};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    run(cli)
}

/// `--debug` turns on DEBUG traces to stderr; `RUST_LOG` still wins when set.
fn init_tracing(debug: bool) {
    let fallback = if debug { "triedot=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let themes = ThemeSet::load();

    // Informational modes short-circuit the pipeline.
    if cli.dump_themes {
        println!("# merged themes.toml template");
        println!();
        print!("{}", themes.dump()?);
        return Ok(());
    }

    if cli.list_themes {
        for name in themes.theme_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let selected = themes.theme(&cli.theme).ok_or_else(|| {
        anyhow!(
            "Unknown theme '{}' (available: {})",
            cli.theme,
            themes.theme_names().collect::<Vec<_>>().join(", ")
        )
    })?;
    let font_name = themes
        .font(&cli.font)
        .ok_or_else(|| {
            anyhow!(
                "Unknown font '{}' (available: {})",
                cli.font,
                themes.fonts.keys().cloned().collect::<Vec<_>>().join(", ")
            )
        })?
        .to_string();

    let resolved = cli.resolve_colors(selected);
    debug!(?resolved, font = %font_name, "resolved colors");

    if let Some(name) = &cli.save_theme {
        let path = theme::save_theme(name, &resolved)?;
        println!("Saved theme '{}' to {}", name, path.display());
        println!("This theme will now load automatically.");
        return Ok(());
    }

    // Combine samples + files; stdin only when neither is present.
    let mut lines: Vec<String> = Vec::new();
    for (enabled, group) in [
        (cli.sample_hosts, samples::SAMPLE_HOSTS),
        (cli.sample_ips, samples::SAMPLE_IPS),
        (cli.sample_paths, samples::SAMPLE_PATHS),
        (cli.sample_urls, samples::SAMPLE_URLS),
        (cli.sample_emails, samples::SAMPLE_EMAILS),
        (cli.sample_nato, samples::SAMPLE_NATO),
    ] {
        if enabled {
            lines.extend(group.iter().map(|s| s.to_string()));
        }
    }

    if !cli.files.is_empty() {
        lines.extend(input::read_files(&cli.files)?);
    } else if lines.is_empty() {
        lines.extend(input::read_stdin()?);
    }

    let unique = input::dedupe(lines);

    let filter = input::LineFilter::compile(&cli.filter, cli.invert_filter)?;
    let matched = filter.apply(unique);

    let mark_is_default = mark::is_default_patterns(&cli.mark);
    let matcher = MarkMatcher::compile(&cli.mark, mark_is_default, false)?;

    let options = BuildOptions {
        // Head-mode is only meaningful in character mode.
        head_mode: cli.head && cli.delim.is_none(),
        keep_prefix: cli.keep_prefix,
        keep_fqdn: cli.keep_fqdn,
        ignore_case: cli.ignore_case,
        no_labels: cli.no_labels,
        delimiter: cli.delim.clone(),
        right_to_left: cli.rtl,
        color_normal: resolved.normal.clone(),
        color_mark: resolved.mark.clone(),
        color_head: resolved.head.clone(),
        text_normal: resolved.text_normal.clone(),
        text_mark: resolved.text_mark.clone(),
        text_head: resolved.text_head.clone(),
    };

    let built = trie::build(matched.iter().map(String::as_str), &matcher, &options);

    let render_options = RenderOptions {
        direction: cli.dir.into(),
        edge_color: resolved.edge.clone(),
        point_color: resolved.point.clone(),
        font_name,
    };
    let output = dot::render(&built, &render_options)?;

    match &cli.output {
        Some(path) => {
            debug!(path = %path.display(), "writing DOT to file");
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
        }
        None => {
            debug!("writing DOT to stdout");
            io::stdout()
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
