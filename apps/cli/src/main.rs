use std::io;

use clap::Parser;
use color_eyre::Result;
use lab_site_cli::cli::CliArgs;
use lab_site_cli::config::{init_app_config, init_logging};
use lab_site_cli::report::{build_report, render_section, write_text};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.check()?;
    args.apply_env_overrides();

    let config = init_app_config();
    let _logger = init_logging(config.debug)?;

    if let Some(resource) = args.render {
        println!(
            "{}",
            render_section(&config.data_dir, resource, args.year.as_deref())
        );
        return Ok(());
    }

    // Missing or broken files are reported, not fatal.
    let report = build_report(&config.data_dir);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        write_text(&report, &mut io::stdout().lock())?;
    }

    Ok(())
}
