use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use lab_site_core::Resource;

#[derive(Debug, Parser)]
#[command(name = "lab-site", version, about = "Lab website data checker")]
pub struct CliArgs {
    /// Directory holding members.json, publications.json, news.json and alumni.json
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print one section's rendered HTML instead of the report
    #[arg(long, value_name = "SECTION", value_parser = parse_section)]
    pub render: Option<Resource>,

    /// Year filter for `--render publications` ("all" or a year)
    #[arg(long, value_name = "YEAR", requires = "render")]
    pub year: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(dir) = &self.data_dir {
            std::env::set_var("LAB_DATA_DIR", dir);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Rejects flag combinations clap cannot express: `--year` only filters
    /// publications.
    pub fn check(&self) -> Result<()> {
        match (self.render, &self.year) {
            (Some(section), Some(year)) if section != Resource::Publications => Err(eyre!(
                "--year {year} only applies to --render publications, not {section}"
            )),
            _ => Ok(()),
        }
    }
}

fn parse_section(value: &str) -> Result<Resource, String> {
    Resource::parse(value).ok_or_else(|| {
        format!("unknown section `{value}` (expected members, publications, news or alumni)")
    })
}
