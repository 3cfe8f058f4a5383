//! Blog application
//!
//! Opens the store at the default location and prints everything in it.

use blog_core::{Blog, Config, Report};

pub fn run() -> anyhow::Result<()> {
    blog_core::init_logging();

    let report = report_for(Config::default())?;
    print!("{report}");

    tracing::info!("Done");

    Ok(())
}

pub fn report_for(config: Config) -> anyhow::Result<Report> {
    let blog = Blog::new(config)?;
    Ok(blog.report()?)
}
