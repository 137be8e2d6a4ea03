use anyhow::{Context, Result};

use backdrop::cli::CliArgs;
use backdrop::config::BackgroundConfig;
use backdrop::publish::{self, PngPublisher};
use backdrop::raster::FsImageLoader;
use backdrop::{session, setup};

fn main() -> Result<()> {
    let args = CliArgs::parse_args();
    backdrop::tracing::init(args.debug);

    let mut config = match &args.config {
        Some(path) => BackgroundConfig::load_from(path)?,
        None => BackgroundConfig::load(),
    };
    args.apply_to(&mut config);

    let screen = args.screen();
    let state = setup::build_state(&config, &screen, &FsImageLoader)
        .context("Invalid background options")?;

    let plan = session::plan_session(&state, args.mode);

    let mut publisher = PngPublisher::new(&args.out)
        .with_context(|| format!("Cannot create output directory {}", args.out.display()))?;
    publish::publish_plan(&plan, &mut publisher).context("Failed to publish background")?;

    Ok(())
}
