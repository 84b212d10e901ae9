use anyhow::Result;
use log::info;
use video_duration_renamer::component::DurationTagger;
use video_duration_renamer::config::Config;
use video_duration_renamer::init;

fn main() -> Result<()> {
    init::init_logging();
    let shutdown_signal = init::setup_shutdown_signal();

    let config = Config::new()?;
    let tagger = DurationTagger::new(config, shutdown_signal);
    tagger.run()?;

    info!("Program exited normally");
    Ok(())
}
