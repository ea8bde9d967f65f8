use clap::Parser;
use face_position::app::DEFAULT_CAMERA_INDEX;
use face_position::{App, AppConfig};

#[derive(Parser, Debug)]
#[command()]
struct Args {
    /// Index of the camera to open.
    #[clap(short = 'c', long, default_value_t = DEFAULT_CAMERA_INDEX)]
    camera_index: i32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = Args::parse();

    let config = AppConfig {
        camera_index: args.camera_index,
        ..Default::default()
    };
    log::info!("Starting face detection on camera {}", config.camera_index);

    let mut app = App::new(config)?;
    app.run()?;
    Ok(())
}
