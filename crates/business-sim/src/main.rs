mod config;
mod wiring;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = config::Config::from_env()?;
    let controller = wiring::build_controller(&config);

    ui::run(config.window, controller)?;
    Ok(())
}
