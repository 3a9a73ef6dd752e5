use anyhow::Result;
use log::info;

fn main() -> Result<()> {
    appointly::init_logger();
    info!("Starting Appointly");
    appointly::run()
}
