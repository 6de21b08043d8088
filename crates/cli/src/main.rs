use gilded_rose_cli::Config;
use gilded_rose_inventory::fixtures::standard_inventory;

fn main() -> anyhow::Result<()> {
    gilded_rose_observability::init();

    let config = Config::from_env()?;
    tracing::info!(days = config.days, format = ?config.format, "starting simulation");

    let stdout = std::io::stdout();
    gilded_rose_cli::run(&config, standard_inventory(), &mut stdout.lock())
}
