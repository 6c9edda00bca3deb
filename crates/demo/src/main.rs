use catalog_demo::{DemoConfig, run_walkthrough};
use catalog_infra::{CatalogService, InMemoryProductStore};

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(output = ?config.output, "starting catalog walkthrough");

    let catalog = CatalogService::new(InMemoryProductStore::new());
    let stdout = std::io::stdout();
    run_walkthrough(&catalog, &config, &mut stdout.lock())
}
