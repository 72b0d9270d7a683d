use audio_manifest::core::config::Config;
use audio_manifest::core::io::NativeStorage;
use audio_manifest::services::generator;

// Failures are printed as text; the exit status stays 0 either way.
fn main() {
    env_logger::init();

    // 1. Resolve paths
    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("ERROR: {:#}", e);
            return;
        }
    };
    log::debug!("Using config: {:?}", config);

    // 2. Load stories, build the manifest, write it out
    match generator::generate(&config, &NativeStorage::new()) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            log::debug!("Generation failed: {:?}", e);
            println!("ERROR: {}", e);
        }
    }
}
