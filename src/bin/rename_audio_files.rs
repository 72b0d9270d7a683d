use audio_manifest::core::config::Config;
use audio_manifest::core::io::NativeStorage;
use audio_manifest::services::rename::fix_double_extensions;

fn main() {
    env_logger::init();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("ERROR: {:#}", e);
            return;
        }
    };

    let audio_dir = config.audio_directory();
    let report = match fix_double_extensions(&NativeStorage::new(), &audio_dir) {
        Ok(report) => report,
        Err(e) => {
            println!("ERROR: {}", e);
            return;
        }
    };

    for outcome in &report.outcomes {
        println!("{}", outcome);
    }
    println!("{}", report.summary());
}
