#![allow(non_snake_case)]
use RustedNumDrill::Examples::drill_examples::drill_examples;
use RustedNumDrill::Utils::engine_settings::EngineSettings;
use RustedNumDrill::Utils::logger::init_logger;
use log::warn;

fn main() {
    // optional settings document as the first argument
    let (settings, load_error) = match std::env::args().nth(1) {
        Some(path) => match EngineSettings::from_file(&path) {
            Ok(settings) => (settings, None),
            Err(e) => (EngineSettings::default(), Some(e)),
        },
        None => (EngineSettings::default(), None),
    };
    init_logger(&settings.loglevel, settings.log_to_file);
    if let Some(e) = load_error {
        warn!("{}; using default settings", e);
    }
    let example = 1;
    match example {
        0..=3 => drill_examples(example, &settings),
        _ => {}
    }
}
