use std::path::PathBuf;

use choice_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    // An optional path to an alternative question bank.
    let source: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Choice Quiz",
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::new(cc, source.as_deref())))),
    )
}
