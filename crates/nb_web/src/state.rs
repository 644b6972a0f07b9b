use nb_analysis::BiasAnalyzer;
use nb_sources::SourceManager;

pub struct AppState {
    pub manager: SourceManager,
    pub analyzer: BiasAnalyzer,
}
