use crate::settings::VideoQuality;
use reelshelf_models::StreamSource;
use tracing::debug;

/// Tracks which of the fetched stream sources is being played.
#[derive(Debug, Clone)]
pub struct SourceSelector {
    sources: Vec<StreamSource>,
    selected: Option<usize>,
}

fn quality_matches(label: &str, wanted: &str) -> bool {
    label.trim().to_lowercase().starts_with(&wanted.to_lowercase())
}

impl SourceSelector {
    /// Start on the first source matching `preference`, else the first one.
    pub fn new(sources: Vec<StreamSource>, preference: VideoQuality) -> Self {
        let preferred = preference
            .label_prefix()
            .and_then(|prefix| sources.iter().position(|s| quality_matches(&s.quality, prefix)));
        let selected = preferred.or(if sources.is_empty() { None } else { Some(0) });
        if let Some(index) = selected {
            debug!("Selected source #{} ({}) for preference {}", index, sources[index].quality, preference);
        }
        Self { sources, selected }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> &[StreamSource] {
        &self.sources
    }

    pub fn current(&self) -> Option<&StreamSource> {
        self.selected.and_then(|i| self.sources.get(i))
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current().map(|s| s.url.as_str())
    }

    /// Quality labels in upstream order, for a quality menu.
    pub fn qualities(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.quality.as_str()).collect()
    }

    /// Switch to the first source whose label starts with `quality`. The
    /// selection is left alone when nothing matches.
    pub fn select_quality(&mut self, quality: &str) -> Option<&StreamSource> {
        let index = self.sources.iter().position(|s| quality_matches(&s.quality, quality))?;
        self.selected = Some(index);
        self.sources.get(index)
    }

    /// Switch to the source with exactly this URL.
    pub fn switch_url(&mut self, url: &str) -> bool {
        match self.sources.iter().position(|s| s.url == url) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }
}
