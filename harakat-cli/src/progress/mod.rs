//! Progress reporting for multi-document runs

use harakat_core::Output;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}";

/// Tracks processed documents and the corrections found so far.
///
/// Shared by reference between rayon workers; the bar is only drawn for runs
/// of two or more documents and never when quiet.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    corrections: AtomicUsize,
}

impl ProgressReporter {
    pub fn new(documents: usize, quiet: bool) -> Self {
        let bar = (!quiet && documents > 1).then(|| {
            let bar = ProgressBar::new(documents as u64);
            let style = ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-");
            bar.set_style(style);
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });

        Self {
            bar,
            corrections: AtomicUsize::new(0),
        }
    }

    /// Record one finished document
    pub fn document_done(&self, source: &str, output: &Output) {
        let found = output.stats.corrections_count;
        let total = self.corrections.fetch_add(found, Ordering::Relaxed) + found;

        if let Some(bar) = &self.bar {
            bar.set_message(format!("{source}: {found} corrections ({total} total)"));
            bar.inc(1);
        }
    }

    /// Corrections recorded across all documents
    pub fn corrections(&self) -> usize {
        self.corrections.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("{} corrections", self.corrections()));
        }
        log::info!("Total corrections: {}", self.corrections());
    }
}
