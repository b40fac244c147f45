//! Terminal progress reporting while a diamond grows

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static GROWTH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Order [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking the order of a growing diamond
pub struct GrowthProgress {
    bar: ProgressBar,
}

impl GrowthProgress {
    /// Create a bar spanning orders up to `target_order`
    pub fn new(current_order: usize, target_order: usize) -> Self {
        let bar = ProgressBar::new(target_order as u64);
        bar.set_style(GROWTH_STYLE.clone());
        bar.set_position(current_order as u64);
        Self { bar }
    }

    /// Create a bar that draws nothing, for quiet runs and tests
    pub fn hidden(target_order: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(target_order as u64);
        Self { bar }
    }

    /// Report a completed increment
    pub fn update(&self, order: usize, annihilated: usize, refilled: usize) {
        self.bar.set_position(order as u64);
        self.bar
            .set_message(format!("annihilated {annihilated}, refilled {refilled}"));
    }

    /// Order currently displayed
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with a final message
    pub fn finish(&self, order: usize) {
        self.bar
            .finish_with_message(format!("reached order {order}"));
    }
}
