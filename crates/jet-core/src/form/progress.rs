//! Progress bar view model.
//!
//! The bar fill does not follow `step / total`: each layout carries a
//! hand-tuned table so the fill edge lines up under the step labels. Those
//! numbers are design constants.

use serde::Serialize;

/// Labels and fill percentages for one form length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLayout {
    pub labels: &'static [&'static str],
    /// `(step, percent)` pairs, 1-based steps.
    pub percentages: &'static [(u32, u8)],
}

pub const FIVE_STEP_LAYOUT: ProgressLayout = ProgressLayout {
    labels: &["Team", "Captain", "Documents", "Payment", "Review"],
    percentages: &[(1, 12), (2, 34), (3, 56), (4, 78), (5, 95)],
};

pub const SIX_STEP_LAYOUT: ProgressLayout = ProgressLayout {
    labels: &["Team", "Captain", "Players", "Documents", "Payment", "Review"],
    percentages: &[(1, 10), (2, 27), (3, 45), (4, 63), (5, 81), (6, 95)],
};

impl ProgressLayout {
    pub fn percentage_for(&self, step: u32) -> u8 {
        self.percentages
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, pct)| *pct)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    pub label: &'static str,
    /// Highlighted ("reached") in the bar.
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    pub percentage: u8,
    pub steps: Vec<StepDescriptor>,
}

/// Map the current step onto the bar fill and label highlighting.
///
/// `current_step > total_steps` is the post-submission success screen: the
/// bar is full and every label is reached.
pub fn render_progress(current_step: u32, total_steps: u32, layout: &ProgressLayout) -> ProgressView {
    let submitted = current_step > total_steps;
    let percentage = if submitted {
        100
    } else {
        layout.percentage_for(current_step)
    };

    let steps = layout
        .labels
        .iter()
        .enumerate()
        .map(|(index, label)| StepDescriptor {
            label: *label,
            completed: submitted || current_step as usize >= index + 1,
        })
        .collect();

    ProgressView { percentage, steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reached(view: &ProgressView) -> Vec<bool> {
        view.steps.iter().map(|s| s.completed).collect()
    }

    #[test]
    fn success_state_is_full_for_both_layouts() {
        for layout in [FIVE_STEP_LAYOUT, SIX_STEP_LAYOUT] {
            let total = layout.labels.len() as u32;
            let view = render_progress(total + 1, total, &layout);

            assert_eq!(view.percentage, 100);
            assert!(view.steps.iter().all(|s| s.completed));
        }
    }

    #[test]
    fn percentages_come_from_the_table_not_division() {
        let view = render_progress(2, 5, &FIVE_STEP_LAYOUT);
        assert_eq!(view.percentage, 34);

        let view = render_progress(4, 6, &SIX_STEP_LAYOUT);
        assert_eq!(view.percentage, 63);
    }

    #[test]
    fn unknown_step_defaults_to_zero() {
        assert_eq!(render_progress(0, 5, &FIVE_STEP_LAYOUT).percentage, 0);
    }

    #[test]
    fn labels_up_to_current_step_are_reached() {
        let view = render_progress(3, 6, &SIX_STEP_LAYOUT);
        assert_eq!(reached(&view), vec![true, true, true, false, false, false]);

        let view = render_progress(0, 5, &FIVE_STEP_LAYOUT);
        assert!(view.steps.iter().all(|s| !s.completed));
    }

    #[test]
    fn labels_follow_layout_order() {
        let view = render_progress(1, 5, &FIVE_STEP_LAYOUT);
        let labels: Vec<_> = view.steps.iter().map(|s| s.label).collect();
        assert_eq!(labels, FIVE_STEP_LAYOUT.labels);
    }
}
