//! WeightEngine: orchestrates the per-subject weighting pipeline.
//!
//! Stage 1: prerequisite depth resolution (cycle-tolerant).
//! Stage 2: composite scoring, depth decay, per-subject normalization.
//!
//! Subjects are independent: processing one never reads or mutates another,
//! so the plan-level entry points come in sequential and data-parallel forms.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info};

use studyrank_core::config::WeightConfig;
use studyrank_core::errors::{WeightError, WeightResult};
use studyrank_core::plan::{ScoreBreakdown, StudyPlan, Subject};

use crate::depth;
use crate::formula;

/// The weighting engine. Holds validated coefficients and applies the
/// two-stage pipeline to each subject in turn.
pub struct WeightEngine {
    config: WeightConfig,
    attach_breakdown: bool,
}

impl WeightEngine {
    /// Create an engine with the given coefficients.
    pub fn new(config: WeightConfig) -> WeightResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            attach_breakdown: false,
        })
    }

    /// Attach the diagnostic raw/adjusted/depth breakdown to each subtopic.
    pub fn with_breakdown(mut self, attach: bool) -> Self {
        self.attach_breakdown = attach;
        self
    }

    pub fn config(&self) -> &WeightConfig {
        &self.config
    }

    /// Weight every subject in the plan, in order.
    pub fn process_plan(&self, plan: &mut StudyPlan) -> WeightResult<()> {
        for (index, subject) in plan.subjects.iter_mut().enumerate() {
            self.process_subject_at(index, subject)?;
        }
        info!(subjects = plan.subjects.len(), "study plan weighted");
        Ok(())
    }

    /// Weight every subject in the plan, in parallel.
    ///
    /// Subjects share no state, so this is a plain data-parallel map over
    /// the sequential path; the first contract violation wins.
    pub fn process_plan_parallel(&self, plan: &mut StudyPlan) -> WeightResult<()> {
        plan.subjects
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(index, subject)| self.process_subject_at(index, subject))?;
        info!(
            subjects = plan.subjects.len(),
            "study plan weighted (parallel)"
        );
        Ok(())
    }

    /// Weight a single subject. Errors report subject index 0.
    pub fn process_subject(&self, subject: &mut Subject) -> WeightResult<()> {
        self.process_subject_at(0, subject)
    }

    fn process_subject_at(&self, index: usize, subject: &mut Subject) -> WeightResult<()> {
        let n = subject.subtopics.len();
        if n == 0 {
            debug!(subject = index, "no subtopics, skipping");
            return Ok(());
        }

        // Duplicate ids make the id → depth lookup ambiguous; fail fast
        // rather than silently scoring the first match.
        {
            let mut seen = HashSet::with_capacity(n);
            for st in &subject.subtopics {
                if !seen.insert(&st.id) {
                    return Err(WeightError::DuplicateSubtopicId {
                        subject_index: index,
                        id: st.id.clone(),
                    });
                }
            }
        }

        let depths = depth::resolve_depths(&subject.subtopics);

        let total_hours: f64 = subject
            .subtopics
            .iter()
            .map(|st| st.hours_required)
            .filter(|h| *h > 0.0)
            .sum();

        if total_hours <= 0.0 {
            // No usable hours anywhere: equal weights, zero importance.
            // Emitted unrounded so every weight is exactly 1/n.
            let uniform = 1.0 / n as f64;
            for st in &mut subject.subtopics {
                st.computed_weight = Some(uniform);
                st.score_breakdown = self.attach_breakdown.then(|| ScoreBreakdown {
                    raw: 0.0,
                    adjusted: 0.0,
                    depth: depths.get(&st.id).copied().unwrap_or(0),
                });
            }
            subject.computed_importance = Some(0.0);
            debug!(
                subject = index,
                subtopics = n,
                "no positive hours, uniform fallback"
            );
            return Ok(());
        }

        let breakdowns: Vec<ScoreBreakdown> = subject
            .subtopics
            .iter()
            .map(|st| {
                let d = depths.get(&st.id).copied().unwrap_or(0);
                formula::compute(st.hours_required, st.pyqs, d, total_hours, &self.config)
            })
            .collect();

        let adjusted_sum: f64 = breakdowns.iter().map(|b| b.adjusted).sum();
        // An exactly-zero sum would divide out to NaN; 1.0 keeps the
        // weights well-defined (all zero) instead.
        let divisor = if adjusted_sum == 0.0 { 1.0 } else { adjusted_sum };

        for (st, breakdown) in subject.subtopics.iter_mut().zip(&breakdowns) {
            st.computed_weight = Some(formula::round_output(breakdown.adjusted / divisor));
            st.score_breakdown = self.attach_breakdown.then(|| ScoreBreakdown {
                raw: formula::round_output(breakdown.raw),
                adjusted: formula::round_output(breakdown.adjusted),
                depth: breakdown.depth,
            });
        }

        let importance = formula::round_output(adjusted_sum / n as f64);
        subject.computed_importance = Some(importance);

        debug!(
            subject = index,
            subtopics = n,
            total_hours,
            importance,
            "subject weighted"
        );
        Ok(())
    }
}
