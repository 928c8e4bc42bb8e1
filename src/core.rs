//! Core RANSAC traits and the fixed-budget driver.
//!
//! The loop is split along the usual seams:
//! - [`Estimator`] turns a minimal sample into candidate models.
//! - [`Sampler`] draws minimal samples and owns all randomness.
//! - [`Scoring`] counts the support of a candidate.
//! - [`Ransac`] runs exactly `max_iterations` hypotheses and keeps the best.

use crate::point_cloud::PointCloud;
use crate::settings::RansacSettings;
use log::trace;

/// Estimator responsible for generating model hypotheses from minimal samples.
pub trait Estimator {
    /// Model type produced by this estimator.
    type Model: Clone;

    /// Size of a minimal sample for this estimator.
    fn sample_size(&self) -> usize;

    /// Check whether a given sample is usable (distinct, in-range indices).
    fn is_valid_sample(&self, cloud: &PointCloud, sample: &[usize]) -> bool;

    /// Estimate candidate models from a minimal sample.
    ///
    /// An empty vector means the sample was degenerate.
    fn estimate_model(&self, cloud: &PointCloud, sample: &[usize]) -> Vec<Self::Model>;

    /// Validate a candidate model before scoring.
    fn is_valid_model(&self, model: &Self::Model, cloud: &PointCloud, sample: &[usize]) -> bool;
}

/// Sampler responsible for drawing minimal samples from the cloud.
pub trait Sampler {
    /// Draw a sample of `sample_size` elements into `out_indices`.
    ///
    /// Returns `false` if a valid sample could not be drawn.
    fn sample(&mut self, cloud: &PointCloud, sample_size: usize, out_indices: &mut [usize]) -> bool;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(
        &mut self,
        cloud: &PointCloud,
        sample_size: usize,
        out_indices: &mut [usize],
    ) -> bool {
        (**self).sample(cloud, sample_size, out_indices)
    }
}

/// Scoring strategy used to evaluate model quality and determine inliers.
pub trait Scoring<M> {
    /// Score type – must support ordering for "better than" comparisons.
    type Score: Clone + PartialOrd;

    /// Score a model and fill `inliers_out` with the supporting indices.
    fn score(&self, cloud: &PointCloud, model: &M, inliers_out: &mut Vec<usize>) -> Self::Score;
}

/// RANSAC pipeline orchestrating the above components.
///
/// Runs a fixed number of iterations with no early termination. A candidate
/// replaces the current best only when its score is strictly greater, so the
/// first model reaching a given score wins ties.
pub struct Ransac<E, Sa, Sc>
where
    E: Estimator,
    Sa: Sampler,
    Sc: Scoring<E::Model>,
{
    pub settings: RansacSettings,
    pub estimator: E,
    pub sampler: Sa,
    pub scoring: Sc,

    // Outputs / diagnostics
    pub best_model: Option<E::Model>,
    pub best_inliers: Vec<usize>,
    pub best_score: Option<Sc::Score>,
    pub iteration: usize,
    /// Iterations skipped because no usable sample or model came out.
    pub skipped_iterations: usize,
}

impl<E, Sa, Sc> Ransac<E, Sa, Sc>
where
    E: Estimator,
    Sa: Sampler,
    Sc: Scoring<E::Model>,
{
    pub fn new(settings: RansacSettings, estimator: E, sampler: Sa, scoring: Sc) -> Self {
        Self {
            settings,
            estimator,
            sampler,
            scoring,
            best_model: None,
            best_inliers: Vec::new(),
            best_score: None,
            iteration: 0,
            skipped_iterations: 0,
        }
    }

    /// Run the RANSAC loop on the given cloud.
    pub fn run(&mut self, cloud: &PointCloud) {
        let sample_size = self.estimator.sample_size();
        let mut sample = vec![0usize; sample_size];
        let mut tmp_inliers = Vec::new();

        self.best_inliers.clear();
        self.best_model = None;
        self.best_score = None;
        self.iteration = 0;
        self.skipped_iterations = 0;

        while self.iteration < self.settings.max_iterations {
            self.iteration += 1;

            if !self.sampler.sample(cloud, sample_size, &mut sample)
                || !self.estimator.is_valid_sample(cloud, &sample)
            {
                self.skipped_iterations += 1;
                continue;
            }

            let models = self.estimator.estimate_model(cloud, &sample);
            if models.is_empty() {
                self.skipped_iterations += 1;
                continue;
            }

            for model in models.iter() {
                if !self.estimator.is_valid_model(model, cloud, &sample) {
                    continue;
                }

                let score = self.scoring.score(cloud, model, &mut tmp_inliers);

                let better = match &self.best_score {
                    None => true,
                    Some(best) => score > *best,
                };

                if better {
                    trace!(
                        "iteration {}: new best model with {} inliers",
                        self.iteration,
                        tmp_inliers.len()
                    );
                    self.best_score = Some(score);
                    self.best_model = Some(model.clone());
                    std::mem::swap(&mut self.best_inliers, &mut tmp_inliers);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point3D;

    #[derive(Clone, Debug, PartialEq)]
    struct MockModel(usize);

    struct MockEstimator;

    impl Estimator for MockEstimator {
        type Model = MockModel;

        fn sample_size(&self) -> usize {
            2
        }

        fn is_valid_sample(&self, _cloud: &PointCloud, _sample: &[usize]) -> bool {
            true
        }

        fn estimate_model(&self, _cloud: &PointCloud, sample: &[usize]) -> Vec<Self::Model> {
            // Samples starting at index 0 are "degenerate".
            if sample[0] == 0 {
                Vec::new()
            } else {
                vec![MockModel(sample[0])]
            }
        }

        fn is_valid_model(
            &self,
            _model: &Self::Model,
            _cloud: &PointCloud,
            _sample: &[usize],
        ) -> bool {
            true
        }
    }

    /// Replays a fixed list of first indices, cycling.
    struct ScriptedSampler {
        script: Vec<usize>,
        calls: usize,
    }

    impl Sampler for ScriptedSampler {
        fn sample(
            &mut self,
            _cloud: &PointCloud,
            sample_size: usize,
            out_indices: &mut [usize],
        ) -> bool {
            let first = self.script[self.calls % self.script.len()];
            self.calls += 1;
            for (i, v) in out_indices.iter_mut().enumerate().take(sample_size) {
                *v = first + i;
            }
            true
        }
    }

    /// Score equals `model.0 % 3`, so models 2 and 5 tie.
    struct MockScoring;

    impl Scoring<MockModel> for MockScoring {
        type Score = usize;

        fn score(
            &self,
            _cloud: &PointCloud,
            model: &MockModel,
            inliers_out: &mut Vec<usize>,
        ) -> Self::Score {
            inliers_out.clear();
            inliers_out.extend(0..model.0 % 3);
            model.0 % 3
        }
    }

    fn cloud() -> PointCloud {
        (0..10).map(|i| Point3D::new(i as f32, 0.0, 0.0)).collect()
    }

    fn settings(max_iterations: usize) -> RansacSettings {
        RansacSettings {
            max_iterations,
            ..RansacSettings::default()
        }
    }

    #[test]
    fn runs_full_budget_and_keeps_first_of_ties() {
        let sampler = ScriptedSampler {
            script: vec![0, 1, 2, 5, 4],
            calls: 0,
        };
        let mut pipeline = Ransac::new(settings(5), MockEstimator, sampler, MockScoring);
        pipeline.run(&cloud());

        assert_eq!(pipeline.iteration, 5);
        assert_eq!(pipeline.sampler.calls, 5);
        assert_eq!(pipeline.skipped_iterations, 1);
        assert_eq!(pipeline.best_model, Some(MockModel(2)));
        assert_eq!(pipeline.best_score, Some(2));
        assert_eq!(pipeline.best_inliers, vec![0, 1]);
    }

    #[test]
    fn zero_budget_produces_nothing() {
        let sampler = ScriptedSampler {
            script: vec![1],
            calls: 0,
        };
        let mut pipeline = Ransac::new(settings(0), MockEstimator, sampler, MockScoring);
        pipeline.run(&cloud());

        assert!(pipeline.best_model.is_none());
        assert_eq!(pipeline.sampler.calls, 0);
    }

    #[test]
    fn only_degenerate_samples_leave_no_model() {
        let sampler = ScriptedSampler {
            script: vec![0],
            calls: 0,
        };
        let mut pipeline = Ransac::new(settings(7), MockEstimator, sampler, MockScoring);
        pipeline.run(&cloud());

        assert!(pipeline.best_model.is_none());
        assert_eq!(pipeline.skipped_iterations, 7);
    }

    #[test]
    fn borrowed_sampler_is_a_sampler() {
        let mut sampler = ScriptedSampler {
            script: vec![1],
            calls: 0,
        };
        {
            let mut pipeline = Ransac::new(settings(3), MockEstimator, &mut sampler, MockScoring);
            pipeline.run(&cloud());
        }
        assert_eq!(sampler.calls, 3);
    }
}
