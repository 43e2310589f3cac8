//! End-to-end analysis: encode → mine → generate rules.

use std::fmt;
use std::sync::Arc;

use basket_core::config::BasketConfig;
use basket_core::errors::{BasketErrorCode, PipelineError};
use basket_core::events::{ErrorEvent, EventDispatcher};
use basket_core::traits::Cancellable;
use basket_core::types::{ItemInterner, RuleMetric, TransactionId};

use crate::apriori::{AprioriConfig, AprioriMiner, MiningDiagnostics};
use crate::encoding::{encode, IncidenceMatrix};
use crate::itemsets::{FrequentItemSet, ItemSet};
use crate::query;
use crate::rules::{AssociationRule, RuleConfig, RuleGenerator, RuleSet, RuleView};

/// Parameters of one analysis run. Validated when the run starts, before
/// any records are read.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub min_support: f64,
    pub metric: RuleMetric,
    /// `None` uses the metric's default threshold.
    pub min_threshold: Option<f64>,
    pub max_len: Option<usize>,
    pub count_chunk_rows: Option<usize>,
}

impl AnalysisSettings {
    /// Confidence-filtered rules at the metric's default threshold.
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            metric: RuleMetric::default(),
            min_threshold: None,
            max_len: None,
            count_chunk_rows: None,
        }
    }

    pub fn with_metric(mut self, metric: RuleMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_min_threshold(mut self, min_threshold: f64) -> Self {
        self.min_threshold = Some(min_threshold);
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_count_chunk_rows(mut self, rows: usize) -> Self {
        self.count_chunk_rows = Some(rows);
        self
    }

    /// Settings from resolved configuration. Fails with
    /// `ConfigError::MissingValue` when `min_support` is unset.
    pub fn from_config(config: &BasketConfig) -> Result<Self, PipelineError> {
        let mining = &config.mining;
        Ok(Self {
            min_support: mining.effective_min_support()?,
            metric: mining.effective_metric(),
            min_threshold: mining.min_threshold,
            max_len: mining.max_len,
            count_chunk_rows: mining.count_chunk_rows,
        })
    }

    fn apriori_config(&self) -> Result<AprioriConfig, PipelineError> {
        let mut config = AprioriConfig::new(self.min_support)?;
        if let Some(max_len) = self.max_len {
            config = config.with_max_len(max_len)?;
        }
        if let Some(rows) = self.count_chunk_rows {
            config = config.with_count_chunk_rows(rows);
        }
        Ok(config)
    }

    fn rule_config(&self) -> Result<RuleConfig, PipelineError> {
        Ok(match self.min_threshold {
            Some(t) => RuleConfig::new(self.metric, t)?,
            None => RuleConfig::with_default_threshold(self.metric),
        })
    }
}

/// Runs the full analysis with shared cancellation and event dispatch.
pub struct BasketAnalysis {
    settings: AnalysisSettings,
    cancel: Option<Arc<dyn Cancellable>>,
    events: EventDispatcher,
}

impl BasketAnalysis {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            settings,
            cancel: None,
            events: EventDispatcher::new(),
        }
    }

    pub fn with_cancellation(mut self, token: Arc<dyn Cancellable>) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Encode `records`, mine and derive rules.
    ///
    /// Errors are reported to `on_error` handlers before being returned.
    pub fn run<I, T, S>(&self, records: I) -> Result<AnalysisResult, PipelineError>
    where
        I: IntoIterator<Item = (T, S)>,
        T: Into<TransactionId>,
        S: AsRef<str>,
    {
        let outcome = self.configs().and_then(|(apriori, rules)| {
            let matrix = encode(records)?;
            self.analyse(&matrix, apriori, rules)
        });
        self.report(outcome)
    }

    /// Mine and derive rules from an already-encoded matrix.
    pub fn run_matrix(&self, matrix: &IncidenceMatrix) -> Result<AnalysisResult, PipelineError> {
        let outcome = self
            .configs()
            .and_then(|(apriori, rules)| self.analyse(matrix, apriori, rules));
        self.report(outcome)
    }

    fn configs(&self) -> Result<(AprioriConfig, RuleConfig), PipelineError> {
        Ok((self.settings.apriori_config()?, self.settings.rule_config()?))
    }

    fn analyse(
        &self,
        matrix: &IncidenceMatrix,
        apriori: AprioriConfig,
        rules: RuleConfig,
    ) -> Result<AnalysisResult, PipelineError> {
        let mut miner = AprioriMiner::new(apriori).with_events(self.events.clone());
        let mut generator = RuleGenerator::new(rules).with_events(self.events.clone());
        if let Some(token) = &self.cancel {
            miner = miner.with_cancellation(Arc::clone(token));
            generator = generator.with_cancellation(Arc::clone(token));
        }

        let outcome = miner.mine(matrix)?;
        let rules = generator.generate(&outcome.itemsets)?;

        Ok(AnalysisResult {
            vocabulary: Arc::clone(matrix.vocabulary()),
            frequent: outcome.itemsets,
            rules,
            diagnostics: outcome.diagnostics,
        })
    }

    fn report(
        &self,
        outcome: Result<AnalysisResult, PipelineError>,
    ) -> Result<AnalysisResult, PipelineError> {
        if let Err(e) = &outcome {
            tracing::warn!(code = e.error_code(), error = %e, "analysis failed");
            self.events.emit_error(&ErrorEvent {
                code: e.error_code().to_string(),
                message: e.to_string(),
            });
        }
        outcome
    }
}

/// Output of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub vocabulary: Arc<ItemInterner>,
    pub frequent: Vec<FrequentItemSet>,
    pub rules: RuleSet,
    pub diagnostics: MiningDiagnostics,
}

impl AnalysisResult {
    /// Resolve labels against this run's vocabulary.
    pub fn itemset<S: AsRef<str>>(&self, labels: &[S]) -> Option<ItemSet> {
        ItemSet::from_labels(&self.vocabulary, labels)
    }

    pub fn rule_views(&self) -> Vec<RuleView> {
        self.rules.views(&self.vocabulary)
    }

    /// Rules whose antecedent is exactly `labels`. Unknown labels match nothing.
    pub fn find_rules_for_labels<S: AsRef<str>>(&self, labels: &[S]) -> Vec<&AssociationRule> {
        query::find_rules_for_labels(&self.rules, &self.vocabulary, labels)
    }

    /// The strongest rule for `labels` as a view, `None` meaning no
    /// recommendation.
    pub fn recommend_for_labels<S: AsRef<str>>(&self, labels: &[S]) -> Option<RuleView> {
        let antecedent = self.itemset(labels)?;
        query::recommend(&self.rules, &antecedent).map(|r| r.view(&self.vocabulary))
    }

    /// Support of `labels` as mined, `None` if not frequent.
    pub fn support_of<S: AsRef<str>>(&self, labels: &[S]) -> Option<f64> {
        let items = self.itemset(labels)?;
        self.frequent
            .iter()
            .find(|f| f.items() == &items)
            .map(FrequentItemSet::support)
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnalysisResult {{ transactions={}, vocabulary={}, frequent={}, rules={}, max_level={} }}",
            self.diagnostics.transactions,
            self.vocabulary.len(),
            self.frequent.len(),
            self.rules.len(),
            self.diagnostics.max_level(),
        )
    }
}
