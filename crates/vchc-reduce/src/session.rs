use tracing::{debug, info};
use vchc_core::errors::{codes, ErrorInfo, VchcError};
use vchc_graph::{RenderGraph, SourceGraph, TargetGraph};

use crate::config::ReductionConfig;
use crate::params::check_parameters;
use crate::reducer::{ReductionSummary, Reducer};

/// Holds a source graph and the most recent reduction of it.
#[derive(Debug, Clone)]
pub struct ReductionSession {
    source: SourceGraph,
    reducer: Reducer,
    target: Option<TargetGraph>,
    summary: Option<ReductionSummary>,
}

impl ReductionSession {
    /// Creates a session using the default configuration.
    pub fn new(source: SourceGraph) -> Self {
        Self::with_config(source, ReductionConfig::default())
    }

    /// Creates a session with an explicit configuration.
    pub fn with_config(source: SourceGraph, config: ReductionConfig) -> Self {
        Self {
            source,
            reducer: Reducer::new(config),
            target: None,
            summary: None,
        }
    }

    /// The graph being reduced.
    pub fn source_graph(&self) -> &SourceGraph {
        &self.source
    }

    /// Runs the reducer and replaces the cached target graph.
    ///
    /// Every call rebuilds from scratch. On error the previous cache is kept.
    pub fn perform_reduction(&mut self) -> Result<&TargetGraph, VchcError> {
        let (target, summary) = self.reducer.reduce_with_summary(&self.source)?;
        info!(
            selectors = summary.selectors,
            components = summary.components,
            nodes = summary.nodes,
            links = summary.links,
            "reduction performed"
        );
        self.summary = Some(summary);
        Ok(&*self.target.insert(target))
    }

    /// The cached target graph, if a reduction has run.
    pub fn target_graph(&self) -> Option<&TargetGraph> {
        self.target.as_ref()
    }

    /// Counts from the most recent reduction.
    pub fn summary(&self) -> Option<&ReductionSummary> {
        self.summary.as_ref()
    }

    /// Checks the cover size against the source graph.
    pub fn check_parameters(&self) -> Result<(), VchcError> {
        check_parameters(&self.source)
    }

    /// Minimal structural sanity check of the cached target graph.
    ///
    /// True when at least one selector exists and every selector has at least
    /// one incoming or outgoing link. This says nothing about Hamiltonicity.
    pub fn validate(&self) -> Result<bool, VchcError> {
        let target = self.require_target()?;
        let selectors = target.selector_nodes();
        let valid = !selectors.is_empty()
            && selectors
                .iter()
                .all(|node| node.in_degree() + node.out_degree() > 0);
        debug!(selectors = selectors.len(), valid, "target graph validated");
        Ok(valid)
    }

    /// Render payload for the source graph.
    pub fn render_source(&self) -> RenderGraph {
        RenderGraph::from_source(&self.source, self.reducer.config().schema_version)
    }

    /// Render payload for the cached target graph.
    pub fn render_target(&self) -> Result<RenderGraph, VchcError> {
        let target = self.require_target()?;
        Ok(RenderGraph::from_target(
            target,
            self.reducer.config().schema_version,
        ))
    }

    fn require_target(&self) -> Result<&TargetGraph, VchcError> {
        self.target.as_ref().ok_or_else(|| {
            VchcError::Session(ErrorInfo::new(
                codes::REDUCTION_NOT_PERFORMED,
                "target graph not available",
            ))
            .with_hint("perform the reduction first")
        })
    }
}
