use crate::filters::{FilterPatch, Filters};
use boardmap_core::config::ViewConfig;
use boardmap_core::identity::IdentityPolicy;
use boardmap_core::model::{Bipartite, BoardRow, GraphNode, OverlapMatrix, ProjectedGraph, ViewMode};
use graph::{build_org_overlap_matrix, project, NetworkIndex};
use ingestion::BipartiteBuilder;

/// Whether the memoized bipartite and graph reflect the current rows, view
/// and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Dirty,
    Clean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recompute {
    /// Recompute as part of the action.
    Immediate,
    /// Mark dirty; the caller batches changes and calls `compute` later.
    Deferred,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ImportRows(Vec<BoardRow>),
    SetView(ViewMode),
    SetFilters(FilterPatch),
    Compute,
}

impl Action {
    /// Switching views recomputes at once; imports and filter edits wait for
    /// an explicit `compute`. The UI relies on both behaviours.
    pub fn recompute(&self) -> Recompute {
        match self {
            Action::SetView(_) | Action::Compute => Recompute::Immediate,
            Action::ImportRows(_) | Action::SetFilters(_) => Recompute::Deferred,
        }
    }
}

/// Per-session view state for the board network page.
///
/// Holds the raw rows and filter criteria, and the bipartite/graph derived
/// from them at the last `compute`. One instance per session; pass it to
/// whatever needs it.
pub struct ViewStore {
    rows: Vec<BoardRow>,
    view: ViewMode,
    filters: Filters,
    builder: BipartiteBuilder,
    bi: Bipartite,
    graph: ProjectedGraph,
    freshness: Freshness,
}

impl ViewStore {
    pub fn new(config: &ViewConfig) -> Self {
        Self::with_builder(config, BipartiteBuilder::new())
    }

    pub fn with_identity(config: &ViewConfig, identity: Box<dyn IdentityPolicy>) -> Self {
        Self::with_builder(config, BipartiteBuilder::with_identity(identity))
    }

    fn with_builder(config: &ViewConfig, builder: BipartiteBuilder) -> Self {
        Self {
            rows: Vec::new(),
            view: config.default_mode,
            filters: Filters::from_config(config),
            builder,
            bi: Bipartite::default(),
            graph: ProjectedGraph::default(),
            freshness: Freshness::Dirty,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let recompute = action.recompute();

        match action {
            Action::ImportRows(rows) => self.rows = rows,
            Action::SetView(mode) => self.view = mode,
            Action::SetFilters(patch) => self.filters.apply(patch),
            Action::Compute => {}
        }

        match recompute {
            Recompute::Immediate => self.recompute(),
            Recompute::Deferred => self.freshness = Freshness::Dirty,
        }
    }

    /// Replaces the raw rows. Does not recompute.
    pub fn import_rows(&mut self, rows: Vec<BoardRow>) {
        self.dispatch(Action::ImportRows(rows));
    }

    /// Switches projection side and recomputes.
    pub fn set_view(&mut self, mode: ViewMode) {
        self.dispatch(Action::SetView(mode));
    }

    /// Merges filter fields. Does not recompute.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.dispatch(Action::SetFilters(patch));
    }

    pub fn compute(&mut self) {
        self.dispatch(Action::Compute);
    }

    fn recompute(&mut self) {
        let filters = &self.filters;
        let kept = self.rows.iter().filter(|row| filters.matches(row));
        self.bi = self.builder.build_from(kept);
        self.graph = project(&self.bi, self.view);
        self.freshness = Freshness::Clean;

        tracing::debug!(
            rows = self.rows.len(),
            roles = self.bi.roles.len(),
            people = self.bi.people.len(),
            orgs = self.bi.orgs.len(),
            links = self.graph.links.len(),
            view = ?self.view,
            "board network recomputed"
        );
    }

    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    /// Bipartite as of the last `compute`.
    pub fn bi(&self) -> &Bipartite {
        &self.bi
    }

    /// Projected graph as of the last `compute`.
    pub fn graph(&self) -> &ProjectedGraph {
        &self.graph
    }

    pub fn overlap_matrix(&self) -> OverlapMatrix {
        build_org_overlap_matrix(&self.bi)
    }

    pub fn network_index(&self) -> NetworkIndex {
        NetworkIndex::new(&self.graph)
    }

    /// Nodes whose label contains the search query, ignoring case. An empty
    /// query highlights nothing.
    pub fn matching_nodes(&self) -> Vec<&GraphNode> {
        let needle = self.filters.query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.graph
            .nodes
            .iter()
            .filter(|node| node.label.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}
