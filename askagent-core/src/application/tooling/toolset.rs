use super::interface::{Tool, ToolBuilder};
use crate::model::ToolDefinition;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// The tools bound to one agent invocation.
#[derive(Clone, Default)]
pub struct ToolSet {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Self {
        Self { tools }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|tool| tool.definition()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }
}

impl fmt::Debug for ToolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Tools for one call: nothing unless search is allowed, and nothing if the
/// search tool cannot be built.
pub fn make_tools(allow_search: bool, builder: &dyn ToolBuilder) -> ToolSet {
    if !allow_search {
        return ToolSet::empty();
    }

    match builder.build() {
        Ok(tool) => {
            debug!(tool = tool.name(), "Search tool ready");
            ToolSet::new(vec![tool])
        }
        Err(error) => {
            warn!(%error, "Failed to initialise search tool; continuing without tools");
            ToolSet::empty()
        }
    }
}
