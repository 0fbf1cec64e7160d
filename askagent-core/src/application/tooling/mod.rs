pub mod error;
pub mod interface;
pub mod toolset;

pub use error::{ToolBuildError, ToolInvokeError};
pub use interface::{Tool, ToolBuilder};
pub use toolset::{ToolSet, make_tools};
