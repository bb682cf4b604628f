//! Smithery CLI tools for the MCP agent.
//!
//! - [`tools`] - search, install, inspect and server-manager tools
//! - [`FunctionTool`] - closure-backed tool for inline capabilities
//! - [`ToolRegistry`] - unique-name registry with uniform dispatch
//! - [`create_smithery_tools`] - builds the full Smithery tool set
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod factory;
mod function;
mod registry;
pub mod tools;

pub use factory::{create_default_tools, create_smithery_tools};
pub use function::FunctionTool;
pub use registry::ToolRegistry;
pub use tools::{
    InspectTool, InstallTool, SearchTool, ServerAction, ServerManagerTool,
};

#[cfg(test)]
mod test_support {
    use async_trait::async_trait;
    use mockall::mock;
    use smithery_core::{CommandError, CommandResult, CommandRunner};

    mock! {
        pub Runner {}

        #[async_trait]
        impl CommandRunner for Runner {
            async fn run(&self, argv: &[String]) -> Result<CommandResult, CommandError>;
        }
    }
}
