pub mod client;
pub mod invocation;
pub mod payload;
pub mod process;

pub use client::{Console, StdConsole, ToolExit, UpdateTool};
pub use invocation::build_invocation;
pub use payload::render_payload;
pub use process::Nsupdate;
