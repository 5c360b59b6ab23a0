pub mod pipe;
pub mod shell;

pub use pipe::{CommandPipe, PipeError, PipeTarget};
pub use shell::{run_piped, ShellError};
