use thiserror::Error;

/// Failure of an external command the menu shells out to.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with status {status}: {stderr}")]
    Failed {
        program: String,
        status: i32,
        stderr: String,
    },
}
