//! Error types.
//!
//! Every fallible operation in this crate returns [`Result`]. Configuration
//! errors are raised before any search work begins; model errors report a
//! broken coverage or load invariant.

/// Error type for instance, configuration, and assignment failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The instance has no servers to assign tasks to.
    #[error("server count must be at least 1")]
    ZeroServers,

    /// The task durations sum past the largest representable load.
    #[error("total load of {task_count} tasks exceeds {max}")]
    LoadOverflow {
        /// Number of tasks in the instance.
        task_count: usize,
        /// Largest accepted total load.
        max: u64,
    },

    /// An algorithm parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// A chromosome does not have exactly one gene per task.
    #[error("chromosome has {actual} genes, expected {expected}")]
    ChromosomeLength {
        /// Number of tasks in the instance.
        expected: usize,
        /// Number of genes supplied.
        actual: usize,
    },

    /// A server index does not exist in the instance.
    #[error("server index {server} out of range for {server_count} servers")]
    ServerOutOfRange {
        /// The offending server index.
        server: usize,
        /// Number of servers in the instance.
        server_count: usize,
    },

    /// An assignment was built for a different number of servers.
    #[error("assignment has {actual} servers, instance has {expected}")]
    ServerCountMismatch {
        /// Number of servers in the instance.
        expected: usize,
        /// Number of servers in the assignment.
        actual: usize,
    },

    /// A task index does not exist in the instance.
    #[error("task index {task} out of range for {task_count} tasks")]
    TaskOutOfRange {
        /// The offending task index.
        task: usize,
        /// Number of tasks in the instance.
        task_count: usize,
    },

    /// A task is not assigned to any server.
    #[error("task {task} is not assigned to any server")]
    UnassignedTask {
        /// The missing task.
        task: usize,
    },

    /// A task is assigned more than once.
    #[error("task {task} is assigned more than once")]
    DuplicateTask {
        /// The duplicated task.
        task: usize,
    },

    /// A cached server load disagrees with the tasks on that server.
    #[error("server {server} caches load {cached}, but its tasks sum to {actual}")]
    LoadMismatch {
        /// The inconsistent server.
        server: usize,
        /// The cached load value.
        cached: u64,
        /// The sum of durations of the server's tasks.
        actual: u64,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
