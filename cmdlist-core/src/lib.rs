//! Deferred command lists.
//!
//! A [`CommandList`] records calls to functions of one fixed signature
//! together with their arguments, then runs them later as a batch in the
//! order they were registered, optionally collecting the return values.

mod args;
mod config;
mod error;
mod list;
mod observation;
mod observer;
mod sink;

pub use args::CommandArgs;
pub use config::{ListConfig, DEFAULT_GROWTH_PERCENT, DEFAULT_INITIAL_CAPACITY};
pub use error::{CommandListError, CommandListResult};
pub use list::CommandList;
pub use observation::Observation;
pub use observer::{
    filter_observer, filter_with, no_op_observer, tee_observer, tracing_observer, ObserverFn,
};
pub use sink::{Discard, ReturnSink};
