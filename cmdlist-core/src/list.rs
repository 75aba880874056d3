use std::collections::VecDeque;
use std::fmt;
use std::time::SystemTime;

use crate::args::CommandArgs;
use crate::config::ListConfig;
use crate::error::{CommandListError, CommandListResult};
use crate::observer::ObserverFn;
use crate::sink::{Discard, ReturnSink};
use crate::Observation;

/// One registered call: the function reference and the arguments it will
/// be invoked with.
struct Command<R, Args: CommandArgs<R>> {
    callable: Args::Callable,
    args: Args,
}

impl<R, Args: CommandArgs<R>> Command<R, Args> {
    #[inline]
    fn invoke(self) -> R {
        Args::apply(self.callable, self.args)
    }
}

impl<R, Args: CommandArgs<R> + Clone> Clone for Command<R, Args> {
    fn clone(&self) -> Self {
        Self {
            callable: self.callable,
            args: self.args.clone(),
        }
    }
}

/// Deferred list of calls sharing the signature `fn(Args..) -> R`.
///
/// Commands are recorded with [`register`](Self::register) and run in
/// registration order by one of the execute methods, which leave the list
/// empty with its capacity intact.
///
/// `Args` is the parameter tuple; `()` gives a no-argument list:
///
/// ```
/// use cmdlist_core::CommandList;
///
/// fn add(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// let mut list = CommandList::<i32, (i32, i32)>::new();
/// list.register(add, (2, 3)).unwrap();
/// list.register(add, (5, 6)).unwrap();
///
/// let mut sums = [0; 2];
/// list.execute_into(&mut sums).unwrap();
/// assert_eq!(sums, [5, 11]);
/// assert!(list.is_empty());
/// ```
///
/// The list owns the argument values but not anything they point to; a
/// borrowed argument pins the list to that borrow's lifetime.
pub struct CommandList<R, Args: CommandArgs<R>> {
    entries: VecDeque<Command<R, Args>>,
    capacity: usize,
    config: ListConfig,
    observer: Option<ObserverFn>,
}

impl<R, Args: CommandArgs<R>> CommandList<R, Args> {
    /// Empty list with the default starting capacity of 10.
    pub fn new() -> Self {
        let config = ListConfig::default();
        Self {
            entries: VecDeque::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            config,
            observer: None,
        }
    }

    /// Empty list able to hold `initial_capacity` commands before growing.
    pub fn with_capacity(initial_capacity: usize) -> CommandListResult<Self> {
        Self::from_config(&ListConfig::with_capacity(initial_capacity))
    }

    pub fn from_config(config: &ListConfig) -> CommandListResult<Self> {
        config.validate()?;
        let mut entries = VecDeque::new();
        entries
            .try_reserve_exact(config.initial_capacity)
            .map_err(|source| CommandListError::Allocation {
                requested: config.initial_capacity,
                source,
            })?;
        Ok(Self {
            entries,
            capacity: config.initial_capacity,
            config: *config,
            observer: None,
        })
    }

    pub fn with_observer(mut self, observer: ObserverFn) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Number of commands waiting to run.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commands the list can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Append a command bound to `args`.
    ///
    /// Grows the storage first when the list is full. A failed grow returns
    /// an error and leaves the list exactly as it was.
    pub fn register(&mut self, command: Args::Callable, args: Args) -> CommandListResult<()> {
        if self.entries.len() == self.capacity {
            self.grow_to(self.config.next_capacity(self.capacity)?)?;
        }
        self.entries.push_back(Command {
            callable: command,
            args,
        });
        self.observe(|ts| Observation::Registered {
            ts,
            index: self.entries.len() - 1,
            pending: self.entries.len(),
        });
        Ok(())
    }

    /// Move every pending command of `other` to the end of this list,
    /// keeping their order. `other` is left empty with its capacity.
    pub fn append(&mut self, other: &mut Self) -> CommandListResult<()> {
        let needed = self
            .entries
            .len()
            .checked_add(other.entries.len())
            .ok_or(CommandListError::CapacityOverflow(self.entries.len()))?;
        let mut target = self.capacity;
        while target < needed {
            target = self.config.next_capacity(target)?;
        }
        if target != self.capacity {
            self.grow_to(target)?;
        }
        let base = self.entries.len();
        self.entries.append(&mut other.entries);
        for index in base..self.entries.len() {
            self.observe(|ts| Observation::Registered {
                ts,
                index,
                pending: index + 1,
            });
        }
        Ok(())
    }

    /// Run every pending command in registration order, discarding return
    /// values. Returns how many commands ran.
    pub fn execute(&mut self) -> usize {
        self.drain_into(&mut Discard)
    }

    /// Run every pending command, writing the value of the `i`-th one to
    /// `out[i]`. Fails without running anything if `out` is too short,
    /// unless `R` is zero-sized and the buffer is never written.
    pub fn execute_into(&mut self, out: &mut [R]) -> CommandListResult<usize> {
        self.execute_with(out)
    }

    /// Run every pending command, handing each return value to `sink`.
    pub fn execute_with<S: ReturnSink<R>>(&mut self, mut sink: S) -> CommandListResult<usize> {
        sink.reserve(self.entries.len())?;
        Ok(self.drain_into(&mut sink))
    }

    /// Drop every pending command without running it. Capacity is kept.
    pub fn clear(&mut self) {
        let discarded = self.entries.len();
        self.entries.clear();
        self.observe(|ts| Observation::Cleared { ts, discarded });
    }

    /// Each entry leaves the queue before it is invoked, so a panicking
    /// command consumes itself and everything before it while the rest
    /// stays pending.
    fn drain_into<S: ReturnSink<R>>(&mut self, sink: &mut S) -> usize {
        let mut executed = 0;
        while let Some(command) = self.entries.pop_front() {
            sink.accept(executed, command.invoke());
            self.observe(|ts| Observation::Executed {
                ts,
                index: executed,
            });
            executed += 1;
        }
        self.observe(|ts| Observation::Drained {
            ts,
            executed,
            remaining: self.entries.len(),
        });
        executed
    }

    fn grow_to(&mut self, target: usize) -> CommandListResult<()> {
        let additional = target - self.entries.len();
        self.entries
            .try_reserve_exact(additional)
            .map_err(|source| CommandListError::Allocation {
                requested: target,
                source,
            })?;
        let from = self.capacity;
        self.capacity = target;
        self.observe(|ts| Observation::Grown {
            ts,
            from,
            to: target,
        });
        Ok(())
    }

    fn observe(&self, build: impl FnOnce(SystemTime) -> Observation) {
        if let Some(observer) = &self.observer {
            observer(&build(SystemTime::now()));
        }
    }
}

impl<T, E, Args: CommandArgs<Result<T, E>>> CommandList<Result<T, E>, Args> {
    /// Run pending commands until one returns `Err`.
    ///
    /// `Ok` values are appended to `out` in execution order. The failing
    /// command is consumed and its error returned; commands after it stay
    /// pending. On success returns how many commands ran.
    pub fn try_execute_into(&mut self, out: &mut Vec<T>) -> Result<usize, E> {
        let mut executed = 0;
        while let Some(command) = self.entries.pop_front() {
            let result = command.invoke();
            self.observe(|ts| Observation::Executed {
                ts,
                index: executed,
            });
            executed += 1;
            match result {
                Ok(value) => out.push(value),
                Err(err) => {
                    self.observe(|ts| Observation::Drained {
                        ts,
                        executed,
                        remaining: self.entries.len(),
                    });
                    return Err(err);
                }
            }
        }
        self.observe(|ts| Observation::Drained {
            ts,
            executed,
            remaining: 0,
        });
        Ok(executed)
    }
}

impl<R, Args: CommandArgs<R>> Default for CommandList<R, Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, Args: CommandArgs<R> + Clone> Clone for CommandList<R, Args> {
    fn clone(&self) -> Self {
        let mut entries = VecDeque::with_capacity(self.capacity);
        entries.extend(self.entries.iter().cloned());
        Self {
            entries,
            capacity: self.capacity,
            config: self.config,
            observer: self.observer.clone(),
        }
    }
}

impl<R, Args: CommandArgs<R>> fmt::Debug for CommandList<R, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandList")
            .field("pending", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
