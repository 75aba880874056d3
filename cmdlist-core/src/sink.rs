use std::mem;

use crate::error::{CommandListError, CommandListResult};

/// Zero-sized return values carry nothing, so buffers never hold them.
#[inline]
fn carries_value<R>() -> bool {
    mem::size_of::<R>() != 0
}

/// Destination for the return values of executed commands.
///
/// `reserve` is called once with the pending count before any command runs,
/// so a sink that cannot hold every value rejects the whole execution up
/// front. `accept` then receives each value with its position among the
/// executed commands.
pub trait ReturnSink<R> {
    fn reserve(&mut self, _pending: usize) -> CommandListResult<()> {
        Ok(())
    }

    fn accept(&mut self, index: usize, value: R);
}

/// Drops every return value. This is the path for lists whose commands
/// produce nothing worth keeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl<R> ReturnSink<R> for Discard {
    #[inline]
    fn accept(&mut self, _index: usize, _value: R) {}
}

impl<R> ReturnSink<R> for &mut [R] {
    fn reserve(&mut self, pending: usize) -> CommandListResult<()> {
        if carries_value::<R>() && self.len() < pending {
            return Err(CommandListError::OutputTooShort {
                needed: pending,
                available: self.len(),
            });
        }
        Ok(())
    }

    fn accept(&mut self, index: usize, value: R) {
        if carries_value::<R>() {
            self[index] = value;
        }
    }
}

impl<R> ReturnSink<R> for &mut Vec<R> {
    fn reserve(&mut self, pending: usize) -> CommandListResult<()> {
        if !carries_value::<R>() {
            return Ok(());
        }
        self.try_reserve(pending)
            .map_err(|source| CommandListError::Allocation {
                requested: self.len().saturating_add(pending),
                source,
            })
    }

    fn accept(&mut self, _index: usize, value: R) {
        if carries_value::<R>() {
            self.push(value);
        }
    }
}

impl<R, S: ReturnSink<R>> ReturnSink<R> for Option<S> {
    fn reserve(&mut self, pending: usize) -> CommandListResult<()> {
        match self {
            Some(sink) => sink.reserve(pending),
            None => Ok(()),
        }
    }

    fn accept(&mut self, index: usize, value: R) {
        if let Some(sink) = self {
            sink.accept(index, value);
        }
    }
}
