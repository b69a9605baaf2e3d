//! Progress reporting and cooperative cancellation.
//!
//! Meshing a dense region can take seconds, so [`BasicMesher`] reports how
//! far along each phase is through a [`Progress`] sink. The sink sees a
//! stream of `(percent, phase)` pairs, at most one per percentage point, and
//! every phase ends with a 100% message.
//!
//! [`BasicMesher`]: crate::BasicMesher
use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

use crate::Error;

/// Receiver of progress messages.
pub trait Progress {
  /// Called with the completion of the current phase, `0..=100`, and a
  /// human readable phase label such as `"refinement iteration 2"`.
  fn report(&mut self, percent: u8, phase: &str);

  /// Polled at every reported point. Returning `true` makes the mesher stop
  /// and return [`Error::Cancelled`].
  fn is_cancelled(&self) -> bool {
    false
  }
}

/// Discards every message.
impl Progress for () {
  fn report(&mut self, _percent: u8, _phase: &str) {}
}

impl<F> Progress for F
where
  F: FnMut(u8, &str),
{
  fn report(&mut self, percent: u8, phase: &str) {
    self(percent, phase)
  }
}

/// Token to cancel an in-progress meshing operation
#[derive(Clone, Default, Debug)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
  /// Build a new token, which is initialized as "not cancelled"
  pub fn new() -> Self {
    Self::default()
  }

  /// Mark this token as cancelled
  pub fn cancel(&self) {
    self.0.store(true, Ordering::Relaxed);
  }

  /// Check if the token is cancelled
  pub fn is_cancelled(&self) -> bool {
    self.0.load(Ordering::Relaxed)
  }
}

/// A progress sink paired with a [`CancelToken`].
///
/// The token can be cancelled from another thread while the mesher runs.
pub struct Cancellable<P> {
  pub inner: P,
  pub token: CancelToken,
}

impl<P> Cancellable<P> {
  pub fn new(inner: P, token: CancelToken) -> Self {
    Cancellable { inner, token }
  }
}

impl<P: Progress> Progress for Cancellable<P> {
  fn report(&mut self, percent: u8, phase: &str) {
    self.inner.report(percent, phase)
  }

  fn is_cancelled(&self) -> bool {
    self.token.is_cancelled() || self.inner.is_cancelled()
  }
}

/// Throttles a [`Progress`] sink to whole percentage points for one phase.
pub struct PhaseReporter<'a> {
  sink: &'a mut dyn Progress,
  phase: String,
  total: usize,
  last: Option<u8>,
}

impl<'a> PhaseReporter<'a> {
  pub fn new(sink: &'a mut dyn Progress, phase: String, total: usize) -> Self {
    PhaseReporter {
      sink,
      phase,
      total,
      last: None,
    }
  }

  /// Record that `done` of `total` steps are complete.
  pub fn step(&mut self, done: usize) -> Result<(), Error> {
    let percent = if self.total == 0 {
      100
    } else {
      (done.min(self.total) * 100 / self.total) as u8
    };
    if self.last.map_or(true, |last| percent > last) {
      self.emit(percent)?;
    }
    Ok(())
  }

  /// Close the phase with a 100% message if it has not been sent yet.
  pub fn finish(mut self) -> Result<(), Error> {
    if self.last != Some(100) {
      self.emit(100)?;
    }
    Ok(())
  }

  fn emit(&mut self, percent: u8) -> Result<(), Error> {
    self.last = Some(percent);
    self.sink.report(percent, &self.phase);
    if self.sink.is_cancelled() {
      log::debug!("meshing cancelled during {} at {}%", self.phase, percent);
      return Err(Error::Cancelled);
    }
    Ok(())
  }
}
