//! Scoped ownership of the database handle.
//!
//! Every top-level command runs inside [`scoped`]: the handle is opened before
//! the body and closed after it, whether the body returns `Ok`, returns `Err` or
//! panics. The [`Lifecycle`] guard closes on `Drop`, which covers the panic
//! path; `scoped` closes explicitly so a close failure can still be reported.

use crate::error::Result;

/// A handle that must be released explicitly.
pub trait Close {
    fn close(self) -> Result<()>;
}

/// Knows how to open a handle.
pub trait Connect {
    type Handle: Close;

    fn connect(&self) -> Result<Self::Handle>;
}

pub struct Lifecycle<C: Connect> {
    connector: C,
    handle: Option<C::Handle>,
}

impl<C: Connect> Lifecycle<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            handle: None,
        }
    }

    /// Opens the handle unless it is already open, and returns it.
    pub fn ensure_open(&mut self) -> Result<&mut C::Handle> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => self.connector.connect()?,
        };
        Ok(self.handle.insert(handle))
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Closes and clears the handle. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<()> {
        match self.handle.take() {
            Some(handle) => handle.close(),
            None => Ok(()),
        }
    }
}

impl<C: Connect> Drop for Lifecycle<C> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.close() {
                log::warn!("failed to close database: {}", e);
            }
        }
    }
}

/// Opens a handle, runs `body`, then closes the handle.
///
/// An error from `body` wins over an error from closing.
pub fn scoped<C, R, F>(connector: C, body: F) -> Result<R>
where
    C: Connect,
    F: FnOnce(&mut Lifecycle<C>) -> Result<R>,
{
    let mut lifecycle = Lifecycle::new(connector);
    lifecycle.ensure_open()?;

    let outcome = body(&mut lifecycle);
    let closed = lifecycle.close();

    let value = outcome?;
    closed?;
    Ok(value)
}
