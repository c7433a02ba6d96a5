//=========================================================================
// Listener Records
//=========================================================================
//
// A registered callable plus its one-shot flag.
//
// Each record is shared (`Rc`) between the Signal's live list and the
// snapshots taken by running passes. The callable sits in its own
// `RefCell`, so a nested pass can call every listener except the one
// whose call is still on the stack.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::{Cell, RefCell, RefMut};

//=== Listener ============================================================

pub(super) type Callable<Args> = Box<dyn FnMut(Args)>;

/// Type-erased callable registered on a [`super::Signal`].
pub(super) struct Listener<Args> {
    callable: RefCell<Callable<Args>>,
    once: bool,
    fired: Cell<bool>,
}

impl<Args> Listener<Args> {
    pub(super) fn new<F>(callable: F, once: bool) -> Self
    where
        F: FnMut(Args) + 'static,
    {
        Self {
            callable: RefCell::new(Box::new(callable)),
            once,
            fired: Cell::new(false),
        }
    }

    pub(super) fn is_once(&self) -> bool {
        self.once
    }

    /// Borrows the callable for one call.
    ///
    /// Returns `None` if the callable is already running further up the
    /// stack, or if this is a once listener that has fired. A once listener
    /// counts as fired as soon as it is acquired.
    pub(super) fn acquire(&self) -> Option<RefMut<'_, Callable<Args>>> {
        if self.once && self.fired.get() {
            return None;
        }

        let callable = self.callable.try_borrow_mut().ok()?;
        if self.once {
            self.fired.set(true);
        }
        Some(callable)
    }
}

//=========================================================================
// Tests
//=========================================================================
