//=========================================================================
// Signal
//=========================================================================
//
// Typed, synchronous multicast event dispatch.
//
// Architecture:
// ```text
//   connect(f) ─────► [ L0, L1(once), L2 ]     (registration order)
//                           │
//   trigger(args) ──► L0(args) → L1(args) → L2(args)
//                           │
//                     [ L0, L2 ]               (once listeners pruned)
// ```
//
// Pattern: connect (any time) → trigger (N listeners, in order) → repeat
//
// A Signal is single-threaded: it is `!Sync`, and its listeners are not
// required to be `Send`. Listeners may hold an `Rc` to the Signal they are
// registered on, and connect to it or trigger it while it dispatches.
//
//=========================================================================

//=== Submodules ==========================================================

mod listener;

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

//=== External Crates =====================================================

use log::trace;

//=== Internal Modules ====================================================

use listener::Listener;

//=== Signal ==============================================================

/// Multicast event carrying a value of type `Args` to every listener.
///
/// Events with several arguments use a tuple, e.g. `Signal<(u32, u32)>`;
/// listeners then destructure it: `signal.connect(|(w, h)| ...)`.
/// Each listener receives its own clone of the triggered value.
///
/// # Dispatch rules
///
/// - Listeners run in the order they were connected.
/// - A listener registered with [`connect_once`](Self::connect_once) runs
///   on the next trigger only, then is removed.
/// - Listeners connected while a trigger is running are not called by that
///   trigger; they run from the next one onward.
/// - A listener may trigger the signal it is registered on. The nested
///   trigger calls every registered listener except those whose call is
///   still running.
/// - A panicking listener aborts the rest of the pass and the panic reaches
///   the caller of [`trigger`](Self::trigger). Listeners that were not
///   reached stay registered, in order.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use faelight::Signal;
///
/// let resized: Signal<(u32, u32)> = Signal::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// resized.connect(move |(w, h)| sink.borrow_mut().push((w, h)));
///
/// resized.trigger((1280, 720));
/// resized.emit((800, 600));
///
/// assert_eq!(*seen.borrow(), vec![(1280, 720), (800, 600)]);
/// ```
pub struct Signal<Args> {
    listeners: RefCell<Vec<Rc<Listener<Args>>>>,
}

impl<Args> Signal<Args> {
    /// Creates a signal with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a listener that runs on every trigger.
    pub fn connect<F>(&self, callable: F)
    where
        F: FnMut(Args) + 'static,
    {
        self.connect_with(callable, false);
    }

    /// Registers a listener that runs on the next trigger only.
    pub fn connect_once<F>(&self, callable: F)
    where
        F: FnMut(Args) + 'static,
    {
        self.connect_with(callable, true);
    }

    /// Registers a listener, removing it after its first call if `once`.
    ///
    /// The callable is appended after every existing listener and is not
    /// invoked here. Connecting the same callable twice creates two
    /// independent registrations.
    pub fn connect_with<F>(&self, callable: F, once: bool)
    where
        F: FnMut(Args) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(Listener::new(callable, once)));
    }

    //--- Query API --------------------------------------------------------

    /// Returns the number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Returns true if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unregisters a fired once-listener, keeping the others in order.
    fn detach(&self, listener: &Rc<Listener<Args>>) {
        let mut live = self.listeners.borrow_mut();
        if let Some(index) = live.iter().position(|l| Rc::ptr_eq(l, listener)) {
            live.remove(index);
        }
    }
}

impl<Args: Clone> Signal<Args> {
    //--- Dispatch ---------------------------------------------------------

    /// Invokes every registered listener with a clone of `args`.
    ///
    /// Returns once all listeners present at the start of the call have
    /// run and every fired once-listener has been removed. A once-listener
    /// is unregistered right before its call, so a panicking once-listener
    /// is gone as well.
    ///
    /// When called from inside a listener of this same signal, listeners
    /// whose call is still running are skipped; the others run as usual.
    pub fn trigger(&self, args: Args) {
        let snapshot: Vec<Rc<Listener<Args>>> = self.listeners.borrow().clone();
        if snapshot.is_empty() {
            return;
        }

        let mut invoked = 0;
        for listener in &snapshot {
            let Some(mut callable) = listener.acquire() else {
                trace!(target: "signal", "Skipping listener that is running or already fired");
                continue;
            };

            if listener.is_once() {
                self.detach(listener);
            }

            invoked += 1;
            let callable: &mut dyn FnMut(Args) = &mut **callable;
            callable(args.clone());
        }

        trace!(target: "signal", "Dispatched to {} listeners ({} remain)", invoked, self.len());
    }

    /// Call-style alias of [`trigger`](Self::trigger).
    pub fn emit(&self, args: Args) {
        self.trigger(args);
    }
}

//--- Trait Implementations -----------------------------------------------

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let once = self.listeners.borrow().iter().filter(|l| l.is_once()).count();
        f.debug_struct("Signal")
            .field("listeners", &self.len())
            .field("once", &once)
            .finish()
    }
}

//=========================================================================
// Tests
//=========================================================================
