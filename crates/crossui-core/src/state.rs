//! Reactive state cells and bindings.
//!
//! A [`State`] owns one value. A [`Binding`] is a read/write capability onto that
//! value which can be handed to views independently of the owning cell. Every binding
//! made from the same cell observes the same storage, so a write through any of them
//! is visible through all of them.
//!
//! Everything here is single-threaded: state is mutated while a tree is being built,
//! never while it is being rendered.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A mutable value holder.
pub struct State<T> {
    storage: Rc<RefCell<T>>,
}

impl<T> State<T> {
    /// Create a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            storage: Rc::new(RefCell::new(value)),
        }
    }

    /// Replace the held value.
    pub fn set(&self, value: T) {
        *self.storage.borrow_mut() = value;
    }

    /// Mutate the held value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.storage.borrow_mut());
    }
}

impl<T: Clone> State<T> {
    /// Current value.
    pub fn get(&self) -> T {
        self.storage.borrow().clone()
    }
}

impl<T: Clone + 'static> State<T> {
    /// Projected value: a binding that reads and writes this cell's storage.
    pub fn binding(&self) -> Binding<T> {
        let read = Rc::clone(&self.storage);
        let write = Rc::clone(&self.storage);
        Binding::new(
            move || read.borrow().clone(),
            move |value| *write.borrow_mut() = value,
        )
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&self.storage.borrow()).finish()
    }
}

/// Indirect read/write access to a value owned elsewhere.
pub struct Binding<T> {
    getter: Rc<dyn Fn() -> T>,
    setter: Rc<dyn Fn(T)>,
}

impl<T> Binding<T> {
    /// Build a binding from an arbitrary getter/setter pair.
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            getter: Rc::new(get),
            setter: Rc::new(set),
        }
    }

    /// Read through the binding.
    pub fn get(&self) -> T {
        (self.getter)()
    }

    /// Write through the binding.
    pub fn set(&self, value: T) {
        (self.setter)(value)
    }
}

impl<T: Clone + 'static> Binding<T> {
    /// A binding over a fresh cell that nothing else owns.
    pub fn of(value: T) -> Self {
        State::new(value).binding()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            getter: Rc::clone(&self.getter),
            setter: Rc::clone(&self.setter),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}
