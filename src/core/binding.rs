// Selection Binding
// Two-way handle to a host-owned value

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Two-way binding to a value owned by the host application
///
/// Clones share the same cell: a write through any clone is visible to every
/// other clone on the next read. Bindings are `!Send`; they live on the
/// thread that runs the event loop.
pub struct Binding<T: Copy> {
    cell: Rc<Cell<T>>,
}

impl<T: Copy> Binding<T> {
    /// Create a binding holding `value`
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(Cell::new(value)),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.cell.get()
    }

    /// Write a new value
    pub fn set(&self, value: T) {
        self.cell.set(value);
    }

    /// Write a new value and return the previous one
    pub fn replace(&self, value: T) -> T {
        self.cell.replace(value)
    }

    /// Whether two bindings share the same storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: Copy> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}
