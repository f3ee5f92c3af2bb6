use std::sync::{Arc, Weak};

/// The data pointer of a possibly-fat smart pointer, for identity comparison
pub trait ThinPtr {
    fn thin_ptr(&self) -> *const ();
}

/// Arc::ptr_eq() is unreliable for trait objects because it compares vtable pointers
/// along with data pointers (see https://github.com/rust-lang/rust/issues/46139).
/// Compare thin_ptr()s instead.
impl<T: ?Sized> ThinPtr for Arc<T> {
    fn thin_ptr(&self) -> *const () {
        Arc::as_ptr(self) as *const ()
    }
}

/// Returns null if the pointed-to value has already been dropped
impl<T: ?Sized> ThinPtr for Weak<T> {
    fn thin_ptr(&self) -> *const () {
        match self.upgrade() {
            Some(arc) => arc.thin_ptr(),
            None => std::ptr::null(),
        }
    }
}
