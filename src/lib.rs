//! In-process subject/observer event broadcasting.
//!
//! A [`Subject`] holds an ordered list of non-owning references to
//! [`Observer`]s. Publishing an event synchronously invokes each observer's
//! `update()` in registration order, and returns only once the last observer
//! has run. Observers are registered and deregistered explicitly by the
//! caller, which also controls their lifetimes; the subject never keeps an
//! observer alive and never drops an entry on its own.
//!
//! What happens when an observer's update fails is controlled per subject by
//! [`DeliveryPolicy`]. [`SharedSubject`] wraps a subject for use from
//! multiple threads, and [`ObserverRegistry`] builds observers from a kind
//! name so call sites don't branch on strings.
//!
//! The crate logs through the `log` facade; the hosting application decides
//! which backend (if any) to install.

#[macro_use]
extern crate log;

mod error;
mod helpers;
mod observer;
mod observer_list;
mod registry;
mod shared_subject;
mod subject;

pub use error::{NotifyError, NotifyResult};
pub use helpers::ThinPtr;
pub use observer::Observer;
pub use observer_list::{DeregisterReport, RegisterReport};
pub use registry::ObserverRegistry;
pub use shared_subject::SharedSubject;
pub use subject::{DeliveryPolicy, PublishReport, Subject};

use observer_list::ObserverList;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use std::sync::{Arc, Mutex, Weak};

#[cfg(test)]
use helpers::*;
