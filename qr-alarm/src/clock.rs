//! Where "now" comes from.
//!
//! Every calculation that depends on the current time takes it from a
//! [`Clock`] rather than reading the system clock directly, so tests can pin
//! "now" to a known instant in a known zone.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use parking_lot::Mutex;

/// A source of the current instant in some time zone.
///
/// Implementations must return a fresh reading on every call.
pub trait Clock {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;

    /// The zone readings are expressed in.
    fn timezone(&self) -> Self::Tz {
        self.now().timezone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    type Tz = C::Tz;

    fn now(&self) -> DateTime<Self::Tz> {
        (**self).now()
    }

    fn timezone(&self) -> Self::Tz {
        (**self).timezone()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    type Tz = C::Tz;

    fn now(&self) -> DateTime<Self::Tz> {
        (**self).now()
    }

    fn timezone(&self) -> Self::Tz {
        (**self).timezone()
    }
}

/// The device's wall clock in its current local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn timezone(&self) -> Local {
        Local
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can hand one clone to the code
/// under test and keep another to advance time.
#[derive(Debug, Clone)]
pub struct ManualClock<Tz: TimeZone> {
    current: Arc<Mutex<DateTime<Tz>>>,
}

impl<Tz: TimeZone> ManualClock<Tz> {
    pub fn new(start: DateTime<Tz>) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Jump to a specific instant.
    pub fn set(&self, now: DateTime<Tz>) {
        *self.current.lock() = now;
    }

    /// Move the clock forward (or backward, for a negative delta).
    pub fn advance(&self, delta: TimeDelta) {
        let mut current = self.current.lock();
        *current = current.clone() + delta;
    }
}

impl<Tz: TimeZone> Clock for ManualClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.current.lock().clone()
    }
}
