//! # Identifier and Time Sources
//!
//! Id and timestamp generation are injected so a conversion can be made
//! reproducible.

use chrono::Utc;
use uuid::Uuid;

use super::options::ConvertOptions;

/// Produces ids for collections, folders, requests and environments.
pub trait IdSource: Send + Sync {
    /// Returns the next id.
    fn next_id(&self) -> String;
}

/// Produces timestamps in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now_millis(&self) -> i64;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Empty ids and a zero clock, for byte-for-byte comparable output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deterministic;

impl IdSource for Deterministic {
    fn next_id(&self) -> String {
        String::new()
    }
}

impl Clock for Deterministic {
    fn now_millis(&self) -> i64 {
        0
    }
}

/// The id and time sources used by one converter.
pub struct Services {
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl Services {
    /// Combines an id source and a clock.
    pub fn new(ids: impl IdSource + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            ids: Box::new(ids),
            clock: Box::new(clock),
        }
    }

    /// Random ids and wall-clock time.
    pub fn system() -> Self {
        Self::new(UuidIds, SystemClock)
    }

    /// Empty ids and zero timestamps.
    pub fn deterministic() -> Self {
        Self::new(Deterministic, Deterministic)
    }

    /// Deterministic in test mode, otherwise system sources.
    pub fn for_options(options: &ConvertOptions) -> Self {
        if options.test {
            Self::deterministic()
        } else {
            Self::system()
        }
    }

    /// Next id from the configured source.
    pub fn id(&self) -> String {
        self.ids.next_id()
    }

    /// Current time from the configured clock.
    pub fn timestamp(&self) -> i64 {
        self.clock.now_millis()
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_sources() {
        let services = Services::deterministic();
        assert_eq!(services.id(), "");
        assert_eq!(services.timestamp(), 0);
    }

    #[test]
    fn test_system_ids_are_unique_uuids() {
        let services = Services::system();
        let a = services.id();
        let b = services.id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
        assert!(services.timestamp() > 0);
    }

    #[test]
    fn test_for_options_honours_test_mode() {
        let options = ConvertOptions {
            test: true,
            ..ConvertOptions::default()
        };
        assert_eq!(Services::for_options(&options).id(), "");
    }
}
