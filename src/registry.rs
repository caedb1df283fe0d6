//! Process-wide cache of validated label maps, one per enum type.
//!
//! Maps are built lazily on first use and never evicted: wire enums are
//! closed, compile-time-known sets, so a built map stays valid for the
//! process lifetime. Construction is a pure function of the declared
//! table, which makes first-build races harmless.

use std::any::{self, Any, TypeId};
use std::fmt;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use tracing::{debug, error};

use crate::errors::ConfigurationError;
use crate::labels::{LabelMap, WireEnum};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::default);

/// A cache of [`LabelMap`]s keyed by enum type.
///
/// Cheap to clone: clones share the underlying cache. Readers take no
/// lock after a map is published; the first build per type goes through
/// `DashMap::entry`, so no caller ever observes a partially built map.
#[derive(Clone, Default)]
pub struct Registry {
    maps: Arc<DashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    ///
    /// The serde impls generated by [`wire_enum!`](crate::wire_enum) go
    /// through this one, since serde's traits take no state. Code that
    /// holds a [`Codec`](crate::Codec) can use its own registry instead.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Returns the label map for `T`, building and publishing it on first
    /// use.
    ///
    /// Fails with [`ConfigurationError`] if `T`'s declared table is
    /// misdeclared. Failed builds are not cached, so the same error
    /// resurfaces on every attempt.
    pub fn label_map<T: WireEnum>(&self) -> Result<Arc<LabelMap<T>>, ConfigurationError> {
        let key = TypeId::of::<T>();
        if let Some(entry) = self.maps.get(&key) {
            return Ok(Self::downcast::<T>(entry.value()));
        }

        let built = match LabelMap::<T>::build() {
            Ok(map) => Arc::new(map),
            Err(e) => {
                error!(enum_type = any::type_name::<T>(), error = %e, "wire label table rejected");
                return Err(e);
            }
        };
        debug!(
            enum_type = any::type_name::<T>(),
            members = built.len(),
            "built wire label map"
        );

        // Losing a first-build race here is fine: both sides built the
        // same map, and the entry API keeps exactly one of them.
        let erased: Arc<dyn Any + Send + Sync> = built;
        let entry = self.maps.entry(key).or_insert_with(|| erased);
        Ok(Self::downcast::<T>(entry.value()))
    }

    /// Eagerly validates `T`'s label table.
    ///
    /// Intended for startup self-checks, so a misdeclared table fails the
    /// deploy instead of the first request that touches it.
    pub fn check<T: WireEnum>(&self) -> Result<(), ConfigurationError> {
        self.label_map::<T>().map(|_| ())
    }

    fn downcast<T: WireEnum>(entry: &Arc<dyn Any + Send + Sync>) -> Arc<LabelMap<T>> {
        Arc::clone(entry)
            .downcast::<LabelMap<T>>()
            .expect("cache entries are keyed by TypeId")
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("cached_types", &self.maps.len())
            .finish()
    }
}
