use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::result::Result as StdResult;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::kernel::component::{KernelComponent, Lifetime};
use crate::kernel::error::ResolutionError;

type AnyArc = Arc<dyn Any + Send + Sync>;
type Factory = Arc<dyn Fn(&mut Resolver<'_>) -> StdResult<AnyArc, ResolutionError> + Send + Sync>;

static NEXT_KERNEL_ID: AtomicU64 = AtomicU64::new(1);

struct Registration {
    type_name: &'static str,
    lifetime: Lifetime,
    factory: Factory,
}

/// Dependency-injection container.
///
/// Registrations are added through `&mut self` before the kernel is shared;
/// resolution only needs `&self`. Singleton instances are cached per kernel,
/// transient registrations run their factory on every resolution.
pub struct Kernel {
    id: u64,
    registrations: HashMap<TypeId, Registration>,
    singletons: Mutex<HashMap<TypeId, AnyArc>>,
    // Lifecycle components in registration order
    components: Vec<(TypeId, Arc<dyn KernelComponent>)>,
}

impl Kernel {
    /// Create an empty kernel
    pub fn new() -> Self {
        Self {
            id: NEXT_KERNEL_ID.fetch_add(1, Ordering::Relaxed),
            registrations: HashMap::new(),
            singletons: Mutex::new(HashMap::new()),
            components: Vec::new(),
        }
    }

    /// Process-unique identifier of this kernel, useful in logs.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Register a factory whose product is built once and then shared.
    pub fn register_singleton<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Any + Send + Sync,
        F: Fn(&mut Resolver<'_>) -> StdResult<T, ResolutionError> + Send + Sync + 'static,
    {
        self.insert::<T, F>(Lifetime::Singleton, factory)
    }

    /// Register a factory that runs on every resolution.
    pub fn register_transient<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Any + Send + Sync,
        F: Fn(&mut Resolver<'_>) -> StdResult<T, ResolutionError> + Send + Sync + 'static,
    {
        self.insert::<T, F>(Lifetime::Transient, factory)
    }

    /// Register an already constructed instance as a singleton.
    pub fn register_instance<T>(&mut self, instance: Arc<T>) -> &mut Self
    where
        T: Any + Send + Sync,
    {
        let type_id = TypeId::of::<T>();
        let stored: AnyArc = instance;
        let for_factory = stored.clone();
        let factory: Factory =
            Arc::new(move |_: &mut Resolver<'_>| -> StdResult<AnyArc, ResolutionError> { Ok(for_factory.clone()) });
        self.registrations.insert(
            type_id,
            Registration { type_name: type_name::<T>(), lifetime: Lifetime::Singleton, factory },
        );
        self.lock_singletons().insert(type_id, stored);
        self.components.retain(|(id, _)| *id != type_id);
        self
    }

    /// Register a component instance. It resolves like any singleton and is
    /// also driven through initialize/start/stop by the application.
    pub fn register_component<V>(&mut self, component: Arc<V>) -> &mut Self
    where
        V: KernelComponent + 'static,
    {
        let type_id = TypeId::of::<V>();
        self.register_instance(component.clone());
        let component: Arc<dyn KernelComponent> = component;
        self.components.retain(|(id, _)| *id != type_id);
        self.components.push((type_id, component));
        self
    }

    fn insert<T, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        T: Any + Send + Sync,
        F: Fn(&mut Resolver<'_>) -> StdResult<T, ResolutionError> + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<T>();
        let erased: Factory = Arc::new(move |resolver: &mut Resolver<'_>| -> StdResult<AnyArc, ResolutionError> {
            let value = factory(resolver)?;
            let instance: AnyArc = Arc::new(value);
            Ok(instance)
        });
        // A re-registration replaces whatever was cached for the old one
        self.lock_singletons().remove(&type_id);
        self.components.retain(|(id, _)| *id != type_id);
        self.registrations.insert(
            type_id,
            Registration { type_name: type_name::<T>(), lifetime, factory: erased },
        );
        self
    }

    /// Resolve an instance of `T`, constructing it and its dependencies as needed.
    pub fn resolve<T: Any + Send + Sync>(&self) -> StdResult<Arc<T>, ResolutionError> {
        let mut chain = Vec::new();
        let instance = self.resolve_erased(TypeId::of::<T>(), type_name::<T>(), &mut chain)?;
        Arc::downcast::<T>(instance)
            .map_err(|_| ResolutionError::TypeMismatch { type_name: type_name::<T>() })
    }

    fn resolve_erased(
        &self,
        type_id: TypeId,
        requested_name: &'static str,
        chain: &mut Vec<(TypeId, &'static str)>,
    ) -> StdResult<AnyArc, ResolutionError> {
        if chain.iter().any(|(id, _)| *id == type_id) {
            let mut names: Vec<&'static str> = chain.iter().map(|(_, name)| *name).collect();
            names.push(requested_name);
            return Err(ResolutionError::Cycle { chain: names });
        }

        let registration = self
            .registrations
            .get(&type_id)
            .ok_or(ResolutionError::NotRegistered { type_name: requested_name })?;

        if registration.lifetime.is_singleton() {
            if let Some(existing) = self.lock_singletons().get(&type_id) {
                return Ok(existing.clone());
            }
        }

        log::trace!("Kernel #{} constructing {}", self.id, registration.type_name);
        chain.push((type_id, registration.type_name));
        let built = {
            let mut resolver = Resolver { kernel: self, chain: &mut *chain };
            (registration.factory)(&mut resolver)
        };
        chain.pop();
        let instance = built?;

        if registration.lifetime.is_singleton() {
            // The lock is not held while the factory runs, so a concurrent
            // resolution may have stored an instance first; keep that one.
            let mut cache = self.lock_singletons();
            return Ok(cache.entry(type_id).or_insert(instance).clone());
        }
        Ok(instance)
    }

    /// Check whether a registration exists for `T`.
    pub fn is_registered<T: Any>(&self) -> bool {
        self.registrations.contains_key(&TypeId::of::<T>())
    }

    /// Lifetime policy registered for `T`, if any.
    pub fn lifetime_of<T: Any>(&self) -> Option<Lifetime> {
        self.registrations.get(&TypeId::of::<T>()).map(|r| r.lifetime)
    }

    /// Names of every registered type, sorted.
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.registrations.values().map(|r| r.type_name).collect();
        names.sort_unstable();
        names
    }

    /// Lifecycle components in registration order.
    pub fn components(&self) -> Vec<Arc<dyn KernelComponent>> {
        self.components.iter().map(|(_, component)| component.clone()).collect()
    }

    fn lock_singletons(&self) -> std::sync::MutexGuard<'_, HashMap<TypeId, AnyArc>> {
        self.singletons.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernel")
            .field("id", &self.id)
            .field("registrations", &self.registered_types())
            .field("components", &self.components.len())
            .finish()
    }
}

/// Handle passed to factories so they can resolve their own dependencies.
pub struct Resolver<'k> {
    kernel: &'k Kernel,
    chain: &'k mut Vec<(TypeId, &'static str)>,
}

impl Resolver<'_> {
    /// Resolve a dependency of the type currently being constructed.
    ///
    /// Failures are wrapped in [`ResolutionError::Dependency`] naming the
    /// dependent type.
    pub fn resolve<T: Any + Send + Sync>(&mut self) -> StdResult<Arc<T>, ResolutionError> {
        let dependent = self.current_type();
        let instance = self
            .kernel
            .resolve_erased(TypeId::of::<T>(), type_name::<T>(), &mut *self.chain)
            .map_err(|source| ResolutionError::Dependency { type_name: dependent, source: Box::new(source) })?;
        Arc::downcast::<T>(instance)
            .map_err(|_| ResolutionError::TypeMismatch { type_name: type_name::<T>() })
    }

    /// Build a construction failure for the type currently being constructed.
    pub fn fail(&self, message: impl Into<String>) -> ResolutionError {
        ResolutionError::Construction { type_name: self.current_type(), message: message.into() }
    }

    /// Name of the type whose factory is running.
    pub fn current_type(&self) -> &'static str {
        self.chain.last().map(|(_, name)| *name).unwrap_or("<root>")
    }
}
