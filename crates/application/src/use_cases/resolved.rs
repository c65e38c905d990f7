/// A public result together with whether it was served from the cache.
/// `partial` marks a fresh result missing data because of transient failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub cache_hit: bool,
    pub partial: bool,
}

impl<T> Resolved<T> {
    pub fn hit(value: T) -> Self {
        Self {
            value,
            cache_hit: true,
            partial: false,
        }
    }

    pub fn miss(value: T) -> Self {
        Self {
            value,
            cache_hit: false,
            partial: false,
        }
    }

    pub fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            cache_hit: self.cache_hit,
            partial: self.partial,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}
