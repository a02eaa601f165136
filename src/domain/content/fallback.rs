use super::error::FetchError;
use std::fmt::Display;
use std::future::Future;

/// Ordered, non-empty list of alternative request shapes for one lookup.
///
/// Candidates are tried front to back and the first one producing data wins;
/// later candidates are never attempted once a result is found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPlan<C> {
    candidates: Vec<C>,
}

impl<C: Display> FallbackPlan<C> {
    pub fn new(first: C, rest: impl IntoIterator<Item = C>) -> Self {
        let mut candidates = vec![first];
        candidates.extend(rest);
        Self { candidates }
    }

    pub fn candidates(&self) -> &[C] {
        &self.candidates
    }

    /// Run `attempt` for each candidate in order.
    ///
    /// `Ok(None)` means the provider answered with an empty payload; it and any
    /// `Err` move on to the next candidate. Exhausting the plan yields
    /// `FetchError::NotFound`.
    pub async fn resolve_first<'a, T, F, Fut>(&'a self, mut attempt: F) -> Result<T, FetchError>
    where
        F: FnMut(&'a C) -> Fut,
        Fut: Future<Output = Result<Option<T>, FetchError>>,
    {
        for (index, candidate) in self.candidates.iter().enumerate() {
            tracing::info!(candidate = %candidate, attempt = index + 1, "Trying fallback candidate");

            match attempt(candidate).await {
                Ok(Some(found)) => {
                    tracing::debug!(candidate = %candidate, "Fallback candidate succeeded");
                    return Ok(found);
                }
                Ok(None) => {
                    tracing::warn!(candidate = %candidate, "Fallback candidate returned no data");
                }
                Err(e) => {
                    tracing::warn!(candidate = %candidate, error = %e, "Fallback candidate failed");
                }
            }
        }

        tracing::error!(candidates = self.candidates.len(), "All fallback candidates failed");
        Err(FetchError::NotFound(format!(
            "no data after {} candidates",
            self.candidates.len()
        )))
    }
}
