/// Lifecycle shared by every entity population.
///
/// Entities are flagged done and left in place; each frame at most one done
/// entity per population is removed. Several done entities can therefore
/// linger for a few frames before they are all gone.

pub trait Expiring {
    fn is_done(&self) -> bool;
}

/// Remove the first done entity, if any. Returns whether one was removed.
pub fn reap_one<T: Expiring>(items: &mut Vec<T>) -> bool {
    match items.iter().position(Expiring::is_done) {
        Some(i) => {
            items.remove(i);
            true
        }
        None => false,
    }
}

/// Number of entities still live.
pub fn live_count<T: Expiring>(items: &[T]) -> usize {
    items.iter().filter(|e| !e.is_done()).count()
}
