//! Uniform random selection of one record.
//!
//! The algorithm is two independent store calls: count the collection, draw
//! `k` uniformly from `[0, n)`, then fetch the `k`-th record of the ordered
//! scan. Over a collection that does not change between the two calls every
//! record is returned with probability `1/n`.
//!
//! The pair of calls is **not** atomic. If another writer inserts or deletes
//! in between, the draw was made over a stale population size: the fetch may
//! land on a different record than a fresh count would allow, or past the
//! end, in which case the caller sees "nothing to pick". That staleness is
//! accepted; no lock or transaction is taken to prevent it.

use rand::Rng;

use crate::store::RecordStore;

/// Pick one record uniformly at random, or `None` if the collection is
/// empty (or shrank between the count and the fetch).
pub async fn pick_random<S, R>(
  store: &S,
  rng: &mut R,
) -> Result<Option<S::Record>, S::Error>
where
  S: RecordStore,
  R: Rng + Send,
{
  let n = store.count().await?;
  if n == 0 {
    return Ok(None);
  }
  let k = rng.gen_range(0..n);
  store.find_nth(k).await
}
