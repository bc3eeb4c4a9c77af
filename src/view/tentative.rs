//! Optimistic local mutation with rollback

use std::future::Future;

/// Apply a local change, then await its remote confirmation.
///
/// If the confirmation fails, `revert` is applied to the same state and the
/// error is returned. The local change is kept on success.
pub async fn apply_tentatively<S, T, E, Fut>(
    state: &mut S,
    apply: impl FnOnce(&mut S),
    revert: impl FnOnce(&mut S),
    confirm: Fut,
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    apply(state);

    match confirm.await {
        Ok(value) => Ok(value),
        Err(e) => {
            revert(state);
            Err(e)
        }
    }
}
