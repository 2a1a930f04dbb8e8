use futures_util::stream::{self, StreamExt};
use tokio::sync::watch;

use crate::application::ResultStream;

/// Turns a `watch` receiver into an observe stream: the current value first,
/// then the latest value after every change. Ends when the sender is dropped.
pub(crate) fn snapshot_stream<T>(mut rx: watch::Receiver<T>) -> ResultStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    let current = rx.borrow_and_update().clone();

    stream::once(async move { Ok(current) })
        .chain(stream::unfold(rx, |mut rx| async move {
            rx.changed().await.ok()?;
            let value = rx.borrow_and_update().clone();
            Some((Ok(value), rx))
        }))
        .boxed()
}
