//! gui/update/util.rs
use iced::futures::channel::oneshot;

/// Run a blocking job on a background thread and await its result.
///
/// Saves repeating the oneshot + thread boilerplate for every
/// “do work off-thread, then send Message::Finished(Result<...>)” case.
pub(crate) async fn spawn_blocking<T>(
    f: impl FnOnce() -> Result<T, String> + Send + 'static,
) -> Result<T, String>
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<Result<T, String>>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await
        .map_err(|_| "Background worker dropped without returning".to_string())?
}
