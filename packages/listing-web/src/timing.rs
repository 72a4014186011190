//! Delays that work in the browser and on the server.
//!
//! Futures awaited here are expected to run inside a component `spawn`,
//! so unmounting the component drops them before they wake.

use std::time::Duration;

#[cfg(feature = "web")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(feature = "web"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
