use std::io;

/// The tool only ever has one request in flight, so a current-thread runtime is all it needs.
pub fn single_thread_runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
