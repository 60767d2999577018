use tokio::sync::Mutex;

/// Serializes read-modify-write cycles per mutable collection.
/// `appointments` also covers the latest-appointment document.
#[derive(Default)]
pub(crate) struct WriteLocks {
    pub pets: Mutex<()>,
    pub appointments: Mutex<()>,
    pub purchases: Mutex<()>,
}
