/// Routing surface owned by the host application. Controllers fall back to it
/// with a fixed path when no continuation callback is supplied.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
