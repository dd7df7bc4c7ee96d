// Notifier receives free-text catalog event messages. Delivery is fire-and-forget:
// implementations deal with their own failures and never report them to the caller.
pub trait Notifier: Sync + Send {
    fn notify(&self, message: &str);
}
