pub trait Greeting: Send + Sync {
    fn message(&self) -> &str;
}
