// Domain layer: board model, greeter and the ports the app layer depends on.
// Nothing here touches IO, async or the HTTP stack.

pub mod greeter;
pub mod model;
pub mod ports;
