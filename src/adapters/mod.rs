// Adapters layer: concrete surfaces around the domain (currently the HTTP stub).

pub mod http;
