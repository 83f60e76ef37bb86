//! Type tags understood by the engine.
//!
//! Tags are opaque strings. They select a file extension and tell apart the
//! resources that share a base name (`profile` the template, `profile` the GET
//! controller, ...). Nothing stops callers from inventing their own.

/// A template.
pub const TYPE_TEMPLATE: &str = "__TEMPLATE__";

/// The controller run for an HTTP GET request.
pub const TYPE_CONTROLLER_GET: &str = "__HTTP_GET__";

/// The controller run for an HTTP POST request.
pub const TYPE_CONTROLLER_POST: &str = "__HTTP_POST__";

/// A controller invoked through [`Engine::delegate`](crate::Engine::delegate).
pub const TYPE_CONTROLLER_DELEGATE: &str = "__DELEGATE__";
