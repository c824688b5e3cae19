// CV generation: request parsing, filename derivation, document response.
// Template assembly lives in `template`, serialization in `render`.

pub mod filename;
pub mod handlers;
