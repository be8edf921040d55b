// Public exports.
pub use node::AstNode;

// Public mods.
pub mod node;
