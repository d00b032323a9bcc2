mod node;
mod raw_treap;

pub(crate) use node::{Link, Node};
pub(crate) use raw_treap::RawTreap;
