mod blank_node;
mod iri;
mod literal;
mod term;

pub use blank_node::BlankNode;
pub use iri::Iri;
pub use literal::Literal;
pub use term::Term;
