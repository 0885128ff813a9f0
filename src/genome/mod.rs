pub mod composition;
pub mod gene;
pub mod node;

pub use composition::{canonical_string, Composition, PrimitiveRecord};
pub use gene::{Primitive, PrimitiveGene};
pub use node::{Genome, GenomeNode, GenomeStats};
