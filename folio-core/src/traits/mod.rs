//! Seams to the external collaborators: retrievers, reranker, chunk store,
//! and source-document access. The engine only ever talks to these traits.

mod reranker;
mod retriever;
mod source;
mod store;

pub use reranker::IReranker;
pub use retriever::{IDenseRetriever, ILexicalRetriever};
pub use source::ISourceReader;
pub use store::IChunkStore;
