pub mod chunk;
pub mod error;
pub mod fetch;
pub mod link;
pub mod load;

pub use chunk::{ChunkReader, RowChunk};
pub use error::{LinkError, LoadError, Result};
pub use fetch::{DEFAULT_FETCH_TIMEOUT, open_stream};
pub use link::{extract_file_id, resolve_direct_link};
pub use load::{
    DEFAULT_CHUNK_SIZE, LoadOptions, LoadReport, drain_chunks, load_direct, load_table,
    load_table_with_report, stream_chunks,
};
