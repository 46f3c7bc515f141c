pub mod processor;
pub mod state;

pub use processor::{finalize_ranking, index_matrix_pass, index_pass, matrix_to_rows, mine_itemsets};
pub use state::{ProcessingPhase, StreamingState};
