//! UI components of the explorer.

mod category_nav;
mod dictionary_table;
pub mod force_graph;
mod graph_panel;
mod relation_table;
mod triple_table;

pub use category_nav::CategoryNav;
pub use dictionary_table::DictionaryTable;
pub use graph_panel::GraphPanel;
pub use relation_table::RelationTable;
pub use triple_table::{ChunkBar, TripleTable};
