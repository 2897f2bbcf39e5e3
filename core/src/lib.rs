pub mod config;
pub mod feedback;
pub mod ogi_url;
pub mod query;
pub mod select_step;

pub use config::{ConfigError, PageConfig};
pub use feedback::{LabelSwap, COPIED_LABEL, LABEL_RESTORE_MS};
pub use ogi_url::{build_ogi_url, meta_tag_snippet, OGI_PNG_PATH};
pub use query::{build_query, decode_component, encode_component, parse_query, FormField, QueryError};
pub use select_step::{next_selected_index, WheelStep};
